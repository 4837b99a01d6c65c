//! Configuration module for the chart-vision pipeline.

pub mod extraction;
pub mod instrument;
pub mod persistence;

mod debug; // Can be private because of the re-export below; forces files to use crate::config::PRINT_* not crate::config::debug::PRINT_*
pub use debug::{PRINT_ASSOCIATION_CANDIDATES, PRINT_CLASSIFIED_FRAGMENTS, PRINT_MERGE_STEPS};

// Re-export commonly used items
pub use extraction::{EXTRACTION, ExtractionConfig};
pub use instrument::InstrumentProfile;
pub use persistence::{DEMO_DUMP_FILE, DUMP_DIR, DUMP_VERSION, dump_filename};
