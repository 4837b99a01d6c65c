#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use analysis::{ChartDims, LevelExtractor};
pub use config::InstrumentProfile;
pub use data::{DetectionDump, FixtureDetector, RawDetection, TextDetector};
pub use domain::{BoundingBox, LevelKey, PeriodHint, TextFragment, Vertex};
pub use models::PriceLevelMap;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Detection dump to process (a saved capture, or the bundled demo)
    #[arg(long, default_value = config::DEMO_DUMP_FILE)]
    pub dump: std::path::PathBuf,

    /// Instrument profile to calibrate against
    #[arg(long, default_value = "eurusd")]
    pub instrument: String,

    /// Pretty-print the extracted level map
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}
