// Output models for chart extraction
// These modules contain pure result shapes independent of the pipeline stages

pub mod level_map;

// Re-export key types for convenience
pub use level_map::PriceLevelMap;
