// Extraction pipeline stages, in data-flow order
pub mod associator;
pub mod classifier;
pub mod corrector;
pub mod current_price;
pub mod extractor;
pub mod merger;
pub mod normalizer;
pub mod rsi;

// Re-export commonly used types
pub use classifier::ChartDims;
pub use extractor::LevelExtractor;
