// Domain types and value objects
pub mod bounding_box;
pub mod fragment;
pub mod level;

// Re-export commonly used types
pub use bounding_box::{BoundingBox, Vertex};
pub use fragment::{LabelFragment, PriceCandidate, TextFragment};
pub use level::{LevelKey, PeriodHint};
