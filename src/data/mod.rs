// Detection input: the OCR seam and saved dumps
pub mod detector;
pub mod dump;

// Re-export commonly used types
pub use detector::{
    FixtureDetector, RawDetection, TextDetector, extract_with_detector, fragments_from_detections,
};
pub use dump::DetectionDump;
