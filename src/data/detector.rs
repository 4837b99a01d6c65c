//! Seam to the external text-detection service. The pipeline never talks to
//! a vision API itself; it consumes whatever detections an implementation of
//! [`TextDetector`] hands over.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::analysis::LevelExtractor;
use crate::domain::{BoundingBox, TextFragment, Vertex};
use crate::models::PriceLevelMap;

/// One detection as the vision service reports it: the recognized string plus
/// its bounding polygon in pixel coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDetection {
    pub text: String,
    pub vertices: Vec<Vertex>,
}

impl RawDetection {
    pub fn new(text: impl Into<String>, vertices: Vec<Vertex>) -> Self {
        RawDetection {
            text: text.into(),
            vertices,
        }
    }

    /// Flatten to the pipeline's fragment form. `None` when the polygon is
    /// empty, which some providers emit for whitespace-only hits.
    pub fn to_fragment(&self) -> Option<TextFragment> {
        let bounds = BoundingBox::from_vertices(&self.vertices)?;
        Some(TextFragment::new(self.text.clone(), bounds))
    }
}

/// Collapse detections to fragments, logging and skipping broken ones.
pub fn fragments_from_detections(detections: &[RawDetection]) -> Vec<TextFragment> {
    let mut fragments = Vec::with_capacity(detections.len());
    for detection in detections {
        match detection.to_fragment() {
            Some(fragment) => fragments.push(fragment),
            None => log::warn!("Dropping detection '{}' with empty polygon", detection.text),
        }
    }
    fragments
}

/// The text-detection collaborator. Implementations run OCR over screenshot
/// bytes and return whatever they saw.
pub trait TextDetector {
    fn detect(&self, image: &[u8]) -> Result<Vec<RawDetection>>;
}

/// Run detection and extraction together. A detector failure is logged and
/// degrades to the empty map; it never propagates.
pub fn extract_with_detector(
    detector: &dyn TextDetector,
    image: &[u8],
    extractor: &LevelExtractor,
) -> PriceLevelMap {
    match detector.detect(image) {
        Ok(detections) => extractor.extract(&fragments_from_detections(&detections)),
        Err(error) => {
            log::error!("Text detection failed: {:#}", error);
            PriceLevelMap::default()
        }
    }
}

/// Detector backed by canned detections, for offline runs and tests.
pub struct FixtureDetector {
    detections: Vec<RawDetection>,
}

impl FixtureDetector {
    pub fn new(detections: Vec<RawDetection>) -> Self {
        FixtureDetector { detections }
    }
}

impl TextDetector for FixtureDetector {
    fn detect(&self, _image: &[u8]) -> Result<Vec<RawDetection>> {
        Ok(self.detections.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    fn v(x: i32, y: i32) -> Vertex {
        Vertex { x, y }
    }

    #[test]
    fn detections_flatten_to_fragments() {
        let detections = vec![
            RawDetection::new("1.0850", vec![v(10, 100), v(70, 100), v(70, 114), v(10, 114)]),
            RawDetection::new(" ", vec![]), // degenerate, dropped
        ];
        let fragments = fragments_from_detections(&detections);

        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].text, "1.0850");
        assert_eq!(fragments[0].bounds, BoundingBox::new(10, 100, 70, 114));
    }

    struct BrokenDetector;

    impl TextDetector for BrokenDetector {
        fn detect(&self, _image: &[u8]) -> Result<Vec<RawDetection>> {
            bail!("vision service unreachable")
        }
    }

    #[test]
    fn detector_failure_degrades_to_empty_map() {
        let extractor = LevelExtractor::default();
        let map = extract_with_detector(&BrokenDetector, b"png-bytes", &extractor);
        assert!(map.is_empty());
    }

    #[test]
    fn fixture_detector_replays_its_detections() {
        let detections = vec![RawDetection::new(
            "daily high",
            vec![v(700, 98), v(790, 98), v(790, 112), v(700, 112)],
        )];
        let detector = FixtureDetector::new(detections.clone());
        assert_eq!(detector.detect(b"ignored").unwrap(), detections);
    }
}
