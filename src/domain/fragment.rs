use crate::domain::bounding_box::BoundingBox;
use crate::domain::level::PeriodHint;

// One piece of recognized text with its location on the screenshot.
// This is the pipeline's input unit, already flattened from the detection
// polygon to an axis-aligned box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment {
    pub text: String,
    pub bounds: BoundingBox,
}

impl TextFragment {
    pub fn new(text: impl Into<String>, bounds: BoundingBox) -> Self {
        TextFragment {
            text: text.into(),
            bounds,
        }
    }
}

// A fragment from the price scale on the left edge of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCandidate {
    pub value: f64,
    pub text: String,
    pub bounds: BoundingBox,
}

impl PriceCandidate {
    pub fn center_y(&self) -> i32 {
        self.bounds.center_y()
    }
}

// An annotation fragment from the plot area, lowercased and trimmed.
// `center_y` is stored rather than derived: merging averages the centers of
// the joined pieces, which is not the center of the union box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelFragment {
    pub text: String,
    pub bounds: BoundingBox,
    pub center_y: i32,
    pub hint: PeriodHint,
}

impl LabelFragment {
    pub fn new(text: impl Into<String>, bounds: BoundingBox) -> Self {
        LabelFragment {
            text: text.into(),
            bounds,
            center_y: bounds.center_y(),
            hint: PeriodHint::Unknown,
        }
    }
}
