//! Splits raw text fragments into price-scale candidates and annotation
//! labels. Prices live on the scale along the left edge, annotations in the
//! plot area to the right; everything else is chart furniture we ignore.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{EXTRACTION, InstrumentProfile};
use crate::domain::{LabelFragment, PriceCandidate, TextFragment};
use crate::utils::text::contains_any;

// First decimal number anywhere in a fragment
static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d*\.?\d+").expect("static regex"));
// A fragment that is nothing but a number is scale text, never an annotation
static PURE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d*\.?\d+$").expect("static regex"));

/// Annotation wording that admits a fragment as a label regardless of where
/// it sits on the chart. Includes the abbreviated forms traders actually type.
pub(crate) const LEVEL_KEYWORDS: &[&str] = &[
    "daily high",
    "daily low",
    "weekly high",
    "weekly low",
    "monthly high",
    "monthly low",
    "support",
    "resistance",
    "pivot",
    "s1",
    "s2",
    "s3",
    "r1",
    "r2",
    "r3",
    "pp",
    "supply",
    "demand",
    "zone",
    "buy",
    "sell",
    "poi",
    "daily h",
    "daily l",
    "weekly h",
    "weekly l",
    "monthly h",
    "monthly l",
    "dly h",
    "dly l",
    "wkly h",
    "wkly l",
];

// Loose period / high-low wording; a fragment carrying one of each is worth
// keeping even when it sits outside the label zone
const PERIOD_TERMS: &[&str] = &[
    "daily", "day", "weekly", "week", "wk", "month", "mth", "dly", "wkly",
];
const HIGH_LOW_TERMS: &[&str] = &["high", "low", "hi", "lo", "h", "l"];

/// Pixel extent of the screenshot, taken as the furthest detection corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartDims {
    pub width: i32,
    pub height: i32,
}

impl ChartDims {
    pub fn from_fragments(fragments: &[TextFragment]) -> Self {
        let mut dims = ChartDims {
            width: 0,
            height: 0,
        };
        for fragment in fragments {
            dims.width = dims.width.max(fragment.bounds.x2);
            dims.height = dims.height.max(fragment.bounds.y2);
        }
        dims
    }
}

/// Scale readings from the left edge: a bounded decimal whose box ends inside
/// the price column. Unparseable fragments are logged and skipped.
pub fn collect_price_candidates(
    fragments: &[TextFragment],
    dims: ChartDims,
    profile: &InstrumentProfile,
) -> Vec<PriceCandidate> {
    let column_limit = dims.width as f64 * EXTRACTION.layout.price_column_frac;

    let mut candidates = Vec::new();
    for fragment in fragments {
        let text = fragment.text.trim();
        let Some(decimal) = DECIMAL.find(text) else {
            continue;
        };
        let Ok(value) = decimal.as_str().parse::<f64>() else {
            log::error!("Unparseable price fragment '{}'", text);
            continue;
        };
        // Zero and off-scale readings are OCR noise for this instrument
        if value <= 0.0 || value > profile.max_candidate_price {
            continue;
        }
        if (fragment.bounds.x2 as f64) < column_limit {
            #[cfg(debug_assertions)]
            if crate::config::PRINT_CLASSIFIED_FRAGMENTS {
                log::info!("Price candidate {} at y={}", value, fragment.bounds.y1);
            }
            candidates.push(PriceCandidate {
                value,
                text: text.to_string(),
                bounds: fragment.bounds,
            });
        }
    }
    candidates
}

/// Annotation fragments worth merging: not bare numbers, and either placed in
/// the label zone or carrying recognizable level wording.
pub fn collect_raw_labels(fragments: &[TextFragment], dims: ChartDims) -> Vec<LabelFragment> {
    let zone_start = dims.width as f64 * EXTRACTION.layout.label_zone_frac;

    let mut labels = Vec::new();
    for fragment in fragments {
        let text = fragment.text.to_lowercase().trim().to_string();
        if PURE_NUMBER.is_match(&text) {
            continue;
        }

        let in_label_zone = fragment.bounds.x1 as f64 > zone_start;
        let has_keyword = contains_any(&text, LEVEL_KEYWORDS);
        let looks_like_level =
            contains_any(&text, PERIOD_TERMS) && contains_any(&text, HIGH_LOW_TERMS);

        if in_label_zone || has_keyword || looks_like_level {
            #[cfg(debug_assertions)]
            if crate::config::PRINT_CLASSIFIED_FRAGMENTS {
                log::info!(
                    "Raw label '{}' at ({},{})",
                    text,
                    fragment.bounds.x1,
                    fragment.bounds.y1
                );
            }
            labels.push(LabelFragment::new(text, fragment.bounds));
        }
    }
    labels
}

/// True when the text carries any recognized level wording.
pub(crate) fn has_level_keyword(text: &str) -> bool {
    contains_any(text, LEVEL_KEYWORDS)
}

/// Fragment from literal box corners, for hand-built test fixtures.
#[cfg(test)]
pub(crate) fn fragment(text: &str, x1: i32, y1: i32, x2: i32, y2: i32) -> TextFragment {
    TextFragment::new(text, crate::domain::BoundingBox::new(x1, y1, x2, y2))
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1000x600 screenshot: a bare number in the far corner pins the
    // dimensions without classifying as either price (wrong side) or label
    fn with_dims(mut fragments: Vec<TextFragment>) -> Vec<TextFragment> {
        fragments.push(fragment("9.9", 995, 595, 1000, 600));
        fragments
    }

    #[test]
    fn dims_come_from_furthest_corner() {
        let frags = vec![fragment("1.0850", 10, 100, 60, 115), fragment("daily", 700, 300, 760, 315)];
        let dims = ChartDims::from_fragments(&frags);
        assert_eq!(dims.width, 760);
        assert_eq!(dims.height, 315);
    }

    #[test]
    fn price_needs_left_column_and_plausible_value() {
        let frags = with_dims(vec![
            fragment("1.0850", 10, 100, 60, 115),  // good
            fragment("12.5", 10, 130, 60, 145),    // above the default bound
            fragment("0", 10, 160, 60, 175),       // zero reading is noise
            fragment("1.0700", 600, 200, 660, 215), // too far right
        ]);
        let dims = ChartDims::from_fragments(&frags);
        let prices = collect_price_candidates(&frags, dims, &InstrumentProfile::default());

        assert_eq!(prices.len(), 1);
        assert_eq!(prices[0].value, 1.0850);
        assert_eq!(prices[0].center_y(), 107);
    }

    #[test]
    fn jpy_profile_admits_three_digit_scale() {
        let frags = with_dims(vec![fragment("154.25", 10, 100, 70, 115)]);
        let dims = ChartDims::from_fragments(&frags);
        let profile = InstrumentProfile::for_code("usdjpy").unwrap();
        let prices = collect_price_candidates(&frags, dims, &profile);
        assert_eq!(prices.len(), 1);
        assert_eq!(prices[0].value, 154.25);
    }

    #[test]
    fn embedded_decimal_still_counts() {
        let frags = with_dims(vec![fragment("< 1.0732", 10, 100, 70, 115)]);
        let dims = ChartDims::from_fragments(&frags);
        let prices = collect_price_candidates(&frags, dims, &InstrumentProfile::default());
        assert_eq!(prices.len(), 1);
        assert_eq!(prices[0].value, 1.0732);
    }

    #[test]
    fn labels_admit_by_zone_keyword_or_wording() {
        let frags = with_dims(vec![
            fragment("Daily High", 700, 300, 790, 315), // right zone, lowercased on the way in
            fragment("1.0850", 700, 330, 760, 345),     // pure number never a label
            fragment("supply zone", 100, 200, 200, 215), // keyword beats position
            fragment("dly l", 100, 250, 140, 265),      // period + low wording
            fragment("hello", 100, 280, 150, 295),      // nothing recognizable
        ]);
        let dims = ChartDims::from_fragments(&frags);
        let labels = collect_raw_labels(&frags, dims);

        let texts: Vec<&str> = labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["daily high", "supply zone", "dly l"]);
    }
}
