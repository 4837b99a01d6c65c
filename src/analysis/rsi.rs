//! Pulls an RSI reading out of the detections. The indicator pane prints
//! "RSI" in a handful of layouts, so match patterns from most to least
//! specific over every fragment and take the first value that parses.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::TextFragment;

static RSI_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)RSI\D*(\d+\.?\d*)", // RSI: 50.5 or RSI 50.5
        r"(?i)RSI.*?(\d+)",       // RSI with anything before the number
        r"(?i)rsi.*?(\d+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("static regex"))
    .collect()
});

pub fn extract_rsi(fragments: &[TextFragment]) -> Option<f64> {
    for fragment in fragments {
        for pattern in RSI_PATTERNS.iter() {
            let Some(caps) = pattern.captures(&fragment.text) else {
                continue;
            };
            if let Ok(value) = caps[1].parse::<f64>() {
                log::info!("Found RSI value: {}", value);
                return Some(value);
            }
        }
    }
    None
}
