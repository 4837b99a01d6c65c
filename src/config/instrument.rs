//! Per-instrument price-scale calibration.

use serde::{Deserialize, Serialize};

/// Price-scale calibration injected into each extraction run.
///
/// The defaults reproduce the chart the pipeline was originally tuned on
/// (a EURUSD-style instrument quoted just under 2.0). Other instruments get
/// bounds matching their own scale and no reference band, which switches the
/// band-based rescue heuristics off rather than letting them misfire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentProfile {
    /// Instrument code, lowercase ("eurusd")
    pub code: String,
    /// Upper bound for a scale reading to count as a price candidate
    pub max_candidate_price: f64,
    /// Current prices above this are OCR garbage and get replaced
    pub max_realistic_price: f64,
    /// Replacement current price when nothing better is available
    pub fallback_price: f64,
    /// Narrow band the daily high is expected to sit in, when known.
    /// `None` disables the band heuristics entirely.
    pub reference_band: Option<(f64, f64)>,
}

impl Default for InstrumentProfile {
    fn default() -> Self {
        InstrumentProfile {
            code: "eurusd".to_string(),
            max_candidate_price: 10.0,
            max_realistic_price: 5.0,
            fallback_price: 1.99,
            reference_band: Some((1.98, 1.99)),
        }
    }
}

impl InstrumentProfile {
    /// Profile for one of the bot's supported instruments.
    pub fn for_code(code: &str) -> Option<Self> {
        let profile = match code.to_lowercase().as_str() {
            "eurusd" => InstrumentProfile::default(),
            "gbpusd" => InstrumentProfile {
                code: "gbpusd".to_string(),
                fallback_price: 1.27,
                reference_band: None,
                ..InstrumentProfile::default()
            },
            "audusd" => InstrumentProfile {
                code: "audusd".to_string(),
                fallback_price: 0.66,
                reference_band: None,
                ..InstrumentProfile::default()
            },
            "usdjpy" => InstrumentProfile {
                code: "usdjpy".to_string(),
                max_candidate_price: 1000.0,
                max_realistic_price: 500.0,
                fallback_price: 155.0,
                reference_band: None,
            },
            _ => return None,
        };
        Some(profile)
    }

    pub fn supported_codes() -> &'static [&'static str] {
        &["eurusd", "gbpusd", "usdjpy", "audusd"]
    }

    /// Inclusive band membership; always false when no band is calibrated.
    pub fn in_reference_band(&self, value: f64) -> bool {
        match self.reference_band {
            Some((low, high)) => value >= low && value <= high,
            None => false,
        }
    }
}
