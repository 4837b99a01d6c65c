//! The extraction pipeline, end to end: classify fragments, merge and
//! normalize labels, associate them with scale readings, resolve the current
//! price, scan for RSI, then run plausibility fixes over the lot.

use crate::analysis::classifier::{self, ChartDims};
use crate::analysis::{associator, corrector, current_price, merger, rsi};
use crate::config::InstrumentProfile;
use crate::domain::TextFragment;
use crate::models::PriceLevelMap;

/// Runs the whole pipeline for one screenshot's worth of detections.
/// Construction is per instrument; `extract` is pure and reusable.
#[derive(Debug, Clone, Default)]
pub struct LevelExtractor {
    profile: InstrumentProfile,
}

impl LevelExtractor {
    pub fn new(profile: InstrumentProfile) -> Self {
        LevelExtractor { profile }
    }

    pub fn profile(&self) -> &InstrumentProfile {
        &self.profile
    }

    /// Best-effort extraction: never fails, degrades to an empty map when the
    /// detections give nothing to anchor on.
    pub fn extract(&self, fragments: &[TextFragment]) -> PriceLevelMap {
        if fragments.is_empty() {
            log::warn!("No text detected in screenshot");
            return PriceLevelMap::default();
        }
        log::info!("Processing {} text fragments", fragments.len());

        let dims = ChartDims::from_fragments(fragments);
        log::info!("Chart dimensions: {}x{}", dims.width, dims.height);

        let prices = classifier::collect_price_candidates(fragments, dims, &self.profile);
        if prices.is_empty() {
            log::warn!("No scale readings found, nothing to anchor levels to");
            return PriceLevelMap::default();
        }

        let raw_labels = classifier::collect_raw_labels(fragments, dims);
        let labels = merger::merge_adjacent_labels(raw_labels, dims);
        log::info!(
            "{} scale readings, {} merged labels",
            prices.len(),
            labels.len()
        );

        let mut map = PriceLevelMap::default();
        associator::associate_levels(&labels, &prices, dims, &self.profile, &mut map);

        if let Some(current) = current_price::find_current_price(fragments, &prices) {
            map.current_price = Some(current.value);
        }

        map.rsi = rsi::extract_rsi(fragments);

        corrector::apply_plausibility_fixes(&mut map, &prices, &self.profile);

        map
    }
}
