//! Sanity repair for the assembled level map. OCR on a compressed screenshot
//! misreads digits often enough that the raw associations need a plausibility
//! pass before anything downstream trades on them. Every fix is logged as a
//! warning; nothing in here fails the run.

use std::cmp::Ordering;
use strum::IntoEnumIterator;

use crate::config::InstrumentProfile;
use crate::domain::{LevelKey, PriceCandidate};
use crate::models::PriceLevelMap;

/// Ordered repair pass: band-check the daily high, pull an inflated current
/// price back under it, replace off-scale current prices, then sort every
/// level into support or resistance around the corrected current price.
pub fn apply_plausibility_fixes(
    map: &mut PriceLevelMap,
    prices: &[PriceCandidate],
    profile: &InstrumentProfile,
) {
    // 1. Daily high outside the calibrated band: trust the band over OCR
    if let (Some(daily_high), Some(_)) = (map.daily_high, profile.reference_band) {
        if !profile.in_reference_band(daily_high) {
            if let Some(price) = prices.iter().find(|p| profile.in_reference_band(p.value)) {
                log::warn!(
                    "Daily high {} outside expected band, using scale reading {}",
                    daily_high,
                    price.value
                );
                map.set_level(LevelKey::DailyHigh, price.value);
            }
        }
    }

    // 2. A current price printed above the daily high is a misread; nudge it
    // just below
    if let (Some(current), Some(daily_high)) = (map.current_price, map.daily_high) {
        if current > daily_high * 1.01 {
            log::warn!(
                "Current price {} above daily high {}, correcting",
                current,
                daily_high
            );
            map.current_price = Some(daily_high * 0.998);
        }
    }

    // 3. Off-scale current price gets replaced outright
    if let Some(current) = map.current_price {
        if current > profile.max_realistic_price {
            let replacement = match map.daily_high {
                Some(daily_high) => daily_high * 0.998,
                None => profile.fallback_price,
            };
            log::warn!(
                "Current price {} unrealistic for {}, using {}",
                current,
                profile.code,
                replacement
            );
            map.current_price = Some(replacement);
        }
    }

    // 4. Place every found level relative to the corrected current price.
    // A "low" above the current price still belongs in resistance, it is
    // just mislabeled on the chart; same the other way round.
    if let Some(current) = map.current_price {
        let mut support = Vec::new();
        let mut resistance = Vec::new();

        for key in LevelKey::iter() {
            let Some(value) = map.level(key) else {
                continue;
            };
            if key.is_low() {
                if value < current {
                    support.push(value);
                } else {
                    log::warn!(
                        "{} {} is above current price {}, treating as resistance",
                        key,
                        value,
                        current
                    );
                    resistance.push(value);
                }
            } else if value > current {
                resistance.push(value);
            } else {
                log::warn!(
                    "{} {} is below current price {}, treating as support",
                    key,
                    value,
                    current
                );
                support.push(value);
            }
        }

        support.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        resistance.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        map.support_levels = support;
        map.resistance_levels = resistance;
    }
}
