//! Matches resolved labels to price-scale readings by vertical proximity.
//!
//! TradingView draws a level's price on the scale at the same height as its
//! annotation, so the primary search wants the nearest reading strictly left
//! of the label. Daily levels additionally paint their own price tag right
//! next to the text, which the fallback picks up when the scale match is
//! loose or missing.

use crate::analysis::classifier::ChartDims;
use crate::analysis::normalizer;
use crate::config::{EXTRACTION, InstrumentProfile};
use crate::domain::{LabelFragment, LevelKey, PeriodHint, PriceCandidate};
use crate::models::PriceLevelMap;

/// Bind each resolvable label to a price. Keys resolve at most once; the
/// first label that binds a key keeps it.
pub fn associate_levels(
    labels: &[LabelFragment],
    prices: &[PriceCandidate],
    dims: ChartDims,
    profile: &InstrumentProfile,
    map: &mut PriceLevelMap,
) {
    let align_limit = dims.height as f64 * EXTRACTION.association.align_tolerance_frac;
    let close_limit = dims.height as f64 * EXTRACTION.association.close_match_frac;

    for label in labels {
        let Some(key) = normalizer::resolve(label) else {
            continue;
        };
        if map.has_level(key) {
            continue;
        }

        let mut best: Option<&PriceCandidate> = None;
        let mut best_distance = f64::INFINITY;

        // Primary: nearest scale reading level with the label
        for price in prices {
            let y_distance = (label.center_y - price.center_y()).abs() as f64;
            let aligned = price.bounds.x2 < label.bounds.x1 && y_distance < align_limit;
            if aligned && y_distance < best_distance {
                #[cfg(debug_assertions)]
                if crate::config::PRINT_ASSOCIATION_CANDIDATES {
                    log::info!("{}: candidate {} at dy {:.0}", key, price.value, y_distance);
                }
                best_distance = y_distance;
                best = Some(price);
            }
        }

        // Fallback: daily levels carry their own price tag beside the label
        let loose = best.is_none() || best_distance > close_limit;
        if loose && label.hint == PeriodHint::Daily {
            for price in prices {
                let x_distance = (price.bounds.x2 - label.bounds.x1).abs();
                let y_distance = (price.center_y() - label.center_y).abs();
                if x_distance < EXTRACTION.association.tag_max_dx_px
                    && y_distance < EXTRACTION.association.tag_max_dy_px
                {
                    best = Some(price);
                    best_distance = 0.0;
                    break;
                }
            }
        }

        // Last resort for the daily high: a reading inside the calibrated band
        if best.is_none() && key == LevelKey::DailyHigh {
            if let Some(price) = prices.iter().find(|p| profile.in_reference_band(p.value)) {
                best = Some(price);
                best_distance = 0.0;
            }
        }

        if let Some(price) = best {
            if best_distance < align_limit {
                map.set_level(key, price.value);
                log::info!("Identified {} = {} (dy {:.0})", key, price.value, best_distance);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BoundingBox;

    const DIMS: ChartDims = ChartDims {
        width: 1000,
        height: 600,
    };

    fn price(value: f64, y1: i32) -> PriceCandidate {
        PriceCandidate {
            value,
            text: format!("{}", value),
            bounds: BoundingBox::new(10, y1, 70, y1 + 14),
        }
    }

    fn label(text: &str, x1: i32, y1: i32) -> LabelFragment {
        let mut label = LabelFragment::new(text, BoundingBox::new(x1, y1, x1 + 90, y1 + 14));
        label.hint = crate::domain::PeriodHint::from_text(text);
        label
    }

    fn run(labels: &[LabelFragment], prices: &[PriceCandidate]) -> PriceLevelMap {
        let mut map = PriceLevelMap::default();
        associate_levels(
            labels,
            prices,
            DIMS,
            &InstrumentProfile::default(),
            &mut map,
        );
        map
    }

    #[test]
    fn picks_nearest_reading_on_the_left() {
        let prices = vec![price(1.0850, 100), price(1.0900, 290)];
        let labels = vec![label("weekly high", 700, 95)];

        let map = run(&labels, &prices);
        assert_eq!(map.weekly_high, Some(1.0850));
        assert_eq!(map.price_levels.len(), 1);
    }

    #[test]
    fn reading_right_of_label_never_binds() {
        let mut tagged = price(1.0850, 100);
        tagged.bounds = BoundingBox::new(800, 100, 860, 114); // right of the label
        let labels = vec![label("weekly high", 700, 95)];

        let map = run(&labels, &[tagged]);
        assert_eq!(map.weekly_high, None);
    }

    #[test]
    fn misaligned_reading_leaves_key_absent() {
        // 10% of 600 px = 60 px tolerance; this reading is 200 px away
        let prices = vec![price(1.0850, 300)];
        let labels = vec![label("weekly low", 700, 95)];

        let map = run(&labels, &prices);
        assert!(map.weekly_low.is_none());
        assert!(map.price_levels.is_empty());
    }

    #[test]
    fn daily_label_prefers_its_own_price_tag() {
        // Scale reading is a loose 50 px off; the tag overlaps the label text
        // (right of its left edge), so only the tag window can pick it up
        let scale = price(1.0700, 145);
        let mut tag = price(1.9832, 100);
        tag.bounds = BoundingBox::new(705, 98, 780, 112);

        let labels = vec![label("daily high", 700, 95)];
        let map = run(&labels, &[scale, tag]);
        assert_eq!(map.daily_high, Some(1.9832));
    }

    #[test]
    fn weekly_label_keeps_the_loose_scale_match() {
        // Same geometry as above but a weekly label: no tag fallback
        let scale = price(1.0700, 145);
        let mut tag = price(1.9832, 100);
        tag.bounds = BoundingBox::new(705, 98, 780, 112);

        let labels = vec![label("weekly high", 700, 95)];
        let map = run(&labels, &[scale, tag]);
        assert_eq!(map.weekly_high, Some(1.0700));
    }

    #[test]
    fn reading_just_left_of_the_label_binds_in_the_primary_search() {
        // A reading whose box ends left of the label is a strictly-left
        // candidate like any other; at 3 px it outranks the scale column
        // before any fallback is consulted, whatever the period
        let scale = price(1.0700, 145);
        let mut beside = price(1.9832, 100);
        beside.bounds = BoundingBox::new(615, 98, 690, 112);

        let labels = vec![label("weekly high", 700, 95)];
        let map = run(&labels, &[scale, beside]);
        assert_eq!(map.weekly_high, Some(1.9832));
    }

    #[test]
    fn daily_high_falls_back_to_reference_band() {
        // Nothing aligns with the label, but one reading sits in the band
        let prices = vec![price(1.9850, 500), price(1.9200, 540)];
        let labels = vec![label("daily high", 700, 95)];

        let map = run(&labels, &prices);
        assert_eq!(map.daily_high, Some(1.9850));
    }

    #[test]
    fn band_fallback_disabled_without_calibration() {
        let prices = vec![price(1.9850, 500)];
        let labels = vec![label("daily high", 700, 95)];

        let mut map = PriceLevelMap::default();
        let profile = InstrumentProfile::for_code("gbpusd").unwrap();
        associate_levels(&labels, &prices, DIMS, &profile, &mut map);
        assert_eq!(map.daily_high, None);
    }

    #[test]
    fn first_label_to_bind_a_key_keeps_it() {
        let prices = vec![price(1.0850, 100), price(1.0900, 200)];
        let labels = vec![label("weekly high", 700, 95), label("weekly high", 700, 195)];

        let map = run(&labels, &prices);
        assert_eq!(map.weekly_high, Some(1.0850));
    }
}
