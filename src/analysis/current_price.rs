//! Locates the live price on the scale.
//!
//! TradingView draws a bar-countdown (HH:MM) directly under the live price
//! reading, so a candidate with a timestamp-shaped fragment right below it
//! wins. Failing that, the middle of the y-sorted scale is a decent estimate:
//! charts keep the live price vertically centered.

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::EXTRACTION;
use crate::domain::{PriceCandidate, TextFragment};

static TIMESTAMP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}:\d{2}").expect("static regex"));

pub fn find_current_price<'a>(
    fragments: &[TextFragment],
    prices: &'a [PriceCandidate],
) -> Option<&'a PriceCandidate> {
    for price in prices {
        if has_timestamp_below(fragments, price) {
            log::info!("Current price {} has a countdown below it", price.value);
            return Some(price);
        }
    }

    let sorted: Vec<&PriceCandidate> = prices.iter().sorted_by_key(|p| p.bounds.y1).collect();
    let middle = sorted.get(sorted.len() / 2).copied();
    if let Some(price) = middle {
        log::info!("Estimated current price {} from middle of scale", price.value);
    }
    middle
}

// A timestamp fragment sits just under the price box and roughly shares its
// horizontal extent
fn has_timestamp_below(fragments: &[TextFragment], price: &PriceCandidate) -> bool {
    let slack = EXTRACTION.current_price.timestamp_slack_px;
    fragments.iter().any(|fragment| {
        fragment.bounds.y1 > price.bounds.y2
            && fragment.bounds.y1 <= price.bounds.y2 + slack
            && fragment.bounds.x1 >= price.bounds.x1 - slack
            && fragment.bounds.x2 <= price.bounds.x2 + slack
            && TIMESTAMP.is_match(fragment.text.trim())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BoundingBox;

    fn price(value: f64, y1: i32) -> PriceCandidate {
        PriceCandidate {
            value,
            text: format!("{}", value),
            bounds: BoundingBox::new(10, y1, 70, y1 + 14),
        }
    }

    fn fragment(text: &str, x1: i32, y1: i32, x2: i32, y2: i32) -> TextFragment {
        TextFragment::new(text, BoundingBox::new(x1, y1, x2, y2))
    }

    #[test]
    fn countdown_below_a_reading_marks_it_current() {
        let prices = vec![price(1.0900, 100), price(1.0850, 200), price(1.0800, 300)];
        // Countdown 4 px under the last reading, same column
        let fragments = vec![fragment("32:49", 12, 318, 66, 330)];

        let current = find_current_price(&fragments, &prices).unwrap();
        assert_eq!(current.value, 1.0800);
    }

    #[test]
    fn countdown_must_share_the_column() {
        let prices = vec![price(1.0900, 100), price(1.0850, 200), price(1.0800, 300)];
        // Timestamp-shaped text below, but 500 px to the right
        let fragments = vec![fragment("32:49", 500, 318, 560, 330)];

        let current = find_current_price(&fragments, &prices).unwrap();
        assert_eq!(current.value, 1.0850, "falls back to middle of scale");
    }

    #[test]
    fn short_clock_text_is_not_a_countdown() {
        let prices = vec![price(1.0900, 100), price(1.0850, 200), price(1.0800, 300)];
        let fragments = vec![fragment("3:49", 12, 318, 66, 330)];

        let current = find_current_price(&fragments, &prices).unwrap();
        assert_eq!(current.value, 1.0850);
    }

    #[test]
    fn middle_of_scale_uses_y_order_not_input_order() {
        // Deliberately shuffled input; y-order is 1.0900, 1.0850, 1.0800
        let prices = vec![price(1.0800, 300), price(1.0900, 100), price(1.0850, 200)];
        let current = find_current_price(&[], &prices).unwrap();
        assert_eq!(current.value, 1.0850);
    }

    #[test]
    fn no_candidates_means_no_current_price() {
        assert!(find_current_price(&[], &[]).is_none());
    }
}
