use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::text::contains_any;

/// The six market levels a chart annotation can resolve to.
/// Serialized with the spaced wording used inside `price_levels`.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
)]
pub enum LevelKey {
    #[serde(rename = "daily high")]
    DailyHigh,
    #[serde(rename = "daily low")]
    DailyLow,
    #[serde(rename = "weekly high")]
    WeeklyHigh,
    #[serde(rename = "weekly low")]
    WeeklyLow,
    #[serde(rename = "monthly high")]
    MonthlyHigh,
    #[serde(rename = "monthly low")]
    MonthlyLow,
}

impl fmt::Display for LevelKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            LevelKey::DailyHigh => "daily high",
            LevelKey::DailyLow => "daily low",
            LevelKey::WeeklyHigh => "weekly high",
            LevelKey::WeeklyLow => "weekly low",
            LevelKey::MonthlyHigh => "monthly high",
            LevelKey::MonthlyLow => "monthly low",
        };
        write!(f, "{}", name)
    }
}

impl LevelKey {
    pub fn is_high(&self) -> bool {
        matches!(
            self,
            LevelKey::DailyHigh | LevelKey::WeeklyHigh | LevelKey::MonthlyHigh
        )
    }

    pub fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Period encoded by a label's wording. On the calibrated charts these level
/// lines are drawn black (monthly), red (weekly) and yellow (daily); the hint
/// records the period a label's text implies, not a sampled pixel colour.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum PeriodHint {
    Monthly,
    Weekly,
    Daily,
    #[default]
    Unknown,
}

impl PeriodHint {
    /// Derive the hint from merged label text. Monthly wording wins over
    /// weekly, weekly over daily; "supply zone" annotations count as weekly.
    pub fn from_text(text: &str) -> Self {
        if contains_any(text, &["monthly", "month"]) {
            PeriodHint::Monthly
        } else if contains_any(text, &["weekly", "week"]) || text.contains("supply zone") {
            PeriodHint::Weekly
        } else if contains_any(text, &["daily", "day"]) {
            PeriodHint::Daily
        } else {
            PeriodHint::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn display_matches_chart_wording() {
        assert_eq!(LevelKey::DailyHigh.to_string(), "daily high");
        assert_eq!(LevelKey::MonthlyLow.to_string(), "monthly low");
    }

    #[test]
    fn every_key_is_exactly_high_or_low() {
        for key in LevelKey::iter() {
            assert_ne!(key.is_high(), key.is_low(), "{} must pick one side", key);
        }
    }

    #[test]
    fn hint_precedence_monthly_weekly_daily() {
        assert_eq!(PeriodHint::from_text("monthly high"), PeriodHint::Monthly);
        // Monthly wording outranks a stray weekly term
        assert_eq!(
            PeriodHint::from_text("month week high"),
            PeriodHint::Monthly
        );
        assert_eq!(PeriodHint::from_text("supply zone"), PeriodHint::Weekly);
        assert_eq!(PeriodHint::from_text("day low"), PeriodHint::Daily);
        assert_eq!(PeriodHint::from_text("resistance"), PeriodHint::Unknown);
    }
}
