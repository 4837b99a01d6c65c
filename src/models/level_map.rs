use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::LevelKey;

/// Structured result of one extraction run, in the flat shape consumed by the
/// signal side of the bot. Unset fields are skipped during serialization, so
/// a run that found nothing serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceLevelMap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_high: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_low: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_high: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_low: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_high: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_low: Option<f64>,

    /// Levels below the current price, ascending.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub support_levels: Vec<f64>,
    /// Levels above the current price, ascending.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resistance_levels: Vec<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,

    /// Same levels keyed by chart wording ("daily high", ...), kept in sync
    /// with the flat fields for consumers that prefer the map form.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub price_levels: BTreeMap<LevelKey, f64>,
}

impl PriceLevelMap {
    pub fn level(&self, key: LevelKey) -> Option<f64> {
        match key {
            LevelKey::DailyHigh => self.daily_high,
            LevelKey::DailyLow => self.daily_low,
            LevelKey::WeeklyHigh => self.weekly_high,
            LevelKey::WeeklyLow => self.weekly_low,
            LevelKey::MonthlyHigh => self.monthly_high,
            LevelKey::MonthlyLow => self.monthly_low,
        }
    }

    /// Write a level into both the flat field and the `price_levels` map.
    pub fn set_level(&mut self, key: LevelKey, value: f64) {
        let slot = match key {
            LevelKey::DailyHigh => &mut self.daily_high,
            LevelKey::DailyLow => &mut self.daily_low,
            LevelKey::WeeklyHigh => &mut self.weekly_high,
            LevelKey::WeeklyLow => &mut self.weekly_low,
            LevelKey::MonthlyHigh => &mut self.monthly_high,
            LevelKey::MonthlyLow => &mut self.monthly_low,
        };
        *slot = Some(value);
        self.price_levels.insert(key, value);
    }

    pub fn has_level(&self, key: LevelKey) -> bool {
        self.level(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        *self == PriceLevelMap::default()
    }
}
