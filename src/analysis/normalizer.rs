//! Turns merged annotation wording into market-level keys.
//!
//! Charts abbreviate aggressively ("dly l", "weekly hi") and OCR mangles the
//! rest, so this runs in two phases: first the text is canonicalized (typo
//! repair plus a whole-string abbreviation table), then an ordered rule list
//! derives the key. Explicit period wording is checked before hint-based
//! inference, daily before weekly before monthly, high before low; the first
//! rule that matches wins.

use crate::domain::{LabelFragment, LevelKey, PeriodHint};
use crate::utils::text::{contains_any, has_token};

/// Whole-string abbreviation expansions, applied after typo repair.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("daily h", "daily high"),
    ("daily l", "daily low"),
    ("weekly h", "weekly high"),
    ("weekly l", "weekly low"),
    ("monthly h", "monthly high"),
    ("monthly l", "monthly low"),
    ("dly h", "daily high"),
    ("dly l", "daily low"),
    ("wkly h", "weekly high"),
    ("wkly l", "weekly low"),
    ("mth h", "monthly high"),
    ("mth l", "monthly low"),
    ("h", "high"),
    ("l", "low"),
    ("hi", "high"),
    ("lo", "low"),
];

const DAILY_TERMS: &[&str] = &["daily", "day", "dly"];
const WEEKLY_TERMS: &[&str] = &["weekly", "week", "wkly"];
const MONTHLY_TERMS: &[&str] = &["monthly", "month", "mth"];

/// Explicit period wording with its high and low keys, in match priority.
const PERIOD_RULES: &[(&[&str], LevelKey, LevelKey)] = &[
    (DAILY_TERMS, LevelKey::DailyHigh, LevelKey::DailyLow),
    (WEEKLY_TERMS, LevelKey::WeeklyHigh, LevelKey::WeeklyLow),
    (MONTHLY_TERMS, LevelKey::MonthlyHigh, LevelKey::MonthlyLow),
];

// "high" anywhere counts; bare "h"/"hi" only as their own word, otherwise
// every label containing the letter h would read as a high
fn has_high_marker(text: &str) -> bool {
    text.contains("high") || has_token(text, "h") || has_token(text, "hi")
}

fn has_low_marker(text: &str) -> bool {
    text.contains("low") || has_token(text, "l") || has_token(text, "lo")
}

/// Typo repair plus abbreviation expansion. "weekly hi" becomes "weekly
/// high", "dly l" becomes "daily low"; already-canonical text passes through.
pub fn canonicalize(text: &str) -> String {
    let mut out = text.to_string();
    if out.contains("hi") && !out.contains("high") {
        out = out.replace("hi", "high");
    }
    if out.contains("lo") && !out.contains("low") {
        out = out.replace("lo", "low");
    }
    for (abbrev, full) in ABBREVIATIONS {
        if out == *abbrev {
            out = (*full).to_string();
            break;
        }
    }
    out
}

/// Ordered key derivation over canonicalized text. Returns `None` for labels
/// that name no level ("support", "pivot", ...); those still matter elsewhere
/// but never bind to one of the six keys.
pub fn derive_key(text: &str, hint: PeriodHint) -> Option<LevelKey> {
    // 1. Explicit period wording
    for (terms, high_key, low_key) in PERIOD_RULES {
        if contains_any(text, terms) {
            if has_high_marker(text) {
                return Some(*high_key);
            }
            if has_low_marker(text) {
                return Some(*low_key);
            }
        }
    }

    // 2. Period-hint inference, only when the wording itself names no period
    match hint {
        PeriodHint::Monthly if !contains_any(text, &["monthly", "month"]) => {
            if has_high_marker(text) {
                return Some(LevelKey::MonthlyHigh);
            }
            if has_low_marker(text) {
                return Some(LevelKey::MonthlyLow);
            }
        }
        PeriodHint::Weekly if !contains_any(text, &["weekly", "week"]) => {
            if has_high_marker(text) {
                return Some(LevelKey::WeeklyHigh);
            }
            if has_low_marker(text) {
                return Some(LevelKey::WeeklyLow);
            }
            // Supply-zone annotations mark the weekly high on these charts
            if contains_any(text, &["supply", "zone"]) {
                return Some(LevelKey::WeeklyHigh);
            }
        }
        PeriodHint::Daily if !contains_any(text, &["daily", "day"]) => {
            if has_high_marker(text) {
                return Some(LevelKey::DailyHigh);
            }
            if has_low_marker(text) {
                return Some(LevelKey::DailyLow);
            }
        }
        _ => {}
    }

    None
}

/// Canonicalize a merged label and derive its key in one step.
pub fn resolve(label: &LabelFragment) -> Option<LevelKey> {
    let canonical = canonicalize(&label.text);
    derive_key(&canonical, label.hint)
}
