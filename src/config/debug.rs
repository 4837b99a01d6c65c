//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so normal
//! runs stay quiet. Call sites additionally gate these behind
//! `cfg(debug_assertions)`.

/// Emit every classified price candidate and raw label with its box.
pub const PRINT_CLASSIFIED_FRAGMENTS: bool = false;

/// Emit each merge decision while joining annotation fragments.
pub const PRINT_MERGE_STEPS: bool = false;

/// Emit per-candidate distances while associating labels with prices.
pub const PRINT_ASSOCIATION_CANDIDATES: bool = false;
