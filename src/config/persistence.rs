//! File persistence configuration for detection dumps

/// Directory path for storing detection dumps
pub const DUMP_DIR: &str = "dumps";

/// Current version of the dump serialization format
pub const DUMP_VERSION: f64 = 1.0;

/// Generate a per-instrument dump filename
/// Example: "eurusd_detections_v1.json"
pub fn dump_filename(symbol: &str) -> String {
    format!("{}_detections_v{}.json", symbol.to_lowercase(), DUMP_VERSION)
}

/// Bundled demo dump (written by `make_demo_dump`)
pub const DEMO_DUMP_FILE: &str = "dumps/eurusd_detections_v1.json";
