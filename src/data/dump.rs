use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::{DUMP_DIR, DUMP_VERSION, dump_filename};
use crate::data::detector::RawDetection;

/// Saved vision-service response for one screenshot, replayable offline.
/// JSON on disk so captures can be inspected and trimmed by hand.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DetectionDump {
    pub version: f64,
    pub captured_at_ms: i64,
    pub symbol: String,
    pub timeframe: String,
    pub detections: Vec<RawDetection>,
}

impl DetectionDump {
    pub fn new(
        symbol: impl Into<String>,
        timeframe: impl Into<String>,
        detections: Vec<RawDetection>,
    ) -> Self {
        Self {
            version: DUMP_VERSION,
            captured_at_ms: Utc::now().timestamp_millis(),
            symbol: symbol.into(),
            timeframe: timeframe.into(),
            detections,
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open dump file: {:?}", path))?;
        let reader = BufReader::new(file);
        let dump: DetectionDump = serde_json::from_reader(reader)
            .context(format!("Failed to parse dump: {:?}", path))?;
        if dump.version != DUMP_VERSION {
            log::warn!(
                "Dump {} has version {}, expected {}",
                path.display(),
                dump.version,
                DUMP_VERSION
            );
        }
        Ok(dump)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
        let file =
            File::create(path).context(format!("Failed to create file: {}", path.display()))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .context(format!("Failed to serialize dump to: {}", path.display()))
    }

    pub fn default_dump_path(symbol: &str) -> PathBuf {
        PathBuf::from(DUMP_DIR).join(dump_filename(symbol))
    }
}
