use anyhow::Result;
use chart_vision::config::DEMO_DUMP_FILE;
use chart_vision::data::{DetectionDump, RawDetection};
use chart_vision::domain::Vertex;
use std::path::PathBuf;

fn main() -> Result<()> {
    build_demo_dump()
}

// Writes a synthetic EURUSD screenshot dump so the main bin has something to
// chew on without a live vision provider. The layout mirrors a real capture:
// scale readings down the left edge, a bar countdown under the live price,
// annotations on the right, an RSI pane at the bottom.
fn build_demo_dump() -> Result<()> {
    let dump = DetectionDump::new("eurusd", "1D", demo_detections());

    let output_path = PathBuf::from(DEMO_DUMP_FILE);
    dump.save_to_path(&output_path)?;

    println!(
        "✅ Demo dump written to {:?} with {} detections.",
        output_path,
        dump.detections.len()
    );
    Ok(())
}

fn demo_detections() -> Vec<RawDetection> {
    vec![
        // Price scale
        detection("1.9900", 10, 60, 70, 74),
        detection("1.9862", 10, 120, 70, 134),
        detection("1.9845", 10, 180, 70, 194),
        detection("1.9800", 10, 240, 70, 254),
        detection("1.9750", 10, 300, 70, 314),
        detection("1.9511", 10, 420, 70, 434),
        // Bar countdown under the live reading
        detection("12:34", 12, 198, 66, 210),
        // Annotations; "weekly" and "high" arrive split, "dly l" abbreviated
        detection("weekly", 700, 54, 740, 68),
        detection("high", 755, 54, 790, 68),
        detection("daily high", 700, 114, 790, 128),
        detection("dly l", 700, 414, 744, 428),
        // Indicator pane
        detection("RSI: 62.5", 400, 600, 480, 615),
    ]
}

// Vision providers return 4-corner polygons (tl, tr, br, bl).
fn detection(text: &str, x1: i32, y1: i32, x2: i32, y2: i32) -> RawDetection {
    let corners = vec![
        Vertex { x: x1, y: y1 },
        Vertex { x: x2, y: y1 },
        Vertex { x: x2, y: y2 },
        Vertex { x: x1, y: y2 },
    ];
    RawDetection::new(text, corners)
}
