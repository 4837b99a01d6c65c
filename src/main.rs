use anyhow::{Context, Result, bail};
use clap::Parser;

use chart_vision::data::fragments_from_detections;
use chart_vision::{Cli, DetectionDump, InstrumentProfile, LevelExtractor};

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Resolve the instrument profile
    let Some(profile) = InstrumentProfile::for_code(&args.instrument) else {
        bail!(
            "Unknown instrument '{}'; supported: {}",
            args.instrument,
            InstrumentProfile::supported_codes().join(", ")
        );
    };

    // D. Load detections and run the pipeline
    let dump = DetectionDump::load_from_path(&args.dump)
        .context("Could not load detection dump (run make_demo_dump for the bundled demo)")?;
    log::info!(
        "Loaded {} detections for {} {} from {}",
        dump.detections.len(),
        dump.symbol,
        dump.timeframe,
        args.dump.display()
    );

    let extractor = LevelExtractor::new(profile);
    log::info!("Extracting with the {} calibration", extractor.profile().code);
    let map = extractor.extract(&fragments_from_detections(&dump.detections));

    // E. Print the extracted map
    let json = if args.pretty {
        serde_json::to_string_pretty(&map)?
    } else {
        serde_json::to_string(&map)?
    };
    println!("{}", json);

    Ok(())
}
