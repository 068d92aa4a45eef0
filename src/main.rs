use anyhow::Context;
use bearing_faults::utils::{logger, validation::Validate};
use bearing_faults::{BearingError, CliConfig, FaultAnalysisEngine, LocalStorage, OutputFormat};
use clap::Parser;

fn exit_with(e: &BearingError) -> ! {
    tracing::error!("❌ Fault frequency analysis failed: {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting bearing-faults");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 載入並驗證配置
    if let Err(e) = config.load_base().and_then(|_| config.validate()) {
        exit_with(&e);
    }

    let format = config.format;
    let storage = LocalStorage::new(".");
    let engine = FaultAnalysisEngine::new(storage, config);

    let outcome = match engine.run() {
        Ok(outcome) => outcome,
        Err(e) => exit_with(&e),
    };

    if matches!(format, OutputFormat::Text | OutputFormat::Both) {
        print!("{}", outcome.report.text);
    }
    if matches!(format, OutputFormat::Json | OutputFormat::Both) {
        let json = outcome
            .report
            .record
            .to_json()
            .context("failed to serialize the export record")?;
        println!("{}", json);
    }
    if let Some(path) = &outcome.export_path {
        eprintln!("📁 Export saved to: {}", path);
    }

    Ok(())
}
