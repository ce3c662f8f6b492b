use chrono::{Local, Utc};
use clap::Parser;
use stream_rotation::utils::{logger, validation::Validate};
use stream_rotation::{
    CliConfig, Exporter, ExportFormat, GoogleLinkExporter, IcsExporter, JsonExporter,
    RotationError, ServiceCatalog, ServiceLookup, TextExporter,
};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting stream-rotation CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!("❌ Rotation planning failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> Result<(), RotationError> {
    let catalog = match &config.catalog {
        Some(path) => {
            tracing::info!("Loading service catalog from {}", path);
            ServiceCatalog::from_toml_file(path)?
        }
        None => ServiceCatalog::builtin(),
    };

    if config.list_services {
        for service in catalog.services() {
            println!("{:<12} {}", service.id, service.name);
        }
        return Ok(());
    }

    config.validate()?;

    let today = config
        .today
        .unwrap_or_else(|| Local::now().date_naive());
    tracing::debug!("Reference date: {}", today);

    let periods = stream_rotation::core::planner::plan(
        &config.services,
        &catalog,
        &config.rotation_config(),
        today,
    )?;
    let instructions = stream_rotation::core::transitions::annotate(&periods)?;
    tracing::info!("Planned {} periods", periods.len());

    match config.export {
        ExportFormat::Text => {
            let text = TextExporter.export(&periods, &instructions)?;
            println!("{}", text);
        }
        ExportFormat::Google => {
            let link =
                GoogleLinkExporter::new(config.rotation_day).export(&periods, &instructions)?;
            println!("{}", link);
        }
        ExportFormat::Ics => {
            let exporter = IcsExporter::new(Utc::now().naive_utc());
            exporter.write_to_file(&config.output, &periods, &instructions)?;
            println!("✅ Calendar file written");
            println!("📁 Output saved to: {}", config.output);
        }
        ExportFormat::Json => {
            let json = JsonExporter.export(&periods, &instructions)?;
            println!("{}", json);
        }
    }

    Ok(())
}
