use clap::Parser;
use share_recover::utils::{logger, validation::Validate};
use share_recover::{CliConfig, EmbeddedSource, FileSource, RecoveryEngine, RecoveryPipeline};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting share-recover");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let result = match config.input {
        Some(path) => {
            let pipeline = RecoveryPipeline::new(FileSource::new(path));
            RecoveryEngine::new(pipeline).run()
        }
        None => {
            let pipeline = RecoveryPipeline::new(EmbeddedSource);
            RecoveryEngine::new(pipeline).run()
        }
    };

    match result {
        Ok(report) => {
            tracing::info!("Recovery completed");
            println!("{}", report);
        }
        Err(e) => {
            tracing::error!("Recovery failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
