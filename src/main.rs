use clap::Parser;
use delcom_analyzer::domain::ports::InputSource;
use delcom_analyzer::utils::{logger, validation::Validate};
use delcom_analyzer::{run_task, run_task_json, CliConfig, LocalInput};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting delcom-analyzer CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let input = match &config.text {
        Some(text) => text.clone(),
        None => match LocalInput::new(".".to_string()).read_input(&config.input) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("❌ Failed to read input '{}': {}", config.input, e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
    };

    let result = if config.json {
        run_task_json(config.task, &input)
    } else {
        run_task(config.task, &input)
    };

    match result {
        Ok(report) => {
            tracing::info!("✅ {} analysis completed successfully", config.task.as_str());
            println!("{}", report);
        }
        Err(e) => {
            tracing::error!("❌ {} analysis failed: {}", config.task.as_str(), e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    }

    Ok(())
}
