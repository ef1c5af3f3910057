use clap::Parser;
use delcom_analyzer::config::batch::{BatchConfig, TaskDefinition};
use delcom_analyzer::domain::ports::InputSource;
use delcom_analyzer::utils::error::AnalyzerError;
use delcom_analyzer::utils::{logger, validation::Validate};
use delcom_analyzer::{run_task, run_task_json, LocalInput};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "batch-report")]
#[command(about = "Run a batch of analyses from a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "batch-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - list the configured tasks without executing them
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Serialize)]
struct TaskStatus {
    name: String,
    task: String,
    ok: bool,
    detail: String,
}

#[derive(Debug, Serialize)]
struct BatchSummary {
    batch: String,
    generated_at: String,
    tasks: Vec<TaskStatus>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting batch report runner");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match BatchConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No analysis will be executed");
        return Ok(());
    }

    let input = LocalInput::new(".".to_string());
    std::fs::create_dir_all(config.output_path())?;

    let mut statuses = Vec::new();
    for task in &config.tasks {
        match run_single_task(task, &config, &input) {
            Ok(path) => {
                tracing::info!("✅ {}: report written to {}", task.name, path);
                statuses.push(TaskStatus {
                    name: task.name.clone(),
                    task: task.task.clone(),
                    ok: true,
                    detail: path,
                });
            }
            Err(e) => {
                tracing::error!("❌ {}: {}", task.name, e);
                statuses.push(TaskStatus {
                    name: task.name.clone(),
                    task: task.task.clone(),
                    ok: false,
                    detail: e.to_string(),
                });
            }
        }
    }

    let summary = BatchSummary {
        batch: config.batch.name.clone(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        tasks: statuses,
    };
    let summary_path = format!("{}/summary.json", config.output_path());
    std::fs::write(&summary_path, serde_json::to_string_pretty(&summary)?)?;

    let failed = summary.tasks.iter().filter(|t| !t.ok).count();
    println!(
        "✅ Batch completed: {}/{} task(s) succeeded",
        summary.tasks.len() - failed,
        summary.tasks.len()
    );
    println!("📁 Summary saved to: {}", summary_path);

    if failed > 0 {
        eprintln!("❌ {} task(s) failed", failed);
        std::process::exit(1);
    }

    Ok(())
}

fn run_single_task(
    task: &TaskDefinition,
    config: &BatchConfig,
    input: &LocalInput,
) -> delcom_analyzer::Result<String> {
    let kind = task.kind()?;
    let text = match (&task.input_text, &task.input_file) {
        (Some(text), _) => text.clone(),
        (None, Some(file)) => input.read_input(file)?,
        (None, None) => {
            // validate() rejects this, but a config could bypass it
            return Err(AnalyzerError::MissingConfigError {
                field: format!("tasks.{}.input_file or input_text", task.name),
            });
        }
    };

    let (report, extension) = if config.format() == "json" {
        (run_task_json(kind, &text)?, "json")
    } else {
        (run_task(kind, &text)?, "txt")
    };

    let path = format!("{}/{}.{}", config.output_path(), task.name, extension);
    std::fs::write(&path, format!("{}\n", report))?;
    Ok(path)
}

fn display_config_summary(config: &BatchConfig, args: &Args) {
    println!("📋 Batch Summary:");
    println!("  Batch: {}", config.batch.name);
    if let Some(description) = &config.batch.description {
        println!("  Description: {}", description);
    }
    println!("  Output: {}", config.output_path());
    println!("  Format: {}", config.format());
    println!("  Tasks: {}", config.tasks.len());
    for task in &config.tasks {
        let source = task
            .input_file
            .as_deref()
            .unwrap_or("<inline text>");
        println!("    - {} ({}): {}", task.name, task.task, source);
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
