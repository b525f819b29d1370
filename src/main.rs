//! Career adviser: career field recommendation from free-text skill descriptions

mod cli;
mod config;
mod error;
mod input;
mod processing;
mod output;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{CareerAdviserError, Result};
use input::dataset::{self, SelectionMode};
use log::{error, info};
use output::formatter::ReportGenerator;
use output::report::RecommendationReport;
use processing::engine::RecommendationEngine;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Recommend {
            dataset,
            text,
            input,
            balanced,
            detailed,
            output,
            save,
        } => {
            info!("Starting career field recommendation");

            let dataset_path = resolve_dataset_path(dataset, &config)?;
            cli::validate_file_extension(&dataset_path, &["csv"])
                .map_err(|e| CareerAdviserError::InvalidInput(format!("Dataset file: {}", e)))?;

            let output_format =
                cli::parse_output_format(&output).map_err(CareerAdviserError::InvalidInput)?;

            let query_text = resolve_query_text(text, input).await?;
            let selection = resolve_selection(balanced, &config);
            let detailed = detailed || config.output.detailed;

            println!("📂 Loading dataset: {}", dataset_path.display());
            let profiles = dataset::load_profiles(&dataset_path, selection).await?;

            println!("🧠 Building recommendation engine ({} profiles)...", profiles.len());
            let profile_count = profiles.len();
            let engine = RecommendationEngine::new(profiles)?;

            println!("🔍 Analyzing your skill description...");
            let outcome = engine.recommend(&query_text)?;

            let report = RecommendationReport::from_outcome(
                &query_text,
                outcome,
                engine.vocabulary(),
                &dataset_path.to_string_lossy(),
                profile_count,
            );

            let generator = ReportGenerator::new(config.output.color_output, detailed);
            let rendered = generator.format_report(&report, output_format)?;
            println!("{}", rendered);

            if let Some(save_path) = save {
                generator.save_report(&report, output_format, &save_path)?;
                println!("💾 Report saved to: {}", save_path.display());
            }
        }

        Commands::Vocab { dataset, balanced } => {
            let dataset_path = resolve_dataset_path(dataset, &config)?;
            cli::validate_file_extension(&dataset_path, &["csv"])
                .map_err(|e| CareerAdviserError::InvalidInput(format!("Dataset file: {}", e)))?;

            let selection = resolve_selection(balanced, &config);
            let profiles = dataset::load_profiles(&dataset_path, selection).await?;
            let population = dataset::FieldPopulation::from_profiles(&profiles);
            let engine = RecommendationEngine::new(profiles)?;
            let vocabulary = engine.vocabulary();

            println!("📚 Dataset: {}", dataset_path.display());
            println!("  • Profiles loaded: {}", engine.profile_count());
            println!("  • Career fields: {}", population.field_count());
            println!("  • Hard skills in vocabulary: {}", vocabulary.hard.len());
            println!("  • Soft skills in vocabulary: {}", vocabulary.soft.len());

            let mut sample_hard: Vec<&String> = vocabulary.hard.iter().collect();
            sample_hard.sort();
            let mut sample_soft: Vec<&String> = vocabulary.soft.iter().collect();
            sample_soft.sort();

            println!("\n🔧 Hard skills (first 20):");
            for skill in sample_hard.iter().take(20) {
                println!("  • {}", skill);
            }
            println!("\n🤝 Soft skills (first 20):");
            for skill in sample_soft.iter().take(20) {
                println!("  • {}", skill);
            }

            let mut populations: Vec<(&str, usize)> = population.iter().collect();
            populations.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            println!("\n📊 Field populations:");
            for (field, count) in populations {
                println!("  • {}: {} profiles", field, count);
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Config file: {}", Config::config_path().display());
                match &config.dataset.path {
                    Some(path) => println!("Default dataset: {}", path.display()),
                    None => println!("Default dataset: (not set)"),
                }
                println!("Default selection: {:?}", config.dataset.selection);
                println!("Output format: {:?}", config.output.format);
                println!("Detailed output: {}", config.output.detailed);
                println!("Color output: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

/// Pick the dataset path from the CLI or fall back to the configured default.
fn resolve_dataset_path(cli_path: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    cli_path
        .or_else(|| config.dataset.path.clone())
        .ok_or_else(|| {
            CareerAdviserError::InvalidInput(
                "No dataset given. Pass --dataset or set dataset.path in the config".to_string(),
            )
        })
}

/// Resolve the query text from --text or --input.
async fn resolve_query_text(text: Option<String>, input: Option<PathBuf>) -> Result<String> {
    match (text, input) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => {
            cli::validate_file_extension(&path, &["txt", "md"])
                .map_err(|e| CareerAdviserError::InvalidInput(format!("Input file: {}", e)))?;
            Ok(tokio::fs::read_to_string(&path).await?)
        }
        (None, None) => Err(CareerAdviserError::InvalidInput(
            "No skill description given. Pass --text or --input".to_string(),
        )),
    }
}

fn resolve_selection(balanced: bool, config: &Config) -> SelectionMode {
    if balanced {
        SelectionMode::Balanced
    } else {
        config.dataset.selection
    }
}
