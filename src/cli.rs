//! CLI interface for the career adviser

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "career-adviser")]
#[command(about = "Career field recommendation from free-text skill descriptions")]
#[command(
    long_about = "Mines a skill vocabulary from a labeled dataset, extracts mentioned skills from your text, and ranks career fields by population-normalized profile overlap"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend a career field from a skill description
    Recommend {
        /// Path to the dataset CSV (falls back to the configured default)
        #[arg(short, long)]
        dataset: Option<PathBuf>,

        /// Skill description given inline
        #[arg(short, long)]
        text: Option<String>,

        /// Read the skill description from a text file instead
        #[arg(short, long, conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Use a class-balanced resample of the dataset instead of
        /// positively labeled rows only
        #[arg(long)]
        balanced: bool,

        /// Show the full field ranking and extraction detail
        #[arg(long)]
        detailed: bool,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show vocabulary and population statistics for a dataset
    Vocab {
        /// Path to the dataset CSV (falls back to the configured default)
        #[arg(short, long)]
        dataset: Option<PathBuf>,

        /// Use a class-balanced resample of the dataset
        #[arg(long)]
        balanced: bool,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console").unwrap(), OutputFormat::Console);
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let path = PathBuf::from("dataset.csv");
        assert!(validate_file_extension(&path, &["csv"]).is_ok());
        assert!(validate_file_extension(&path, &["txt"]).is_err());
        assert!(validate_file_extension(&PathBuf::from("noext"), &["csv"]).is_err());
    }
}
