//! Output formatters: console, JSON and markdown renditions of a report

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{RecommendationOutcome, RecommendationReport};
use colored::Colorize;
use std::path::Path;

/// Trait for formatting recommendation reports
pub trait OutputFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and optional ranking detail
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured consumption
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and sharing
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Coordinates the individual formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn paint(&self, text: &str, color: fn(&str) -> colored::ColoredString) -> String {
        if self.use_colors {
            color(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!(
            "\n{}\n",
            self.paint("Career Field Recommendation", |s| s.bold().cyan())
        ));
        out.push_str(&format!("Query: {}\n", report.query));

        out.push_str(&format!(
            "\nExtracted hard skills: {}\n",
            format_skill_list(&report.extracted_hard_skills)
        ));
        out.push_str(&format!(
            "Extracted soft skills: {}\n",
            format_skill_list(&report.extracted_soft_skills)
        ));

        match &report.outcome {
            RecommendationOutcome::Recommendation(recommendation) => {
                out.push_str(&format!(
                    "\nRecommended field: {}\n",
                    self.paint(&recommendation.field, |s| s.bold().green())
                ));
                out.push_str(&format!(
                    "  Raw score: {} | Normalized score: {:.3}\n",
                    recommendation.raw_score, recommendation.normalized_score
                ));
            }
            RecommendationOutcome::NoMatch => {
                out.push_str(&format!(
                    "\n{}\n",
                    self.paint(
                        "No matching career field found for the given skills",
                        |s| s.bold().yellow()
                    )
                ));
            }
        }

        if self.detailed && !report.field_scores.is_empty() {
            out.push_str("\nField ranking:\n");
            for (i, score) in report.field_scores.iter().enumerate() {
                out.push_str(&format!(
                    "  {}. {}: raw {} / population {} = {:.3}\n",
                    i + 1,
                    score.field,
                    score.raw,
                    score.population,
                    score.normalized
                ));
            }
        }

        if self.detailed {
            let meta = &report.metadata;
            out.push_str(&format!(
                "\nDataset: {} ({} profiles, {} hard / {} soft vocabulary entries)\n",
                meta.dataset_file,
                meta.profile_count,
                meta.hard_vocabulary_size,
                meta.soft_vocabulary_size
            ));
            out.push_str(&format!("Processing time: {}ms\n", meta.processing_time_ms));
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        let mut out = String::new();

        out.push_str("# Career Field Recommendation\n\n");
        out.push_str(&format!("**Query:** {}\n\n", report.query));

        out.push_str("## Extracted Skills\n\n");
        out.push_str(&format!(
            "- Hard skills: {}\n",
            format_skill_list(&report.extracted_hard_skills)
        ));
        out.push_str(&format!(
            "- Soft skills: {}\n\n",
            format_skill_list(&report.extracted_soft_skills)
        ));

        match &report.outcome {
            RecommendationOutcome::Recommendation(recommendation) => {
                out.push_str("## Recommendation\n\n");
                out.push_str(&format!("**{}**\n\n", recommendation.field));
                out.push_str(&format!(
                    "Raw score {} | normalized score {:.3}\n\n",
                    recommendation.raw_score, recommendation.normalized_score
                ));
            }
            RecommendationOutcome::NoMatch => {
                out.push_str("## Recommendation\n\nNo matching career field found.\n\n");
            }
        }

        if !report.field_scores.is_empty() {
            out.push_str("## Field Ranking\n\n");
            out.push_str("| Field | Raw | Population | Normalized |\n");
            out.push_str("|-------|-----|------------|------------|\n");
            for score in &report.field_scores {
                out.push_str(&format!(
                    "| {} | {} | {} | {:.3} |\n",
                    score.field, score.raw, score.population, score.normalized
                ));
            }
            out.push('\n');
        }

        if self.include_metadata {
            let meta = &report.metadata;
            out.push_str("## Metadata\n\n");
            out.push_str(&format!("- Adviser version: {}\n", meta.adviser_version));
            out.push_str(&format!("- Dataset: {}\n", meta.dataset_file));
            out.push_str(&format!("- Profiles: {}\n", meta.profile_count));
            out.push_str(&format!(
                "- Vocabulary: {} hard / {} soft\n",
                meta.hard_vocabulary_size, meta.soft_vocabulary_size
            ));
            out.push_str(&format!("- Processing time: {}ms\n", meta.processing_time_ms));
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

fn format_skill_list(skills: &[String]) -> String {
    if skills.is_empty() {
        "(none)".to_string()
    } else {
        skills.join(", ")
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(detailed),
        }
    }

    pub fn format_report(
        &self,
        report: &RecommendationReport,
        format: OutputFormat,
    ) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }

    pub fn save_report(
        &self,
        report: &RecommendationReport,
        format: OutputFormat,
        path: &Path,
    ) -> Result<()> {
        let content = self.format_report(report, format)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
