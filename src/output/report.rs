//! Serializable recommendation report structures

use crate::processing::engine::QueryOutcome;
use crate::processing::scorer::{FieldScore, Recommendation};
use crate::processing::vocabulary::SkillVocabulary;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Full result of one query, ready for any output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    /// The query text as given
    pub query: String,

    /// Extracted hard skills, sorted for stable presentation
    pub extracted_hard_skills: Vec<String>,

    /// Extracted soft skills, sorted for stable presentation
    pub extracted_soft_skills: Vec<String>,

    /// The recommendation, or an explicit no-match
    pub outcome: RecommendationOutcome,

    /// Full field ranking (normalized score descending)
    pub field_scores: Vec<FieldScore>,

    /// Report metadata and generation info
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecommendationOutcome {
    Recommendation(Recommendation),
    NoMatch,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: SystemTime,

    /// Version of the adviser used
    pub adviser_version: String,

    /// Dataset file the engine was built from
    pub dataset_file: String,

    /// Profiles loaded after selection
    pub profile_count: usize,

    /// Distinct career fields in the loaded profiles
    pub field_count: usize,

    /// Vocabulary sizes per category
    pub hard_vocabulary_size: usize,
    pub soft_vocabulary_size: usize,

    /// Query processing time
    pub processing_time_ms: u64,
}

impl RecommendationReport {
    pub fn from_outcome(
        query: &str,
        outcome: QueryOutcome,
        vocabulary: &SkillVocabulary,
        dataset_file: &str,
        profile_count: usize,
    ) -> Self {
        let mut extracted_hard_skills: Vec<String> =
            outcome.extraction.hard.into_iter().collect();
        extracted_hard_skills.sort();
        let mut extracted_soft_skills: Vec<String> =
            outcome.extraction.soft.into_iter().collect();
        extracted_soft_skills.sort();

        let field_count = outcome
            .score
            .scores
            .iter()
            .map(|s| s.field.as_str())
            .collect::<std::collections::HashSet<_>>()
            .len();

        let recommendation_outcome = match outcome.score.recommendation {
            Some(recommendation) => RecommendationOutcome::Recommendation(recommendation),
            None => RecommendationOutcome::NoMatch,
        };

        Self {
            query: query.to_string(),
            extracted_hard_skills,
            extracted_soft_skills,
            outcome: recommendation_outcome,
            field_scores: outcome.score.scores,
            metadata: ReportMetadata {
                generated_at: SystemTime::now(),
                adviser_version: env!("CARGO_PKG_VERSION").to_string(),
                dataset_file: dataset_file.to_string(),
                profile_count,
                field_count,
                hard_vocabulary_size: vocabulary.hard.len(),
                soft_vocabulary_size: vocabulary.soft.len(),
                processing_time_ms: outcome.processing_time_ms,
            },
        }
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        match &self.outcome {
            RecommendationOutcome::Recommendation(recommendation) => Some(recommendation),
            RecommendationOutcome::NoMatch => None,
        }
    }
}
