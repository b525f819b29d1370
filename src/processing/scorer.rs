//! Career field scoring and recommendation selection

use crate::input::dataset::{FieldPopulation, Profile};
use crate::processing::extractor::ExtractionResult;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ranks career fields by overlap between extracted skills and the
/// reference profiles, normalized by field population.
///
/// Construction builds an in-memory index from skill to the profiles
/// carrying it, so scoring is a pure lookup; the index and populations are
/// read-only after construction.
pub struct FieldScorer {
    hard_index: HashMap<String, Vec<usize>>,
    soft_index: HashMap<String, Vec<usize>>,
    profile_fields: Vec<String>,
    population: FieldPopulation,
}

/// The selected best-fit field with its scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub field: String,
    pub raw_score: u32,
    pub normalized_score: f64,
}

/// One field's scores within a query's ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldScore {
    pub field: String,
    pub raw: u32,
    pub normalized: f64,
    pub population: usize,
}

/// Per-query scoring output: the full ranking plus the winner, if any.
///
/// `recommendation` is `None` when no extracted skill intersects any
/// profile, which is a normal terminal outcome, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreOutcome {
    pub scores: Vec<FieldScore>,
    pub recommendation: Option<Recommendation>,
}

impl FieldScorer {
    pub fn new(profiles: &[Profile]) -> Self {
        let population = FieldPopulation::from_profiles(profiles);

        let mut hard_index: HashMap<String, Vec<usize>> = HashMap::new();
        let mut soft_index: HashMap<String, Vec<usize>> = HashMap::new();
        let mut profile_fields = Vec::with_capacity(profiles.len());

        for (idx, profile) in profiles.iter().enumerate() {
            for skill in &profile.hard_skills {
                hard_index.entry(skill.clone()).or_default().push(idx);
            }
            for skill in &profile.soft_skills {
                soft_index.entry(skill.clone()).or_default().push(idx);
            }
            profile_fields.push(profile.field.clone());
        }

        Self {
            hard_index,
            soft_index,
            profile_fields,
            population,
        }
    }

    /// Score all fields against the extracted skills and select the winner.
    ///
    /// Two strict phases: first both skill categories are accumulated into
    /// fresh raw per-field counts, then normalization and selection run over
    /// the completed counts. Each (profile, extracted skill) hit contributes
    /// 1, so a profile matched by several extracted skills counts several
    /// times. Ties on normalized score break to the lexicographically
    /// smallest field label.
    pub fn score(&self, extraction: &ExtractionResult) -> ScoreOutcome {
        // Phase 1: accumulate raw counts, hard skills then soft skills.
        let mut raw_scores: HashMap<&str, u32> = HashMap::new();
        self.accumulate(&extraction.hard, &self.hard_index, &mut raw_scores);
        self.accumulate(&extraction.soft, &self.soft_index, &mut raw_scores);

        // Phase 2: normalize by field population and select.
        let mut scores: Vec<FieldScore> = raw_scores
            .into_iter()
            .map(|(field, raw)| {
                let population = self.population.get(field).unwrap_or_else(|| {
                    warn!(
                        "Field '{}' has no population count; defaulting denominator to 1",
                        field
                    );
                    1
                });
                FieldScore {
                    field: field.to_string(),
                    raw,
                    normalized: raw as f64 / population as f64,
                    population,
                }
            })
            .collect();

        scores.sort_by(|a, b| {
            b.normalized
                .partial_cmp(&a.normalized)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.field.cmp(&b.field))
        });

        let recommendation = scores.first().map(|best| Recommendation {
            field: best.field.clone(),
            raw_score: best.raw,
            normalized_score: best.normalized,
        });

        debug!(
            "Scored {} fields, recommendation: {:?}",
            scores.len(),
            recommendation.as_ref().map(|r| r.field.as_str())
        );

        ScoreOutcome {
            scores,
            recommendation,
        }
    }

    fn accumulate<'a>(
        &'a self,
        extracted: &std::collections::HashSet<String>,
        index: &'a HashMap<String, Vec<usize>>,
        raw_scores: &mut HashMap<&'a str, u32>,
    ) {
        for skill in extracted {
            if let Some(profile_indices) = index.get(skill) {
                for &idx in profile_indices {
                    *raw_scores.entry(self.profile_fields[idx].as_str()).or_insert(0) += 1;
                }
            }
        }
    }
}
