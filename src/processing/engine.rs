//! Recommendation engine: the immutable query context and pipeline

use crate::error::Result;
use crate::input::dataset::Profile;
use crate::processing::extractor::{ExtractionResult, SkillExtractor};
use crate::processing::scorer::{FieldScorer, ScoreOutcome};
use crate::processing::text_normalizer::TextNormalizer;
use crate::processing::vocabulary::SkillVocabulary;
use log::info;
use std::time::Instant;

/// Owns the read-only query context: normalizer, vocabulary, extractor and
/// scorer, all built once from the loaded profiles.
///
/// Queries take `&self` and allocate their own state, so the engine can be
/// shared freely if the surrounding program ever runs queries concurrently.
pub struct RecommendationEngine {
    normalizer: TextNormalizer,
    vocabulary: SkillVocabulary,
    extractor: SkillExtractor,
    scorer: FieldScorer,
    profile_count: usize,
}

/// Per-query output: what was extracted and how the fields scored.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub extraction: ExtractionResult,
    pub score: ScoreOutcome,
    pub processing_time_ms: u64,
}

impl RecommendationEngine {
    pub fn new(profiles: Vec<Profile>) -> Result<Self> {
        let normalizer = TextNormalizer::new()?;
        let vocabulary = SkillVocabulary::build(&profiles);
        let extractor = SkillExtractor::new(&vocabulary, &normalizer)?;
        let scorer = FieldScorer::new(&profiles);

        info!("Recommendation engine ready ({} profiles)", profiles.len());

        Ok(Self {
            normalizer,
            vocabulary,
            extractor,
            scorer,
            profile_count: profiles.len(),
        })
    }

    /// Run one query: normalize, extract, then score.
    ///
    /// Selection only runs after both skill categories have contributed to
    /// the raw counts; the scorer enforces that phase ordering internally.
    /// Normalization failures propagate; unnormalizable text must not be
    /// silently treated as "no skills".
    pub fn recommend(&self, text: &str) -> Result<QueryOutcome> {
        let start = Instant::now();

        let normalized = self.normalizer.normalize(text)?;
        let extraction = self.extractor.extract(text, &normalized);
        let score = self.scorer.score(&extraction);

        Ok(QueryOutcome {
            extraction,
            score,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    pub fn profile_count(&self) -> usize {
        self.profile_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn profile(hard: &[&str], soft: &[&str], field: &str) -> Profile {
        Profile {
            hard_skills: hard.iter().map(|s| s.to_string()).collect(),
            soft_skills: soft.iter().map(|s| s.to_string()).collect(),
            field: field.to_string(),
        }
    }

    fn reference_engine() -> RecommendationEngine {
        let profiles = vec![
            profile(&["nursing"], &["communication"], "Healthcare"),
            profile(&["nursing"], &["communication"], "Healthcare"),
            profile(&["nursing"], &["communication"], "Healthcare"),
            profile(&["sales"], &["negotiation"], "Sales"),
            profile(&["sales"], &["negotiation"], "Sales"),
        ];
        RecommendationEngine::new(profiles).unwrap()
    }

    #[test]
    fn test_end_to_end_recommendation() {
        let engine = reference_engine();
        let outcome = engine
            .recommend("I have nursing experience and written communication skills")
            .unwrap();

        let expected_hard: HashSet<String> = ["nursing".to_string()].into_iter().collect();
        let expected_soft: HashSet<String> = ["communication".to_string()].into_iter().collect();
        assert_eq!(outcome.extraction.hard, expected_hard);
        assert_eq!(outcome.extraction.soft, expected_soft);

        let recommendation = outcome.score.recommendation.unwrap();
        assert_eq!(recommendation.field, "Healthcare");
        // 3 profiles hit per category: raw 6, normalized 6/3.
        assert_eq!(recommendation.raw_score, 6);
        assert_eq!(recommendation.normalized_score, 2.0);

        assert!(outcome.score.scores.iter().all(|s| s.field != "Sales"));
    }

    #[test]
    fn test_empty_input_is_a_no_match() {
        let engine = reference_engine();
        let outcome = engine.recommend("").unwrap();

        assert!(outcome.extraction.hard.is_empty());
        assert!(outcome.extraction.soft.is_empty());
        assert!(outcome.score.recommendation.is_none());
    }

    #[test]
    fn test_whitespace_only_input_is_a_no_match() {
        let engine = reference_engine();
        let outcome = engine.recommend("   \n\t ").unwrap();
        assert!(outcome.score.recommendation.is_none());
    }

    #[test]
    fn test_unrelated_text_is_a_no_match() {
        let engine = reference_engine();
        let outcome = engine.recommend("I enjoy hiking and photography.").unwrap();
        assert!(outcome.score.recommendation.is_none());
    }

    #[test]
    fn test_queries_do_not_leak_state() {
        let engine = reference_engine();
        let first = engine.recommend("nursing and communication").unwrap();
        engine.recommend("sales and negotiation").unwrap();
        let third = engine.recommend("nursing and communication").unwrap();

        let first_rec = first.score.recommendation.unwrap();
        let third_rec = third.score.recommendation.unwrap();
        assert_eq!(first_rec.field, third_rec.field);
        assert_eq!(first_rec.raw_score, third_rec.raw_score);
    }

    #[test]
    fn test_vocabulary_accessor_reflects_profiles() {
        let engine = reference_engine();
        assert_eq!(engine.vocabulary().hard.len(), 2);
        assert_eq!(engine.vocabulary().soft.len(), 2);
        assert_eq!(engine.profile_count(), 5);
    }
}
