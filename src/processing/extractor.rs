//! Skill extraction from free text via phrase and lemma matching

use crate::error::{CareerAdviserError, Result};
use crate::processing::text_normalizer::{NormalizedText, TextNormalizer};
use crate::processing::vocabulary::SkillVocabulary;
use aho_corasick::AhoCorasick;
use std::collections::{HashMap, HashSet};

/// Matches vocabulary skills against free text.
///
/// Two strategies are unioned per skill:
/// 1. Whole-phrase substring matching: the skill must occur in the text
///    delimited by word boundaries on both sides. Multi-word skills only
///    match as contiguous phrases.
/// 2. Lemma equality for single-word skills: any input lemma equal to the
///    skill's lemma form counts as a mention.
pub struct SkillExtractor {
    hard: CategoryMatcher,
    soft: CategoryMatcher,
}

/// Per-query extraction output: the vocabulary subsets mentioned in the text.
#[derive(Debug, Clone, Default)]
pub struct ExtractionResult {
    pub hard: HashSet<String>,
    pub soft: HashSet<String>,
}

/// Phrase automaton plus lemma index for one skill category.
struct CategoryMatcher {
    matcher: AhoCorasick,
    patterns: Vec<String>,
    // lemma form -> single-word skills sharing it
    lemma_index: HashMap<String, Vec<String>>,
}

impl CategoryMatcher {
    fn new(skills: &HashSet<String>, normalizer: &TextNormalizer) -> Result<Self> {
        let patterns: Vec<String> = skills.iter().cloned().collect();
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .map_err(|e| {
                CareerAdviserError::Matching(format!("Failed to build skill matcher: {}", e))
            })?;

        let mut lemma_index: HashMap<String, Vec<String>> = HashMap::new();
        for skill in &patterns {
            if !skill.contains(char::is_whitespace) {
                lemma_index
                    .entry(normalizer.lemma(skill))
                    .or_default()
                    .push(skill.clone());
            }
        }

        Ok(Self {
            matcher,
            patterns,
            lemma_index,
        })
    }

    fn extract(&self, text_lower: &str, normalized: &NormalizedText) -> HashSet<String> {
        let mut matched = HashSet::new();

        // Overlapping scan so every mentioned skill is reported, not just
        // the longest pattern at a position.
        for mat in self.matcher.find_overlapping_iter(text_lower) {
            if is_word_delimited(text_lower, mat.start(), mat.end()) {
                matched.insert(self.patterns[mat.pattern().as_usize()].clone());
            }
        }

        for lemma in &normalized.lemmas {
            if let Some(skills) = self.lemma_index.get(lemma) {
                matched.extend(skills.iter().cloned());
            }
        }

        matched
    }
}

/// Word-boundary discipline: the characters adjacent to the match must not
/// be word characters, so a skill never matches inside a longer token.
fn is_word_delimited(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !is_word_char(c));
    let after_ok = text[end..].chars().next().map_or(true, |c| !is_word_char(c));
    before_ok && after_ok
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl SkillExtractor {
    pub fn new(vocabulary: &SkillVocabulary, normalizer: &TextNormalizer) -> Result<Self> {
        Ok(Self {
            hard: CategoryMatcher::new(&vocabulary.hard, normalizer)?,
            soft: CategoryMatcher::new(&vocabulary.soft, normalizer)?,
        })
    }

    /// Return the vocabulary skills mentioned in `text`.
    ///
    /// `normalized` must be the normalization of the same `text`.
    /// Deterministic: identical inputs always yield identical sets.
    pub fn extract(&self, text: &str, normalized: &NormalizedText) -> ExtractionResult {
        let text_lower = text.to_lowercase();

        ExtractionResult {
            hard: self.hard.extract(&text_lower, normalized),
            soft: self.soft.extract(&text_lower, normalized),
        }
    }
}
