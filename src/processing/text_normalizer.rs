//! Text normalization: tokenization and lemmatization

use crate::error::{CareerAdviserError, Result};
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use unicode_segmentation::UnicodeSegmentation;

/// Wraps the tokenization and lemmatization services behind one interface.
///
/// Lemma forms are Snowball stems; vocabulary entries are folded through
/// [`TextNormalizer::lemma`] so both sides of a lemma comparison use the
/// same mapping. A failure here is a precondition fault for extraction and
/// propagates to the caller.
pub struct TextNormalizer {
    stemmer: Stemmer,
    whitespace_regex: Regex,
}

#[derive(Debug, Clone)]
pub struct NormalizedText {
    pub tokens: Vec<String>,
    pub lemmas: Vec<String>,
}

impl TextNormalizer {
    pub fn new() -> Result<Self> {
        let whitespace_regex = Regex::new(r"\s+").map_err(|e| {
            CareerAdviserError::Normalization(format!("Invalid whitespace regex: {}", e))
        })?;

        Ok(Self {
            stemmer: Stemmer::create(Algorithm::English),
            whitespace_regex,
        })
    }

    /// Normalize input text into lower-cased tokens and their lemma forms.
    ///
    /// The two sequences are parallel: `lemmas[i]` is the lemma of
    /// `tokens[i]`. Empty input yields empty sequences, not an error.
    pub fn normalize(&self, text: &str) -> Result<NormalizedText> {
        let collapsed = self.whitespace_regex.replace_all(text, " ");

        let tokens: Vec<String> = collapsed
            .unicode_words()
            .map(|w| w.to_lowercase())
            .collect();

        let lemmas = tokens.iter().map(|t| self.lemma(t)).collect();

        Ok(NormalizedText { tokens, lemmas })
    }

    /// Lemma form of a single lower-cased word.
    pub fn lemma(&self, word: &str) -> String {
        self.stemmer.stem(word).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_lowercased() {
        let normalizer = TextNormalizer::new().unwrap();
        let normalized = normalizer.normalize("Nursing and Communication").unwrap();
        assert_eq!(normalized.tokens, vec!["nursing", "and", "communication"]);
    }

    #[test]
    fn test_lemmas_parallel_tokens() {
        let normalizer = TextNormalizer::new().unwrap();
        let normalized = normalizer.normalize("running tests").unwrap();
        assert_eq!(normalized.tokens.len(), normalized.lemmas.len());
        assert_eq!(normalized.lemmas[0], "run");
    }

    #[test]
    fn test_inflected_forms_share_a_lemma() {
        let normalizer = TextNormalizer::new().unwrap();
        assert_eq!(
            normalizer.lemma("communicating"),
            normalizer.lemma("communication")
        );
        assert_eq!(normalizer.lemma("nursing"), normalizer.lemma("nurse"));
    }

    #[test]
    fn test_empty_input_yields_empty_sequences() {
        let normalizer = TextNormalizer::new().unwrap();
        let normalized = normalizer.normalize("").unwrap();
        assert!(normalized.tokens.is_empty());
        assert!(normalized.lemmas.is_empty());

        let normalized = normalizer.normalize("   \t\n  ").unwrap();
        assert!(normalized.tokens.is_empty());
    }

    #[test]
    fn test_punctuation_is_not_tokenized() {
        let normalizer = TextNormalizer::new().unwrap();
        let normalized = normalizer.normalize("sales, negotiation!").unwrap();
        assert_eq!(normalized.tokens, vec!["sales", "negotiation"]);
    }
}
