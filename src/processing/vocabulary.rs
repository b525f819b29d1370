//! Skill vocabulary mined from the reference profiles

use crate::input::dataset::Profile;
use log::info;
use std::collections::HashSet;

/// The full set of known skill strings, split by category.
///
/// Built once per dataset and read-only afterwards. Every entry is
/// lower-cased and non-empty (guaranteed at profile load time); duplicates
/// collapse under set semantics.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    pub hard: HashSet<String>,
    pub soft: HashSet<String>,
}

impl SkillVocabulary {
    /// Build the vocabulary as the union of all profiles' skill sets.
    pub fn build(profiles: &[Profile]) -> Self {
        let mut hard = HashSet::new();
        let mut soft = HashSet::new();

        for profile in profiles {
            hard.extend(profile.hard_skills.iter().cloned());
            soft.extend(profile.soft_skills.iter().cloned());
        }

        info!(
            "Built vocabulary: {} hard skills, {} soft skills",
            hard.len(),
            soft.len()
        );

        Self { hard, soft }
    }

    pub fn is_empty(&self) -> bool {
        self.hard.is_empty() && self.soft.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(hard: &[&str], soft: &[&str], field: &str) -> Profile {
        Profile {
            hard_skills: hard.iter().map(|s| s.to_string()).collect(),
            soft_skills: soft.iter().map(|s| s.to_string()).collect(),
            field: field.to_string(),
        }
    }

    #[test]
    fn test_vocabulary_is_union_of_profiles() {
        let profiles = vec![
            profile(&["nursing"], &["communication"], "Healthcare"),
            profile(&["sales", "crm"], &["negotiation"], "Sales"),
        ];
        let vocabulary = SkillVocabulary::build(&profiles);

        assert_eq!(vocabulary.hard.len(), 3);
        assert_eq!(vocabulary.soft.len(), 2);
        assert!(vocabulary.hard.contains("crm"));
        assert!(vocabulary.soft.contains("negotiation"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let profiles = vec![
            profile(&["nursing"], &["communication"], "Healthcare"),
            profile(&["nursing"], &["communication"], "Healthcare"),
        ];
        let vocabulary = SkillVocabulary::build(&profiles);
        assert_eq!(vocabulary.hard.len(), 1);
        assert_eq!(vocabulary.soft.len(), 1);
    }

    #[test]
    fn test_build_is_idempotent() {
        let profiles = vec![
            profile(&["nursing", "triage"], &["empathy"], "Healthcare"),
            profile(&["sales"], &["negotiation"], "Sales"),
        ];
        let first = SkillVocabulary::build(&profiles);
        let second = SkillVocabulary::build(&profiles);
        assert_eq!(first.hard, second.hard);
        assert_eq!(first.soft, second.soft);
    }

    #[test]
    fn test_empty_profiles_build_empty_vocabulary() {
        let vocabulary = SkillVocabulary::build(&[]);
        assert!(vocabulary.is_empty());
    }
}
