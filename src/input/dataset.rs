//! Dataset loading: labeled profiles and per-field populations

use crate::error::{CareerAdviserError, Result};
use crate::input::skills::parse_skill_list;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// One raw CSV row of the reference dataset.
#[derive(Debug, Deserialize)]
struct ProfileRecord {
    hard_skill: String,
    soft_skill: String,
    candidate_field: String,
    label: u8,
}

/// One reference profile: parsed skill sets plus the career field label.
///
/// Skill strings are lower-cased and non-empty; the sets are immutable
/// after loading.
#[derive(Debug, Clone)]
pub struct Profile {
    pub hard_skills: HashSet<String>,
    pub soft_skills: HashSet<String>,
    pub field: String,
}

impl Profile {
    fn from_record(record: ProfileRecord) -> Self {
        Self {
            hard_skills: fold_skills(&record.hard_skill),
            soft_skills: fold_skills(&record.soft_skill),
            field: record.candidate_field.trim().to_string(),
        }
    }
}

/// Parse a skill field and case-fold the result into a set.
fn fold_skills(raw: &str) -> HashSet<String> {
    parse_skill_list(raw)
        .into_iter()
        .map(|s| s.to_lowercase())
        .collect()
}

/// How rows are selected from the full dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Keep only positively labeled rows (`label == 1`).
    Positive,
    /// Class-balanced downsample of the full set: every field is truncated
    /// to the smallest field's row count, preserving file order.
    Balanced,
}

/// Mapping from field label to the number of loaded profiles bearing it.
///
/// Used as the normalization denominator during scoring. Every field
/// referenced by a loaded profile has a positive count.
#[derive(Debug, Clone)]
pub struct FieldPopulation {
    counts: HashMap<String, usize>,
}

impl FieldPopulation {
    pub fn from_profiles(profiles: &[Profile]) -> Self {
        let mut counts = HashMap::new();
        for profile in profiles {
            *counts.entry(profile.field.clone()).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn get(&self, field: &str) -> Option<usize> {
        self.counts.get(field).copied()
    }

    pub fn field_count(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(field, &count)| (field.as_str(), count))
    }
}

/// Load profiles from a CSV dataset file.
pub async fn load_profiles(path: &Path, mode: SelectionMode) -> Result<Vec<Profile>> {
    if !path.exists() {
        return Err(CareerAdviserError::InvalidInput(format!(
            "Dataset file does not exist: {}",
            path.display()
        )));
    }

    let bytes = tokio::fs::read(path).await?;
    let profiles = load_profiles_from_reader(bytes.as_slice(), mode)?;
    info!(
        "Loaded {} profiles from {} ({:?} selection)",
        profiles.len(),
        path.display(),
        mode
    );
    Ok(profiles)
}

/// Load profiles from any CSV reader. Separated from the file boundary so
/// tests can feed in-memory data.
pub fn load_profiles_from_reader<R: std::io::Read>(
    reader: R,
    mode: SelectionMode,
) -> Result<Vec<Profile>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize::<ProfileRecord>() {
        records.push(row?);
    }
    debug!("Read {} dataset rows", records.len());

    let selected = match mode {
        SelectionMode::Positive => records.into_iter().filter(|r| r.label == 1).collect(),
        SelectionMode::Balanced => balance_records(records),
    };

    if selected.is_empty() {
        return Err(CareerAdviserError::Dataset(
            "Dataset contains no usable profiles after selection".to_string(),
        ));
    }

    Ok(selected.into_iter().map(Profile::from_record).collect())
}

/// Downsample every field to the smallest field's row count, keeping rows
/// in file order. Deterministic, no RNG.
fn balance_records(records: Vec<ProfileRecord>) -> Vec<ProfileRecord> {
    let mut per_field: HashMap<String, usize> = HashMap::new();
    for record in &records {
        *per_field.entry(record.candidate_field.clone()).or_insert(0) += 1;
    }

    let Some(min_count) = per_field.values().copied().min() else {
        return Vec::new();
    };

    let mut taken: HashMap<String, usize> = HashMap::new();
    records
        .into_iter()
        .filter(|record| {
            let seen = taken.entry(record.candidate_field.clone()).or_insert(0);
            *seen += 1;
            *seen <= min_count
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = "\
hard_skill,soft_skill,candidate_field,label
\"['nursing', 'registration']\",\"['communication']\",Healthcare,1
\"nursing, triage\",\"empathy, communication\",Healthcare,1
\"['sales']\",\"['negotiation']\",Sales,1
\"['accounting']\",\"['diligence']\",Finance,0
";

    #[test]
    fn test_positive_selection_filters_label() {
        let profiles =
            load_profiles_from_reader(DATASET.as_bytes(), SelectionMode::Positive).unwrap();
        assert_eq!(profiles.len(), 3);
        assert!(profiles.iter().all(|p| p.field != "Finance"));
    }

    #[test]
    fn test_skills_are_case_folded_sets() {
        let data = "\
hard_skill,soft_skill,candidate_field,label
\"['SQL', 'sql', 'Data Analysis']\",\"['Teamwork']\",Analytics,1
";
        let profiles = load_profiles_from_reader(data.as_bytes(), SelectionMode::Positive).unwrap();
        assert_eq!(profiles[0].hard_skills.len(), 2);
        assert!(profiles[0].hard_skills.contains("sql"));
        assert!(profiles[0].hard_skills.contains("data analysis"));
        assert!(profiles[0].soft_skills.contains("teamwork"));
    }

    #[test]
    fn test_balanced_selection_truncates_to_smallest_field() {
        let profiles =
            load_profiles_from_reader(DATASET.as_bytes(), SelectionMode::Balanced).unwrap();
        let population = FieldPopulation::from_profiles(&profiles);
        // Smallest classes (Sales, Finance) have one row each.
        assert_eq!(population.get("Healthcare"), Some(1));
        assert_eq!(population.get("Sales"), Some(1));
        assert_eq!(population.get("Finance"), Some(1));
    }

    #[test]
    fn test_balanced_selection_keeps_file_order() {
        let profiles =
            load_profiles_from_reader(DATASET.as_bytes(), SelectionMode::Balanced).unwrap();
        let healthcare: Vec<_> = profiles.iter().filter(|p| p.field == "Healthcare").collect();
        assert_eq!(healthcare.len(), 1);
        // First Healthcare row in the file carries the list-literal form.
        assert!(healthcare[0].hard_skills.contains("registration"));
    }

    #[test]
    fn test_malformed_skill_field_degrades_not_errors() {
        let data = "\
hard_skill,soft_skill,candidate_field,label
\"[broken, literal\",\"\",Misc,1
";
        let profiles = load_profiles_from_reader(data.as_bytes(), SelectionMode::Positive).unwrap();
        assert_eq!(profiles.len(), 1);
        assert!(profiles[0].soft_skills.is_empty());
        assert!(!profiles[0].hard_skills.is_empty());
    }

    #[test]
    fn test_empty_selection_is_an_error() {
        let data = "\
hard_skill,soft_skill,candidate_field,label
\"['a']\",\"['b']\",Field,0
";
        let result = load_profiles_from_reader(data.as_bytes(), SelectionMode::Positive);
        assert!(result.is_err());
    }

    #[test]
    fn test_field_population_counts() {
        let profiles =
            load_profiles_from_reader(DATASET.as_bytes(), SelectionMode::Positive).unwrap();
        let population = FieldPopulation::from_profiles(&profiles);
        assert_eq!(population.get("Healthcare"), Some(2));
        assert_eq!(population.get("Sales"), Some(1));
        assert_eq!(population.get("Finance"), None);
        assert_eq!(population.field_count(), 2);
    }
}
