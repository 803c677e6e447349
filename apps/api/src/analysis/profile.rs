//! Analyzer profile: the tunable data behind the scorers.
//!
//! The skill taxonomy, the stop-word list and the suggestion thresholds are data,
//! not logic. A default profile is compiled into the binary; deployments can point
//! `ANALYZER_PROFILE_PATH` at a JSON file with the same shape to override it.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_PROFILE_JSON: &str = include_str!("../../config/analyzer_profile.json");

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid profile JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid profile: {0}")]
    Invalid(String),
}

/// Score thresholds that drive the suggestion engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub ats_critical: u8,
    pub ats_warning: u8,
    pub format_critical: u8,
    pub format_warning: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            ats_critical: 60,
            ats_warning: 80,
            format_critical: 70,
            format_warning: 85,
        }
    }
}

/// A named set of canonical, lowercase skill strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

impl SkillCategory {
    /// "ai_ml" -> "Ai Ml"
    pub fn display_name(&self) -> String {
        self.name
            .split('_')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerProfile {
    pub stop_words: Vec<String>,
    #[serde(default)]
    pub thresholds: Thresholds,
    /// Declared order is the order categories are reported and suggested in.
    pub skill_categories: Vec<SkillCategory>,
}

impl AnalyzerProfile {
    /// The profile compiled into the binary.
    pub fn builtin() -> Result<Self, ProfileError> {
        Self::from_json(DEFAULT_PROFILE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        let profile: AnalyzerProfile = serde_json::from_str(json)?;
        profile.canonicalize().validate()
    }

    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let json = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Loads `path` when given, otherwise falls back to the built-in profile.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, ProfileError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    pub fn stop_word_set(&self) -> HashSet<String> {
        self.stop_words.iter().cloned().collect()
    }

    fn canonicalize(mut self) -> Self {
        self.stop_words = canonical_list(&self.stop_words);
        for category in &mut self.skill_categories {
            category.name = category.name.trim().to_lowercase();
            category.skills = canonical_list(&category.skills);
        }
        self
    }

    fn validate(self) -> Result<Self, ProfileError> {
        let t = &self.thresholds;
        if t.ats_critical > t.ats_warning || t.format_critical > t.format_warning {
            return Err(ProfileError::Invalid(
                "critical thresholds must not exceed warning thresholds".to_string(),
            ));
        }
        if t.ats_warning > 100 || t.format_warning > 100 {
            return Err(ProfileError::Invalid(
                "thresholds must be within 0-100".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for category in &self.skill_categories {
            if category.name.is_empty() {
                return Err(ProfileError::Invalid(
                    "skill category name cannot be empty".to_string(),
                ));
            }
            if !seen.insert(category.name.as_str()) {
                return Err(ProfileError::Invalid(format!(
                    "duplicate skill category '{}'",
                    category.name
                )));
            }
            if category.skills.is_empty() {
                return Err(ProfileError::Invalid(format!(
                    "skill category '{}' has no skills",
                    category.name
                )));
            }
        }

        Ok(self)
    }
}

/// Trims and lowercases entries, drops blanks and duplicates, keeps first-seen order.
fn canonical_list(items: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json(thresholds: &str) -> String {
        format!(
            r#"{{
                "stop_words": ["The", " and ", "and", ""],
                {thresholds}
                "skill_categories": [
                    {{"name": " Cloud ", "skills": ["AWS", "docker", "aws"]}}
                ]
            }}"#
        )
    }

    #[test]
    fn test_builtin_profile_has_six_categories_in_order() {
        let profile = AnalyzerProfile::builtin().unwrap();
        let names: Vec<&str> = profile
            .skill_categories
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["programming", "web", "database", "cloud", "ai_ml", "soft_skills"]
        );
        assert_eq!(profile.thresholds, Thresholds::default());
        assert!(profile.stop_word_set().contains("the"));
    }

    #[test]
    fn test_entries_are_canonicalized() {
        let profile = AnalyzerProfile::from_json(&minimal_json("")).unwrap();
        assert_eq!(profile.stop_words, vec!["the", "and"]);
        assert_eq!(profile.skill_categories[0].name, "cloud");
        assert_eq!(profile.skill_categories[0].skills, vec!["aws", "docker"]);
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let json = minimal_json(
            r#""thresholds": {"ats_critical": 90, "ats_warning": 80, "format_critical": 70, "format_warning": 85},"#,
        );
        let err = AnalyzerProfile::from_json(&json).unwrap_err();
        assert!(matches!(err, ProfileError::Invalid(_)));
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let json = r#"{
            "stop_words": [],
            "skill_categories": [
                {"name": "web", "skills": ["html"]},
                {"name": "WEB", "skills": ["css"]}
            ]
        }"#;
        let err = AnalyzerProfile::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = AnalyzerProfile::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ProfileError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AnalyzerProfile::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ProfileError::Io { .. }));
    }

    #[test]
    fn test_display_name() {
        let category = SkillCategory {
            name: "ai_ml".to_string(),
            skills: vec![],
        };
        assert_eq!(category.display_name(), "Ai Ml");

        let category = SkillCategory {
            name: "soft_skills".to_string(),
            skills: vec![],
        };
        assert_eq!(category.display_name(), "Soft Skills");
    }
}
