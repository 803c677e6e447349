//! Categorized skill-gap extraction against the profile's skill taxonomy.
//!
//! A skill is present in a document when its canonical string is a substring of the
//! lowercased text, so multi-word phrases ("machine learning") and punctuated names
//! ("node.js", "c++") match without tokenization.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::analysis::profile::SkillCategory;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryReport {
    pub name: String,
    pub display_name: String,
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
    pub additional: BTreeSet<String>,
    /// 0 – 100; 100 when the job requires nothing from this category.
    pub score: u8,
}

/// Per-category breakdown plus the union of every category's sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillReport {
    pub categories: Vec<CategoryReport>,
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
    pub additional: BTreeSet<String>,
    pub matched_count: usize,
    pub missing_count: usize,
    pub additional_count: usize,
}

impl SkillReport {
    fn from_categories(categories: Vec<CategoryReport>) -> Self {
        let mut matched = BTreeSet::new();
        let mut missing = BTreeSet::new();
        let mut additional = BTreeSet::new();
        for category in &categories {
            matched.extend(category.matched.iter().cloned());
            missing.extend(category.missing.iter().cloned());
            additional.extend(category.additional.iter().cloned());
        }

        Self {
            matched_count: matched.len(),
            missing_count: missing.len(),
            additional_count: additional.len(),
            categories,
            matched,
            missing,
            additional,
        }
    }
}

/// Compares resume and job skills per category.
///
/// A missing or blank job description means nothing is required: every category
/// scores 100 and every resume skill lands in `additional`.
pub fn extract_skills(
    taxonomy: &[SkillCategory],
    resume_text: &str,
    job_text: Option<&str>,
) -> SkillReport {
    let resume = resume_text.to_lowercase();
    let job = job_text
        .filter(|text| !text.trim().is_empty())
        .map(str::to_lowercase);

    let categories = taxonomy
        .iter()
        .map(|category| {
            let resume_skills = skills_in(category, &resume);
            let job_skills = job
                .as_deref()
                .map(|job| skills_in(category, job))
                .unwrap_or_default();
            compare(category, resume_skills, job_skills)
        })
        .collect();

    SkillReport::from_categories(categories)
}

fn skills_in(category: &SkillCategory, text: &str) -> BTreeSet<String> {
    category
        .skills
        .iter()
        .filter(|skill| text.contains(skill.as_str()))
        .cloned()
        .collect()
}

fn compare(
    category: &SkillCategory,
    resume_skills: BTreeSet<String>,
    job_skills: BTreeSet<String>,
) -> CategoryReport {
    let matched: BTreeSet<String> = resume_skills.intersection(&job_skills).cloned().collect();
    let missing: BTreeSet<String> = job_skills.difference(&resume_skills).cloned().collect();
    let additional: BTreeSet<String> = resume_skills.difference(&job_skills).cloned().collect();

    let score = if job_skills.is_empty() {
        100
    } else {
        (matched.len() as f64 / job_skills.len() as f64 * 100.0).round() as u8
    };

    CategoryReport {
        name: category.name.clone(),
        display_name: category.display_name(),
        matched,
        missing,
        additional,
        score,
    }
}
