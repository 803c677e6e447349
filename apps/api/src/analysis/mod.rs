//! Resume / job-description matching engine.
//!
//! normalize → vectorize → ATS score; raw text → format score;
//! both texts → skill report; all three → suggestions.
//!
//! Every stage is a total function of its inputs and the active `AnalyzerProfile`,
//! so callers always get a renderable `AnalysisResult`. The ATS score is absent
//! exactly when there is no job description.

pub mod ats;
pub mod cache;
pub mod format;
pub mod handlers;
pub mod normalize;
pub mod profile;
pub mod skills;
pub mod suggestions;
pub mod vectorize;

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::analysis::ats::AtsScorer;
use crate::analysis::format::analyze_format;
use crate::analysis::profile::AnalyzerProfile;
use crate::analysis::skills::{extract_skills, SkillReport};
use crate::analysis::suggestions::suggest;
use crate::models::document::Document;

/// Outcome of one analysis call. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// `None` when there is no job description.
    pub ats_score: Option<u8>,
    pub format_score: u8,
    pub skill_report: SkillReport,
    pub suggestions: Vec<String>,
}

/// Runs the full pipeline with one immutable profile.
#[derive(Debug)]
pub struct ResumeAnalyzer {
    profile: AnalyzerProfile,
    stop_words: HashSet<String>,
}

impl ResumeAnalyzer {
    pub fn new(profile: AnalyzerProfile) -> Self {
        let stop_words = profile.stop_word_set();
        Self {
            profile,
            stop_words,
        }
    }

    pub fn profile(&self) -> &AnalyzerProfile {
        &self.profile
    }

    pub fn analyze(&self, resume: &Document, job: Option<&Document>) -> AnalysisResult {
        let job_text = job.filter(|j| !j.is_blank()).map(Document::text);

        let ats = AtsScorer::new(&self.stop_words).score(resume.text(), job_text);
        let ats_score = ats.score();
        let format_score = analyze_format(resume.text());
        let skill_report = extract_skills(&self.profile.skill_categories, resume.text(), job_text);
        let suggestions = suggest(
            ats_score,
            format_score,
            &skill_report,
            &self.profile.thresholds,
        );

        debug!(
            ?ats,
            format_score,
            matched = skill_report.matched_count,
            missing = skill_report.missing_count,
            "Resume analysis complete"
        );

        AnalysisResult {
            ats_score,
            format_score,
            skill_report,
            suggestions,
        }
    }
}
