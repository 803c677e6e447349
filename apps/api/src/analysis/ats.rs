//! ATS compatibility score: weighted term overlap between a resume and a job description.
//!
//! Algorithm:
//! 1. No job description → `NoJobDescription`.
//! 2. Normalize both texts and build binary term vectors.
//! 3. Every job term weighs 2.0 if it is a bigram, 1.0 otherwise.
//!    base = matched_weight / total_weight × 100 (0 when total_weight is 0).
//! 4. coverage bonus = min(10, |terms in both| / |vocabulary| × 20).
//! 5. score = min(100, base + bonus), rounded.

use std::collections::HashSet;

use crate::analysis::normalize::normalize;
use crate::analysis::vectorize::{vectorize, TermVectors};

const BIGRAM_WEIGHT: f64 = 2.0;
const UNIGRAM_WEIGHT: f64 = 1.0;
const COVERAGE_SCALE: f64 = 20.0;
const COVERAGE_CAP: f64 = 10.0;

/// Result of ATS scoring. A score is produced whenever a job description is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtsOutcome {
    Scored(u8),
    NoJobDescription,
}

impl AtsOutcome {
    pub fn score(self) -> Option<u8> {
        match self {
            AtsOutcome::Scored(score) => Some(score),
            AtsOutcome::NoJobDescription => None,
        }
    }
}

pub struct AtsScorer<'a> {
    stop_words: &'a HashSet<String>,
}

impl<'a> AtsScorer<'a> {
    pub fn new(stop_words: &'a HashSet<String>) -> Self {
        Self { stop_words }
    }

    pub fn score(&self, resume_text: &str, job_text: Option<&str>) -> AtsOutcome {
        let job_text = match job_text {
            Some(text) if !text.trim().is_empty() => text,
            _ => return AtsOutcome::NoJobDescription,
        };

        let resume = normalize(resume_text);
        let job = normalize(job_text);

        let vectors = vectorize(&resume, &job, self.stop_words);
        AtsOutcome::Scored(weighted_overlap_score(&vectors))
    }
}

fn weighted_overlap_score(vectors: &TermVectors) -> u8 {
    let mut total_weight = 0.0_f64;
    let mut matched_weight = 0.0_f64;
    let mut shared_terms = 0_usize;

    for (term, in_resume, in_job) in vectors.iter() {
        if in_resume && in_job {
            shared_terms += 1;
        }
        if !in_job {
            continue;
        }
        let weight = if term.is_bigram() {
            BIGRAM_WEIGHT
        } else {
            UNIGRAM_WEIGHT
        };
        total_weight += weight;
        if in_resume {
            matched_weight += weight;
        }
    }

    let base = if total_weight > 0.0 {
        matched_weight / total_weight * 100.0
    } else {
        0.0
    };

    let coverage_bonus = if vectors.is_empty() {
        0.0
    } else {
        (shared_terms as f64 / vectors.vocabulary.len() as f64 * COVERAGE_SCALE).min(COVERAGE_CAP)
    };

    (base + coverage_bonus).min(100.0).round() as u8
}
