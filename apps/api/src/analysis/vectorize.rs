//! Binary term vectors over a resume / job-description pair.
//!
//! Terms are unigrams and adjacent-token bigrams taken after stop-word removal.
//! The vocabulary is the union of both documents' terms and is rebuilt on every
//! call; presence is a set-membership flag, counts are not kept.

use std::collections::{BTreeSet, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TermKind {
    Unigram,
    Bigram,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term {
    pub text: String,
    pub kind: TermKind,
}

impl Term {
    fn unigram(token: &str) -> Self {
        Self {
            text: token.to_string(),
            kind: TermKind::Unigram,
        }
    }

    fn bigram(first: &str, second: &str) -> Self {
        Self {
            text: format!("{first} {second}"),
            kind: TermKind::Bigram,
        }
    }

    pub fn is_bigram(&self) -> bool {
        self.kind == TermKind::Bigram
    }
}

/// Shared vocabulary plus one presence vector per document.
///
/// `resume[i]` and `job[i]` refer to `vocabulary[i]`; all three have equal length.
#[derive(Debug, Clone)]
pub struct TermVectors {
    pub vocabulary: Vec<Term>,
    pub resume: Vec<bool>,
    pub job: Vec<bool>,
}

impl TermVectors {
    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    /// Iterates `(term, in_resume, in_job)` triples in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Term, bool, bool)> + '_ {
        self.vocabulary
            .iter()
            .zip(self.resume.iter().zip(self.job.iter()))
            .map(|(term, (&r, &j))| (term, r, j))
    }
}

/// Builds term vectors for two already-normalized texts.
pub fn vectorize(resume: &str, job: &str, stop_words: &HashSet<String>) -> TermVectors {
    let resume_terms = extract_terms(resume, stop_words);
    let job_terms = extract_terms(job, stop_words);

    let vocabulary: Vec<Term> = resume_terms.union(&job_terms).cloned().collect();
    let resume = vocabulary.iter().map(|t| resume_terms.contains(t)).collect();
    let job = vocabulary.iter().map(|t| job_terms.contains(t)).collect();

    TermVectors {
        vocabulary,
        resume,
        job,
    }
}

fn extract_terms(text: &str, stop_words: &HashSet<String>) -> BTreeSet<Term> {
    let tokens: Vec<&str> = text
        .split_whitespace()
        .filter(|token| !stop_words.contains(*token))
        .collect();

    let mut terms: BTreeSet<Term> = tokens.iter().map(|t| Term::unigram(t)).collect();
    terms.extend(tokens.windows(2).map(|pair| Term::bigram(pair[0], pair[1])));
    terms
}
