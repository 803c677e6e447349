//! Bounded memo of analysis results keyed by a SHA-256 digest of the input pair.
//!
//! Analysis is deterministic for a given profile, so identical resume / job pairs can
//! reuse a previous result. Only the 32-byte digest and the shared result are stored,
//! so memory stays bounded by `capacity` regardless of upload size. Eviction is FIFO.
//! A cache belongs to exactly one profile; see `state::Engine`.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::analysis::AnalysisResult;

type CacheKey = [u8; 32];

#[derive(Default)]
struct Entries {
    map: HashMap<CacheKey, Arc<AnalysisResult>>,
    order: VecDeque<CacheKey>,
}

pub struct AnalysisCache {
    capacity: usize,
    entries: Mutex<Entries>,
}

impl AnalysisCache {
    /// A capacity of 0 disables caching.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(Entries::default()),
        }
    }

    pub fn get(&self, resume: &str, job: Option<&str>) -> Option<Arc<AnalysisResult>> {
        if self.capacity == 0 {
            return None;
        }
        let key = make_key(resume, job);
        let hit = self.lock().map.get(&key).cloned();
        if hit.is_some() {
            debug!("Analysis cache hit");
        }
        hit
    }

    pub fn insert(&self, resume: &str, job: Option<&str>, result: Arc<AnalysisResult>) {
        if self.capacity == 0 {
            return;
        }
        let key = make_key(resume, job);
        let mut entries = self.lock();
        if entries.map.contains_key(&key) {
            return;
        }
        while entries.order.len() >= self.capacity {
            match entries.order.pop_front() {
                Some(oldest) => {
                    entries.map.remove(&oldest);
                }
                None => break,
            }
        }
        entries.order.push_back(key);
        entries.map.insert(key, result);
    }

    pub fn len(&self) -> usize {
        self.lock().map.len()
    }

    // A poisoned lock only means another request panicked mid-insert; the map is
    // still structurally valid.
    fn lock(&self) -> MutexGuard<'_, Entries> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Length-prefixes the resume and tags the job's presence so that distinct pairs
/// never feed the hasher the same byte stream.
fn make_key(resume: &str, job: Option<&str>) -> CacheKey {
    let mut hasher = Sha256::new();
    hasher.update((resume.len() as u64).to_le_bytes());
    hasher.update(resume.as_bytes());
    match job.filter(|j| !j.trim().is_empty()) {
        Some(job) => {
            hasher.update([1u8]);
            hasher.update(job.as_bytes());
        }
        None => hasher.update([0u8]),
    }
    hasher.finalize().into()
}
