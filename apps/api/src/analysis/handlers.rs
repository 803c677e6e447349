//! Axum route handlers for the Analysis API.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::profile::AnalyzerProfile;
use crate::analysis::{AnalysisResult, ResumeAnalyzer};
use crate::errors::AppError;
use crate::extraction::{extract_text, DocumentFormat};
use crate::models::document::Document;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    #[serde(default)]
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileReloadResponse {
    pub categories: usize,
    pub stop_words: usize,
    pub evicted_results: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Scores already-extracted resume text against an optional job description.
/// Empty resume text is valid input, as it is for an unreadable upload.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let resume = Document::resume(request.resume_text);
    let job = request.job_description.map(Document::job_description);
    Ok(Json(run_analysis(&state, resume, job).await?))
}

/// POST /api/v1/analyze/upload
///
/// Multipart form: `resume` file (PDF, DOCX or plain text), optional `job_description` text.
/// A resume whose text cannot be extracted is analyzed as empty text.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let mut resume: Option<Document> = None;
    let mut job: Option<Document> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("resume") => {
                let format = DocumentFormat::detect(field.content_type(), field.file_name())
                    .ok_or_else(|| {
                        AppError::UnprocessableEntity(
                            "Unsupported resume format: upload a PDF, DOCX or plain-text file"
                                .to_string(),
                        )
                    })?;
                let bytes = field.bytes().await?;
                let document = Document::resume(extract_text(format, bytes).await);
                debug!(
                    source = ?document.source(),
                    ?format,
                    chars = document.text().len(),
                    "Extracted uploaded document text"
                );
                resume = Some(document);
            }
            Some("job_description") => {
                job = Some(Document::job_description(field.text().await?));
            }
            _ => {}
        }
    }

    let resume =
        resume.ok_or_else(|| AppError::Validation("Missing 'resume' file part".to_string()))?;
    Ok(Json(run_analysis(&state, resume, job).await?))
}

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<AnalyzerProfile> {
    Json(state.engine().analyzer.profile().clone())
}

/// POST /api/v1/profile/reload
///
/// Re-reads `ANALYZER_PROFILE_PATH` and swaps the analyzer together with a fresh
/// cache. The old analyzer stays active if the file is missing or invalid.
pub async fn handle_reload_profile(
    State(state): State<AppState>,
) -> Result<Json<ProfileReloadResponse>, AppError> {
    let path = state.config.profile_path.clone().ok_or_else(|| {
        AppError::Validation("ANALYZER_PROFILE_PATH is not configured".to_string())
    })?;

    let profile = tokio::task::spawn_blocking(move || AnalyzerProfile::load(&path))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    let categories = profile.skill_categories.len();
    let stop_words = profile.stop_words.len();
    let retired = state.replace_analyzer(ResumeAnalyzer::new(profile));
    let response = ProfileReloadResponse {
        categories,
        stop_words,
        evicted_results: retired.cache.len(),
    };

    info!(
        "Analyzer profile reloaded: {} categories, {} stop words",
        response.categories, response.stop_words
    );
    Ok(Json(response))
}

/// Serves a memoized result or runs the analysis on the blocking pool.
///
/// The engine is captured once, so the result is computed and cached under the
/// same profile even if a reload lands mid-request.
async fn run_analysis(
    state: &AppState,
    resume: Document,
    job: Option<Document>,
) -> Result<AnalysisResult, AppError> {
    let engine = state.engine();
    if let Some(hit) = engine.cache.get(resume.text(), job.as_ref().map(Document::text)) {
        return Ok(AnalysisResult::clone(&hit));
    }

    let result = tokio::task::spawn_blocking(move || {
        let result = Arc::new(engine.analyzer.analyze(&resume, job.as_ref()));
        engine.cache.insert(
            resume.text(),
            job.as_ref().map(Document::text),
            Arc::clone(&result),
        );
        result
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))?;

    Ok(AnalysisResult::clone(&result))
}
