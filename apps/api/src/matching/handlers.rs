//! Axum route handlers for the Ranking API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::matching::ranking::{RankError, RankingRequest};
use crate::models::candidate::CandidateDocument;
use crate::models::catalog::SkillCatalog;
use crate::models::report::RankedReport;
use crate::resume_text::{candidate_name, extract_pdf_text, UploadedResume};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RankTextRequest {
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub candidates: Vec<CandidateDocument>,
    pub top_n: Option<usize>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/skills
///
/// Returns the normalized skills catalog the service scores against.
pub async fn handle_get_skills(State(state): State<AppState>) -> Json<SkillCatalog> {
    Json(state.catalog.as_ref().clone())
}

/// POST /api/v1/rankings
///
/// Ranks already-extracted resume texts against a job description.
pub async fn handle_rank_text(
    State(state): State<AppState>,
    Json(request): Json<RankTextRequest>,
) -> Result<Json<RankedReport>, AppError> {
    let request = RankingRequest {
        job_description: request.job_description.unwrap_or_default(),
        candidates: request.candidates,
        top_n: request.top_n.unwrap_or(state.config.default_top_n),
    };

    let report = state.engine.rank(request).await?;
    Ok(Json(report))
}

/// POST /api/v1/rankings/upload
///
/// Multipart form: `job_description` (text), optional `top_n`, and one or
/// more `resumes` PDF files. Candidate names come from the file names.
pub async fn handle_rank_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<RankedReport>, AppError> {
    let mut job_description = String::new();
    let mut top_n = None;
    let mut uploads = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(invalid_multipart)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("job_description") => {
                job_description = field.text().await.map_err(invalid_multipart)?;
            }
            Some("top_n") => {
                let raw = field.text().await.map_err(invalid_multipart)?;
                let parsed = raw.trim().parse::<usize>().map_err(|_| {
                    AppError::Validation(format!("top_n must be a positive integer, got '{raw}'"))
                })?;
                top_n = Some(parsed);
            }
            Some("resumes") => {
                let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
                let data = field.bytes().await.map_err(invalid_multipart)?;
                uploads.push(UploadedResume { file_name, data });
            }
            other => {
                tracing::debug!("Ignoring unexpected multipart field {other:?}");
            }
        }
    }

    // Reject before paying for PDF extraction.
    if job_description.trim().is_empty() {
        return Err(RankError::EmptyJobDescription.into());
    }

    let candidates = tokio::task::spawn_blocking(move || {
        uploads
            .iter()
            .map(|upload| {
                Ok(CandidateDocument {
                    name: candidate_name(&upload.file_name),
                    text: extract_pdf_text(upload)?,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))??;

    let request = RankingRequest {
        job_description,
        candidates,
        top_n: top_n.unwrap_or(state.config.default_top_n),
    };

    let report = state.engine.rank(request).await?;
    Ok(Json(report))
}

fn invalid_multipart(err: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Invalid multipart body: {err}"))
}
