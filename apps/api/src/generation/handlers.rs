//! Axum route handlers for the Analysis and Tailoring API.
//!
//! The analysis endpoints wrap total functions — they accept any string
//! input and never fail; empty input degrades to empty results. Only the
//! tailor endpoint validates, because it spends an LLM call.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::coverage::{
    compute_coverage_score, CoverageOptions, CoverageReport, CoverageWeights,
};
use crate::analysis::diff::{diff_lines, DiffOp};
use crate::analysis::keywords::extract_keywords;
use crate::analysis::reorder::smart_reorder;
use crate::analysis::sections::extract_skills_from_markdown;
use crate::errors::AppError;
use crate::generation::generator::{tailor_resume, TailorRequest, TailorResponse};
use crate::state::AppState;

/// Keyword list length when the caller does not specify one.
const DEFAULT_KEYWORD_LIMIT: usize = 20;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub text: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SkillsRequest {
    pub markdown: String,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub jd_text: String,
    pub resume_markdown: String,
    pub jd_limit: Option<usize>,
    pub resume_limit: Option<usize>,
    pub weights: Option<CoverageWeights>,
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub markdown: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ReorderResponse {
    pub markdown: String,
}

#[derive(Debug, Deserialize)]
pub struct DiffRequest {
    pub base: String,
    pub current: String,
}

#[derive(Debug, Serialize)]
pub struct DiffResponse {
    pub operations: Vec<DiffOp>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis/keywords
///
/// Ranked, deduplicated keyword list for any text blob.
pub async fn handle_extract_keywords(
    Json(request): Json<KeywordsRequest>,
) -> Json<KeywordsResponse> {
    let limit = request.limit.unwrap_or(DEFAULT_KEYWORD_LIMIT);
    Json(KeywordsResponse {
        keywords: extract_keywords(&request.text, limit),
    })
}

/// POST /api/v1/analysis/skills
///
/// Canonicalized skill phrases from a résumé's Skills section.
pub async fn handle_extract_skills(Json(request): Json<SkillsRequest>) -> Json<SkillsResponse> {
    Json(SkillsResponse {
        skills: extract_skills_from_markdown(&request.markdown),
    })
}

/// POST /api/v1/analysis/score
///
/// Weighted coverage score of a résumé against a job description.
pub async fn handle_coverage_score(Json(request): Json<ScoreRequest>) -> Json<CoverageReport> {
    let defaults = CoverageOptions::default();
    let opts = CoverageOptions {
        jd_limit: request.jd_limit.unwrap_or(defaults.jd_limit),
        resume_limit: request.resume_limit.unwrap_or(defaults.resume_limit),
        weights: request.weights.unwrap_or_default(),
    };
    Json(compute_coverage_score(
        &request.jd_text,
        &request.resume_markdown,
        &opts,
    ))
}

/// POST /api/v1/analysis/reorder
///
/// Reorders bullet blocks by relevance to the given keywords,
/// preserving all non-bullet structure.
pub async fn handle_reorder(Json(request): Json<ReorderRequest>) -> Json<ReorderResponse> {
    Json(ReorderResponse {
        markdown: smart_reorder(&request.markdown, &request.keywords),
    })
}

/// POST /api/v1/analysis/diff
///
/// Line-level edit script between two Markdown snapshots.
pub async fn handle_diff(Json(request): Json<DiffRequest>) -> Json<DiffResponse> {
    Json(DiffResponse {
        operations: diff_lines(&request.base, &request.current),
    })
}

/// POST /api/v1/resumes/tailor
///
/// Full pipeline: baseline score → LLM tailor → reorder → final score.
pub async fn handle_tailor(
    State(state): State<AppState>,
    Json(request): Json<TailorRequest>,
) -> Result<Json<TailorResponse>, AppError> {
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }
    if request.resume_markdown.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_markdown cannot be empty".to_string(),
        ));
    }

    let response = tailor_resume(state.llm.as_ref(), request).await?;

    Ok(Json(response))
}
