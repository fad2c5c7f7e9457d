//! Axum route handlers for the Interview API.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::auth::CallerIdentity;
use crate::errors::AppError;
use crate::interview::analysis::{skill_improvement_analysis, SkillAnalysis};
use crate::interview::quiz::{generate_quiz, GenerateQuizRequest, GeneratedQuiz};
use crate::interview::results::{list_assessments, save_quiz_result, SaveQuizRequest};
use crate::interview::stats::{dashboard, Dashboard};
use crate::models::assessment::AssessmentRow;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SkillAnalysisResponse {
    pub analysis: Option<SkillAnalysis>,
}

/// POST /api/v1/interview/quiz
pub async fn handle_generate_quiz(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Json(request): Json<GenerateQuizRequest>,
) -> Result<Json<GeneratedQuiz>, AppError> {
    let quiz = generate_quiz(state.store.as_ref(), state.model.as_ref(), &caller, request).await?;
    Ok(Json(quiz))
}

/// POST /api/v1/interview/assessments
pub async fn handle_save_result(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Json(request): Json<SaveQuizRequest>,
) -> Result<(StatusCode, Json<AssessmentRow>), AppError> {
    let row = save_quiz_result(state.store.as_ref(), state.model.as_ref(), &caller, request).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/interview/assessments
pub async fn handle_list_assessments(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Json<Vec<AssessmentRow>>, AppError> {
    Ok(Json(list_assessments(state.store.as_ref(), &caller).await?))
}

/// GET /api/v1/interview/analysis
///
/// `{"analysis": null}` when there is nothing to analyze or the model call failed.
pub async fn handle_skill_analysis(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Json<SkillAnalysisResponse>, AppError> {
    let analysis =
        skill_improvement_analysis(state.store.as_ref(), state.model.as_ref(), &caller).await?;
    Ok(Json(SkillAnalysisResponse { analysis }))
}

/// GET /api/v1/interview/dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Json<Dashboard>, AppError> {
    Ok(Json(
        dashboard(state.store.as_ref(), state.model.as_ref(), &caller).await?,
    ))
}
