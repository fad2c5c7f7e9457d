//! Result persistence and retrieval.
//!
//! Flow for a save: resolve caller → grade answers → score → (best-effort) improvement
//! tip → INSERT. The tip never blocks the write: any model failure leaves it absent.

use serde::Deserialize;
use tracing::{info, warn};

use crate::auth::CallerIdentity;
use crate::errors::AppError;
use crate::interview::prompts::IMPROVEMENT_TIP_PROMPT_TEMPLATE;
use crate::interview::quiz::{QuizQuestion, QuizType};
use crate::interview::scoring::{compute_score, format_wrong_answers, grade_answers, wrong_answers};
use crate::interview::store::{load_caller_profile, AssessmentStore};
use crate::llm_client::ModelClient;
use crate::models::assessment::{AssessmentRow, NewAssessment, QuestionResult};
use crate::models::user::UserProfile;

/// Client and server scores may differ by float formatting; anything beyond this is logged.
const SCORE_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, Deserialize)]
pub struct SaveQuizRequest {
    pub questions: Vec<QuizQuestion>,
    /// Parallel to `questions`; `null` for unanswered.
    #[serde(default)]
    pub answers: Vec<Option<String>>,
    /// Score computed by the client. Informational; the server recomputes it.
    pub score: Option<f64>,
    #[serde(alias = "quizType", alias = "type")]
    pub quiz_type: Option<QuizType>,
}

/// Grades a completed quiz and persists it as one assessment.
pub async fn save_quiz_result(
    store: &dyn AssessmentStore,
    model: &dyn ModelClient,
    caller: &CallerIdentity,
    request: SaveQuizRequest,
) -> Result<AssessmentRow, AppError> {
    let profile = load_caller_profile(store, caller).await?;

    if request.questions.is_empty() {
        return Err(AppError::Validation("questions cannot be empty".to_string()));
    }
    if request.answers.len() > request.questions.len() {
        return Err(AppError::Validation(format!(
            "received {} answers for {} questions",
            request.answers.len(),
            request.questions.len()
        )));
    }

    let results = grade_answers(&request.questions, &request.answers);
    let quiz_score = compute_score(&results);

    if let Some(client_score) = request.score {
        if (client_score - quiz_score).abs() > SCORE_TOLERANCE {
            warn!(
                "Client score {client_score:.2} differs from computed {quiz_score:.2} for user {}; storing computed",
                profile.id
            );
        }
    }

    let category = request.quiz_type.unwrap_or_default().label();
    let improvement_tip = improvement_tip(model, &profile, category, &results).await;

    let row = store
        .insert_assessment(NewAssessment {
            user_id: profile.id,
            quiz_score,
            questions: results,
            category: category.to_string(),
            improvement_tip,
        })
        .await?;

    info!(
        "Saved assessment {} for user {}: {:.1}% ({} questions)",
        row.id,
        profile.id,
        row.quiz_score,
        row.questions.len()
    );

    Ok(row)
}

/// Asks the model for a short coaching tip based on the wrong answers.
/// Returns `None` without calling the model when everything was correct,
/// and `None` when the model call fails.
async fn improvement_tip(
    model: &dyn ModelClient,
    profile: &UserProfile,
    category: &str,
    results: &[QuestionResult],
) -> Option<String> {
    let wrong = wrong_answers(results);
    if wrong.is_empty() {
        return None;
    }

    let prompt = IMPROVEMENT_TIP_PROMPT_TEMPLATE
        .replace("{industry}", profile.industry.as_deref().unwrap_or("general"))
        .replace("{category}", &category.to_lowercase())
        .replace("{wrong_answers}", &format_wrong_answers(&wrong));

    match model.generate_content(&prompt).await {
        Ok(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Ok(_) => {
            warn!("Improvement tip was empty; saving without it");
            None
        }
        Err(e) => {
            warn!("Error generating improvement tip: {e}");
            None
        }
    }
}

/// All of the caller's assessments, oldest first.
pub async fn list_assessments(
    store: &dyn AssessmentStore,
    caller: &CallerIdentity,
) -> Result<Vec<AssessmentRow>, AppError> {
    let profile = load_caller_profile(store, caller).await?;
    Ok(store.list_assessments(profile.id).await?)
}
