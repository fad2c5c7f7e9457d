//! Quiz generation: builds a profile-aware prompt and parses the model's question list.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::CallerIdentity;
use crate::errors::AppError;
use crate::interview::prompts::QUIZ_PROMPT_TEMPLATE;
use crate::interview::store::{load_caller_profile, AssessmentStore};
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{generate_json, ModelClient};
use crate::models::user::UserProfile;

pub const DEFAULT_NUM_QUESTIONS: u32 = 10;
pub const MAX_NUM_QUESTIONS: u32 = 50;
pub const MAX_TIME_LIMIT_MINUTES: u32 = 60;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizType {
    #[default]
    Technical,
    Aptitude,
    Verbal,
    Analytical,
    Behavioral,
}

impl QuizType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizType::Technical => "technical",
            QuizType::Aptitude => "aptitude",
            QuizType::Verbal => "verbal",
            QuizType::Analytical => "analytical",
            QuizType::Behavioral => "behavioral",
        }
    }

    /// Category label stored on the assessment row.
    pub fn label(&self) -> &'static str {
        match self {
            QuizType::Technical => "Technical",
            QuizType::Aptitude => "Aptitude",
            QuizType::Verbal => "Verbal",
            QuizType::Analytical => "Analytical",
            QuizType::Behavioral => "Behavioral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// ≤1 year → beginner, ≥5 years → advanced, anything else (or unknown) → intermediate.
    pub fn from_experience(years: Option<i32>) -> Self {
        match years {
            Some(y) if y <= 1 => Difficulty::Beginner,
            Some(y) if y >= 5 => Difficulty::Advanced,
            _ => Difficulty::Intermediate,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// A single multiple-choice question as produced by the model. Never persisted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
}

/// Shape the model is asked to return. `type` is echoed back by the model and ignored.
#[derive(Debug, Deserialize)]
struct QuizPayload {
    questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateQuizRequest {
    #[serde(default, alias = "type")]
    pub quiz_type: QuizType,
    #[serde(alias = "numQuestions")]
    pub num_questions: Option<u32>,
    #[serde(alias = "timeLimit")]
    pub time_limit_minutes: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedQuiz {
    pub quiz_type: QuizType,
    pub difficulty: Difficulty,
    /// Countdown for the client; the quiz is auto-submitted when it reaches zero.
    pub time_limit_seconds: Option<u32>,
    pub questions: Vec<QuizQuestion>,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Generates a quiz tailored to the caller's stored profile.
///
/// Any model failure (transport, empty, non-JSON, wrong shape) is reported as a single
/// generic LLM error. There is no retry.
pub async fn generate_quiz(
    store: &dyn AssessmentStore,
    model: &dyn ModelClient,
    caller: &CallerIdentity,
    request: GenerateQuizRequest,
) -> Result<GeneratedQuiz, AppError> {
    let profile = load_caller_profile(store, caller).await?;

    let num_questions = request.num_questions.unwrap_or(DEFAULT_NUM_QUESTIONS);
    if num_questions == 0 || num_questions > MAX_NUM_QUESTIONS {
        return Err(AppError::Validation(format!(
            "num_questions must be between 1 and {MAX_NUM_QUESTIONS}"
        )));
    }
    let time_limit_seconds = match request.time_limit_minutes {
        Some(m) if m == 0 || m > MAX_TIME_LIMIT_MINUTES => {
            return Err(AppError::Validation(format!(
                "time_limit_minutes must be between 1 and {MAX_TIME_LIMIT_MINUTES}"
            )));
        }
        Some(m) => Some(m * 60),
        None => None,
    };

    let difficulty = Difficulty::from_experience(profile.experience);
    let prompt = build_quiz_prompt(&profile, request.quiz_type, num_questions, difficulty);

    info!(
        "Generating {} {} questions ({}) for user {}",
        num_questions,
        request.quiz_type.as_str(),
        difficulty.as_str(),
        profile.id
    );

    let payload: QuizPayload = generate_json(model, &prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Failed to generate quiz questions: {e}")))?;

    if payload.questions.is_empty() {
        return Err(AppError::Llm(
            "Failed to generate quiz questions: model returned no questions".to_string(),
        ));
    }
    if payload.questions.len() != num_questions as usize {
        warn!(
            "Requested {} questions, model returned {}",
            num_questions,
            payload.questions.len()
        );
    }
    for (i, q) in payload.questions.iter().enumerate() {
        if q.options.len() != 4 || !q.options.contains(&q.correct_answer) {
            warn!(
                "Question {} has {} options; correct answer listed: {}",
                i + 1,
                q.options.len(),
                q.options.contains(&q.correct_answer)
            );
        }
    }

    Ok(GeneratedQuiz {
        quiz_type: request.quiz_type,
        difficulty,
        time_limit_seconds,
        questions: payload.questions,
    })
}

pub fn build_quiz_prompt(
    profile: &UserProfile,
    quiz_type: QuizType,
    num_questions: u32,
    difficulty: Difficulty,
) -> String {
    let expertise = if profile.skills.is_empty() {
        String::new()
    } else {
        format!(" with expertise in {}", profile.skills.join(", "))
    };

    let mut prompt = QUIZ_PROMPT_TEMPLATE
        .replace("{num_questions}", &num_questions.to_string())
        .replace("{quiz_type}", quiz_type.as_str())
        .replace("{industry}", profile.industry.as_deref().unwrap_or("general"))
        .replace("{expertise}", &expertise)
        .replace("{difficulty}", difficulty.as_str());
    prompt.push_str(JSON_ONLY_INSTRUCTION);
    prompt
}
