//! Skill analysis: summarizes all past assessments into strengths and focus areas.
//!
//! Best-effort: only caller resolution can fail hard. Load, model and parse failures
//! are logged and reported as "no analysis".

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::CallerIdentity;
use crate::errors::AppError;
use crate::interview::prompts::SKILL_ANALYSIS_PROMPT_TEMPLATE;
use crate::interview::store::{load_caller_profile, AssessmentStore};
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{generate_json, ModelClient};
use crate::models::assessment::AssessmentRow;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillAnalysis {
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weak_areas: Vec<String>,
    #[serde(default)]
    pub topics_to_improve: Vec<String>,
    #[serde(default)]
    pub recommended_focus_areas: Vec<String>,
}

impl SkillAnalysis {
    pub fn has_insights(&self) -> bool {
        !(self.strengths.is_empty()
            && self.weak_areas.is_empty()
            && self.topics_to_improve.is_empty()
            && self.recommended_focus_areas.is_empty())
    }
}

pub async fn skill_improvement_analysis(
    store: &dyn AssessmentStore,
    model: &dyn ModelClient,
    caller: &CallerIdentity,
) -> Result<Option<SkillAnalysis>, AppError> {
    let profile = load_caller_profile(store, caller).await?;

    let assessments = match store.list_assessments(profile.id).await {
        Ok(rows) => rows,
        Err(e) => {
            warn!("Error loading assessments for skill analysis: {e}");
            return Ok(None);
        }
    };

    Ok(analyze_assessments(model, &assessments).await)
}

/// Runs the analysis over already-loaded assessments. No assessments → no model call.
pub async fn analyze_assessments(
    model: &dyn ModelClient,
    assessments: &[AssessmentRow],
) -> Option<SkillAnalysis> {
    if assessments.is_empty() {
        return None;
    }

    let prompt = format!(
        "{}\n{}",
        SKILL_ANALYSIS_PROMPT_TEMPLATE
            .replace("{question_summaries}", &summarize_questions(assessments)),
        JSON_ONLY_INSTRUCTION
    );

    match generate_json::<SkillAnalysis>(model, &prompt).await {
        Ok(analysis) if !analysis.has_insights() => {
            warn!("Skill analysis came back without any insights");
            None
        }
        Ok(analysis) => {
            info!(
                "Skill analysis over {} assessments: {} strengths, {} weak areas",
                assessments.len(),
                analysis.strengths.len(),
                analysis.weak_areas.len()
            );
            Some(analysis)
        }
        Err(e) => {
            warn!("Error generating skill improvement analysis: {e}");
            None
        }
    }
}

/// Flattens every question of every assessment into one text block, 1-based numbering.
pub fn summarize_questions(assessments: &[AssessmentRow]) -> String {
    assessments
        .iter()
        .enumerate()
        .flat_map(|(a, assessment)| {
            assessment.questions.iter().enumerate().map(move |(q, result)| {
                format!(
                    "Assessment {}, Question {}:\nQuestion: \"{}\"\nResult: {}\nExplanation: \"{}\"",
                    a + 1,
                    q + 1,
                    result.question,
                    if result.is_correct { "correct" } else { "incorrect" },
                    result.explanation
                )
            })
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
