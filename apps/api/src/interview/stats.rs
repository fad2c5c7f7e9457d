//! Dashboard aggregates: summary stats and score trend over a user's assessments.

use serde::Serialize;

use crate::auth::CallerIdentity;
use crate::errors::AppError;
use crate::interview::analysis::{analyze_assessments, SkillAnalysis};
use crate::interview::store::{load_caller_profile, AssessmentStore};
use crate::llm_client::ModelClient;
use crate::models::assessment::AssessmentRow;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentStats {
    /// Mean score, one decimal. 0 when there are no assessments.
    pub average_score: f64,
    pub questions_practiced: usize,
    pub latest_score: Option<f64>,
    pub total_assessments: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformancePoint {
    /// e.g. "Mar 04"
    pub date: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub assessments: Vec<AssessmentRow>,
    pub stats: AssessmentStats,
    pub performance: Vec<PerformancePoint>,
    pub analysis: Option<SkillAnalysis>,
}

/// Expects `assessments` oldest first.
pub fn compute_stats(assessments: &[AssessmentRow]) -> AssessmentStats {
    let total_assessments = assessments.len();
    let average_score = if total_assessments == 0 {
        0.0
    } else {
        let sum: f64 = assessments.iter().map(|a| a.quiz_score).sum();
        (sum / total_assessments as f64 * 10.0).round() / 10.0
    };

    AssessmentStats {
        average_score,
        questions_practiced: assessments.iter().map(|a| a.questions.len()).sum(),
        latest_score: assessments.last().map(|a| a.quiz_score),
        total_assessments,
    }
}

pub fn performance_series(assessments: &[AssessmentRow]) -> Vec<PerformancePoint> {
    assessments
        .iter()
        .map(|a| PerformancePoint {
            date: a.created_at.format("%b %d").to_string(),
            score: a.quiz_score,
        })
        .collect()
}

/// Everything the interview page renders, in one call.
/// Assessment loading is a hard failure here; analysis stays best-effort.
pub async fn dashboard(
    store: &dyn AssessmentStore,
    model: &dyn ModelClient,
    caller: &CallerIdentity,
) -> Result<Dashboard, AppError> {
    let profile = load_caller_profile(store, caller).await?;
    let assessments = store.list_assessments(profile.id).await?;

    let stats = compute_stats(&assessments);
    let performance = performance_series(&assessments);
    let analysis = analyze_assessments(model, &assessments).await;

    Ok(Dashboard {
        assessments,
        stats,
        performance,
        analysis,
    })
}
