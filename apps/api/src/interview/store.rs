//! Assessment store: the database seam for the interview actions.
//!
//! `AppState` holds an `Arc<dyn AssessmentStore>`; production uses `PgAssessmentStore`.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::auth::CallerIdentity;
use crate::errors::AppError;
use crate::models::assessment::{AssessmentRow, NewAssessment};
use crate::models::user::UserProfile;

#[async_trait]
pub trait AssessmentStore: Send + Sync {
    /// Looks up a user by the identity provider's user id.
    async fn find_user(&self, external_id: &str) -> Result<Option<UserProfile>, sqlx::Error>;

    /// Inserts one assessment and returns the stored row.
    async fn insert_assessment(&self, new: NewAssessment) -> Result<AssessmentRow, sqlx::Error>;

    /// All of a user's assessments, oldest first.
    async fn list_assessments(&self, user_id: Uuid) -> Result<Vec<AssessmentRow>, sqlx::Error>;
}

/// Resolves the caller to their stored profile. Missing user → `NotFound`.
pub async fn load_caller_profile(
    store: &dyn AssessmentStore,
    caller: &CallerIdentity,
) -> Result<UserProfile, AppError> {
    store
        .find_user(caller.as_str())
        .await?
        .ok_or_else(AppError::user_not_found)
}

#[derive(Clone)]
pub struct PgAssessmentStore {
    pool: PgPool,
}

impl PgAssessmentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssessmentStore for PgAssessmentStore {
    async fn find_user(&self, external_id: &str) -> Result<Option<UserProfile>, sqlx::Error> {
        sqlx::query_as::<_, UserProfile>(
            "SELECT id, clerk_user_id, industry, skills, experience FROM users WHERE clerk_user_id = $1",
        )
        .bind(external_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn insert_assessment(&self, new: NewAssessment) -> Result<AssessmentRow, sqlx::Error> {
        let row = sqlx::query_as::<_, AssessmentRow>(
            r#"
            INSERT INTO assessments
                (id, user_id, quiz_score, questions, category, improvement_tip)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.user_id)
        .bind(new.quiz_score)
        .bind(Json(&new.questions))
        .bind(&new.category)
        .bind(&new.improvement_tip)
        .fetch_one(&self.pool)
        .await?;

        info!(
            "Inserted assessment {} for user {} (score {:.1})",
            row.id, row.user_id, row.quiz_score
        );
        Ok(row)
    }

    async fn list_assessments(&self, user_id: Uuid) -> Result<Vec<AssessmentRow>, sqlx::Error> {
        sqlx::query_as::<_, AssessmentRow>(
            "SELECT * FROM assessments WHERE user_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }
}
