use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Profile fields read from the `users` table.
/// Owned by the external user-management system; never written here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    pub id: Uuid,
    pub clerk_user_id: String,
    pub industry: Option<String>,
    pub skills: Vec<String>,
    /// Years of experience.
    pub experience: Option<i32>,
}
