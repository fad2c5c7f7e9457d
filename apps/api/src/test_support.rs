//! In-memory fakes for the store and model seams. Compiled for tests only.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use sqlx::types::Json;
use uuid::Uuid;

use crate::config::Config;
use crate::interview::store::AssessmentStore;
use crate::llm_client::{LlmError, ModelClient};
use crate::models::assessment::{AssessmentRow, NewAssessment, QuestionResult};
use crate::models::user::UserProfile;

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://localhost/test".to_string(),
        groq_api_key: None,
        auth_user_header: "x-user-id".to_string(),
        port: 0,
        rust_log: "debug".to_string(),
    }
}

pub fn profile(
    external_id: &str,
    industry: Option<&str>,
    skills: &[&str],
    experience: Option<i32>,
) -> UserProfile {
    UserProfile {
        id: Uuid::new_v4(),
        clerk_user_id: external_id.to_string(),
        industry: industry.map(String::from),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        experience,
    }
}

/// An assessment row with one result per `(question, is_correct, explanation)`.
pub fn assessment(user_id: Uuid, questions: &[(&str, bool, &str)]) -> AssessmentRow {
    let results: Vec<QuestionResult> = questions
        .iter()
        .map(|(q, ok, explanation)| QuestionResult {
            question: q.to_string(),
            answer: "a".to_string(),
            user_answer: Some(if *ok { "a" } else { "b" }.to_string()),
            is_correct: *ok,
            explanation: explanation.to_string(),
        })
        .collect();
    let correct = results.iter().filter(|r| r.is_correct).count();
    let now = Utc::now();
    AssessmentRow {
        id: Uuid::new_v4(),
        user_id,
        quiz_score: if results.is_empty() {
            0.0
        } else {
            correct as f64 / results.len() as f64 * 100.0
        },
        questions: Json(results),
        category: "Technical".to_string(),
        improvement_tip: None,
        created_at: now,
        updated_at: now,
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    users: Vec<UserProfile>,
    assessments: Mutex<Vec<AssessmentRow>>,
    fail_writes: AtomicBool,
    fail_listing: AtomicBool,
}

impl InMemoryStore {
    pub fn with_users(users: Vec<UserProfile>) -> Self {
        Self {
            users,
            ..Default::default()
        }
    }

    pub fn user_id(&self, external_id: &str) -> Uuid {
        self.users
            .iter()
            .find(|u| u.clerk_user_id == external_id)
            .map(|u| u.id)
            .expect("unknown test user")
    }

    pub fn seed(&self, row: AssessmentRow) {
        self.assessments.lock().unwrap().push(row);
    }

    pub fn assessment_count(&self) -> usize {
        self.assessments.lock().unwrap().len()
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn fail_listing(&self) {
        self.fail_listing.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl AssessmentStore for InMemoryStore {
    async fn find_user(&self, external_id: &str) -> Result<Option<UserProfile>, sqlx::Error> {
        Ok(self
            .users
            .iter()
            .find(|u| u.clerk_user_id == external_id)
            .cloned())
    }

    async fn insert_assessment(&self, new: NewAssessment) -> Result<AssessmentRow, sqlx::Error> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        let mut rows = self.assessments.lock().unwrap();
        // Strictly increasing timestamps so ordering is observable.
        let created_at = Utc::now() + Duration::seconds(rows.len() as i64);
        let row = AssessmentRow {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            quiz_score: new.quiz_score,
            questions: Json(new.questions),
            category: new.category,
            improvement_tip: new.improvement_tip,
            created_at,
            updated_at: created_at,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn list_assessments(&self, user_id: Uuid) -> Result<Vec<AssessmentRow>, sqlx::Error> {
        if self.fail_listing.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        let mut rows: Vec<_> = self
            .assessments
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by_key(|r| (r.created_at, r.id));
        Ok(rows)
    }
}

/// Replays scripted responses in order and records every prompt it receives.
pub struct ScriptedModel {
    responses: Mutex<VecDeque<Result<String, LlmError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn new(responses: Vec<Result<String, LlmError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelClient for ScriptedModel {
    async fn generate_content(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(LlmError::Api {
                    status: 500,
                    message: "no scripted response left".to_string(),
                })
            })
    }
}
