pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/interview/quiz", post(handlers::handle_generate_quiz))
        .route(
            "/api/v1/interview/assessments",
            get(handlers::handle_list_assessments).post(handlers::handle_save_result),
        )
        .route(
            "/api/v1/interview/analysis",
            get(handlers::handle_skill_analysis),
        )
        .route(
            "/api/v1/interview/dashboard",
            get(handlers::handle_dashboard),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::test_support::{profile, test_config, InMemoryStore, ScriptedModel};

    fn app(store: InMemoryStore, model: ScriptedModel) -> Router {
        build_router(AppState {
            store: Arc::new(store),
            model: Arc::new(model),
            config: test_config(),
        })
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(InMemoryStore::default(), ScriptedModel::new(vec![]))
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_missing_identity_is_unauthorized() {
        let response = app(InMemoryStore::default(), ScriptedModel::new(vec![]))
            .oneshot(
                Request::get("/api/v1/interview/assessments")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let response = app(InMemoryStore::default(), ScriptedModel::new(vec![]))
            .oneshot(
                Request::get("/api/v1/interview/analysis")
                    .header("x-user-id", "user_missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_generate_quiz_endpoint() {
        let store = InMemoryStore::with_users(vec![profile("user_1", Some("Data"), &["SQL"], Some(6))]);
        let model = ScriptedModel::new(vec![Ok(json!({
            "type": "technical",
            "questions": [{
                "question": "Which clause filters groups?",
                "options": ["WHERE", "HAVING", "ORDER BY", "LIMIT"],
                "correctAnswer": "HAVING",
                "explanation": "HAVING filters after GROUP BY."
            }]
        })
        .to_string())]);

        let response = app(store, model)
            .oneshot(
                Request::post("/api/v1/interview/quiz")
                    .header("x-user-id", "user_1")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"type": "technical", "num_questions": 1, "time_limit_minutes": 5}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["difficulty"], "advanced");
        assert_eq!(body["time_limit_seconds"], 300);
        assert_eq!(body["questions"][0]["correctAnswer"], "HAVING");
    }

    #[tokio::test]
    async fn test_save_then_list_roundtrip() {
        let store = InMemoryStore::with_users(vec![profile("user_1", None, &[], None)]);
        let app = app(store, ScriptedModel::new(vec![]));

        let save = json!({
            "questions": [{
                "question": "2 + 2?",
                "options": ["3", "4", "5", "6"],
                "correctAnswer": "4",
                "explanation": "Arithmetic."
            }],
            "answers": ["4"],
            "score": 100.0,
            "quiz_type": "aptitude"
        });
        let response = app
            .clone()
            .oneshot(
                Request::post("/api/v1/interview/assessments")
                    .header("x-user-id", "user_1")
                    .header("content-type", "application/json")
                    .body(Body::from(save.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let saved = body_json(response).await;
        assert_eq!(saved["category"], "Aptitude");
        assert_eq!(saved["improvement_tip"], Value::Null);
        assert_eq!(saved["questions"][0]["isCorrect"], true);

        let response = app
            .oneshot(
                Request::get("/api/v1/interview/assessments")
                    .header("x-user-id", "user_1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_analysis_absent_is_null() {
        let store = InMemoryStore::with_users(vec![profile("user_1", None, &[], None)]);
        let response = app(store, ScriptedModel::new(vec![]))
            .oneshot(
                Request::get("/api/v1/interview/analysis")
                    .header("x-user-id", "user_1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "analysis": null }));
    }
}
