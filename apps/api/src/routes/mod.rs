pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::matching::handlers as matching;
use crate::planning::handlers as planning;
use crate::profiling::handlers as profiling;
use crate::reference::handlers as reference;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Recommendation pipeline
        .route("/api/v1/analyze-skill", post(profiling::handle_analyze_skill))
        .route(
            "/api/v1/recommend-career",
            post(matching::handle_recommend_career),
        )
        .route(
            "/api/v1/next-learning-path",
            post(planning::handle_next_learning_path),
        )
        .route("/api/v1/guidance", post(planning::handle_guidance))
        // Unversioned aliases used by the quiz frontend
        .route("/analyze-skill", post(profiling::handle_analyze_skill))
        .route("/recommend-career", post(matching::handle_recommend_career))
        .route("/next-learning-path", post(planning::handle_next_learning_path))
        .route("/guidance", post(planning::handle_guidance))
        // Reference data
        .route("/api/v1/careers", get(reference::handle_list_careers))
        .route("/api/v1/taxonomy", get(reference::handle_get_taxonomy))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(AppState::new(crate::reference::bundled()))
    }

    async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn sample_vector() -> Value {
        json!({
            "algebra": 0.7, "geometry": 0.4, "arithmetic": 0.5, "physics": 0.6,
            "chemistry": 0.3, "biology": 0.2, "logic": 0.8
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_analyze_skill() {
        let payload = json!({
            "user_id": "u1",
            "topic_performance": [
                {"topic": "Linear Equations", "attempts": 10, "correct": 7, "avg_time_sec": 55},
                {"topic": "Triangles", "attempts": 8, "correct": 4, "avg_time_sec": 70}
            ]
        });
        let (status, body) = send(Method::POST, "/api/v1/analyze-skill", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);

        let vector = body["skill_vector"].as_object().unwrap();
        assert_eq!(vector.len(), 7);
        assert!(vector["algebra"].as_f64().unwrap() > vector["geometry"].as_f64().unwrap());
        assert_eq!(body["weak_dimensions"], json!(["arithmetic", "physics"]));
        assert_eq!(body["strengths"], json!(["algebra", "geometry"]));
        assert_eq!(body["explain"]["algebra"]["Linear Equations"], 1.0);
        assert_eq!(body["explain"]["biology"], json!({}));
    }

    #[tokio::test]
    async fn test_analyze_skill_rejects_correct_above_attempts() {
        let payload = json!({
            "user_id": "u1",
            "topic_performance": [
                {"topic": "Optics", "attempts": 2, "correct": 5, "avg_time_sec": 10}
            ]
        });
        let (status, body) = send(Method::POST, "/api/v1/analyze-skill", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_skill_rejects_negative_attempts() {
        let payload = json!({
            "user_id": "u1",
            "topic_performance": [
                {"topic": "Optics", "attempts": -1, "correct": 0, "avg_time_sec": 10}
            ]
        });
        let (status, body) = send(Method::POST, "/api/v1/analyze-skill", Some(payload)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_recommend_career() {
        let payload = json!({
            "user_id": "u1",
            "skill_vector": sample_vector(),
            "interests": ["Data"]
        });
        let (status, body) = send(Method::POST, "/api/v1/recommend-career", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);

        let recs = body["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0]["id"], "data_scientist");
        assert!(recs[0]["why"].is_object());
        assert!(recs[0]["suggested_courses"].is_array());
    }

    #[tokio::test]
    async fn test_recommend_career_honours_top_n() {
        let payload = json!({
            "user_id": "u1",
            "skill_vector": sample_vector(),
            "top_n": 5
        });
        let (status, body) = send(Method::POST, "/api/v1/recommend-career", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_next_learning_path_defaults() {
        let payload = json!({"user_id": "u1", "skill_vector": sample_vector()});
        let (status, body) = send(Method::POST, "/api/v1/next-learning-path", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);

        let steps = body["steps"].as_array().unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0]["dimension"], "biology");
        assert_eq!(steps[0]["target"], 0.75);
        assert_eq!(
            steps[0]["reason"],
            "Your biology is 0.20. Focus here to reach 0.75."
        );
    }

    #[tokio::test]
    async fn test_next_learning_path_rejects_bad_target() {
        let payload = json!({"user_id": "u1", "skill_vector": {}, "target": 3.0});
        let (status, _) = send(Method::POST, "/api/v1/next-learning-path", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_guidance_known_career() {
        let payload = json!({
            "user_id": "u1",
            "career_id": "data_scientist",
            "skill_vector": sample_vector()
        });
        let (status, body) = send(Method::POST, "/api/v1/guidance", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["roadmap"].as_array().unwrap().len(), 4);
        assert_eq!(body["tips"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_guidance_unknown_career_gets_baseline() {
        let payload = json!({"user_id": "u1", "career_id": "astronaut"});
        let (status, body) = send(Method::POST, "/api/v1/guidance", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["roadmap"].as_array().unwrap().len(), 3);
        // no skill vector → no weakness tip
        assert_eq!(body["tips"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_blank_topic_falls_back_to_logic() {
        let payload = json!({
            "user_id": "u1",
            "topic_performance": [
                {"topic": "", "attempts": 4, "correct": 4, "avg_time_sec": 0}
            ]
        });
        let (status, body) = send(Method::POST, "/api/v1/analyze-skill", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skill_vector"]["logic"], 1.0);
        assert_eq!(body["explain"]["logic"][""], 1.0);
    }

    #[tokio::test]
    async fn test_guidance_blank_career_gets_baseline() {
        let payload = json!({"user_id": "u1", "career_id": ""});
        let (status, body) = send(Method::POST, "/api/v1/guidance", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["roadmap"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_unversioned_aliases() {
        let payload = json!({
            "user_id": "u1",
            "topic_performance": [
                {"topic": "Triangles", "attempts": 8, "correct": 4, "avg_time_sec": 70}
            ]
        });
        let (status, body) = send(Method::POST, "/analyze-skill", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skill_vector"]["geometry"], 0.4904);

        let payload = json!({"user_id": "u1", "skill_vector": sample_vector(), "interests": ["Data"]});
        let (status, body) = send(Method::POST, "/recommend-career", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommendations"][0]["id"], "data_scientist");

        let payload = json!({"user_id": "u1", "skill_vector": sample_vector()});
        let (status, _) = send(Method::POST, "/next-learning-path", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);

        let payload = json!({"user_id": "u1", "career_id": "doctor"});
        let (status, body) = send(Method::POST, "/guidance", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["roadmap"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_reference_listings() {
        let (status, body) = send(Method::GET, "/api/v1/careers", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["careers"][0]["id"], "data_scientist");

        let (status, body) = send(Method::GET, "/api/v1/taxonomy", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fallback"], "logic");
        assert_eq!(body["topics"]["geometry"][0], "Triangles");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (status, body) = send(Method::GET, "/api/v1/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
