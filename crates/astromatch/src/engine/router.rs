use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};

use super::{MatchContext, MatchEngine, Person, ScoreOptions};

/// Body for the match endpoint. Unknown sign strings are rejected during
/// deserialization, before the engine runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    pub a: Person,
    pub b: Person,
    #[serde(default)]
    pub context: MatchContext,
}

/// Router builder exposing the scoring endpoint.
pub fn match_router(engine: Arc<MatchEngine>) -> Router {
    Router::new()
        .route("/api/v1/match", post(match_handler))
        .with_state(engine)
}

pub(crate) async fn match_handler(
    State(engine): State<Arc<MatchEngine>>,
    axum::Json(request): axum::Json<MatchRequest>,
) -> Response {
    let options = ScoreOptions {
        context: request.context,
        ..ScoreOptions::from_rules(engine.rules())
    };

    match engine.score_with(&request.a, &request.b, &options) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => {
            let payload = serde_json::json!({ "error": error.to_string() });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}
