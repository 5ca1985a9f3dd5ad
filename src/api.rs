use axum::{
    body::Body,
    extract::{Extension, Query, State},
    http::{HeaderName, Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::ai::config::AiConfig;
use crate::ai::generate::generate_couplet;
use crate::error::GenerationError;
use crate::system_info::get_system_info;

#[derive(Debug, Deserialize)]
struct GenerateQuery {
    prompt: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
}

/// Shared, read-only state handed to every request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub ai: Option<AiConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(ai: Option<AiConfig>) -> Self {
        Self {
            ai,
            http: reqwest::Client::new(),
        }
    }
}

#[derive(Clone, Debug)]
struct RequestContext {
    request_id: String,
}

pub fn router(state: AppState) -> Router {
    let request_id_layer = middleware::from_fn(assign_request_id);
    Router::new()
        .route("/api/generate", get(generate))
        .route("/api/info", get(info))
        .with_state(Arc::new(state))
        .layer(request_id_layer)
}

async fn generate(
    State(state): State<Arc<AppState>>,
    Extension(request): Extension<RequestContext>,
    Query(query): Query<GenerateQuery>,
) -> Response {
    let prompt = query.prompt.as_deref();
    tracing::debug!(
        request_id = %request.request_id,
        prompt_chars = prompt.map(|p| p.chars().count()).unwrap_or(0),
        "Generating couplet"
    );

    let result = match &state.ai {
        Some(ai) => generate_couplet(&state.http, ai, prompt).await,
        None => Err(GenerationError::NotConfigured),
    };

    match result {
        Ok(couplet) => (StatusCode::OK, Json(couplet)).into_response(),
        Err(err) => {
            tracing::error!(
                request_id = %request.request_id,
                kind = err.kind().as_str(),
                error = %err,
                "Couplet generation failed"
            );
            match err {
                GenerationError::NotConfigured => not_configured_response(),
                _ => generation_failed_response(),
            }
        }
    }
}

async fn info() -> Response {
    (StatusCode::OK, Json(get_system_info())).into_response()
}

async fn assign_request_id(mut req: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    req.extensions_mut().insert(RequestContext {
        request_id: request_id.clone(),
    });
    let method = req.method().clone();
    let uri = req.uri().clone();
    let mut response = next.run(req).await;
    let status = response.status();
    let header_value = match request_id.parse() {
        Ok(value) => value,
        Err(_) => {
            return response;
        }
    };
    response
        .headers_mut()
        .insert(HeaderName::from_static("x-request-id"), header_value);
    tracing::debug!(
        request_id,
        method = %method,
        uri = %uri,
        status = %status,
        "API request completed"
    );
    response
}

fn generation_failed_response() -> Response {
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse {
            error: "generation_failed",
        }),
    )
        .into_response()
}

fn not_configured_response() -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorResponse {
            error: "not_configured",
        }),
    )
        .into_response()
}
