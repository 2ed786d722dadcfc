//! HTTP transport: the chat gateway, health and discovery endpoints, and a
//! JSON-RPC endpoint sharing the stdio dispatcher.

use std::convert::Infallible;

use axum::{
    body::Bytes,
    extract::{Json, State},
    http::StatusCode,
    response::{
        sse::{Event, Sse},
        IntoResponse, Response,
    },
    routing::{get, post},
    Router,
};
use futures::stream::{self, Stream};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::app_state::AppState;
use crate::gateway::GatewayError;
use crate::handlers;
use crate::prompts::PromptKind;
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use crate::resources::RESOURCES;
use crate::tools::ToolKind;

pub const SERVICE_NAME: &str = "Symbols MCP Server";

type ApiError = (StatusCode, Json<Value>);

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/config", get(config_handler))
        .route("/sse", get(sse_handler))
        .route("/message", post(message_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bind to the configured address and serve until Ctrl-C.
pub async fn serve(state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(&state.config.http_addr).await?;
    info!("HTTP transport listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutdown signal received");
        })
        .await
}

async fn root_handler() -> Json<Value> {
    Json(json!({
        "name": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "sse": "/sse"
        }
    }))
}

async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "server": SERVICE_NAME,
        "tools": ToolKind::ALL.len(),
        "resources": RESOURCES.len(),
        "prompts": PromptKind::ALL.len()
    }))
}

async fn chat_handler(State(state): State<AppState>, body: Bytes) -> Result<Json<Value>, ApiError> {
    match state.gateway.handle(&body).await {
        Ok(upstream) => Ok(Json(upstream)),
        Err(e) => {
            let status = match e {
                GatewayError::MissingMessages => StatusCode::BAD_REQUEST,
                GatewayError::MissingCredential | GatewayError::Upstream(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            Err((status, Json(json!({ "error": e.to_string() }))))
        }
    }
}

async fn config_handler(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    match &state.config.vector_search {
        Some(vs) => Ok(Json(json!(vs))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Supabase not configured" })),
        )),
    }
}

async fn sse_handler() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let endpoint = json!({
        "jsonrpc": "2.0",
        "method": "endpoint",
        "params": { "uri": "/message" }
    });
    let event = Event::default().event("endpoint").data(endpoint.to_string());
    Sse::new(stream::once(async move { Ok(event) }))
}

async fn message_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let req: JsonRpcRequest = match serde_json::from_slice(&body) {
        Ok(r) => r,
        Err(e) => {
            warn!("Parse error: {e}");
            return Json(JsonRpcResponse::error(None, JsonRpcError::parse_error())).into_response();
        }
    };

    if req.jsonrpc != "2.0" {
        return Json(JsonRpcResponse::error(req.id.clone(), JsonRpcError::invalid_request()))
            .into_response();
    }

    match handlers::dispatch(&req, &state).await {
        Some(resp) => Json(resp).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}
