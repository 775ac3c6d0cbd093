use crate::models::chat::{ChatMessage, ChatRequest, ChatResponse};
use crate::relay::ChatRelay;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
    Json,
    extract::State,
};
use tower_http::cors::{Any, CorsLayer};
use log::info;

#[derive(Clone)]
struct AppState {
    relay: Arc<ChatRelay>,
}

pub fn build_router(relay: Arc<ChatRelay>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(chat_handler))
        .route("/chat/history", get(history_handler))
        .layer(cors)
        .with_state(AppState { relay })
}

pub async fn start_http_server(
    addr: &str,
    relay: Arc<ChatRelay>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = addr.parse::<SocketAddr>()?;
    info!("Starting HTTP API server on: http://{}", addr);

    let app = build_router(relay);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

async fn chat_handler(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let response = state.relay.submit(&req.message).await;
    Json(ChatResponse { response })
}

async fn history_handler(State(state): State<AppState>) -> Json<Vec<ChatMessage>> {
    Json(state.relay.history().await)
}
