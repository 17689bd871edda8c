//! HTTP API server exposing one interactive session.
//!
//! `GET /session` only renders. Every `POST` is one user action and is the
//! only way to trigger transcript or generation requests. The session sits
//! behind a mutex so actions are handled one at a time.

use crate::cli::Output;
use crate::config::Settings;
use crate::controller::Controller;
use crate::error::NotesError;
use crate::session::SessionState;
use crate::view::View;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};

/// Shared application state.
struct AppState {
    controller: Controller,
    session: Mutex<SessionState>,
}

/// Run the HTTP API server.
pub async fn run_serve(
    host: Option<String>,
    port: Option<u16>,
    settings: Settings,
) -> anyhow::Result<()> {
    let controller = Controller::from_settings(&settings)?;

    let state = Arc::new(AppState {
        controller,
        session: Mutex::new(SessionState::new()),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/session", get(show))
        .route("/session/url", post(submit_url))
        .route("/session/notes", post(get_notes))
        .route("/session/questions/{index}", post(select_question))
        .route("/session/ask", post(ask))
        .route("/session/reset", post(reset))
        .layer(cors)
        .with_state(state);

    let host = host.unwrap_or(settings.server.host);
    let port = port.unwrap_or(settings.server.port);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("tubenotes API Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Health", "GET  /health");
    Output::kv("Session", "GET  /session");
    Output::kv("Set video", "POST /session/url");
    Output::kv("Get notes", "POST /session/notes");
    Output::kv("Answer", "POST /session/questions/:index");
    Output::kv("Ask", "POST /session/ask");
    Output::kv("Reset", "POST /session/reset");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}

// === Request Types ===

#[derive(Deserialize)]
struct UrlRequest {
    url: String,
}

#[derive(Deserialize)]
struct AskRequest {
    question: String,
}

/// Status code for a failed action.
fn status_for(err: &NotesError) -> StatusCode {
    if err.is_user_error() {
        StatusCode::BAD_REQUEST
    } else {
        match err {
            NotesError::TranscriptFetch(_) | NotesError::Generation(_) | NotesError::Http(_) => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Render the session after an action, with the status the action earned.
fn respond(result: crate::error::Result<()>, session: &SessionState) -> axum::response::Response {
    let status = match &result {
        Ok(()) => StatusCode::OK,
        Err(e) => status_for(e),
    };
    (status, Json(View::render(session))).into_response()
}

// === Handlers ===

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn show(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let session = state.session.lock().await;
    Json(View::render(&session))
}

async fn submit_url(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UrlRequest>,
) -> impl IntoResponse {
    let mut session = state.session.lock().await;
    let result = state.controller.submit_url(&mut session, &req.url);
    respond(result, &session)
}

async fn get_notes(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut session = state.session.lock().await;
    let result = state.controller.get_notes(&mut session).await;
    respond(result, &session)
}

async fn select_question(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> impl IntoResponse {
    let mut session = state.session.lock().await;
    let result = state.controller.select_question(&mut session, index).await;
    respond(result, &session)
}

async fn ask(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AskRequest>,
) -> impl IntoResponse {
    let mut session = state.session.lock().await;
    let result = state.controller.ask_question(&mut session, &req.question).await;
    respond(result, &session)
}

async fn reset(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut session = state.session.lock().await;
    *session = SessionState::new();
    Json(View::render(&session))
}
