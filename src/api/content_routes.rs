//! REST API routes for static site content and health

use axum::{extract::State, response::Json, routing::get, Router};
use folio_types::{featured_projects, HealthResponse, ProjectSummary};

#[derive(Clone)]
struct ContentState {
    projects: Vec<ProjectSummary>,
    relay_configured: bool,
}

/// GET /api/projects
async fn list_projects(State(state): State<ContentState>) -> Json<Vec<ProjectSummary>> {
    Json(state.projects)
}

/// GET /health
async fn health(State(state): State<ContentState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        relay_configured: state.relay_configured,
    })
}

pub fn create_content_router(relay_configured: bool) -> Router {
    Router::new()
        .route("/api/projects", get(list_projects))
        .route("/health", get(health))
        .with_state(ContentState {
            projects: featured_projects(),
            relay_configured,
        })
}
