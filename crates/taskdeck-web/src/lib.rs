//! Taskdeck Web Server
//!
//! Axum-based REST API over the taskdeck core services.

pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use taskdeck_core::Store;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Projects
        .route("/projects", post(routes::projects::create_project))
        .route("/projects", get(routes::projects::list_projects))
        .route("/projects/{project_id}", get(routes::projects::get_project))
        // Tasks
        .route(
            "/projects/{project_id}/tasks",
            post(routes::tasks::create_task),
        )
        .route(
            "/projects/{project_id}/tasks",
            get(routes::tasks::list_tasks),
        )
        .route("/tasks/{task_id}", get(routes::tasks::get_task))
        .route("/tasks/{task_id}", patch(routes::tasks::update_task))
        .route("/tasks/{task_id}", delete(routes::tasks::delete_task))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(store: Arc<Store>, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(store);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("API server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
