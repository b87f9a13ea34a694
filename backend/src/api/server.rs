//! HTTP server for the clinic website.
//!
//! # API Endpoints
//!
//! | Method | Path          | Description                                   |
//! |--------|---------------|-----------------------------------------------|
//! | GET    | `/`           | Home page with the hero section               |
//! | GET    | `/hero`       | Hero section fragment                         |
//! | GET    | `/api/hero`   | Resolved hero values as JSON                  |
//! | GET    | `/health`     | Health check                                  |
//! | GET    | `/images/*`   | Static images (when an assets dir is set)     |
//!
//! The first three accept hero overrides in the query string, e.g.
//! `/?title=Sports%20Injury%20Recovery&size=medium`. Link and image targets
//! from the query go through [`HeroOverrides::with_safe_links`]; rejected ones
//! fall back to the site defaults.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, Method},
    response::{Html, Json},
    routing::get,
    Router,
};
use physio_hero_core::HeroOverrides;
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use super::types::HeroResponse;
use crate::config::{ServerConfig, SiteContent};
use crate::error::ServerResult;
use crate::render::{render_hero, render_page};

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<SiteContent>,
}

impl AppState {
    pub fn new(content: SiteContent) -> Self {
        Self {
            content: Arc::new(content),
        }
    }
}

/// Build the router. Images are served from `assets_dir` when given.
pub fn create_app(state: AppState, assets_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let mut router = Router::new()
        .route("/", get(home))
        .route("/hero", get(hero_fragment))
        .route("/api/hero", get(hero_json))
        .route("/health", get(health));

    if let Some(dir) = assets_dir {
        router = router.nest_service("/images", ServeDir::new(dir));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server and run until Ctrl+C.
pub async fn start_server(config: ServerConfig) -> ServerResult<()> {
    config.validate()?;
    let content = SiteContent::load(config.content_path.as_deref())?;
    let app = create_app(AppState::new(content), config.assets_dir.as_deref());

    let addr = config.addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    if let Some(dir) = &config.assets_dir {
        tracing::info!(assets = %dir.display(), "serving /images");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "could not listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("received Ctrl+C, shutting down");
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "physio-site",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "page": "GET /",
            "hero": "GET /hero",
            "api": "GET /api/hero"
        }
    }))
}

/// Home page
async fn home(
    State(state): State<AppState>,
    Query(overrides): Query<HeroOverrides>,
) -> ServerResult<Html<String>> {
    let overrides = overrides.with_safe_links();
    tracing::debug!(overridden = !overrides.is_empty(), "rendering home page");
    Ok(Html(render_page(&state.content, &overrides)?))
}

/// Hero section only
async fn hero_fragment(
    State(state): State<AppState>,
    Query(overrides): Query<HeroOverrides>,
) -> ServerResult<Html<String>> {
    let hero = state.content.resolve_hero(&overrides.with_safe_links());
    Ok(Html(render_hero(&hero)?))
}

/// Resolved hero as JSON
async fn hero_json(
    State(state): State<AppState>,
    Query(overrides): Query<HeroOverrides>,
) -> Json<HeroResponse> {
    let overrides = overrides.with_safe_links();
    let hero = state.content.resolve_hero(&overrides);
    Json(HeroResponse::new(hero, !overrides.is_empty()))
}
