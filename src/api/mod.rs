mod handlers;
mod state;

pub use handlers::{ThemeResponse, THEME_COOKIE};
pub use state::AppState;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::assets;
use crate::config::ServerConfig;
use crate::models::{Portfolio, Theme};

/// Router with permissive CORS on the JSON API.
pub fn create_router(state: AppState) -> Router {
    router(state, CorsLayer::permissive())
}

/// Router built from server configuration: initial theme and CORS origins.
pub fn create_router_from_config(config: &ServerConfig, portfolio: Portfolio) -> Router {
    let state = AppState::new(portfolio, Theme::from_dark_mode(config.dark_mode));
    let cors = match &config.cors_origins {
        Some(origins) => cors_for_origins(origins),
        None => CorsLayer::permissive(),
    };
    router(state, cors)
}

fn cors_for_origins(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
}

fn router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/portfolio", get(handlers::get_portfolio))
        .route("/theme", get(handlers::get_theme))
        .route("/theme/toggle", post(handlers::toggle_theme))
        .route("/health", get(handlers::health))
        .layer(cors);

    Router::new()
        .route("/", get(handlers::page))
        .route("/theme/toggle", post(handlers::toggle_theme_form))
        .route(assets::STYLES_PATH, get(handlers::styles))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
