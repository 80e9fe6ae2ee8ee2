use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;

use super::AppState;
use crate::assets;
use crate::models::{Portfolio, Theme};
use crate::render::{render_page, PageOptions};

/// Cookie holding a visitor's chosen theme (`light` or `dark`).
pub const THEME_COOKIE: &str = "theme";

/// Body of the theme endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeResponse {
    pub dark_mode: bool,
}

impl From<Theme> for ThemeResponse {
    fn from(theme: Theme) -> Self {
        Self {
            dark_mode: theme.is_dark(),
        }
    }
}

// ============================================================
// Visitor theme
// ============================================================

/// Theme from the visitor's cookie, falling back to the server default.
fn visitor_theme(jar: &CookieJar, default: Theme) -> Theme {
    jar.get(THEME_COOKIE)
        .and_then(|cookie| Theme::parse(cookie.value()))
        .unwrap_or(default)
}

fn remember_theme(jar: CookieJar, theme: Theme) -> CookieJar {
    let cookie = Cookie::build((THEME_COOKIE, theme.as_str()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::days(365));
    jar.add(cookie)
}

/// Whether a request was sent from another site.
///
/// Prefers `Sec-Fetch-Site`; otherwise compares the `Origin` host with `Host`.
/// Requests carrying neither header (curl, old browsers) are let through.
fn is_cross_site(headers: &HeaderMap) -> bool {
    if let Some(site) = headers.get("sec-fetch-site").and_then(|v| v.to_str().ok()) {
        return site == "cross-site";
    }

    let Some(origin) = headers.get(header::ORIGIN).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let origin_host = origin.split_once("://").map(|(_, host)| host);
    let host = headers.get(header::HOST).and_then(|v| v.to_str().ok());
    origin_host.is_none() || origin_host != host
}

// ============================================================
// Page
// ============================================================

pub async fn page(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let theme = visitor_theme(&jar, state.default_theme);
    Html(render_page(&state.portfolio, &PageOptions::served(theme)))
}

/// Form target of the toggle button; sends the browser back to the page.
pub async fn toggle_theme_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), StatusCode> {
    if is_cross_site(&headers) {
        tracing::warn!("Rejected cross-site theme toggle");
        return Err(StatusCode::FORBIDDEN);
    }

    let theme = visitor_theme(&jar, state.default_theme).toggled();
    tracing::debug!("Theme toggled to {:?}", theme);
    Ok((remember_theme(jar, theme), Redirect::to("/")))
}

pub async fn styles() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        assets::STYLES,
    )
}

// ============================================================
// JSON API
// ============================================================

pub async fn get_portfolio(State(state): State<AppState>) -> Json<Portfolio> {
    Json(state.portfolio.as_ref().clone())
}

pub async fn get_theme(State(state): State<AppState>, jar: CookieJar) -> Json<ThemeResponse> {
    Json(visitor_theme(&jar, state.default_theme).into())
}

pub async fn toggle_theme(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ThemeResponse>), StatusCode> {
    if is_cross_site(&headers) {
        tracing::warn!("Rejected cross-site theme toggle");
        return Err(StatusCode::FORBIDDEN);
    }

    let theme = visitor_theme(&jar, state.default_theme).toggled();
    tracing::debug!("Theme toggled to {:?}", theme);
    Ok((remember_theme(jar, theme), Json(theme.into())))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
