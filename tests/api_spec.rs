use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use portfolio::api::{create_router, create_router_from_config, AppState, ThemeResponse, THEME_COOKIE};
use portfolio::config::ServerConfig;
use portfolio::content;
use portfolio::models::*;

fn setup(theme: Theme) -> TestServer {
    let app = create_router(AppState::new(content::portfolio(), theme));
    TestServer::new(app).expect("Failed to create test server")
}

mod page {
    use super::*;

    #[tokio::test]
    async fn renders_dark_root_by_default() {
        let server = setup(Theme::default());

        let response = server.get("/").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains(r#"<html lang="pt-BR" class="dark">"#));
        assert!(html.contains("Matheus Barreto"));
    }

    #[tokio::test]
    async fn renders_light_root_without_dark_class() {
        let server = setup(Theme::Light);

        let html = server.get("/").await.text();

        assert!(html.contains(r#"<html lang="pt-BR">"#));
        assert!(!html.contains(r#"class="dark""#));
    }

    #[tokio::test]
    async fn shows_every_skill_as_badge() {
        let server = setup(Theme::Dark);

        let html = server.get("/").await.text();

        // Skills plus the single Java badge on the translatica card
        let expected = content::skills().len() + 1;
        assert_eq!(html.matches(r#"class="badge""#).count(), expected);
    }

    #[tokio::test]
    async fn serves_stylesheet() {
        let server = setup(Theme::Dark);

        let response = server.get("/assets/styles.css").await;

        response.assert_status_ok();
        assert_eq!(
            response.header("content-type").to_str().unwrap(),
            "text/css; charset=utf-8"
        );
        assert!(response.text().contains("html.dark"));
    }
}

mod theme_toggle {
    use super::*;

    #[tokio::test]
    async fn form_post_redirects_to_page() {
        let server = setup(Theme::Dark);

        let response = server.post("/theme/toggle").await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location").to_str().unwrap(), "/");
    }

    #[tokio::test]
    async fn form_post_stores_choice_in_cookie() {
        let server = setup(Theme::Dark);

        let response = server.post("/theme/toggle").await;

        assert_eq!(response.cookie(THEME_COOKIE).value(), "light");
    }

    #[tokio::test]
    async fn page_follows_visitor_cookie() {
        let server = setup(Theme::Dark);
        let cookie = server.post("/theme/toggle").await.cookie(THEME_COOKIE);

        let html = server.get("/").add_cookie(cookie).await.text();

        assert!(html.contains(r#"<html lang="pt-BR">"#));
        assert!(html.contains("#icon-moon"));
    }

    #[tokio::test]
    async fn one_visitor_toggle_leaves_others_on_default() {
        let server = setup(Theme::Dark);

        server.post("/theme/toggle").await;
        let other_visitor = server.get("/").await.text();

        assert!(other_visitor.contains(r#"<html lang="pt-BR" class="dark">"#));
    }

    #[tokio::test]
    async fn toggling_twice_restores_root_class() {
        let server = setup(Theme::Dark);
        let before = server.get("/").await.text();

        let first = server.post("/theme/toggle").await.cookie(THEME_COOKIE);
        let second = server
            .post("/theme/toggle")
            .add_cookie(first)
            .await
            .cookie(THEME_COOKIE);
        assert_eq!(second.value(), "dark");
        let after = server.get("/").add_cookie(second).await.text();

        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn foreign_origin_post_is_rejected() {
        let server = setup(Theme::Dark);

        let response = server
            .post("/theme/toggle")
            .add_header(header::ORIGIN, HeaderValue::from_static("https://evil.example"))
            .await;

        response.assert_status(StatusCode::FORBIDDEN);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn cross_site_fetch_metadata_is_rejected() {
        let server = setup(Theme::Dark);

        let response = server
            .post("/theme/toggle")
            .add_header(
                HeaderName::from_static("sec-fetch-site"),
                HeaderValue::from_static("cross-site"),
            )
            .await;

        response.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn same_origin_fetch_metadata_is_accepted() {
        let server = setup(Theme::Dark);

        let response = server
            .post("/theme/toggle")
            .add_header(
                HeaderName::from_static("sec-fetch-site"),
                HeaderValue::from_static("same-origin"),
            )
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
    }
}

mod json_api {
    use super::*;

    #[tokio::test]
    async fn health_returns_ok() {
        let server = setup(Theme::Dark);

        let response = server.get("/api/v1/health").await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn theme_reports_default_flag() {
        let server = setup(Theme::Light);

        let theme: ThemeResponse = server.get("/api/v1/theme").await.json();

        assert!(!theme.dark_mode);
    }

    #[tokio::test]
    async fn toggle_returns_new_flag_and_sets_cookie() {
        let server = setup(Theme::Dark);

        let response = server.post("/api/v1/theme/toggle").await;
        let toggled: ThemeResponse = response.json();
        assert!(!toggled.dark_mode);

        let cookie = response.cookie(THEME_COOKIE);
        let current: ThemeResponse = server.get("/api/v1/theme").add_cookie(cookie).await.json();
        assert_eq!(current, toggled);

        let fresh: ThemeResponse = server.get("/api/v1/theme").await.json();
        assert!(fresh.dark_mode);
    }

    #[tokio::test]
    async fn cross_site_toggle_is_rejected() {
        let server = setup(Theme::Dark);

        let response = server
            .post("/api/v1/theme/toggle")
            .add_header(header::ORIGIN, HeaderValue::from_static("https://evil.example"))
            .await;

        response.assert_status(StatusCode::FORBIDDEN);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn portfolio_returns_static_content() {
        let server = setup(Theme::Dark);

        let response = server.get("/api/v1/portfolio").await;

        response.assert_status_ok();
        let portfolio: Portfolio = response.json();
        assert_eq!(portfolio, content::portfolio());
        assert_eq!(portfolio.projects[0].technologies, vec!["Java"]);
    }

    #[tokio::test]
    async fn article_dates_serialize_as_calendar_days() {
        let server = setup(Theme::Dark);

        let json: serde_json::Value = server.get("/api/v1/portfolio").await.json();

        assert_eq!(json["articles"][0]["date"], "2023-05-15");
        assert_eq!(json["profile"]["links"][0]["icon"], "github");
    }
}

mod cors {
    use super::*;

    fn setup_with_origins() -> TestServer {
        let config = ServerConfig {
            cors_origins: Some(vec!["https://ok.dev".to_string()]),
            ..ServerConfig::default()
        };
        let app = create_router_from_config(&config, content::portfolio());
        TestServer::new(app).expect("Failed to create test server")
    }

    #[tokio::test]
    async fn allows_configured_origin() {
        let server = setup_with_origins();

        let response = server
            .get("/api/v1/health")
            .add_header(header::ORIGIN, HeaderValue::from_static("https://ok.dev"))
            .await;

        response.assert_status_ok();
        let allowed = response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .expect("missing allow-origin header");
        assert_eq!(allowed, "https://ok.dev");
    }

    #[tokio::test]
    async fn omits_header_for_other_origins() {
        let server = setup_with_origins();

        let response = server
            .get("/api/v1/health")
            .add_header(header::ORIGIN, HeaderValue::from_static("https://other.dev"))
            .await;

        response.assert_status_ok();
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
