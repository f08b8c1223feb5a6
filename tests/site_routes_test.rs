//! Router-level tests for the page routes with ratings disabled.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt; // for `oneshot`

use coursesite::api::router;
use coursesite::data::builtin_site;
use coursesite::rating::NoopRatingService;
use coursesite::services::Catalog;
use coursesite::state::AppState;

fn app() -> axum::Router {
    let state = AppState::new(
        builtin_site(),
        Catalog::builtin().expect("builtin catalog is valid"),
        Arc::new(NoopRatingService),
    );
    router(state, std::env::temp_dir())
}

async fn get(uri: &str) -> (StatusCode, String) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn health_is_ok() {
    let (status, _) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn home_page_renders_featured_and_seo() {
    let (status, html) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Mobile Photography Masterclass"));
    assert!(html.contains("application/ld+json"));
    assert!(html.contains("og:title"));
}

#[tokio::test]
async fn catalog_filters_by_category() {
    let (status, html) = get("/course/?category=Health").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Health Foundations"));
    assert!(html.contains("Nutrition Basics"));
    assert!(!html.contains("Network Mastery"));
}

#[tokio::test]
async fn catalog_search_is_case_insensitive() {
    let (_, html) = get("/course/?search=JAVASCRIPT").await;
    assert!(html.contains("JavaScript Essentials"));
    assert!(html.contains("1 course matching"));
}

#[tokio::test]
async fn details_page_for_known_course() {
    let (status, html) = get("/course/course-details/?id=4").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Network Mastery - Advanced IT Skills"));
    assert!(html.contains("href=\"/course/paid/4\""));
    // Ratings are disabled, so the card explains why instead of offering stars.
    assert!(html.contains("Rating system not available"));
    assert!(html.contains("Loading ratings..."));
}

#[tokio::test]
async fn directory_style_details_url_is_served() {
    let (status, html) = get("/course/course-details/4/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Network Mastery - Advanced IT Skills"));

    let (status, html) = get("/course/course-details/99/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Course Not Found"));
}

#[tokio::test]
async fn invalid_course_ids_return_not_found_page() {
    for uri in [
        "/course/course-details/",
        "/course/course-details/?id=",
        "/course/course-details/?id=0",
        "/course/course-details/?id=-1",
        "/course/course-details/?id=abc",
        "/course/course-details/?id=1.5",
        "/course/course-details/?id=42",
    ] {
        let (status, html) = get(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert!(html.contains("Course Not Found"), "{}", uri);
        assert!(html.contains("Browse Courses"), "{}", uri);
    }
}

#[tokio::test]
async fn legal_and_about_pages_render() {
    for uri in ["/about.html", "/legal/privacy.html", "/legal/terms.html"] {
        let (status, html) = get(uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert!(html.contains("All rights reserved."), "{}", uri);
        assert!(html.contains("BreadcrumbList"), "{}", uri);
    }
}

#[tokio::test]
async fn paid_access_path_is_not_served() {
    let (status, _) = get("/course/paid/3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rating_api_reports_unavailable_without_service() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/ratings/3")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"rating":4}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn rating_api_rejects_unknown_course() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/ratings/99")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"rating":4}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
