use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;
use wiremock::{
    matchers::{any, method, path},
    Mock, ResponseTemplate,
};

use crate::helpers::TestApp;

const HOME_ACTIVE: &str = r#"<a href="/" class="active" aria-current="page">HOME</a>"#;
const HOME_INACTIVE: &str = r#"<a href="/">HOME</a>"#;
const POSTINGS_ACTIVE: &str = r#"<a href="/postings" class="active" aria-current="page">POSTINGS</a>"#;
const POSTINGS_INACTIVE: &str = r#"<a href="/postings">POSTINGS</a>"#;

#[tokio::test]
async fn home_page_marks_home_active() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.get("/").await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await?;

    assert!(body.contains(HOME_ACTIVE));
    assert!(body.contains(POSTINGS_INACTIVE));

    Ok(())
}

#[tokio::test]
async fn postings_page_marks_postings_active() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.get("/postings").await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await?;

    assert!(body.contains(POSTINGS_ACTIVE));
    assert!(body.contains(HOME_INACTIVE));

    Ok(())
}

#[tokio::test]
async fn postings_page_lists_both_categories() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(method("GET"))
        .and(path("/postings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "InternPosts": [{ "Company": "Acme" }],
            "NewGradPosts": [{ "Company": "Initech" }],
        })))
        .expect(1)
        .mount(&app.api_server)
        .await;

    let body = app.get("/postings").await?.error_for_status()?.text().await?;

    let intern = body
        .split_once(r#"<section id="intern-postings">"#)
        .and_then(|(_, rest)| rest.split_once(r#"<section id="newgrad-postings">"#))
        .map(|(intern, _)| intern)
        .unwrap_or_default();
    assert!(intern.contains("Company: Acme"));
    assert!(!intern.contains("Initech"));
    assert!(body.contains("Company: Initech"));

    Ok(())
}

#[tokio::test]
async fn postings_page_reports_api_failure() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.api_server)
        .await;

    let res = app.get("/postings").await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await?;

    assert!(body.contains(r#"<p class="status status-error">Something went wrong. Try again later.</p>"#));
    assert!(body.contains(POSTINGS_ACTIVE));

    Ok(())
}
