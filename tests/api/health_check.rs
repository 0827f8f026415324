use anyhow::Result;
use reqwest::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn health_check_ok() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.get("/health-check").await?;

    assert_eq!(res.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn responses_carry_a_request_id() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.get("/").await?;

    assert!(res.headers().get("x-request-id").is_some());

    Ok(())
}

#[tokio::test]
async fn unknown_path_not_found() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.get("/login").await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}
