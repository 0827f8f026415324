use std::time::Duration;

use anyhow::Result;
use fake::{faker::internet::en::SafeEmail, Fake};
use serde_json::json;
use wiremock::{
    matchers::{any, body_json, header, method, path},
    Mock, ResponseTemplate,
};

use crate::helpers::TestApp;

const STATUS_SUCCESS: &str = r#"<p class="status status-success">Success! You&#x27;re all set.</p>"#;

fn status_error(message: &str) -> String {
    format!(r#"<p class="status status-error">{message}</p>"#)
}

#[tokio::test]
async fn signup_missing_email_makes_no_api_call() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.api_server)
        .await;

    let body = app.post_signup("", true, true).await?;

    assert!(body.contains(&status_error("Missing Email Address")));
    // The checkboxes survive a failed validation.
    assert!(body.contains(r#"name="intern" checked>"#));
    assert!(body.contains(r#"name="newgrad" checked>"#));

    Ok(())
}

#[tokio::test]
async fn signup_no_selections_makes_no_api_call() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.api_server)
        .await;

    let body = app.post_signup("a@b.com", false, false).await?;

    assert!(body.contains(&status_error("No Selections Made")));
    assert!(body.contains(r#"value="a@b.com""#));

    Ok(())
}

#[tokio::test]
async fn signup_posts_payload_and_resets_form() -> Result<()> {
    let app = TestApp::spawn().await?;
    let email: String = SafeEmail().fake();

    Mock::given(method("POST"))
        .and(path("/users"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "emailAddress": email,
            "listPreferences": ["intern"],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Success": true })))
        .expect(1)
        .mount(&app.api_server)
        .await;

    let body = app.post_signup(&email, true, false).await?;

    assert!(body.contains(STATUS_SUCCESS));
    assert!(body.contains(r#"value="""#));
    assert!(body.contains(r#"name="intern">"#));
    assert!(body.contains(r#"name="newgrad">"#));

    Ok(())
}

#[tokio::test]
async fn signup_both_preferences_keep_order() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(path("/users"))
        .and(body_json(json!({
            "emailAddress": "a@b.com",
            "listPreferences": ["intern", "newgrad"],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Success": true })))
        .expect(1)
        .mount(&app.api_server)
        .await;

    let body = app.post_signup("a@b.com", true, true).await?;

    assert!(body.contains(STATUS_SUCCESS));

    Ok(())
}

#[tokio::test]
async fn signup_server_non_success_is_reported() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Success": false })))
        .expect(1)
        .mount(&app.api_server)
        .await;

    let body = app.post_signup("a@b.com", false, true).await?;

    assert!(body.contains(&status_error("Server rejected request")));
    assert!(body.contains(r#"value="a@b.com""#));
    assert!(body.contains(r#"name="newgrad" checked>"#));

    Ok(())
}

#[tokio::test]
async fn signup_api_failure_keeps_input() -> Result<()> {
    let app = TestApp::spawn().await?;

    // The tracking API answers failed inserts with an empty 400.
    Mock::given(any())
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&app.api_server)
        .await;

    let body = app.post_signup("a@b.com", true, false).await?;

    assert!(body.contains(&status_error("Something went wrong. Try again later.")));
    assert!(body.contains(r#"value="a@b.com""#));
    assert!(body.contains(r#"name="intern" checked>"#));
    assert!(body.contains(r#"name="newgrad">"#));

    Ok(())
}

#[tokio::test]
async fn signup_api_timeout_fails() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "Success": true }))
                .set_delay(Duration::from_secs(180)),
        )
        .expect(1)
        .mount(&app.api_server)
        .await;

    let body = app.post_signup("a@b.com", true, false).await?;

    assert!(body.contains(&status_error("Something went wrong. Try again later.")));

    Ok(())
}
