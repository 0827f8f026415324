use anyhow::Context;
use axum::{extract::State, http::Uri, response::Html, Form};
use serde::Deserialize;

use crate::{signup::SignupForm, web::WebResult, AppState};

/// The fields of the posted signup form.
/// Browsers only send a checkbox when it is checked.
#[derive(Debug, Default, Deserialize)]
pub struct SignupFields {
    #[serde(default)]
    pub email: String,
    pub intern: Option<String>,
    pub newgrad: Option<String>,
}

impl From<SignupFields> for SignupForm {
    fn from(fields: SignupFields) -> Self {
        SignupForm::with_input(
            fields.email,
            [fields.intern.is_some(), fields.newgrad.is_some()],
        )
    }
}

pub async fn home_get(State(app_state): State<AppState>, uri: Uri) -> WebResult<Html<String>> {
    let body = app_state
        .templ_mgr
        .render_home(uri.path(), &SignupForm::new())
        .context("tera failed to render 'html/home.html' template")?;

    Ok(Html(body))
}

#[tracing::instrument(name = "home_post", skip_all, fields(email = %input.email))]
pub async fn home_post(
    State(app_state): State<AppState>,
    uri: Uri,
    Form(input): Form<SignupFields>,
) -> WebResult<Html<String>> {
    let mut form = SignupForm::from(input);
    form.submit(&app_state.api_client).await;

    let body = app_state
        .templ_mgr
        .render_home(uri.path(), &form)
        .context("tera failed to render 'html/home.html' template")?;

    Ok(Html(body))
}
