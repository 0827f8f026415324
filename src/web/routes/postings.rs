use anyhow::Context;
use axum::{extract::State, http::Uri, response::Html};

use crate::{postings::PostingsPage, web::WebResult, AppState};

#[tracing::instrument(name = "postings", skip_all)]
pub async fn postings(State(app_state): State<AppState>, uri: Uri) -> WebResult<Html<String>> {
    let page = PostingsPage::from_outcome(app_state.api_client.get_postings().await);

    let body = app_state
        .templ_mgr
        .render_postings(uri.path(), &page)
        .context("tera failed to render 'html/postings.html' template")?;

    Ok(Html(body))
}
