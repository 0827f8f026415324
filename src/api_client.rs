use std::future::Future;

use reqwest::Client;
use tracing::debug;

use crate::{
    postings::PostingsResponse,
    signup::{SignupRequest, SignupResponse},
};

/// Anything the signup form can hand its payload to.
pub trait SignupApi {
    fn post_user(
        &self,
        request: &SignupRequest,
    ) -> impl Future<Output = Result<SignupResponse>> + Send;
}

/// HTTP client for the job-posting tracking API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub http_client: Client,
    pub base_url: reqwest::Url,
}

impl ApiClient {
    pub fn new<S: AsRef<str>>(base_url: S, timeout: std::time::Duration) -> Result<Self> {
        let mut base_url = reqwest::Url::parse(base_url.as_ref())
            .map_err(|e| Error::UrlParsing(e.to_string()))?;
        // `Url::join` replaces the last segment unless the path ends with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(ApiClient {
            http_client,
            base_url,
        })
    }

    pub fn users_url(&self) -> Result<reqwest::Url> {
        self.endpoint("users")
    }

    pub fn postings_url(&self) -> Result<reqwest::Url> {
        self.endpoint("postings")
    }

    fn endpoint(&self, segment: &str) -> Result<reqwest::Url> {
        self.base_url
            .join(segment)
            .map_err(|e| Error::UrlParsing(e.to_string()))
    }

    /// Fetches the tracked postings. Unlike signups, a non-2xx answer is an error.
    pub async fn get_postings(&self) -> Result<PostingsResponse> {
        let url = self.postings_url()?;

        let out = self
            .http_client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<PostingsResponse>()
            .await?;
        Ok(out)
    }
}

impl SignupApi for ApiClient {
    /// Posts the signup payload and decodes the answer.
    /// The status code is not checked: the API answers failed inserts with an
    /// empty 400 body, which surfaces here as a decoding error.
    async fn post_user(&self, request: &SignupRequest) -> Result<SignupResponse> {
        let url = self.users_url()?;

        let resp = self.http_client.post(url).json(request).send().await?;
        debug!("{:<12} - status: {}", "post_user", resp.status());

        let out = resp.json::<SignupResponse>().await?;
        Ok(out)
    }
}

// ###################################
// ->   ERROR & RESULT
// ###################################
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse the api url: {0}")]
    UrlParsing(String),
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
