//! Job postings served by the tracking API, split into internship and new grad lists.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api_client;

pub const POSTINGS_UNAVAILABLE: &str = "Something went wrong. Try again later.";

/// The JSON body of `GET {API}/postings`.
/// The shape of a single posting is owned by the tracking API, so postings are kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PostingsResponse {
    #[serde(rename = "InternPosts", default)]
    pub intern_posts: Vec<Value>,
    #[serde(rename = "NewGradPosts", default)]
    pub new_grad_posts: Vec<Value>,
}

/// One posting flattened into displayable `(field, text)` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostingView {
    pub fields: Vec<(String, String)>,
}

impl From<&Value> for PostingView {
    fn from(value: &Value) -> Self {
        let fields = match value {
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| (key.clone(), display_text(value)))
                .collect(),
            other => vec![("value".to_string(), display_text(other))],
        };
        PostingView { fields }
    }
}

/// What the postings page renders: both lists, or the status line when the API call failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostingsPage {
    pub intern: Vec<PostingView>,
    pub new_grad: Vec<PostingView>,
    pub status: String,
}

impl PostingsPage {
    pub fn from_outcome(outcome: api_client::Result<PostingsResponse>) -> Self {
        match outcome {
            Ok(resp) => PostingsPage {
                intern: resp.intern_posts.iter().map(PostingView::from).collect(),
                new_grad: resp.new_grad_posts.iter().map(PostingView::from).collect(),
                status: String::new(),
            },
            Err(er) => {
                tracing::warn!("{:<12} - fetching postings failed: {er}", "postings");
                PostingsPage {
                    status: POSTINGS_UNAVAILABLE.to_string(),
                    ..Default::default()
                }
            }
        }
    }
}

/// Strings are shown without their JSON quotes.
fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
