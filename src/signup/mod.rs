//! The signup form: an email address, two preference checkboxes and the status line.
//!
//! A submission runs in two halves so that an event loop can render the
//! intermediate "Loading..." state: `begin_submit` validates and produces the
//! payload, `complete` applies whatever the tracking API answered.
//! `submit` runs both halves around a single API call.

mod types;

pub use types::{Preference, SignupRequest, SignupResponse};

use serde::Serialize;
use strum_macros::AsRefStr;
use tracing::{debug, info, warn};

use crate::api_client::{self, SignupApi};

// ###################################
// ->   STATUS
// ###################################
/// The user-facing outcome of the most recent submission attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, AsRefStr)]
pub enum Status {
    #[default]
    #[strum(serialize = "")]
    Idle,
    #[strum(serialize = "Missing Email Address")]
    MissingEmail,
    #[strum(serialize = "No Selections Made")]
    NoSelections,
    #[strum(serialize = "Loading...")]
    Loading,
    #[strum(serialize = "Success! You're all set.")]
    Success,
    #[strum(serialize = "Server rejected request")]
    Rejected,
    #[strum(serialize = "Something went wrong. Try again later.")]
    Failed,
}

impl Status {
    pub fn is_success(&self) -> bool {
        matches!(self, Status::Success)
    }
}

impl Serialize for Status {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_ref())
    }
}

// ###################################
// ->   FORM
// ###################################
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignupForm {
    email: String,
    checked: [bool; 2],
    status: Status,
    #[serde(skip)]
    in_flight: bool,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a form from already collected input, e.g. a posted HTML form.
    pub fn with_input(email: impl Into<String>, checked: [bool; 2]) -> Self {
        Self {
            email: email.into(),
            checked,
            ..Default::default()
        }
    }

    // —> getters
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn checked(&self) -> [bool; 2] {
        self.checked
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    // —> input events
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Flips the checkbox at `position`. Positions without a checkbox are ignored.
    pub fn toggle(&mut self, position: usize) {
        if let Some(flag) = self.checked.get_mut(position) {
            *flag = !*flag;
        }
    }

    /// Labels of the checked boxes, in checkbox order.
    pub fn preferences(&self) -> Vec<Preference> {
        Preference::ALL
            .into_iter()
            .zip(self.checked)
            .filter_map(|(pref, checked)| checked.then_some(pref))
            .collect()
    }

    // —> submission
    /// Validates the input and, if it is valid, moves the form to `Status::Loading`
    /// and returns the payload to send.
    ///
    /// Returns `None` without touching the form while another submission is
    /// still outstanding.
    pub fn begin_submit(&mut self) -> Option<SignupRequest> {
        if self.in_flight {
            debug!("{:<12} - submission already in flight", "begin_submit");
            return None;
        }

        if self.email.is_empty() {
            self.status = Status::MissingEmail;
            return None;
        }
        if !self.checked.iter().any(|c| *c) {
            self.status = Status::NoSelections;
            return None;
        }

        self.status = Status::Loading;
        self.in_flight = true;

        Some(SignupRequest {
            email_address: self.email.clone(),
            list_preferences: self.preferences(),
        })
    }

    /// Applies the answer of the tracking API to the form.
    pub fn complete(&mut self, outcome: api_client::Result<SignupResponse>) {
        self.in_flight = false;

        match outcome {
            Ok(resp) if resp.success => {
                self.email.clear();
                self.checked = [false, false];
                self.status = Status::Success;
            }
            Ok(_) => {
                warn!("{:<12} - tracking api reported non-success", "complete");
                self.status = Status::Rejected;
            }
            Err(er) => {
                warn!("{:<12} - tracking api call failed: {er}", "complete");
                self.status = Status::Failed;
            }
        }
    }

    /// Validates, calls the API at most once and returns the resulting status.
    #[tracing::instrument(name = "Submitting signup form", skip_all, fields(email = %self.email))]
    pub async fn submit<A: SignupApi>(&mut self, api: &A) -> Status {
        let Some(request) = self.begin_submit() else {
            return self.status;
        };

        let outcome = api.post_user(&request).await;
        self.complete(outcome);
        info!("status: {:?}", self.status);

        self.status
    }
}
