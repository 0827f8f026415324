//! The data that travels between the signup form and the tracking API.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use strum_macros::AsRefStr;

// ###################################
// ->   STRUCTS
// ###################################
/// A job-posting category the user can opt into.
/// The position in `Preference::ALL` is the position of its checkbox on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Serialize)]
pub enum Preference {
    #[strum(serialize = "intern")]
    #[serde(rename = "intern")]
    Intern,
    #[strum(serialize = "newgrad")]
    #[serde(rename = "newgrad")]
    NewGrad,
}

impl Preference {
    pub const ALL: [Preference; 2] = [Preference::Intern, Preference::NewGrad];
}

/// The JSON body of `POST {API}/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email_address: String,
    pub list_preferences: Vec<Preference>,
}

/// The JSON body the tracking API answers with.
/// Any JSON document except `null` is accepted; `success` is the truthiness of
/// its `Success` field, and documents without one (scalars, arrays, objects
/// missing the field) count as a non-success.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignupResponse {
    pub success: bool,
}

impl<'de> Deserialize<'de> for SignupResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Err(de::Error::custom("expected a JSON document, found null"));
        }

        Ok(SignupResponse {
            success: value.get("Success").is_some_and(truthy),
        })
    }
}

// ###################################
// ->   HELPERS
// ###################################
/// `null`, `false`, `0` and `""` are false, everything else is true.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
