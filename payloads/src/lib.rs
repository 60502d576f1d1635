//! Shared request/response payloads for the outreach backend REST API.
//!
//! This crate owns the wire representation used by both the `client`
//! dashboard and the `cli`. It performs no I/O; each consumer brings its own
//! HTTP stack and maps failures into [`ApiError`].
//!
//! WIRE NOTES
//! ==========
//! The backend is an external collaborator, so response types are lenient:
//! identifiers may arrive as strings or integers, and unknown fields are kept
//! in a flattened `extra` map instead of being dropped.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

pub mod sequence;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub use sequence::{Sequence, SequenceStep, StepEdit};

/// Backend base URL used when no override is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Tone pre-filled in generation requests.
pub const DEFAULT_TONE: &str = "friendly";

/// Name pre-filled in the workspace form.
pub const DEFAULT_WORKSPACE_NAME: &str = "My Workspace";

/// Name given to fresh campaign drafts.
pub const DEFAULT_CAMPAIGN_NAME: &str = "New Campaign";

/// REST paths relative to the backend base URL.
pub mod endpoints {
    pub const WORKSPACES: &str = "/workspaces";
    pub const PROSPECTS: &str = "/prospects";
    pub const GENERATE: &str = "/generate";
    pub const CAMPAIGNS: &str = "/campaigns";
    pub const EVENTS: &str = "/events";
    pub const HEALTHZ: &str = "/healthz";
}

/// Normalize a configured base URL: trims whitespace and trailing slashes,
/// falling back to [`DEFAULT_API_BASE`] when nothing usable remains.
#[must_use]
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Join a base URL and an endpoint path.
#[must_use]
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}{path}", normalize_base_url(base))
}

/// The single failure kind for backend calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status. `body` is the raw response text.
    #[error("HTTP {status}{}", body_suffix(.body))]
    Status { status: u16, body: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The request body could not be encoded.
    #[error("invalid request: {0}")]
    Encode(String),
    /// A 2xx response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status code, when the failure came from a backend response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn body_suffix(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        String::new()
    } else {
        format!(": {body}")
    }
}

/// Decode an acknowledgement body. Empty bodies become `null`; text that is
/// not JSON is kept as a string.
#[must_use]
pub fn decode_ack(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_owned()))
}

// =============================================================
// Workspaces
// =============================================================

/// Body of `POST /workspaces`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWorkspace {
    pub name: String,
    pub owner_email: String,
}

/// Workspace returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub owner_email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// =============================================================
// Prospects
// =============================================================

/// Body of `POST /prospects`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProspect {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub title: String,
}

/// Prospect returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prospect {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Prospect {
    /// Human-readable label: full name when present, else email, else id.
    #[must_use]
    pub fn label(&self) -> String {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !name.is_empty() {
            return name;
        }
        match self.email.as_deref().map(str::trim) {
            Some(email) if !email.is_empty() => email.to_owned(),
            _ => self.id.clone(),
        }
    }
}

// =============================================================
// Copy generation
// =============================================================

/// Body of `POST /generate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub product: String,
    pub audience: String,
    pub tone: String,
    pub call_to_action: String,
}

/// Subject/body pair computed by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedEmail {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body: String,
}

// =============================================================
// Campaigns
// =============================================================

/// Body of `POST /campaigns`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCampaign {
    pub name: String,
    pub workspace_id: Option<String>,
    pub sequence: Sequence,
}

/// Campaign as listed by `GET /campaigns` or returned by `POST /campaigns`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub workspace_id: Option<String>,
    #[serde(default)]
    pub sequence: Sequence,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// =============================================================
// Analytics events
// =============================================================

/// Demo analytics event types understood by `POST /events`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    EmailSent,
    EmailOpened,
    LinkClicked,
    ReplyReceived,
    MeetingBooked,
}

impl EventKind {
    pub const ALL: [Self; 5] = [
        Self::EmailSent,
        Self::EmailOpened,
        Self::LinkClicked,
        Self::ReplyReceived,
        Self::MeetingBooked,
    ];

    /// Wire name, e.g. `"email_opened"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmailSent => "email_sent",
            Self::EmailOpened => "email_opened",
            Self::LinkClicked => "link_clicked",
            Self::ReplyReceived => "reply_received",
            Self::MeetingBooked => "meeting_booked",
        }
    }

    /// Button label for the analytics panel.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::EmailSent => "Email sent",
            Self::EmailOpened => "Email opened",
            Self::LinkClicked => "Link clicked",
            Self::ReplyReceived => "Reply received",
            Self::MeetingBooked => "Meeting booked",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`EventKind::from_str`] for names outside [`EventKind::ALL`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown event type `{0}`")]
pub struct UnknownEventKind(pub String);

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == needle)
            .ok_or_else(|| UnknownEventKind(needle.to_owned()))
    }
}

/// Body of `POST /events`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventRequest {
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl EventRequest {
    /// Build a demo event tagged with `"demo": true` plus any known context ids.
    #[must_use]
    pub fn demo(kind: EventKind, workspace_id: Option<&str>, campaign_id: Option<&str>) -> Self {
        let mut properties = Map::new();
        properties.insert("demo".to_owned(), Value::Bool(true));
        if let Some(id) = workspace_id {
            properties.insert("workspace_id".to_owned(), Value::String(id.to_owned()));
        }
        if let Some(id) = campaign_id {
            properties.insert("campaign_id".to_owned(), Value::String(id.to_owned()));
        }
        Self { kind, properties }
    }
}

// =============================================================
// Lenient id decoding
// =============================================================

fn id_from_value<E: serde::de::Error>(value: Value) -> Result<String, E> {
    match value {
        Value::String(id) => Ok(id),
        Value::Number(number) if number.is_i64() || number.is_u64() => Ok(number.to_string()),
        _ => Err(E::custom("expected string or integer id")),
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    id_from_value(Value::deserialize(deserializer)?)
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        other => id_from_value(other).map(Some),
    }
}
