//! HTTP client for the execute backend.
//!
//! A single POST to `/execute` carries the component source and the
//! requested help level; the backend answers with either program output
//! or a failure payload whose richness depends on that level.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How much help the backend should attach to a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HelpLevel {
    /// Raw runtime error, untouched
    Raw,
    /// Error filtered down to the relevant frames
    Filtered,
    /// Filtered error plus a prose explanation
    Explained,
    /// Explanation plus a suggested fix
    Solved,
}

impl HelpLevel {
    /// Wire encoding (`debug_level` field)
    pub fn as_u8(self) -> u8 {
        match self {
            HelpLevel::Raw => 0,
            HelpLevel::Filtered => 1,
            HelpLevel::Explained => 2,
            HelpLevel::Solved => 3,
        }
    }

    /// Decode a wire value, rejecting anything outside 0..=3
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(HelpLevel::Raw),
            1 => Some(HelpLevel::Filtered),
            2 => Some(HelpLevel::Explained),
            3 => Some(HelpLevel::Solved),
            _ => None,
        }
    }
}

impl Default for HelpLevel {
    fn default() -> Self {
        HelpLevel::Raw
    }
}

/// Body of a POST to `/execute`.
#[derive(Debug, Clone, Serialize)]
pub struct ExecuteRequest {
    pub code: String,
    pub debug_level: u8,
    pub template_code: HashMap<String, String>,
}

impl ExecuteRequest {
    /// Build a request for a single-component program.
    ///
    /// The backend mounts `template_code` as a virtual file tree; a lone
    /// component always lands at `App.vue`.
    pub fn for_component(code: &str, level: HelpLevel) -> Self {
        let mut template_code = HashMap::new();
        template_code.insert("App.vue".to_string(), code.to_string());
        Self {
            code: code.to_string(),
            debug_level: level.as_u8(),
            template_code,
        }
    }
}

/// Untyped wire shape; validated into [`ExecuteOutcome`].
#[derive(Debug, Deserialize)]
struct RawResponse {
    success: bool,
    #[serde(default)]
    output: Option<String>,
    #[serde(default)]
    level: Option<u8>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    explanation: Option<String>,
    #[serde(default)]
    solution: Option<String>,
}

/// A failed run, with help fields per the requested level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecuteFailure {
    pub level: HelpLevel,
    pub error: String,
    pub explanation: Option<String>,
    pub solution: Option<String>,
}

/// Validated backend response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecuteOutcome {
    Success { output: String },
    Failure(ExecuteFailure),
}

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response
    #[error("could not reach execute backend: {0}")]
    Transport(String),
    /// The backend answered with a non-success status
    #[error("execute backend returned HTTP {status}: {body}")]
    Http { status: u16, body: String },
    /// The response body was not valid JSON
    #[error("could not decode execute response: {0}")]
    Decode(String),
    /// The JSON was valid but violated the response contract
    #[error("malformed execute response: {0}")]
    MalformedResponse(String),
}

impl TryFrom<RawResponse> for ExecuteOutcome {
    type Error = ClientError;

    fn try_from(raw: RawResponse) -> Result<Self, ClientError> {
        if raw.success {
            let output = raw.output.ok_or_else(|| {
                ClientError::MalformedResponse("success response missing `output`".into())
            })?;
            return Ok(ExecuteOutcome::Success { output });
        }

        let level_raw = raw.level.ok_or_else(|| {
            ClientError::MalformedResponse("failure response missing `level`".into())
        })?;
        let level = HelpLevel::from_u8(level_raw).ok_or_else(|| {
            ClientError::MalformedResponse(format!("`level` out of range: {level_raw}"))
        })?;
        let error = raw.error.ok_or_else(|| {
            ClientError::MalformedResponse("failure response missing `error`".into())
        })?;
        if level >= HelpLevel::Explained && raw.explanation.is_none() {
            return Err(ClientError::MalformedResponse(format!(
                "level {} failure missing `explanation`",
                level.as_u8()
            )));
        }
        if level == HelpLevel::Solved && raw.solution.is_none() {
            return Err(ClientError::MalformedResponse(
                "level 3 failure missing `solution`".into(),
            ));
        }

        Ok(ExecuteOutcome::Failure(ExecuteFailure {
            level,
            error,
            explanation: raw.explanation,
            solution: raw.solution,
        }))
    }
}

/// Parse and validate a response body.
pub fn parse_response(body: &str) -> Result<ExecuteOutcome, ClientError> {
    let raw: RawResponse =
        serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))?;
    ExecuteOutcome::try_from(raw)
}

/// Client for the execute backend.
#[derive(Debug, Clone)]
pub struct ExecuteClient {
    http: reqwest::Client,
    base_url: String,
}

impl ExecuteClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Run a component on the backend.
    ///
    /// One request, no retry: the caller decides whether to resubmit.
    pub async fn execute(&self, request: &ExecuteRequest) -> Result<ExecuteOutcome, ClientError> {
        let url = format!("{}/execute", self.base_url.trim_end_matches('/'));
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("execute request failed: {e}");
                ClientError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        if !status.is_success() {
            tracing::warn!("execute backend returned {status}");
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }

        parse_response(&body)
    }
}
