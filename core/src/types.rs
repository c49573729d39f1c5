//! Core data types for ZapGPT

use serde::{Deserialize, Serialize};

/// The gateway's representation of an inbound request.
///
/// Only `body` is consumed; every other field the gateway sends is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundEvent {
    /// Base64-wrapped, form-urlencoded payload
    #[serde(default)]
    pub body: Option<String>,
}

impl InboundEvent {
    /// Create an event carrying the given raw body
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
        }
    }

    /// The raw body, or an empty string when the gateway sent none
    pub fn raw_body(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

/// Plain-text prompt extracted from an inbound event
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Prompt(pub String);

impl Prompt {
    /// Create a new Prompt
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Response handed back to the hosting runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl OutboundResponse {
    pub const OK: u16 = 200;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;

    /// A 200 response carrying the generated text
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: Self::OK,
            body: body.into(),
        }
    }

    /// A 500 response carrying an error description
    pub fn internal_error(body: impl Into<String>) -> Self {
        Self {
            status_code: Self::INTERNAL_SERVER_ERROR,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == Self::OK
    }
}
