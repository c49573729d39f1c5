//! Error types for ZapGPT request handling

use thiserror::Error;

/// Errors raised while extracting the prompt from an inbound event
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("illegal base64 data: {0}")]
    InvalidEncoding(String),

    #[error("{0} not found")]
    MissingField(String),
}

/// Errors raised while talking to the upstream chat-completion API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Failed to serialize completion request: {0}")]
    Serialization(String),

    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("Failed to read response body: {0}")]
    ReadFailure(String),

    #[error("Failed to parse response: {0}")]
    Deserialization(String),

    #[error("Completion response contained no choices")]
    EmptyChoices,
}

/// Any failure that terminates an invocation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Completion(#[from] CompletionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = DecodeError::MissingField("Body".to_string());
        assert_eq!(err.to_string(), "Body not found");
    }

    #[test]
    fn test_handler_error_is_transparent() {
        let err: HandlerError = CompletionError::EmptyChoices.into();
        assert_eq!(err.to_string(), "Completion response contained no choices");

        let err: HandlerError = DecodeError::InvalidEncoding("bad byte".to_string()).into();
        assert_eq!(err.to_string(), "illegal base64 data: bad byte");
    }
}
