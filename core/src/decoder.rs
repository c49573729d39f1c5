//! Extraction of the prompt from a base64-wrapped form body

use crate::errors::DecodeError;
use crate::types::Prompt;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::collections::HashMap;
use tracing::debug;

/// Form field holding the prompt text
pub const PROMPT_FIELD: &str = "Body";

/// Decode `raw_body` into the prompt carried by its `Body` form field.
///
/// Malformed percent escapes (`100%`, `%zz`) are kept literally rather than
/// dropping the pair.
pub fn decode(raw_body: &str) -> Result<Prompt, DecodeError> {
    let bytes = STANDARD
        .decode(raw_body)
        .map_err(|e| DecodeError::InvalidEncoding(e.to_string()))?;

    // Repeated keys: last value wins
    let mut fields: HashMap<String, String> = url::form_urlencoded::parse(&bytes)
        .into_owned()
        .collect();

    debug!("Decoded form body with {} field(s)", fields.len());

    fields
        .remove(PROMPT_FIELD)
        .map(Prompt::new)
        .ok_or_else(|| DecodeError::MissingField(PROMPT_FIELD.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(form: &str) -> String {
        STANDARD.encode(form)
    }

    #[test]
    fn test_decode_percent_encoded_prompt() {
        let prompt = decode(&encode("Body=What+is+2%2B2%3F")).unwrap();
        assert_eq!(prompt.as_str(), "What is 2+2?");
    }

    #[test]
    fn test_decode_among_other_fields() {
        let raw = encode("From=whatsapp%3A%2B15550001111&Body=ol%C3%A1+mundo&NumMedia=0");
        let prompt = decode(&raw).unwrap();
        assert_eq!(prompt.as_str(), "olá mundo");
    }

    #[test]
    fn test_decode_empty_prompt_is_accepted() {
        let prompt = decode(&encode("Body=")).unwrap();
        assert!(prompt.is_empty());
    }

    #[test]
    fn test_decode_repeated_key_last_wins() {
        let prompt = decode(&encode("Body=first&Body=second")).unwrap();
        assert_eq!(prompt.as_str(), "second");
    }

    #[test]
    fn test_decode_keeps_malformed_percent_escapes() {
        assert_eq!(decode(&encode("Body=100%")).unwrap().as_str(), "100%");
        assert_eq!(decode(&encode("Body=%zz+ok")).unwrap().as_str(), "%zz ok");
    }

    #[test]
    fn test_decode_invalid_base64() {
        let err = decode("!!!not-base64!!!").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidEncoding(_)));
        assert!(err.to_string().starts_with("illegal base64 data"));
    }

    #[test]
    fn test_decode_missing_body_field() {
        let err = decode(&encode("Other=foo")).unwrap_err();
        assert_eq!(err, DecodeError::MissingField("Body".to_string()));
    }

    #[test]
    fn test_decode_field_name_is_case_sensitive() {
        let err = decode(&encode("body=hello")).unwrap_err();
        assert!(matches!(err, DecodeError::MissingField(_)));
    }

    #[test]
    fn test_decode_empty_input() {
        let err = decode("").unwrap_err();
        assert!(matches!(err, DecodeError::MissingField(_)));
    }
}
