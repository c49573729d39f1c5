//! Per-invocation request pipeline: decode, complete, respond

use crate::decoder::decode;
use crate::errors::HandlerError;
use crate::traits::CompletionClient;
use crate::types::{InboundEvent, OutboundResponse};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Run one invocation. Every failure is folded into a 500 response.
pub async fn handle<C>(client: &C, event: InboundEvent) -> OutboundResponse
where
    C: CompletionClient + ?Sized,
{
    let start_time = Instant::now();

    match process(client, &event).await {
        Ok(text) => {
            info!(
                "Invocation succeeded in {}ms ({} bytes generated)",
                start_time.elapsed().as_millis(),
                text.len()
            );
            OutboundResponse::ok(text)
        }
        Err(e) => {
            warn!(
                "Invocation failed in {}ms: {}",
                start_time.elapsed().as_millis(),
                e
            );
            OutboundResponse::internal_error(e.to_string())
        }
    }
}

async fn process<C>(client: &C, event: &InboundEvent) -> Result<String, HandlerError>
where
    C: CompletionClient + ?Sized,
{
    let prompt = decode(event.raw_body())?;
    debug!("Decoded prompt of {} bytes", prompt.len());

    let text = client.complete(&prompt).await?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CompletionError;
    use crate::types::Prompt;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Records the prompts it receives and replies with a canned result
    struct FakeClient {
        reply: Result<String, CompletionError>,
        prompts: Mutex<Vec<String>>,
        calls: AtomicUsize,
    }

    impl FakeClient {
        fn replying(reply: Result<String, CompletionError>) -> Self {
            Self {
                reply,
                prompts: Mutex::new(Vec::new()),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CompletionClient for FakeClient {
        async fn complete(&self, prompt: &Prompt) -> Result<String, CompletionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.as_str().to_string());
            self.reply.clone()
        }
    }

    fn event_for(form: &str) -> InboundEvent {
        use base64::Engine;
        InboundEvent::new(base64::engine::general_purpose::STANDARD.encode(form))
    }

    #[tokio::test]
    async fn test_end_to_end_success() {
        let client = FakeClient::replying(Ok("4".to_string()));

        let response = handle(&client, event_for("Body=What+is+2%2B2%3F")).await;

        assert_eq!(response, OutboundResponse::ok("4"));
        assert_eq!(*client.prompts.lock().unwrap(), vec!["What is 2+2?".to_string()]);
    }

    #[tokio::test]
    async fn test_invalid_encoding_short_circuits() {
        let client = FakeClient::replying(Ok("unused".to_string()));

        let response = handle(&client, InboundEvent::new("!!!not-base64!!!")).await;

        assert_eq!(response.status_code, 500);
        assert!(response.body.starts_with("illegal base64 data"));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_field_short_circuits() {
        let client = FakeClient::replying(Ok("unused".to_string()));

        let response = handle(&client, event_for("Other=foo")).await;

        assert_eq!(response, OutboundResponse::internal_error("Body not found"));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_body_in_event() {
        let client = FakeClient::replying(Ok("unused".to_string()));

        let response = handle(&client, InboundEvent::default()).await;

        assert_eq!(response, OutboundResponse::internal_error("Body not found"));
    }

    #[tokio::test]
    async fn test_completion_error_becomes_500() {
        let client = FakeClient::replying(Err(CompletionError::EmptyChoices));

        let response = handle(&client, event_for("Body=hi")).await;

        assert_eq!(
            response,
            OutboundResponse::internal_error(CompletionError::EmptyChoices.to_string())
        );
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invocations_are_independent() {
        let client = Arc::new(FakeClient::replying(Ok("ok".to_string())));

        let first = handle(&client, event_for("Body=one")).await;
        let failed = handle(&client, event_for("Nope=two")).await;
        let third = handle(&client, event_for("Body=three")).await;

        assert!(first.is_success());
        assert!(!failed.is_success());
        assert!(third.is_success());
        assert_eq!(
            *client.prompts.lock().unwrap(),
            vec!["one".to_string(), "three".to_string()]
        );
    }
}
