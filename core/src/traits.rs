//! Seams between the handler and its collaborators

use crate::errors::CompletionError;
use crate::types::Prompt;
use async_trait::async_trait;
use std::sync::Arc;

/// Trait for text-generation backends
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a single prompt upstream and return the generated text
    async fn complete(&self, prompt: &Prompt) -> Result<String, CompletionError>;
}

#[async_trait]
impl<C: CompletionClient + ?Sized> CompletionClient for Arc<C> {
    async fn complete(&self, prompt: &Prompt) -> Result<String, CompletionError> {
        (**self).complete(prompt).await
    }
}
