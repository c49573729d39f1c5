//! # ZapGPT Core
//!
//! Types, error taxonomy and the per-invocation pipeline for a serverless
//! function that relays a form-encoded prompt to a chat-completion API.
//! Network access lives behind the [`CompletionClient`] trait.

pub mod decoder;
pub mod errors;
pub mod handler;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use decoder::decode;
pub use errors::{CompletionError, DecodeError, HandlerError};
pub use handler::handle;
pub use traits::CompletionClient;
pub use types::{InboundEvent, OutboundResponse, Prompt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::decoder::*;
    pub use crate::errors::*;
    pub use crate::handler::*;
    pub use crate::traits::*;
    pub use crate::types::*;
    pub use async_trait::async_trait;
}
