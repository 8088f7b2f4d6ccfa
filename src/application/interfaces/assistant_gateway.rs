use async_trait::async_trait;

use crate::domain::{AssistantHandle, AssistantReply, ComposedPrompt, RelayError};

/// An interface for resolving a named remote assistant and sending it a
/// single chat message.
///
/// Implementors encapsulate transport, serialization, and vendor-specific
/// API details, and normalize every failure into the [`RelayError`]
/// taxonomy so no caller inspects raw response shapes.
#[async_trait]
pub trait AssistantGateway: Send + Sync {
    /// Look up the assistant by name in the remote directory.
    ///
    /// One attempt per call, no caching. Remote failures map to
    /// `Unauthorized` (401), `NotFound` (404), or `ServiceError` (any other
    /// non-success), whether the status arrives as an HTTP error or as an
    /// embedded field in a nominally successful response.
    async fn resolve(&self, name: &str) -> Result<AssistantHandle, RelayError>;

    /// Send the composed prompt as a single, stateless user message and
    /// return the assistant's textual reply.
    ///
    /// No conversation history crosses calls. Transport-level failures map
    /// to `ConnectionError`; a reply missing its content field maps to
    /// `MalformedReply`; anything else to `ServiceError`.
    async fn chat(
        &self,
        handle: &AssistantHandle,
        prompt: &ComposedPrompt,
    ) -> Result<AssistantReply, RelayError>;
}
