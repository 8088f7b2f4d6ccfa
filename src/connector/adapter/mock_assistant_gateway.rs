use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::AssistantGateway;
use crate::domain::{AssistantHandle, AssistantReply, ComposedPrompt, RelayError};

const MOCK_HOST: &str = "https://mock.assistant.invalid";

/// What the mock does when asked to resolve and chat.
pub enum MockBehavior {
    /// Resolution succeeds; chat returns this canned reply text.
    Healthy { reply: String },
    /// Resolution fails with this remote status (normalized as usual).
    ResolveStatus(u16),
    /// Resolution succeeds; chat fails with this failure description.
    ChatFailure(String),
    /// Resolution succeeds; chat returns a reply with no content field.
    EmptyReply,
}

/// In-process [`AssistantGateway`] for development and tests.
///
/// Serves canned behavior without touching the network and counts calls so
/// tests can assert that invalid input never reaches the remote service.
pub struct MockAssistantGateway {
    behavior: MockBehavior,
    resolve_calls: AtomicUsize,
    chat_calls: AtomicUsize,
}

impl MockAssistantGateway {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            resolve_calls: AtomicUsize::new(0),
            chat_calls: AtomicUsize::new(0),
        }
    }

    /// A healthy assistant answering every question with a small markdown
    /// sample. Backs the `--mock-assistant` flag.
    pub fn healthy() -> Self {
        Self::new(MockBehavior::Healthy {
            reply: "# Mock answer\n- This instance runs with a mock assistant\n- No remote service was contacted".to_string(),
        })
    }

    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }

    pub fn chat_calls(&self) -> usize {
        self.chat_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssistantGateway for MockAssistantGateway {
    async fn resolve(&self, name: &str) -> Result<AssistantHandle, RelayError> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::ResolveStatus(status) => Err(RelayError::from_status(
                *status,
                format!("mock resolution reported status {status}"),
            )),
            _ => Ok(AssistantHandle::new(name, MOCK_HOST)),
        }
    }

    async fn chat(
        &self,
        _handle: &AssistantHandle,
        _prompt: &ComposedPrompt,
    ) -> Result<AssistantReply, RelayError> {
        self.chat_calls.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Healthy { reply } => Ok(AssistantReply::new(reply.clone())),
            MockBehavior::ChatFailure(detail) => {
                let connectivity = detail.to_ascii_lowercase().contains("connection");
                if connectivity {
                    Err(RelayError::connection(detail.clone()))
                } else {
                    Err(RelayError::service(detail.clone()))
                }
            }
            MockBehavior::EmptyReply => Err(RelayError::malformed_reply(
                "mock reply has no message content",
            )),
            MockBehavior::ResolveStatus(_) => {
                unreachable!("chat is never reached when resolution fails")
            }
        }
    }
}
