use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::AssistantGateway;
use crate::domain::{AssistantHandle, AssistantReply, ComposedPrompt, RelayError};

/// Control-plane host where assistants are described by name.
pub const DEFAULT_CONTROL_HOST: &str = "https://api.pinecone.io";
const DESCRIBE_PATH: &str = "/assistant/assistants";
const CHAT_PATH: &str = "/assistant/chat";
const API_KEY_HEADER: &str = "Api-Key";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(serde::Serialize)]
struct ChatRequest<'a> {
    messages: Vec<ChatMessage<'a>>,
}

#[derive(serde::Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the describe-assistant response we care about.
///
/// The directory can answer 200 and still carry a failure: in that shape
/// the body holds a numeric `status` field instead of the assistant record.
#[derive(Deserialize)]
struct DescribeResponse {
    name: Option<String>,
    host: Option<String>,
    status: Option<u16>,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: Option<ReplyMessage>,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

/// HTTP gateway to the Pinecone Assistant API.
///
/// Implements [`AssistantGateway`] so the orchestrator stays decoupled from
/// transport and vendor details. Resolution goes to the control plane
/// (`GET /assistant/assistants/{name}`); the returned record names the
/// data-plane host the chat endpoint lives on
/// (`POST {host}/assistant/chat/{name}`).
///
/// Every failure is normalized into [`RelayError`] here, at the boundary:
/// status codes (raised or embedded) through [`RelayError::from_status`],
/// transport faults through structured `reqwest` error kinds with a
/// substring fallback for errors that only surface as text.
pub struct PineconeAssistantClient {
    client: reqwest::Client,
    api_key: String,
    control_host: String,
}

impl PineconeAssistantClient {
    pub fn new(api_key: impl Into<String>, control_host: impl Into<String>) -> Self {
        let host: String = control_host.into();
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            control_host: host.trim_end_matches('/').to_string(),
        }
    }

    /// Normalize a describe response into a handle or a mapped error.
    ///
    /// Handles both failure shapes: an HTTP error status, and a success
    /// status whose body embeds a non-200 numeric `status` field.
    fn normalize_describe(
        requested_name: &str,
        http_status: u16,
        body: &str,
    ) -> Result<AssistantHandle, RelayError> {
        if !(200..300).contains(&http_status) {
            return Err(RelayError::from_status(
                http_status,
                format!("describe assistant returned {http_status}: {body}"),
            ));
        }

        let response: DescribeResponse = serde_json::from_str(body).map_err(|e| {
            RelayError::service(format!("cannot parse describe response: {e}"))
        })?;

        if let Some(status) = response.status {
            if status != 200 {
                return Err(RelayError::from_status(
                    status,
                    format!("describe assistant reported status {status}"),
                ));
            }
        }

        let host = response.host.ok_or_else(|| {
            RelayError::service("describe response is missing the assistant host")
        })?;
        let name = response.name.unwrap_or_else(|| requested_name.to_string());

        Ok(AssistantHandle::new(name, normalize_host(&host)))
    }

    fn extract_reply(body: &str) -> Result<AssistantReply, RelayError> {
        let response: ChatResponse = serde_json::from_str(body)
            .map_err(|e| RelayError::malformed_reply(format!("cannot parse chat response: {e}")))?;

        match response.message.and_then(|m| m.content) {
            Some(content) => Ok(AssistantReply::new(content)),
            None => Err(RelayError::malformed_reply(
                "chat response has no message content",
            )),
        }
    }
}

/// The data-plane host may arrive bare (`prod-1-data.ke.pinecone.io`).
fn normalize_host(host: &str) -> String {
    let trimmed = host.trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Classify a transport failure.
///
/// Structured classification first (`is_connect`/`is_timeout`); the
/// "connection" substring check only catches faults that reach us as bare
/// text, e.g. descriptions forwarded from the remote side.
fn classify_transport(detail: String, connectivity: bool) -> RelayError {
    if connectivity || detail.to_ascii_lowercase().contains("connection") {
        RelayError::connection(detail)
    } else {
        RelayError::service(detail)
    }
}

fn classify_reqwest(context: &str, e: reqwest::Error) -> RelayError {
    classify_transport(
        format!("{context}: {e}"),
        e.is_connect() || e.is_timeout(),
    )
}

#[async_trait]
impl AssistantGateway for PineconeAssistantClient {
    async fn resolve(&self, name: &str) -> Result<AssistantHandle, RelayError> {
        let url = format!("{}{}/{}", self.control_host, DESCRIBE_PATH, name);
        debug!("Resolving assistant {name} via {url}");

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| classify_reqwest("describe assistant request failed", e))?;

        let http_status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| classify_reqwest("describe assistant body read failed", e))?;

        Self::normalize_describe(name, http_status, &body).inspect_err(|e| {
            warn!("Assistant resolution failed: {e}");
        })
    }

    async fn chat(
        &self,
        handle: &AssistantHandle,
        prompt: &ComposedPrompt,
    ) -> Result<AssistantReply, RelayError> {
        let url = format!("{}{}/{}", handle.host(), CHAT_PATH, handle.name());
        let request = ChatRequest {
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.as_str(),
            }],
        };

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| classify_reqwest("chat request failed", e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!("Chat endpoint returned {status}: {body}");
            return Err(RelayError::from_status(
                status,
                format!("chat endpoint returned {status}"),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| classify_reqwest("chat body read failed", e))?;

        Self::extract_reply(&body)
    }
}
