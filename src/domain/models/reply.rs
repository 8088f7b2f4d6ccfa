/// A resolved reference to a remote assistant: its name plus the data-plane
/// host its chat endpoint lives on. Owned by the relay for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantHandle {
    name: String,
    host: String,
}

impl AssistantHandle {
    pub fn new(name: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

/// The textual content extracted from the assistant's chat response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    text: String,
}

impl AssistantReply {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Sanitized HTML derived from an [`AssistantReply`], safe to hand to the
/// presentation layer. Produced per request and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedAnswer {
    html: String,
}

impl RenderedAnswer {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn as_html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }
}
