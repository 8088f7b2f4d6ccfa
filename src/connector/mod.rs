//! # Connector Layer
//!
//! External integrations implementing the application ports:
//! - Pinecone Assistant HTTP gateway (mock variant for development/tests)
//! - Markdown-to-sanitized-HTML answer rendering
//! - The axum HTTP surface and its dependency container

pub mod adapter;
pub mod api;

pub use adapter::{
    MarkdownRenderer, MockAssistantGateway, MockBehavior, PineconeAssistantClient,
    DEFAULT_CONTROL_HOST,
};
