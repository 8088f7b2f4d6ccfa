//! # Domain Layer
//!
//! Request-scoped value types and the error taxonomy.
//! This layer is independent of external frameworks and infrastructure.

pub mod error;
pub mod models;

pub use error::RelayError;
pub use models::{
    AssistantHandle, AssistantReply, ComposedPrompt, ExperienceLevel, PromptTemplates, Question,
    RenderedAnswer,
};
