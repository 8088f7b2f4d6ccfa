//! # Application Layer
//!
//! Use cases and the ports they depend on, coordinating domain and
//! connector layers.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::{AnswerRenderer, AssistantGateway};
pub use use_cases::AskQuestionUseCase;
