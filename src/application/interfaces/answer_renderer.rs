use crate::domain::{AssistantReply, RenderedAnswer};

/// Converts an assistant reply into sanitized, displayable HTML.
///
/// Infallible by contract: a conversion fault must never become a request
/// fault, so implementors absorb their own failures by falling back to
/// escaped raw text.
pub trait AnswerRenderer: Send + Sync {
    fn render(&self, reply: &AssistantReply) -> RenderedAnswer;
}
