mod prompt;
mod question;
mod reply;

pub use prompt::{ComposedPrompt, PromptTemplates};
pub use question::{ExperienceLevel, Question};
pub use reply::{AssistantHandle, AssistantReply, RenderedAnswer};
