pub mod application;
pub mod connector;
pub mod domain;

pub use application::{AnswerRenderer, AskQuestionUseCase, AssistantGateway};

pub use connector::{
    MarkdownRenderer, MockAssistantGateway, MockBehavior, PineconeAssistantClient,
    DEFAULT_CONTROL_HOST,
};

pub use domain::{
    AssistantHandle, AssistantReply, ComposedPrompt, ExperienceLevel, PromptTemplates, Question,
    RelayError, RenderedAnswer,
};
