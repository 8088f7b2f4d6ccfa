use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::application::{AnswerRenderer, AssistantGateway};
use crate::domain::{ExperienceLevel, PromptTemplates, Question, RelayError, RenderedAnswer};

/// The top-level request flow: validate the question, compose the prompt,
/// resolve the assistant, send one chat message, render the reply.
///
/// Strictly linear and synchronous from the caller's point of view; any
/// failure short-circuits and the gateway is never touched for invalid
/// input. Each call produces exactly one of a rendered answer or an error.
pub struct AskQuestionUseCase {
    gateway: Arc<dyn AssistantGateway>,
    renderer: Arc<dyn AnswerRenderer>,
    templates: Arc<PromptTemplates>,
    assistant_name: String,
}

impl AskQuestionUseCase {
    pub fn new(
        gateway: Arc<dyn AssistantGateway>,
        renderer: Arc<dyn AnswerRenderer>,
        templates: Arc<PromptTemplates>,
        assistant_name: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            renderer,
            templates,
            assistant_name: assistant_name.into(),
        }
    }

    pub async fn execute(
        &self,
        raw_question: &str,
        raw_level: Option<&str>,
    ) -> Result<RenderedAnswer, RelayError> {
        // Validation happens before anything remote.
        let question = Question::new(raw_question)?;
        let level = ExperienceLevel::parse(raw_level);

        let prompt = self.templates.compose(&question, level)?;

        info!(
            "Relaying question to assistant {} (level={})",
            self.assistant_name,
            level.key()
        );
        let start_time = Instant::now();

        let handle = self.gateway.resolve(&self.assistant_name).await?;
        let reply = self.gateway.chat(&handle, &prompt).await?;

        if reply.text().trim().is_empty() {
            warn!("Assistant {} returned an empty reply", handle.name());
        }

        let answer = self.renderer.render(&reply);

        info!(
            "Answer rendered in {:.2}s ({} chars of HTML)",
            start_time.elapsed().as_secs_f64(),
            answer.as_html().len()
        );

        Ok(answer)
    }
}
