use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tera::Tera;
use tracing::{debug, warn};

use crate::application::{AnswerRenderer, AskQuestionUseCase, AssistantGateway};
use crate::domain::PromptTemplates;
use crate::{MarkdownRenderer, MockAssistantGateway, PineconeAssistantClient};

const PAGE_TEMPLATE: &str = "index.html";

pub struct ContainerConfig {
    pub api_key: String,
    pub assistant_name: String,
    pub prompts_path: PathBuf,
    pub control_host: String,
    /// Serve canned answers from an in-process gateway instead of calling
    /// the remote service. For development and tests.
    pub mock_assistant: bool,
}

/// Process-wide context: the loaded credential, prompt templates, remote
/// gateway, renderer, and page engine. Constructed once at startup and
/// passed explicitly into handlers; nothing here mutates after
/// construction, so concurrent requests share it without locking.
pub struct Container {
    gateway: Arc<dyn AssistantGateway>,
    renderer: Arc<dyn AnswerRenderer>,
    templates: Arc<PromptTemplates>,
    pages: Tera,
    assistant_name: String,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let gateway: Arc<dyn AssistantGateway> = if config.mock_assistant {
            debug!("Using mock assistant gateway");
            Arc::new(MockAssistantGateway::healthy())
        } else {
            debug!(
                "Using Pinecone assistant gateway via {}",
                config.control_host
            );
            Arc::new(PineconeAssistantClient::new(
                config.api_key.clone(),
                config.control_host.clone(),
            ))
        };

        // A missing template document is tolerated: requests then fail with
        // a configuration error instead of the process failing to start.
        let templates = if config.prompts_path.exists() {
            PromptTemplates::load(&config.prompts_path).with_context(|| {
                format!(
                    "Failed to load prompt templates from {}",
                    config.prompts_path.display()
                )
            })?
        } else {
            warn!(
                "Prompt template document {} not found; starting with empty templates",
                config.prompts_path.display()
            );
            PromptTemplates::empty()
        };

        Self::assemble(gateway, templates, config.assistant_name)
    }

    /// Build a container around an explicit gateway. Test seam.
    pub fn with_gateway(
        gateway: Arc<dyn AssistantGateway>,
        templates: PromptTemplates,
        assistant_name: impl Into<String>,
    ) -> Result<Self> {
        Self::assemble(gateway, templates, assistant_name.into())
    }

    fn assemble(
        gateway: Arc<dyn AssistantGateway>,
        templates: PromptTemplates,
        assistant_name: String,
    ) -> Result<Self> {
        let mut pages = Tera::default();
        pages
            .add_raw_template(
                PAGE_TEMPLATE,
                include_str!("../../../templates/index.html"),
            )
            .context("Failed to compile the page template")?;

        Ok(Self {
            gateway,
            renderer: Arc::new(MarkdownRenderer::new()),
            templates: Arc::new(templates),
            pages,
            assistant_name,
        })
    }

    pub fn ask_use_case(&self) -> AskQuestionUseCase {
        AskQuestionUseCase::new(
            self.gateway.clone(),
            self.renderer.clone(),
            self.templates.clone(),
            self.assistant_name.clone(),
        )
    }

    pub fn gateway(&self) -> Arc<dyn AssistantGateway> {
        self.gateway.clone()
    }

    pub fn assistant_name(&self) -> &str {
        &self.assistant_name
    }

    pub fn render_page(&self, context: &tera::Context) -> Result<String, tera::Error> {
        self.pages.render(PAGE_TEMPLATE, context)
    }
}
