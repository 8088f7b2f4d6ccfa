mod markdown_renderer;
mod mock_assistant_gateway;
mod pinecone_assistant_client;

pub use markdown_renderer::MarkdownRenderer;
pub use mock_assistant_gateway::{MockAssistantGateway, MockBehavior};
pub use pinecone_assistant_client::{PineconeAssistantClient, DEFAULT_CONTROL_HOST};
