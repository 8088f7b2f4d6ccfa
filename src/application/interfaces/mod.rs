mod answer_renderer;
mod assistant_gateway;

pub use answer_renderer::AnswerRenderer;
pub use assistant_gateway::AssistantGateway;
