use std::sync::Arc;

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use tracing::{error, warn};

use super::super::Container;

#[derive(Debug, Deserialize)]
pub struct AskForm {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
}

/// `GET /` — the empty question form.
pub async fn form(State(container): State<Arc<Container>>) -> Response {
    render_page(&container, None, None, "", "beginner")
}

/// `POST /` — relay the question and re-render the page.
///
/// Always answers HTTP 200 with exactly one of the `answer` or `error`
/// slots populated; failures become the fixed user-safe message while the
/// original detail goes to the server log.
pub async fn submit(
    State(container): State<Arc<Container>>,
    Form(form): Form<AskForm>,
) -> Response {
    let message = form.message.as_deref().unwrap_or("");
    let level = form.experience_level.as_deref().unwrap_or("beginner");

    match container.ask_use_case().execute(message, form.experience_level.as_deref()).await {
        Ok(answer) => render_page(&container, Some(answer.as_html()), None, message, level),
        Err(e) => {
            warn!("Question relay failed: {e}");
            render_page(&container, None, Some(e.user_message()), message, level)
        }
    }
}

fn render_page(
    container: &Container,
    answer: Option<&str>,
    error: Option<&str>,
    question: &str,
    level: &str,
) -> Response {
    let mut context = tera::Context::new();
    context.insert("assistant_name", container.assistant_name());
    context.insert("answer", &answer);
    context.insert("error", &error);
    context.insert("question", question);
    context.insert("experience_level", level);

    match container.render_page(&context) {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            error!("Page template rendering failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
        }
    }
}
