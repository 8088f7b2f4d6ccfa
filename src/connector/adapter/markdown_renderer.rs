use pulldown_cmark::{html, Event, Options, Parser};

use crate::application::AnswerRenderer;
use crate::domain::{AssistantReply, RenderedAnswer};

/// Renders assistant reply text (lightweight markdown) into sanitized HTML.
///
/// Two-stage pipeline: pulldown-cmark converts the markup, then ammonia
/// strips anything the page must never execute. The sanitization pass is
/// unconditional — the reply text originates from a third-party service, so
/// HTML safety cannot depend on the conversion library's own behavior.
///
/// Soft line breaks are promoted to hard breaks so the line structure the
/// assistant chose survives into the page.
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    fn convert(text: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);

        let parser = Parser::new_ext(text, options).map(|event| match event {
            Event::SoftBreak => Event::HardBreak,
            other => other,
        });

        let mut output = String::with_capacity(text.len() * 2);
        html::push_html(&mut output, parser);
        output
    }

    /// Escaped raw text, used when conversion produced nothing to show.
    fn escape_fallback(text: &str) -> String {
        let escaped = ammonia::clean_text(text).replace('\n', "<br>\n");
        format!("<p>{escaped}</p>")
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerRenderer for MarkdownRenderer {
    fn render(&self, reply: &AssistantReply) -> RenderedAnswer {
        let text = reply.text();
        let converted = Self::convert(text);

        // A conversion fault must never become a request fault: if the
        // markup pass yields nothing for a non-empty reply, present the
        // escaped raw text instead.
        let html = if converted.trim().is_empty() && !text.trim().is_empty() {
            Self::escape_fallback(text)
        } else {
            converted
        };

        RenderedAnswer::new(ammonia::clean(&html))
    }
}
