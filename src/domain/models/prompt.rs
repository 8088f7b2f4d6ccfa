use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::domain::{ExperienceLevel, Question, RelayError};

/// Key of the global prefix entry in the template document.
const PREFIX_KEY: &str = "prefix";

/// Prompt prefixes loaded once at startup and immutable afterwards.
///
/// The source document is a flat TOML key→string mapping: a required
/// `prefix` entry (the global prefix) plus one entry per experience level.
/// A missing document is tolerated as the empty set; composition then fails
/// with `ConfigurationMissing` at request time instead of failing startup.
#[derive(Debug, Clone, Default)]
pub struct PromptTemplates {
    prefix: Option<String>,
    levels: HashMap<String, String>,
}

impl PromptTemplates {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_toml_str(document: &str) -> Result<Self, RelayError> {
        let mut entries: HashMap<String, String> = toml::from_str(document)
            .map_err(|e| RelayError::configuration_missing(format!("invalid template document: {e}")))?;
        let prefix = entries.remove(PREFIX_KEY);
        Ok(Self {
            prefix,
            levels: entries,
        })
    }

    pub fn load(path: &Path) -> Result<Self, RelayError> {
        let document = std::fs::read_to_string(path).map_err(|e| {
            RelayError::configuration_missing(format!(
                "cannot read template document {}: {e}",
                path.display()
            ))
        })?;
        let templates = Self::from_toml_str(&document)?;
        debug!(
            "Loaded {} level prefixes from {}",
            templates.levels.len(),
            path.display()
        );
        Ok(templates)
    }

    pub fn is_empty(&self) -> bool {
        self.prefix.is_none() && self.levels.is_empty()
    }

    /// Compose the full prompt: `<prefix> <level-prefix> <question>`,
    /// single-space joined. Pure over already-loaded configuration.
    ///
    /// An unrecognized level key falls back to the `beginner` entry. A
    /// missing `beginner` entry, or a missing global prefix, is a
    /// `ConfigurationMissing` failure.
    pub fn compose(
        &self,
        question: &Question,
        level: ExperienceLevel,
    ) -> Result<ComposedPrompt, RelayError> {
        let prefix = self.prefix.as_deref().ok_or_else(|| {
            RelayError::configuration_missing("template document has no `prefix` entry")
        })?;

        let level_prefix = self
            .levels
            .get(level.key())
            .or_else(|| self.levels.get(ExperienceLevel::Beginner.key()))
            .ok_or_else(|| {
                RelayError::configuration_missing("template document has no `beginner` entry")
            })?;

        Ok(ComposedPrompt(format!(
            "{} {} {}",
            prefix,
            level_prefix,
            question.as_str()
        )))
    }
}

/// The final text sent to the assistant. Built fresh per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt(String);

impl ComposedPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
