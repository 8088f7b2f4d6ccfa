use crate::domain::RelayError;

/// A user-supplied question, validated non-empty after trimming.
///
/// Request-scoped; never persisted beyond the request that carries it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    pub fn new(raw: &str) -> Result<Self, RelayError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RelayError::invalid_input("question is empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Qualifier selecting which prompt-prefix variant to apply.
///
/// Parsing is lenient: anything unrecognized (or absent) is treated as
/// `Beginner`, so a stale form value can never fail a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("intermediate") => Self::Intermediate,
            Some("advanced") => Self::Advanced,
            _ => Self::Beginner,
        }
    }

    /// Key used to look up this level's prefix in the template document.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}
