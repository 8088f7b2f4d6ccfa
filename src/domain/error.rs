use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Malformed reply: {0}")]
    MalformedReply(String),

    #[error("Service error: {0}")]
    ServiceError(String),
}

impl RelayError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn configuration_missing(msg: impl Into<String>) -> Self {
        Self::ConfigurationMissing(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    pub fn malformed_reply(msg: impl Into<String>) -> Self {
        Self::MalformedReply(msg.into())
    }

    pub fn service(msg: impl Into<String>) -> Self {
        Self::ServiceError(msg.into())
    }

    /// Map a remote status code to an error variant.
    ///
    /// The assistant directory reports failures two ways: as an HTTP error
    /// status, or as a 200 response whose body carries a numeric `status`
    /// field. Both shapes funnel through this one mapping so callers only
    /// ever see the three-way taxonomy.
    pub fn from_status(status: u16, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        match status {
            401 => Self::Unauthorized(detail),
            404 => Self::NotFound(detail),
            _ => Self::ServiceError(detail),
        }
    }

    /// The fixed, user-safe message for this error.
    ///
    /// Never includes the raw error detail; that stays in server logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "Please enter a question.",
            Self::ConfigurationMissing(_) => {
                "The assistant isn't configured yet. Please try again later."
            }
            Self::Unauthorized(_) => {
                "Sorry, we're not authorized to access the DevRel Assistant."
            }
            Self::NotFound(_) => "Sorry, the DevRel Assistant could not be found.",
            Self::ConnectionError(_) => {
                "Sorry, we couldn't reach the DevRel Assistant. Please try again."
            }
            Self::MalformedReply(_) | Self::ServiceError(_) => {
                "Sorry, there's a problem accessing the DevRel Assistant."
            }
        }
    }

    /// HTTP status for the raw probe route, which surfaces the mapped code
    /// directly instead of re-rendering the form page.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::Unauthorized(_) => 401,
            Self::NotFound(_) => 404,
            _ => 500,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::ConnectionError(_))
    }
}
