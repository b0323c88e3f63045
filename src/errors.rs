use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoachError {
    #[error("invalid argument `{field}`: {reason}")]
    InvalidArgument { field: String, reason: String },
}

impl CoachError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CoachError::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::invalid(field, "is required")
    }

    pub fn field(&self) -> &str {
        match self {
            CoachError::InvalidArgument { field, .. } => field,
        }
    }
}
