use crate::RequiredField;

/// Error type for form operations.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Required fields are still empty; nothing was submitted.
    #[error("Please fill in: {}", list(.0))]
    MissingRequired(Vec<RequiredField>),

    /// The user left the form without submitting (Esc, closed window, etc.)
    #[error("Form cancelled by user")]
    Cancelled,

    /// Frontend-specific failure (I/O, UI framework crash, etc.)
    #[error("Frontend error: {0}")]
    Frontend(#[from] anyhow::Error),
}

impl FormError {
    /// Create a frontend error from any error type.
    pub fn frontend(err: impl Into<anyhow::Error>) -> Self {
        Self::Frontend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// The unmet required fields, if that is what went wrong.
    pub fn missing_fields(&self) -> &[RequiredField] {
        match self {
            Self::MissingRequired(fields) => fields,
            _ => &[],
        }
    }
}

fn list(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
