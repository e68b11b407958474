use std::fmt;

/// A request field was missing or unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Path to the offending field, e.g. `portfolio[2].symbol`.
    pub field: String,
    pub detail: &'static str,
}

impl ValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            detail: "is required",
        }
    }

    pub fn blank(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            detail: "must not be blank",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.detail)
    }
}

impl std::error::Error for ValidationError {}
