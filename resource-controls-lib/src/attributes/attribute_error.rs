use thiserror::Error;

/// Errors produced while resolving attributes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    /// The attribute has no value in any source.
    #[error("required attribute '{0}' is not set")]
    Missing(String),

    /// The attribute exists but holds something other than a string.
    #[error("attribute '{name}' must be a string, found {found}")]
    NotAString { name: String, found: &'static str },

    /// The attribute source itself could not be read.
    #[error("reading attributes from {origin}: {message}")]
    Source { origin: String, message: String },
}

impl AttributeError {
    /// Returns `true` when the attribute was simply not provided.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }

    /// Name of the attribute this error refers to, when there is one.
    #[must_use]
    pub fn attribute_name(&self) -> Option<&str> {
        match self {
            Self::Missing(name) | Self::NotAString { name, .. } => Some(name),
            Self::Source { .. } => None,
        }
    }
}
