use super::AttributeError;

/// A source of named attribute values.
pub trait AttributeResolver {
    /// Look up the value of the named attribute.
    ///
    /// Returns [`AttributeError::Missing`] when this source has no value for `name`.
    fn get(&self, name: &str) -> Result<String, AttributeError>;
}

impl<R: AttributeResolver + ?Sized> AttributeResolver for &R {
    fn get(&self, name: &str) -> Result<String, AttributeError> {
        (**self).get(name)
    }
}

impl<R: AttributeResolver + ?Sized> AttributeResolver for Box<R> {
    fn get(&self, name: &str) -> Result<String, AttributeError> {
        (**self).get(name)
    }
}
