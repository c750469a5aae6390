//! Result and error types for element specifications.

use thiserror::Error;

/// Result type for rendering element specifications
pub type SpecResult<T> = Result<T, ElementSpecError>;

/// Errors that can occur when rendering an element specification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ElementSpecError {
    /// No grammar can express the requested chain of refinements
    #[error("No valid specification could be created")]
    NoValidSpecification,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_valid_specification_message() {
        let err = ElementSpecError::NoValidSpecification;
        assert_eq!(err.to_string(), "No valid specification could be created");
    }
}
