//! Error types
//!
//! [`ValidationError`] is one reported failure inside a
//! [`ValidationResult`](crate::foundation::ValidationResult). Validation
//! failures are always *values*; the `thiserror` types at the bottom of this
//! module cover the two places where something can go wrong outside of a
//! validation pass: building a schema and running a user transform.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single validation failure.
///
/// `message` is already fully rendered: it carries the location suffix
/// (`"... at user.email"`) unless the validator had a custom message, in
/// which case it is that message verbatim.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "Must be at least 3 characters long")
///     .with_path("name");
/// assert_eq!(error.to_string(), "Must be at least 3 characters long");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Stable machine-readable code, e.g. `"required"` or `"unknown_field"`.
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: String,

    /// Rendered location, absent at the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates an error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Sets the rendered location.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An owned list of failures, returned by
/// [`ValidationResult::into_result`](crate::foundation::ValidationResult::into_result)
/// so callers can use `?`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Wraps a list of errors.
    #[must_use]
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the rendered messages in discovery order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    /// Consumes the collection.
    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// SCHEMA CONSTRUCTION ERRORS
// ============================================================================

/// Failure while building a schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A pattern string did not compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Compiler diagnostics.
        #[source]
        source: regex::Error,
    },
}

// ============================================================================
// TRANSFORM ERRORS
// ============================================================================

/// Error returned by a transform closure.
///
/// Its message ends up in `"Transformation failed: <message>"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransformError {
    message: String,
}

impl TransformError {
    /// Creates a transform error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for TransformError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for TransformError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let error = ValidationError::new("required", "Field is required at name").with_path("name");
        assert_eq!(error.to_string(), "Field is required at name");
        assert_eq!(error.path.as_deref(), Some("name"));
    }

    #[test]
    fn test_static_code_is_borrowed() {
        let error = ValidationError::new("required", "Field is required");
        assert!(matches!(error.code, Cow::Borrowed(_)));
    }

    #[test]
    fn test_errors_display_lists_each() {
        let errors = ValidationErrors::new(vec![
            ValidationError::new("a", "first"),
            ValidationError::new("b", "second"),
        ]);
        let rendered = errors.to_string();
        assert!(rendered.contains("2 error(s)"));
        assert!(rendered.contains("1. first"));
        assert!(rendered.contains("2. second"));
    }

    #[test]
    fn test_schema_error_mentions_pattern() {
        let source = regex::Regex::new("(").unwrap_err();
        let error = SchemaError::InvalidPattern {
            pattern: "(".to_owned(),
            source,
        };
        assert!(error.to_string().starts_with("invalid pattern `(`"));
    }

    #[test]
    fn test_into_vec_keeps_discovery_order() {
        let errors = ValidationErrors::new(vec![
            ValidationError::new("a", "first"),
            ValidationError::new("b", "second"),
        ]);
        let codes: Vec<String> = errors
            .into_vec()
            .into_iter()
            .map(|error| error.code.into_owned())
            .collect();
        assert_eq!(codes, vec!["a", "b"]);
    }

    #[test]
    fn test_transform_error_conversions_keep_message() {
        assert_eq!(TransformError::new("boom").message(), "boom");
        assert_eq!(TransformError::from("bad").message(), "bad");
        let error = TransformError::from(String::from("worse"));
        assert_eq!(error.message(), error.to_string());
    }

    #[test]
    fn test_serialize_skips_missing_path() {
        let json = serde_json::to_string(&ValidationError::new("x", "msg")).unwrap();
        assert_eq!(json, r#"{"code":"x","message":"msg"}"#);
    }
}
