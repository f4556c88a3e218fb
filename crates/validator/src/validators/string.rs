//! String validator
//!
//! Length is measured in Unicode scalar values. All configured rules are
//! checked and every violation is reported together.

use std::sync::LazyLock;

use regex::Regex;

use crate::combinators::modifiers::Modifiers;
use crate::foundation::{SchemaError, Validate, ValidationContext, ValidationResult, Value};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("email pattern compiles")
});

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("url pattern compiles"));

const PATTERN_MESSAGE: &str = "Does not match required pattern";

// ============================================================================
// STRING SCHEMA
// ============================================================================

/// Validates that a value is a string and satisfies the configured rules.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard_validator::prelude::*;
///
/// let username = string().min_length(3).max_length(20);
/// assert!(username.validate(&Value::from("alice")).is_valid());
///
/// let result = string().min_length(3).validate(&Value::from("hi"));
/// assert_eq!(result.messages(), vec!["Must be at least 3 characters long"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringSchema {
    modifiers: Modifiers,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<Regex>,
    pattern_message: Option<&'static str>,
    one_of: Option<Vec<String>>,
}

impl StringSchema {
    /// Creates a string validator with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inclusive lower bound on length.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Inclusive upper bound on length.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Exact length: sets both bounds.
    #[must_use = "builder methods must be chained or built"]
    pub fn length(self, length: usize) -> Self {
        self.min_length(length).max_length(length)
    }

    /// Requires the value to match `pattern`.
    #[must_use = "builder methods must be chained or built"]
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self.pattern_message = None;
        self
    }

    /// Compiles `pattern` and requires the value to match it.
    pub fn try_pattern(self, pattern: &str) -> Result<Self, SchemaError> {
        let compiled = Regex::new(pattern).map_err(|source| SchemaError::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })?;
        Ok(self.pattern(compiled))
    }

    /// Requires the value to be one of `values`.
    #[must_use = "builder methods must be chained or built"]
    pub fn one_of<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.one_of = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Requires an email address.
    #[must_use = "builder methods must be chained or built"]
    pub fn email(mut self) -> Self {
        self.pattern = Some(EMAIL_REGEX.clone());
        self.pattern_message = Some("Must be a valid email address");
        self
    }

    /// Requires an `http` or `https` URL.
    #[must_use = "builder methods must be chained or built"]
    pub fn url(mut self) -> Self {
        self.pattern = Some(URL_REGEX.clone());
        self.pattern_message = Some("Must be a valid URL");
        self
    }
}

impl Validate for StringSchema {
    fn kind(&self) -> &'static str {
        "string"
    }

    fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    fn modifiers_mut(&mut self) -> &mut Modifiers {
        &mut self.modifiers
    }

    fn check(&self, value: &Value, cx: &ValidationContext<'_>) -> ValidationResult {
        let path = cx.path();
        let Some(input) = value.as_str() else {
            return ValidationResult::failure(self.modifiers.error(
                "invalid_type",
                "Must be a string",
                path,
            ));
        };

        let mut errors = Vec::new();
        let length = input.chars().count();

        if let Some(min) = self.min_length
            && length < min
        {
            errors.push(self.modifiers.error(
                "min_length",
                format!("Must be at least {min} characters long"),
                path,
            ));
        }

        if let Some(max) = self.max_length
            && length > max
        {
            errors.push(self.modifiers.error(
                "max_length",
                format!("Must be at most {max} characters long"),
                path,
            ));
        }

        if let Some(pattern) = &self.pattern
            && !pattern.is_match(input)
        {
            let message = self.pattern_message.unwrap_or(PATTERN_MESSAGE);
            errors.push(self.modifiers.error("pattern", message, path));
        }

        if let Some(allowed) = &self.one_of
            && !allowed.iter().any(|candidate| candidate == input)
        {
            errors.push(self.modifiers.error(
                "enum",
                format!("Must be one of: {}", allowed.join(", ")),
                path,
            ));
        }

        if errors.is_empty() {
            ValidationResult::success(value.clone())
        } else {
            ValidationResult::from_errors(errors)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
