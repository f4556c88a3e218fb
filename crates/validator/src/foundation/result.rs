//! Validation outcome
//!
//! [`ValidationResult`] is what every validator returns. Validity is derived
//! from the error list, so `is_valid() == errors().is_empty()` holds by
//! construction.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::foundation::{ValidationError, ValidationErrors, Value};

/// Outcome of running a value through a validator.
///
/// `value` is `None` when the value was absent (an optional field that was
/// not supplied) and, by convention, on failure. Arrays and objects are the
/// exception: on failure they still carry the subset of items or fields that
/// did validate.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
    value: Option<Value>,
}

impl ValidationResult {
    /// A passing result carrying `value`.
    ///
    /// Pass `None` to represent an absent value.
    pub fn success(value: impl Into<Option<Value>>) -> Self {
        Self {
            errors: Vec::new(),
            value: value.into(),
        }
    }

    /// A failing result with a single error and no value.
    #[must_use]
    pub fn failure(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
            value: None,
        }
    }

    /// A result holding every error in `errors`.
    ///
    /// An empty list produces a passing result.
    #[must_use]
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            errors,
            value: None,
        }
    }

    /// Replaces the carried value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_value(mut self, value: impl Into<Option<Value>>) -> Self {
        self.value = value.into();
        self
    }

    /// Appends an error, making the result invalid.
    pub fn add_error(&mut self, error: ValidationError) -> &mut Self {
        self.errors.push(error);
        self
    }

    /// Appends the errors of `other` if it failed.
    ///
    /// A passing `other` leaves `self` untouched; its value is ignored.
    pub fn merge(&mut self, other: ValidationResult) -> &mut Self {
        self.errors.extend(other.errors);
        self
    }

    /// `true` iff no errors were produced.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors in discovery order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Rendered error messages in discovery order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    /// The validated (possibly transformed) value.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Takes the value out of the result.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        self.value
    }

    pub(crate) fn take_value(&mut self) -> Option<Value> {
        self.value.take()
    }

    /// Splits into the value and the errors.
    #[must_use]
    pub fn into_parts(self) -> (Option<Value>, Vec<ValidationError>) {
        (self.value, self.errors)
    }

    /// Converts into a `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<Option<Value>, ValidationErrors> {
        if self.errors.is_empty() {
            Ok(self.value)
        } else {
            Err(ValidationErrors::new(self.errors))
        }
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 3)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("errors", &self.messages())?;
        state.serialize_field("value", &self.value)?;
        state.end()
    }
}

// ============================================================================
// TESTS
// ============================================================================
