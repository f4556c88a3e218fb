//! Number validator

use crate::combinators::modifiers::Modifiers;
use crate::foundation::{Validate, ValidationContext, ValidationResult, Value, format_number};

/// Validates that a value is a finite number and satisfies the configured
/// bounds.
///
/// A non-number, `NaN` or an infinity fails with `Must be a valid number`
/// and no other rule is checked. Otherwise all violated rules are reported.
#[derive(Debug, Clone, Default)]
pub struct NumberSchema {
    modifiers: Modifiers,
    min: Option<f64>,
    max: Option<f64>,
    integer: bool,
    positive: bool,
}

impl NumberSchema {
    /// Creates a number validator with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inclusive lower bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: impl Into<f64>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Inclusive upper bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: impl Into<f64>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Rejects values with a fractional part.
    #[must_use = "builder methods must be chained or built"]
    pub fn integer(mut self) -> Self {
        self.integer = true;
        self
    }

    /// Rejects zero and negative values.
    #[must_use = "builder methods must be chained or built"]
    pub fn positive(mut self) -> Self {
        self.positive = true;
        self
    }
}

impl Validate for NumberSchema {
    fn kind(&self) -> &'static str {
        "number"
    }

    fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    fn modifiers_mut(&mut self) -> &mut Modifiers {
        &mut self.modifiers
    }

    fn check(&self, value: &Value, cx: &ValidationContext<'_>) -> ValidationResult {
        let path = cx.path();
        let n = match value.as_f64() {
            Some(n) if n.is_finite() => n,
            _ => {
                return ValidationResult::failure(self.modifiers.error(
                    "invalid_type",
                    "Must be a valid number",
                    path,
                ));
            }
        };

        let mut errors = Vec::new();

        if let Some(min) = self.min
            && n < min
        {
            errors.push(self.modifiers.error(
                "min",
                format!("Must be at least {}", format_number(min)),
                path,
            ));
        }

        if let Some(max) = self.max
            && n > max
        {
            errors.push(self.modifiers.error(
                "max",
                format!("Must be at most {}", format_number(max)),
                path,
            ));
        }

        if self.integer && n.fract() != 0.0 {
            errors.push(self.modifiers.error("integer", "Must be an integer", path));
        }

        if self.positive && n <= 0.0 {
            errors.push(self.modifiers.error("positive", "Must be positive", path));
        }

        if errors.is_empty() {
            ValidationResult::success(value.clone())
        } else {
            ValidationResult::from_errors(errors)
        }
    }
}
