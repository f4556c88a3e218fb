//! Boolean validator

use crate::combinators::modifiers::Modifiers;
use crate::foundation::{Validate, ValidationContext, ValidationResult, Value};

/// Validates that a value is strictly a boolean. Truthy and falsy values of
/// other types are not coerced.
#[derive(Debug, Clone, Default)]
pub struct BooleanSchema {
    modifiers: Modifiers,
}

impl BooleanSchema {
    /// Creates a boolean validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validate for BooleanSchema {
    fn kind(&self) -> &'static str {
        "boolean"
    }

    fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    fn modifiers_mut(&mut self) -> &mut Modifiers {
        &mut self.modifiers
    }

    fn check(&self, value: &Value, cx: &ValidationContext<'_>) -> ValidationResult {
        if value.as_bool().is_some() {
            ValidationResult::success(value.clone())
        } else {
            ValidationResult::failure(self.modifiers.error(
                "invalid_type",
                "Must be a boolean",
                cx.path(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_accepts_booleans() {
        assert!(BooleanSchema::new().validate(&Value::Bool(true)).is_valid());
        assert!(BooleanSchema::new().validate(&Value::Bool(false)).is_valid());
    }

    #[rstest]
    #[case(Value::from(1))]
    #[case(Value::from(0))]
    #[case(Value::from("true"))]
    #[case(Value::Array(vec![]))]
    fn test_no_coercion(#[case] input: Value) {
        let result = BooleanSchema::new().validate(&input);
        assert_eq!(result.messages(), vec!["Must be a boolean"]);
    }
}
