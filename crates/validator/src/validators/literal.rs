//! Literal validator

use crate::combinators::modifiers::Modifiers;
use crate::foundation::{Validate, ValidationContext, ValidationResult, Value};

/// Validates that a value equals one exact expected value.
///
/// Equality is strict: the types must match, so the string `"1"` does not
/// equal the number `1`. Arrays and objects compare structurally.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard_validator::prelude::*;
///
/// let role = literal("admin");
/// assert!(role.validate(&Value::from("admin")).is_valid());
/// assert_eq!(
///     role.validate(&Value::from("user")).messages(),
///     vec![r#"Must be exactly: "admin""#],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct LiteralSchema {
    modifiers: Modifiers,
    expected: Value,
}

impl LiteralSchema {
    /// Creates a validator matching `expected`.
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            modifiers: Modifiers::default(),
            expected: expected.into(),
        }
    }

    /// The value this validator matches.
    #[must_use]
    pub fn expected(&self) -> &Value {
        &self.expected
    }
}

impl Validate for LiteralSchema {
    fn kind(&self) -> &'static str {
        "literal"
    }

    fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    fn modifiers_mut(&mut self) -> &mut Modifiers {
        &mut self.modifiers
    }

    fn check(&self, value: &Value, cx: &ValidationContext<'_>) -> ValidationResult {
        if *value == self.expected {
            ValidationResult::success(value.clone())
        } else {
            ValidationResult::failure(self.modifiers.error(
                "literal",
                format!("Must be exactly: {}", self.expected.to_json_string()),
                cx.path(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_matches_exact_value() {
        assert!(LiteralSchema::new(42).validate(&Value::from(42)).is_valid());
        assert!(LiteralSchema::new(true).validate(&Value::Bool(true)).is_valid());
    }

    #[test]
    fn test_type_must_match() {
        let result = LiteralSchema::new(1).validate(&Value::from("1"));
        assert_eq!(result.messages(), vec!["Must be exactly: 1"]);
    }

    #[test]
    fn test_string_expected_is_quoted() {
        let result = LiteralSchema::new("admin").validate(&Value::from("root"));
        assert_eq!(result.messages(), vec![r#"Must be exactly: "admin""#]);
    }

    #[test]
    fn test_composite_compares_structurally() {
        let schema = LiteralSchema::new(Value::from(json!({"a": 1, "b": [true]})));
        assert!(
            schema
                .validate(&Value::from(json!({"b": [true], "a": 1})))
                .is_valid()
        );
        assert!(!schema.validate(&Value::from(json!({"a": 1}))).is_valid());
    }

    #[test]
    fn test_null_literal_is_unreachable_without_optional() {
        // Null never reaches `check`: the required rule answers first.
        let result = LiteralSchema::new(Value::Null).validate(&Value::Null);
        assert_eq!(result.messages(), vec!["Field is required"]);
    }
}
