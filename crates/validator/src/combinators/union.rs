//! UNION combinator - first matching alternative wins
//!
//! Alternatives are tried in declaration order. The first one that accepts
//! the value decides the outcome; its result, transforms included, is
//! returned as is. When none accept, the failure lists a summary error
//! followed by every alternative's errors in order.

use crate::combinators::modifiers::Modifiers;
use crate::foundation::{Validate, ValidationContext, ValidationResult, Value};
use crate::schema::Schema;

/// Validates a value against a list of alternatives.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard_validator::prelude::*;
///
/// let id = union([string().into(), number().into()]);
/// assert!(id.validate(&Value::from(7)).is_valid());
///
/// let result = id.validate(&Value::Bool(true));
/// assert_eq!(
///     result.messages(),
///     vec![
///         "Value does not match any of the expected types",
///         "Must be a string",
///         "Must be a valid number",
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct UnionSchema {
    modifiers: Modifiers,
    candidates: Vec<Schema>,
}

impl UnionSchema {
    /// Creates a union over `candidates`, tried in order.
    pub fn new(candidates: impl IntoIterator<Item = Schema>) -> Self {
        Self {
            modifiers: Modifiers::default(),
            candidates: candidates.into_iter().collect(),
        }
    }

    /// Appends another alternative.
    #[must_use = "builder methods must be chained or built"]
    pub fn or(mut self, candidate: impl Into<Schema>) -> Self {
        self.candidates.push(candidate.into());
        self
    }

    /// The alternatives in the order they are tried.
    #[must_use]
    pub fn candidates(&self) -> &[Schema] {
        &self.candidates
    }
}

impl Validate for UnionSchema {
    fn kind(&self) -> &'static str {
        "union"
    }

    fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    fn modifiers_mut(&mut self) -> &mut Modifiers {
        &mut self.modifiers
    }

    fn check(&self, value: &Value, cx: &ValidationContext<'_>) -> ValidationResult {
        let mut errors = vec![self.modifiers.error(
            "union",
            "Value does not match any of the expected types",
            cx.path(),
        )];

        for candidate in &self.candidates {
            let result = candidate.validate_in(Some(value), cx);
            if result.is_valid() {
                return result;
            }
            errors.extend(result.into_parts().1);
        }

        ValidationResult::from_errors(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::schema::{literal, number, string};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_match_wins() {
        let schema = UnionSchema::new([
            string().transform(|_| Ok(Value::from("first"))).into(),
            string().transform(|_| Ok(Value::from("second"))).into(),
        ]);
        assert_eq!(
            schema.validate(&Value::from("x")).into_value(),
            Some(Value::from("first"))
        );
    }

    #[test]
    fn test_falls_through_to_later_candidate() {
        let schema = UnionSchema::new([string().into(), number().into()]);
        let result = schema.validate(&Value::from(3));
        assert!(result.is_valid());
        assert_eq!(result.into_value(), Some(Value::from(3)));
    }

    #[test]
    fn test_failure_lists_summary_then_every_candidate() {
        let schema = UnionSchema::new([string().min_length(3).into(), number().into()]);
        let result = schema.validate(&Value::from("ab"));
        assert_eq!(
            result.messages(),
            vec![
                "Value does not match any of the expected types",
                "Must be at least 3 characters long",
                "Must be a valid number",
            ]
        );
        assert_eq!(result.errors()[0].code, "union");
    }

    #[test]
    fn test_or_appends_candidates() {
        let schema = UnionSchema::new([literal("a").into()]).or(literal("b"));
        assert_eq!(schema.candidates().len(), 2);
        assert!(schema.validate(&Value::from("b")).is_valid());
    }

    #[test]
    fn test_empty_union_rejects_everything() {
        let result = UnionSchema::default().validate(&Value::from(1));
        assert_eq!(
            result.messages(),
            vec!["Value does not match any of the expected types"]
        );
    }

    #[test]
    fn test_nested_summary_has_location() {
        let schema = UnionSchema::new([string().into()]);
        let result = schema.validate_at(Some(&Value::from(1)), "id");
        assert_eq!(
            result.messages(),
            vec![
                "Value does not match any of the expected types at id",
                "Must be a string at id",
            ]
        );
    }
}
