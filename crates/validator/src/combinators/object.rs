//! OBJECT combinator - validates a record against a field shape
//!
//! Each declared field is validated by its own schema at path `name`, with
//! an absent key handed to the child as absent so optional fields and
//! defaults work. Keys outside the shape are rejected in strict mode (the
//! default) or copied through untouched in passthrough mode.

use indexmap::{IndexMap, IndexSet};

use crate::combinators::modifiers::Modifiers;
use crate::foundation::{Map, Validate, ValidationContext, ValidationResult, Value};
use crate::schema::Schema;

// ============================================================================
// OBJECT SCHEMA
// ============================================================================

/// Validates an object whose fields follow a declared shape.
///
/// Errors are reported in a fixed order: missing required keys, then field
/// errors in declaration order, then unknown keys in input order.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard_validator::prelude::*;
///
/// let user = object([
///     ("name", string().min_length(1).into()),
///     ("age", number().integer().optional().into()),
/// ]);
///
/// let result = user.validate(&Value::from(json!({"name": "Ann", "role": "x"})));
/// assert_eq!(result.messages(), vec!["Unknown field: role"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    modifiers: Modifiers,
    fields: IndexMap<String, Schema>,
    required: IndexSet<String>,
    passthrough: bool,
}

impl ObjectSchema {
    /// Creates an object validator from `(name, schema)` pairs.
    ///
    /// A repeated name keeps its first position and its last schema.
    pub fn new<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(name, schema)| (name.into(), schema))
                .collect(),
            ..Self::default()
        }
    }

    /// Adds or replaces a field.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        self.fields.insert(name.into(), schema.into());
        self
    }

    /// Rejects keys that are not declared fields. This is the default.
    #[must_use = "builder methods must be chained or built"]
    pub fn strict(mut self) -> Self {
        self.passthrough = false;
        self
    }

    /// Copies undeclared keys into the output unchanged.
    #[must_use = "builder methods must be chained or built"]
    pub fn passthrough(mut self) -> Self {
        self.passthrough = true;
        self
    }

    /// Requires every key in `keys` to be present, even when the field's
    /// own schema is optional.
    #[must_use = "builder methods must be chained or built"]
    pub fn required<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.required.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Requires a single key to be present.
    #[must_use = "builder methods must be chained or built"]
    pub fn require(self, key: impl Into<String>) -> Self {
        self.required([key])
    }

    /// Declared fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &IndexMap<String, Schema> {
        &self.fields
    }

    /// Looks up a declared field's schema.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.fields.get(name)
    }

    /// Whether undeclared keys are accepted.
    #[must_use]
    pub fn allows_unknown(&self) -> bool {
        self.passthrough
    }
}

impl Validate for ObjectSchema {
    fn kind(&self) -> &'static str {
        "object"
    }

    fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    fn modifiers_mut(&mut self) -> &mut Modifiers {
        &mut self.modifiers
    }

    fn check(&self, value: &Value, cx: &ValidationContext<'_>) -> ValidationResult {
        let path = cx.path();
        let Some(input) = value.as_object() else {
            return ValidationResult::failure(self.modifiers.error(
                "invalid_type",
                "Must be an object",
                path,
            ));
        };

        let mut result = ValidationResult::from_errors(
            self.required
                .iter()
                .filter(|key| !input.contains_key(key.as_str()))
                .map(|key| {
                    self.modifiers
                        .error("missing_field", format!("Missing required field: {key}"), path)
                })
                .collect(),
        );

        let mut output = Map::with_capacity(input.len());

        for (name, schema) in &self.fields {
            let field_result = schema.validate_in(input.get(name), &cx.field(name));
            if field_result.is_valid() {
                if let Some(field_value) = field_result.into_value() {
                    output.insert(name.clone(), field_value);
                }
            } else {
                result.merge(field_result);
            }
        }

        for (key, extra) in input {
            if self.fields.contains_key(key) {
                continue;
            }
            if self.passthrough {
                output.insert(key.clone(), extra.clone());
            } else {
                result.add_error(self.modifiers.error(
                    "unknown_field",
                    format!("Unknown field: {key}"),
                    path,
                ));
            }
        }

        result.with_value(Value::Object(output))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::schema::{boolean, number, string};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn user() -> ObjectSchema {
        ObjectSchema::new([
            ("name", string().min_length(1).into()),
            ("age", number().integer().optional().into()),
        ])
    }

    fn run(schema: &ObjectSchema, input: serde_json::Value) -> ValidationResult {
        schema.validate(&Value::from(input))
    }

    #[test]
    fn test_valid_object_keeps_declared_fields() {
        let result = run(&user(), json!({"name": "Ann", "age": 30}));
        assert!(result.is_valid());
        assert_eq!(
            result.into_value(),
            Some(Value::from(json!({"name": "Ann", "age": 30})))
        );
    }

    #[test]
    fn test_absent_optional_field_is_omitted() {
        let result = run(&user(), json!({"name": "Ann"}));
        assert!(result.is_valid());
        assert_eq!(result.into_value(), Some(Value::from(json!({"name": "Ann"}))));
    }

    #[test]
    fn test_absent_required_field() {
        let result = run(&user(), json!({}));
        assert_eq!(result.messages(), vec!["Field is required at name"]);
        assert_eq!(result.errors()[0].path.as_deref(), Some("name"));
    }

    #[test]
    fn test_empty_key_at_root_has_no_location() {
        let schema = ObjectSchema::new([("", string().into())]);
        let result = run(&schema, json!({}));
        assert_eq!(result.messages(), vec!["Field is required"]);
        assert_eq!(result.errors()[0].path, None);
        assert!(run(&schema, json!({"": "x"})).is_valid());
    }

    #[test]
    fn test_rejects_non_objects() {
        for input in [json!([]), json!("x"), json!(1)] {
            assert_eq!(run(&user(), input).messages(), vec!["Must be an object"]);
        }
    }

    #[test]
    fn test_strict_rejects_unknown_keys() {
        let result = run(&user(), json!({"name": "Ann", "role": "admin", "x": 1}));
        assert_eq!(
            result.messages(),
            vec!["Unknown field: role", "Unknown field: x"]
        );
    }

    #[test]
    fn test_passthrough_copies_unknown_keys() {
        let result = run(&user().passthrough(), json!({"role": "admin", "name": "Ann"}));
        assert!(result.is_valid());
        assert_eq!(
            result.into_value(),
            Some(Value::from(json!({"name": "Ann", "role": "admin"})))
        );
    }

    #[test]
    fn test_strict_after_passthrough_restores_default() {
        assert!(!user().allows_unknown());
        assert!(user().passthrough().allows_unknown());
        assert!(!user().passthrough().strict().allows_unknown());
        let result = run(&user().passthrough().strict(), json!({"name": "Ann", "x": 1}));
        assert_eq!(result.messages(), vec!["Unknown field: x"]);
    }

    #[test]
    fn test_required_keys_checked_before_fields() {
        let schema = user().require("age");
        let result = run(&schema, json!({"name": ""}));
        assert_eq!(
            result.messages(),
            vec![
                "Missing required field: age",
                "Must be at least 1 characters long at name",
            ]
        );
    }

    #[test]
    fn test_required_key_present_as_null_passes_presence_check() {
        let schema = user().required(["age"]);
        assert!(run(&schema, json!({"name": "Ann", "age": null})).is_valid());
    }

    #[test]
    fn test_nested_error_paths() {
        let schema = ObjectSchema::new([(
            "user",
            ObjectSchema::new([("email", string().email().into())]).into(),
        )]);
        let result = run(&schema, json!({"user": {"email": "nope"}}));
        assert_eq!(
            result.messages(),
            vec!["Must be a valid email address at user.email"]
        );
        assert_eq!(result.errors()[0].path.as_deref(), Some("user.email"));
    }

    #[test]
    fn test_partial_value_on_failure() {
        let schema = ObjectSchema::new([
            ("a", string().into()),
            ("b", number().into()),
        ]);
        let result = run(&schema, json!({"a": "ok", "b": "bad"}));
        assert!(!result.is_valid());
        assert_eq!(result.into_value(), Some(Value::from(json!({"a": "ok"}))));
    }

    #[test]
    fn test_field_default_fills_missing_key() {
        let schema = ObjectSchema::new([("active", boolean().default_value(true).into())]);
        assert_eq!(
            run(&schema, json!({})).into_value(),
            Some(Value::from(json!({"active": true})))
        );
    }

    #[test]
    fn test_field_builder_replaces_in_place() {
        let schema = user().field("name", number());
        assert_eq!(schema.fields().keys().collect::<Vec<_>>(), vec!["name", "age"]);
        assert!(run(&schema, json!({"name": 1})).is_valid());
    }
}
