//! The closed schema type and its factory functions
//!
//! Every validator converts into [`Schema`], which is what composite
//! schemas store for their children. The factory functions are the usual
//! entry point:
//!
//! ```rust,ignore
//! use shapeguard_validator::prelude::*;
//!
//! let signup = object([
//!     ("email", string().email().into()),
//!     ("age", number().integer().min(13).optional().into()),
//!     ("tags", array(string()).max_items(5).unique().into()),
//! ]);
//! ```

use crate::combinators::{ArraySchema, LazySchema, Modifiers, ObjectSchema, UnionSchema};
use crate::foundation::{Validate, ValidationContext, ValidationResult, Value};
use crate::validators::{
    AnySchema, BooleanSchema, DateSchema, LiteralSchema, NumberSchema, StringSchema,
};

// ============================================================================
// SCHEMA
// ============================================================================

/// Any validator, as a single owned type.
///
/// Implements [`Validate`] by delegating to the wrapped variant, so the
/// [`ValidateExt`](crate::foundation::ValidateExt) modifiers work on it
/// directly.
#[derive(Debug, Clone)]
pub enum Schema {
    /// See [`StringSchema`].
    String(StringSchema),
    /// See [`NumberSchema`].
    Number(NumberSchema),
    /// See [`BooleanSchema`].
    Boolean(BooleanSchema),
    /// See [`DateSchema`].
    Date(DateSchema),
    /// See [`ArraySchema`].
    Array(ArraySchema),
    /// See [`ObjectSchema`].
    Object(ObjectSchema),
    /// See [`UnionSchema`].
    Union(UnionSchema),
    /// See [`LiteralSchema`].
    Literal(LiteralSchema),
    /// See [`AnySchema`].
    Any(AnySchema),
    /// See [`LazySchema`].
    Lazy(LazySchema),
}

macro_rules! dispatch {
    ($schema:expr, $inner:ident => $body:expr) => {
        match $schema {
            Schema::String($inner) => $body,
            Schema::Number($inner) => $body,
            Schema::Boolean($inner) => $body,
            Schema::Date($inner) => $body,
            Schema::Array($inner) => $body,
            Schema::Object($inner) => $body,
            Schema::Union($inner) => $body,
            Schema::Literal($inner) => $body,
            Schema::Any($inner) => $body,
            Schema::Lazy($inner) => $body,
        }
    };
}

impl Validate for Schema {
    fn kind(&self) -> &'static str {
        dispatch!(self, inner => inner.kind())
    }

    fn modifiers(&self) -> &Modifiers {
        dispatch!(self, inner => inner.modifiers())
    }

    fn modifiers_mut(&mut self) -> &mut Modifiers {
        dispatch!(self, inner => inner.modifiers_mut())
    }

    fn check(&self, value: &Value, cx: &ValidationContext<'_>) -> ValidationResult {
        dispatch!(self, inner => inner.check(value, cx))
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Schema {
                fn from(schema: $ty) -> Self {
                    Schema::$variant(schema)
                }
            }
        )*
    };
}

impl_from_variant! {
    String(StringSchema),
    Number(NumberSchema),
    Boolean(BooleanSchema),
    Date(DateSchema),
    Array(ArraySchema),
    Object(ObjectSchema),
    Union(UnionSchema),
    Literal(LiteralSchema),
    Any(AnySchema),
    Lazy(LazySchema),
}

// ============================================================================
// FACTORY FUNCTIONS
// ============================================================================

/// A string validator with no rules.
#[must_use]
pub fn string() -> StringSchema {
    StringSchema::new()
}

/// A number validator with no rules.
#[must_use]
pub fn number() -> NumberSchema {
    NumberSchema::new()
}

/// A strict boolean validator.
#[must_use]
pub fn boolean() -> BooleanSchema {
    BooleanSchema::new()
}

/// A date validator with no bounds.
#[must_use]
pub fn date() -> DateSchema {
    DateSchema::new()
}

/// An array validator whose elements must match `item`.
pub fn array(item: impl Into<Schema>) -> ArraySchema {
    ArraySchema::new(item)
}

/// An object validator over `(name, schema)` pairs, strict by default.
pub fn object<I, K>(fields: I) -> ObjectSchema
where
    I: IntoIterator<Item = (K, Schema)>,
    K: Into<String>,
{
    ObjectSchema::new(fields)
}

/// A union trying `candidates` in order.
pub fn union(candidates: impl IntoIterator<Item = Schema>) -> UnionSchema {
    UnionSchema::new(candidates)
}

/// A validator matching exactly `value`.
pub fn literal(value: impl Into<Value>) -> LiteralSchema {
    LiteralSchema::new(value)
}

/// A validator accepting any present value.
#[must_use]
pub fn any() -> AnySchema {
    AnySchema::new()
}

/// A schema built by `init` on first use.
pub fn lazy<F>(init: F) -> LazySchema
where
    F: Fn() -> Schema + Send + Sync + 'static,
{
    LazySchema::new(init)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_schema_dispatches_to_variant() {
        let schema: Schema = string().min_length(3).into();
        assert_eq!(schema.kind(), "string");
        assert_eq!(
            schema.validate(&Value::from("hi")).messages(),
            vec!["Must be at least 3 characters long"]
        );
    }

    #[test]
    fn test_modifiers_apply_through_schema() {
        let schema = Schema::from(number()).optional();
        assert!(schema.modifiers().is_optional());
        assert!(schema.validate(&Value::Null).is_valid());
    }

    #[test]
    fn test_factories_produce_fresh_instances() {
        let a = string().min_length(5);
        let b = string();
        assert!(!a.validate(&Value::from("abc")).is_valid());
        assert!(b.validate(&Value::from("abc")).is_valid());
    }

    #[test]
    fn test_every_variant_converts() {
        let kinds: Vec<&str> = [
            Schema::from(string()),
            number().into(),
            boolean().into(),
            date().into(),
            array(any()).into(),
            object([("a", any().into())]).into(),
            union([string().into()]).into(),
            literal(1).into(),
            any().into(),
            lazy(|| any().into()).into(),
        ]
        .iter()
        .map(Validate::kind)
        .collect();
        assert_eq!(
            kinds,
            vec![
                "string", "number", "boolean", "date", "array", "object", "union", "literal",
                "any", "lazy",
            ]
        );
    }

    #[test]
    fn test_shared_schema_is_reusable() {
        let schema = object([("id", number().integer().into())]);
        for n in 0..3 {
            assert!(schema.validate(&Value::from(json!({"id": n}))).is_valid());
        }
    }
}
