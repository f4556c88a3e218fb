//! Prelude module for convenient imports.
//!
//! Provides a single `use shapeguard_validator::prelude::*;` import that
//! brings in the traits, the value model and every schema factory.
//!
//! # Examples
//!
//! ```rust,ignore
//! use shapeguard_validator::prelude::*;
//!
//! let username = string().min_length(3).max_length(20);
//! let age = number().integer().min(0).optional();
//! let profile = object([("username", username.into()), ("age", age.into())]);
//! ```

// ============================================================================
// FOUNDATION: Traits, values, outcomes
// ============================================================================

pub use crate::foundation::{
    Map, Path, SchemaError, TransformError, Validate, ValidateExt, ValidationError,
    ValidationErrors, ValidationOptions, ValidationResult, Value,
};

// ============================================================================
// SCHEMAS: The sum type, variants and factories
// ============================================================================

pub use crate::combinators::{ArraySchema, LazySchema, ObjectSchema, UnionSchema};
pub use crate::schema::{
    Schema, any, array, boolean, date, lazy, literal, number, object, string, union,
};
pub use crate::validators::{
    AnySchema, BooleanSchema, DateSchema, LiteralSchema, NumberSchema, StringSchema,
};
