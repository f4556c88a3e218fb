//! # shapeguard-validator
//!
//! A composable, schema-driven validator for JSON-like data.
//!
//! A schema is a tree of validators describing the expected shape of a
//! [`Value`](foundation::Value). Validating returns a
//! [`ValidationResult`](foundation::ValidationResult) holding every error
//! found, each with a human message that names where it happened, and the
//! normalized (possibly transformed) value.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shapeguard_validator::prelude::*;
//! use serde_json::json;
//!
//! let user = object([
//!     ("name", string().min_length(1).into()),
//!     ("email", string().email().into()),
//!     ("age", number().integer().positive().optional().into()),
//! ]);
//!
//! let result = user.validate(&Value::from(json!({"name": "Ann", "email": "nope"})));
//! assert_eq!(result.messages(), vec!["Must be a valid email address at email"]);
//! ```
//!
//! ## Building Schemas
//!
//! Start from a factory in [`schema`] and chain builder methods. Every
//! validator also gets the shared modifiers from
//! [`ValidateExt`](foundation::ValidateExt): `optional`, `with_message`,
//! `transform`, `default_value` and `refine`. Recursive shapes use
//! [`lazy`](schema::lazy).
//!
//! ## Built-in Validators
//!
//! - **Leaf**: [`StringSchema`](validators::StringSchema),
//!   [`NumberSchema`](validators::NumberSchema),
//!   [`BooleanSchema`](validators::BooleanSchema),
//!   [`DateSchema`](validators::DateSchema),
//!   [`LiteralSchema`](validators::LiteralSchema),
//!   [`AnySchema`](validators::AnySchema)
//! - **Composite**: [`ArraySchema`](combinators::ArraySchema),
//!   [`ObjectSchema`](combinators::ObjectSchema),
//!   [`UnionSchema`](combinators::UnionSchema),
//!   [`LazySchema`](combinators::LazySchema)

#[macro_use]
mod macros;

pub mod combinators;
pub mod foundation;
pub mod prelude;
pub mod schema;
pub mod validators;

pub use schema::{Schema, any, array, boolean, date, lazy, literal, number, object, string, union};
