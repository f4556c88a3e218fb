//! Leaf validators
//!
//! Each validator checks a single JSON-like value kind. They are built
//! through the factory functions in [`crate::schema`] and configured with
//! chained builder methods.

pub mod any;
pub mod boolean;
pub mod date;
pub mod literal;
pub mod number;
pub mod string;

pub use any::AnySchema;
pub use boolean::BooleanSchema;
pub use date::{DateSchema, to_date};
pub use literal::LiteralSchema;
pub use number::NumberSchema;
pub use string::StringSchema;
