//! Macros for building composite schemas with less noise.
//!
//! # Available Macros
//!
//! - [`object!`] - an [`ObjectSchema`](crate::combinators::ObjectSchema) from `key => schema` pairs
//! - [`union!`] - a [`UnionSchema`](crate::combinators::UnionSchema) from a list of alternatives
//!
//! Both convert each child into [`Schema`](crate::schema::Schema), so no
//! `.into()` calls are needed.
//!
//! # Examples
//!
//! ```rust,ignore
//! use shapeguard_validator::prelude::*;
//! use shapeguard_validator::{object, union};
//!
//! let user = object! {
//!     "name" => string().min_length(1),
//!     "id" => union![string(), number().integer()],
//!     "address" => object! {
//!         "city" => string(),
//!     },
//! }
//! .strict();
//! ```

// ============================================================================
// OBJECT MACRO
// ============================================================================

/// Builds an [`ObjectSchema`](crate::combinators::ObjectSchema) from
/// `key => schema` pairs, kept in the order written.
///
/// ```rust,ignore
/// let point = object! { "x" => number(), "y" => number() };
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::combinators::ObjectSchema::default()
    };
    ($($key:expr => $schema:expr),+ $(,)?) => {
        $crate::schema::object([
            $(($key, $crate::schema::Schema::from($schema))),+
        ])
    };
}

// ============================================================================
// UNION MACRO
// ============================================================================

/// Builds a [`UnionSchema`](crate::combinators::UnionSchema) trying each
/// alternative in the order written.
///
/// ```rust,ignore
/// let id = union![string().min_length(1), number().integer()];
/// ```
#[macro_export]
macro_rules! union {
    ($($schema:expr),* $(,)?) => {
        $crate::schema::union([
            $($crate::schema::Schema::from($schema)),*
        ])
    };
}
