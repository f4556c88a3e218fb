//! Composite schemas and the modifier state shared by every schema
//!
//! - [`ArraySchema`]: homogeneous sequences
//! - [`ObjectSchema`]: records with a declared field shape
//! - [`UnionSchema`]: ordered alternatives
//! - [`LazySchema`]: deferred construction for recursive shapes
//! - [`Modifiers`]: optionality, custom message, default, refinements, transform

pub mod array;
pub mod lazy;
pub mod modifiers;
pub mod object;
pub mod union;

pub use array::ArraySchema;
pub use lazy::{LazySchema, SchemaFactory};
pub use modifiers::{Modifiers, RefineFn, TransformFn, locate, located};
pub use object::ObjectSchema;
pub use union::UnionSchema;
