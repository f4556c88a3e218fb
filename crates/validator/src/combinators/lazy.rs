//! LAZY combinator - deferred schema construction
//!
//! Builds its inner schema on first use, which is what makes a schema able
//! to refer to itself. Every pass through a lazy schema counts as one level
//! of nesting, so runaway recursion ends in a `Schema too deep` error
//! instead of exhausting the stack.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::combinators::modifiers::Modifiers;
use crate::foundation::{Validate, ValidationContext, ValidationResult, Value};
use crate::schema::Schema;

/// Function producing the deferred schema.
pub type SchemaFactory = Arc<dyn Fn() -> Schema + Send + Sync>;

/// Schema resolved from a factory the first time it validates.
///
/// Clones share both the factory and the resolved schema.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard_validator::prelude::*;
///
/// fn category() -> Schema {
///     object([
///         ("name", string().into()),
///         ("children", array(lazy(category)).optional().into()),
///     ])
///     .into()
/// }
///
/// let tree = Value::from(json!({"name": "root", "children": [{"name": "leaf"}]}));
/// assert!(category().validate(&tree).is_valid());
/// ```
#[derive(Clone)]
pub struct LazySchema {
    modifiers: Modifiers,
    factory: SchemaFactory,
    resolved: Arc<OnceLock<Schema>>,
}

impl LazySchema {
    /// Creates a lazy schema from `factory`.
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Schema + Send + Sync + 'static,
    {
        Self {
            modifiers: Modifiers::default(),
            factory: Arc::new(factory),
            resolved: Arc::new(OnceLock::new()),
        }
    }

    /// Returns the inner schema, building it on first call.
    pub fn resolve(&self) -> &Schema {
        self.resolved.get_or_init(|| (self.factory)())
    }

    /// Whether the inner schema has been built yet.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }
}

impl fmt::Debug for LazySchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySchema")
            .field("modifiers", &self.modifiers)
            .field("resolved", &self.is_resolved())
            .finish_non_exhaustive()
    }
}

impl Validate for LazySchema {
    fn kind(&self) -> &'static str {
        "lazy"
    }

    fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    fn modifiers_mut(&mut self) -> &mut Modifiers {
        &mut self.modifiers
    }

    fn check(&self, value: &Value, cx: &ValidationContext<'_>) -> ValidationResult {
        self.resolve().validate_in(Some(value), &cx.descend())
    }
}
