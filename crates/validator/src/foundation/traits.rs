//! Core traits for the validation system
//!
//! [`Validate`] is implemented by every schema variant. Variants supply only
//! [`Validate::check`], the type-specific rules; the provided
//! [`Validate::validate_in`] wraps it with the behaviour shared by all of
//! them (optionality, defaults, refinements, transforms, depth guard).
//! [`ValidateExt`] adds the fluent modifier methods on top.

use std::sync::Arc;

use crate::combinators::modifiers::{Modifiers, located};
use crate::foundation::{
    Path, TransformError, ValidationContext, ValidationOptions, ValidationResult, Value,
};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every validator implements.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard_validator::prelude::*;
///
/// let result = string().min_length(3).validate(&Value::from("hi"));
/// assert!(!result.is_valid());
/// assert_eq!(result.messages(), vec!["Must be at least 3 characters long"]);
/// ```
pub trait Validate {
    /// Short name of the variant, used in traces.
    fn kind(&self) -> &'static str;

    /// Shared modifier state.
    fn modifiers(&self) -> &Modifiers;

    /// Mutable access used by the [`ValidateExt`] builder methods.
    fn modifiers_mut(&mut self) -> &mut Modifiers;

    /// Variant-specific rules for a present, non-null value.
    ///
    /// Implementations collect every violation they can find rather than
    /// stopping at the first, and render messages through
    /// [`Modifiers::error`].
    fn check(&self, value: &Value, cx: &ValidationContext<'_>) -> ValidationResult;

    /// Validates a root value with default options.
    fn validate(&self, value: &Value) -> ValidationResult {
        self.validate_with(value, &ValidationOptions::default())
    }

    /// Validates a root value with explicit options.
    fn validate_with(&self, value: &Value, options: &ValidationOptions) -> ValidationResult {
        let span = tracing::trace_span!("validate", kind = self.kind());
        let _entered = span.enter();

        let result = self.validate_in(Some(value), &ValidationContext::root(options));
        tracing::debug!(
            valid = result.is_valid(),
            errors = result.errors().len(),
            "validation finished"
        );
        result
    }

    /// Validates a possibly absent value as if it sat at `path`.
    fn validate_at(&self, value: Option<&Value>, path: impl Into<Path>) -> ValidationResult
    where
        Self: Sized,
    {
        let options = ValidationOptions::default();
        self.validate_in(value, &ValidationContext::at(&options, path.into()))
    }

    /// Runs the full validator contract at the context's location.
    ///
    /// 1. Null or absent input takes the default if one is set; otherwise it
    ///    passes through unchanged when optional and fails as required when not.
    /// 2. [`Validate::check`] runs the variant rules.
    /// 3. Refinements run on the checked value.
    /// 4. The transform maps the value; a failing or panicking transform
    ///    turns the result into a failure.
    fn validate_in(&self, value: Option<&Value>, cx: &ValidationContext<'_>) -> ValidationResult {
        let modifiers = self.modifiers();
        let path = cx.path();

        if cx.too_deep() {
            tracing::warn!(
                path = %path,
                max_depth = cx.options().max_depth,
                "schema nesting exceeds the depth limit"
            );
            return ValidationResult::failure(located("max_depth", "Schema too deep", path));
        }

        let value = match value {
            Some(present) if !present.is_null() => present,
            _ => match modifiers.default_value() {
                Some(default) => default,
                None if modifiers.is_optional() => return ValidationResult::success(value.cloned()),
                None => {
                    return ValidationResult::failure(modifiers.error(
                        "required",
                        "Field is required",
                        path,
                    ));
                }
            },
        };

        let mut result = self.check(value, cx);
        if !result.is_valid() {
            return result;
        }

        let refinement_errors = modifiers.refine(result.value().unwrap_or(value), path);
        if !refinement_errors.is_empty() {
            return ValidationResult::from_errors(refinement_errors);
        }

        match result.take_value() {
            Some(checked) => match modifiers.apply_transform(checked, path) {
                Ok(transformed) => result.with_value(transformed),
                Err(error) => ValidationResult::failure(error),
            },
            None => result,
        }
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Fluent modifiers available on every validator.
///
/// Each method consumes the validator and returns it reconfigured, so a
/// finished schema is an ordinary immutable value that can be shared across
/// threads.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard_validator::prelude::*;
///
/// let nickname = string()
///     .max_length(20)
///     .optional()
///     .transform(|value| Ok(value));
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Lets null and absent values pass through unchanged.
    fn optional(mut self) -> Self {
        self.modifiers_mut().set_optional(true);
        self
    }

    /// Replaces every validation message this validator produces.
    ///
    /// The message is used verbatim, without a location suffix. Errors from
    /// child validators and transform failures keep their own messages.
    fn with_message(mut self, message: impl Into<String>) -> Self {
        self.modifiers_mut().set_message(message);
        self
    }

    /// Registers a mapping applied to the value after it validates.
    fn transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(Value) -> Result<Value, TransformError> + Send + Sync + 'static,
    {
        self.modifiers_mut().set_transform(Arc::new(transform));
        self
    }

    /// Substitutes `value` for null or absent input, then validates it.
    fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.modifiers_mut().set_default(value.into());
        self
    }

    /// Adds a predicate that must hold once the built-in rules pass.
    fn refine<F>(mut self, check: F, message: impl Into<String>) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.modifiers_mut().push_refinement(Arc::new(check), message);
        self
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
