//! Shared validator modifiers
//!
//! Every schema variant embeds one [`Modifiers`] value. It holds the state
//! behind the behaviour all validators share: optionality, a default for
//! missing values, the custom message override, refinements, and the
//! post-validation transform. The traversal in
//! [`Validate::validate_in`](crate::foundation::Validate::validate_in) reads
//! it; variants only use [`Modifiers::error`] to render their messages.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::foundation::{Path, TransformError, ValidationError, Value};

/// Post-validation mapping registered with `transform`.
pub type TransformFn = Arc<dyn Fn(Value) -> Result<Value, TransformError> + Send + Sync>;

/// Extra predicate registered with `refine`.
pub type RefineFn = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

#[derive(Clone)]
struct Refinement {
    check: RefineFn,
    message: String,
}

// ============================================================================
// MODIFIERS
// ============================================================================

/// Configuration shared by every validator variant.
#[derive(Clone, Default)]
pub struct Modifiers {
    optional: bool,
    message: Option<String>,
    default: Option<Value>,
    refinements: Vec<Refinement>,
    transform: Option<TransformFn>,
}

impl Modifiers {
    /// Whether null and absent values pass.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// The custom message, if one was set.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The value substituted for null or absent input.
    #[must_use]
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Whether a transform is registered.
    #[must_use]
    pub fn has_transform(&self) -> bool {
        self.transform.is_some()
    }

    pub fn set_optional(&mut self, optional: bool) {
        self.optional = optional;
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn set_default(&mut self, value: Value) {
        self.default = Some(value);
    }

    pub fn set_transform(&mut self, transform: TransformFn) {
        self.transform = Some(transform);
    }

    pub fn push_refinement(&mut self, check: RefineFn, message: impl Into<String>) {
        self.refinements.push(Refinement {
            check,
            message: message.into(),
        });
    }

    /// Renders a message for this validator.
    ///
    /// The custom message wins outright. Otherwise the default message gets
    /// `" at <path>"` appended when the path is not the root.
    #[must_use]
    pub fn format_error(&self, message: &str, path: &Path) -> String {
        match &self.message {
            Some(custom) => custom.clone(),
            None => locate(message, path),
        }
    }

    /// Builds a [`ValidationError`] whose message follows [`Modifiers::format_error`].
    pub fn error(
        &self,
        code: impl Into<Cow<'static, str>>,
        message: impl AsRef<str>,
        path: &Path,
    ) -> ValidationError {
        with_path(
            ValidationError::new(code, self.format_error(message.as_ref(), path)),
            path,
        )
    }

    /// Runs every refinement against an already-valid value.
    pub(crate) fn refine(&self, value: &Value, path: &Path) -> Vec<ValidationError> {
        self.refinements
            .iter()
            .filter(|refinement| !(refinement.check)(value))
            .map(|refinement| self.error("custom", &refinement.message, path))
            .collect()
    }

    /// Applies the transform, converting both returned errors and panics
    /// into a `transform` failure.
    pub(crate) fn apply_transform(&self, value: Value, path: &Path) -> Result<Value, ValidationError> {
        let Some(transform) = &self.transform else {
            return Ok(value);
        };

        let reason = match panic::catch_unwind(AssertUnwindSafe(|| transform(value))) {
            Ok(Ok(transformed)) => return Ok(transformed),
            Ok(Err(error)) => error.to_string(),
            Err(payload) => panic_message(payload.as_ref()),
        };

        tracing::debug!(path = %path, %reason, "transform failed");
        Err(located(
            "transform",
            &format!("Transformation failed: {reason}"),
            path,
        ))
    }
}

impl fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modifiers")
            .field("optional", &self.optional)
            .field("message", &self.message)
            .field("default", &self.default)
            .field("refinements", &self.refinements.len())
            .field("transform", &self.transform.as_ref().map(|_| "<function>"))
            .finish()
    }
}

/// Appends `" at <path>"` unless `path` renders empty.
///
/// A field named `""` directly under the root renders empty too, so the
/// decision is made on the rendered text rather than the segment count.
#[must_use]
pub fn locate(message: &str, path: &Path) -> String {
    let rendered = path.to_string();
    if rendered.is_empty() {
        message.to_owned()
    } else {
        format!("{message} at {rendered}")
    }
}

/// Builds an error that ignores any custom message.
pub fn located(code: impl Into<Cow<'static, str>>, message: &str, path: &Path) -> ValidationError {
    with_path(ValidationError::new(code, locate(message, path)), path)
}

fn with_path(error: ValidationError, path: &Path) -> ValidationError {
    let rendered = path.to_string();
    if rendered.is_empty() {
        error
    } else {
        error.with_path(rendered)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "transform panicked".to_owned()
    }
}

// ============================================================================
// TESTS
// ============================================================================
