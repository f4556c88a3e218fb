//! Accept-all validator

use crate::combinators::modifiers::Modifiers;
use crate::foundation::{Validate, ValidationContext, ValidationResult, Value};

/// Accepts every present value unchanged.
///
/// Null and absent input still go through the usual required/optional
/// handling, and a registered transform still runs.
#[derive(Debug, Clone, Default)]
pub struct AnySchema {
    modifiers: Modifiers,
}

impl AnySchema {
    /// Creates an accept-all validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validate for AnySchema {
    fn kind(&self) -> &'static str {
        "any"
    }

    fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    fn modifiers_mut(&mut self) -> &mut Modifiers {
        &mut self.modifiers
    }

    fn check(&self, value: &Value, _cx: &ValidationContext<'_>) -> ValidationResult {
        ValidationResult::success(value.clone())
    }
}
