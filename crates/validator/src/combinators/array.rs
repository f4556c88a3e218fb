//! ARRAY combinator - validates a homogeneous sequence
//!
//! Every element runs through the same item schema at path `[i]`. All
//! elements are checked even after one fails, so a single call reports
//! every bad item together with any size or uniqueness problems.

use std::collections::HashSet;

use crate::combinators::modifiers::Modifiers;
use crate::foundation::{Validate, ValidationContext, ValidationResult, Value};
use crate::schema::Schema;

// ============================================================================
// ARRAY SCHEMA
// ============================================================================

/// Validates an array whose elements all satisfy one item schema.
///
/// On success the value is the array of item results, so per-item
/// transforms are reflected. On failure the value holds the items that did
/// validate, in their original order.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard_validator::prelude::*;
///
/// let tags = array(string()).min_items(1).unique();
/// let result = tags.validate(&Value::from(json!(["a", "b", "a"])));
/// assert_eq!(result.messages(), vec!["Duplicate items found at indices: 2"]);
/// ```
#[derive(Debug, Clone)]
pub struct ArraySchema {
    modifiers: Modifiers,
    item: Box<Schema>,
    min_items: Option<usize>,
    max_items: Option<usize>,
    unique: bool,
}

impl ArraySchema {
    /// Creates an array validator for elements matching `item`.
    pub fn new(item: impl Into<Schema>) -> Self {
        Self {
            modifiers: Modifiers::default(),
            item: Box::new(item.into()),
            min_items: None,
            max_items: None,
            unique: false,
        }
    }

    /// Inclusive lower bound on the number of elements.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_items(mut self, min: usize) -> Self {
        self.min_items = Some(min);
        self
    }

    /// Inclusive upper bound on the number of elements.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);
        self
    }

    /// Rejects structurally equal elements.
    #[must_use = "builder methods must be chained or built"]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// The element schema.
    #[must_use]
    pub fn item(&self) -> &Schema {
        &self.item
    }
}

/// Indices of elements whose structural key already appeared earlier.
fn duplicate_indices(items: &[Value]) -> Vec<usize> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| !seen.insert(item.canonical_key()))
        .map(|(index, _)| index)
        .collect()
}

impl Validate for ArraySchema {
    fn kind(&self) -> &'static str {
        "array"
    }

    fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    fn modifiers_mut(&mut self) -> &mut Modifiers {
        &mut self.modifiers
    }

    fn check(&self, value: &Value, cx: &ValidationContext<'_>) -> ValidationResult {
        let path = cx.path();
        let Some(items) = value.as_array() else {
            return ValidationResult::failure(self.modifiers.error(
                "invalid_type",
                "Must be an array",
                path,
            ));
        };

        let mut errors = Vec::new();

        if let Some(min) = self.min_items
            && items.len() < min
        {
            errors.push(self.modifiers.error(
                "min_items",
                format!("Must have at least {min} items"),
                path,
            ));
        }

        if let Some(max) = self.max_items
            && items.len() > max
        {
            errors.push(self.modifiers.error(
                "max_items",
                format!("Must have at most {max} items"),
                path,
            ));
        }

        if self.unique {
            let duplicates = duplicate_indices(items);
            if !duplicates.is_empty() {
                let indices: Vec<String> = duplicates.iter().map(ToString::to_string).collect();
                errors.push(self.modifiers.error(
                    "unique",
                    format!("Duplicate items found at indices: {}", indices.join(", ")),
                    path,
                ));
            }
        }

        let mut result = ValidationResult::from_errors(errors);
        let mut output = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            let item_result = self.item.validate_in(Some(item), &cx.index(index));
            if item_result.is_valid() {
                output.extend(item_result.into_value());
            } else {
                result.merge(item_result);
            }
        }

        result.with_value(Value::Array(output))
    }
}

// ============================================================================
// TESTS
// ============================================================================
