//! Validation context and options
//!
//! A [`ValidationContext`] travels down the validator tree during one
//! `validate` call. It knows where in the input the current validator is
//! (for error paths) and how deep the traversal has gone (for the depth
//! guard), and it borrows the caller's [`ValidationOptions`].

use serde::{Deserialize, Serialize};

use crate::foundation::Path;

/// Default for [`ValidationOptions::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

// ============================================================================
// OPTIONS
// ============================================================================

/// Tunables for a validation pass.
///
/// Deserializable so host programs can keep it in their own configuration
/// files; missing fields take their defaults.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard_validator::foundation::ValidationOptions;
///
/// let options: ValidationOptions = serde_json::from_str(r#"{"max_depth": 16}"#)?;
/// assert_eq!(options.max_depth, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// How many nested steps (object fields, array items, lazy resolutions)
    /// a traversal may take before failing with `max_depth`.
    ///
    /// The limit counts schema steps, not levels of the input. A recursive
    /// `object -> array -> lazy` tree spends three steps per level, so the
    /// default of 128 admits 42 levels below the root.
    pub max_depth: usize,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ValidationOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the depth limit.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

// ============================================================================
// CONTEXT
// ============================================================================

/// Per-call traversal state.
#[derive(Debug, Clone)]
pub struct ValidationContext<'a> {
    options: &'a ValidationOptions,
    path: Path,
    depth: usize,
}

impl<'a> ValidationContext<'a> {
    /// Context for the root value.
    #[must_use]
    pub fn root(options: &'a ValidationOptions) -> Self {
        Self::at(options, Path::root())
    }

    /// Context starting at an explicit path.
    #[must_use]
    pub fn at(options: &'a ValidationOptions, path: Path) -> Self {
        Self {
            options,
            path,
            depth: 0,
        }
    }

    /// Child context for an object field.
    #[must_use]
    pub fn field(&self, name: &str) -> Self {
        Self {
            options: self.options,
            path: self.path.field(name),
            depth: self.depth + 1,
        }
    }

    /// Child context for an array item.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        Self {
            options: self.options,
            path: self.path.index(index),
            depth: self.depth + 1,
        }
    }

    /// One level deeper at the same path.
    #[must_use]
    pub fn descend(&self) -> Self {
        Self {
            options: self.options,
            path: self.path.clone(),
            depth: self.depth + 1,
        }
    }

    /// Current location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Nesting depth, zero at the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The options of this pass.
    #[must_use]
    pub fn options(&self) -> &'a ValidationOptions {
        self.options
    }

    /// Whether the depth guard has tripped.
    #[must_use]
    pub fn too_deep(&self) -> bool {
        self.depth > self.options.max_depth
    }
}
