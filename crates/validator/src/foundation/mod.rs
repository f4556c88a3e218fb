//! Core validation types and traits
//!
//! This module contains the building blocks every validator is made of:
//!
//! - **Data**: [`Value`], the dynamic input and output model
//! - **Location**: [`Path`] and [`ValidationContext`]
//! - **Outcome**: [`ValidationResult`], [`ValidationError`], [`ValidationErrors`]
//! - **Traits**: [`Validate`], [`ValidateExt`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use shapeguard_validator::foundation::{Validate, Value};
//! use shapeguard_validator::string;
//!
//! let result = string().min_length(5).validate(&Value::from("hi"));
//! assert!(!result.is_valid());
//! ```

pub mod context;
pub mod error;
pub mod path;
pub mod result;
pub mod traits;
pub mod value;

pub use context::{DEFAULT_MAX_DEPTH, ValidationContext, ValidationOptions};
pub use error::{SchemaError, TransformError, ValidationError, ValidationErrors};
pub use path::{Path, Segment};
pub use result::ValidationResult;
pub use traits::{Validate, ValidateExt};
pub use value::{Map, Value, format_date, format_number};
