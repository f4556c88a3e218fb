//! Date validator
//!
//! Accepts native dates as well as values convertible to one, and
//! normalizes the result to [`Value::Date`].
//!
//! Conversions:
//! - strings in RFC 3339 (`2024-05-01T10:00:00+02:00`),
//!   `YYYY-MM-DDTHH:MM:SS[.fff]` (read as UTC) or `YYYY-MM-DD` (UTC midnight)
//! - numbers as milliseconds since the Unix epoch, fractional part dropped

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::combinators::modifiers::Modifiers;
use crate::foundation::{Validate, ValidationContext, ValidationResult, Value, format_date};

/// Validates that a value is, or converts to, a valid instant within the
/// configured bounds.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard_validator::prelude::*;
///
/// let result = date().validate(&Value::from("2024-02-29"));
/// assert!(matches!(result.value(), Some(Value::Date(_))));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DateSchema {
    modifiers: Modifiers,
    min: Option<DateTime<Utc>>,
    max: Option<DateTime<Utc>>,
}

impl DateSchema {
    /// Creates a date validator with no bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inclusive lower bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: DateTime<Utc>) -> Self {
        self.min = Some(min);
        self
    }

    /// Inclusive upper bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: DateTime<Utc>) -> Self {
        self.max = Some(max);
        self
    }
}

/// Converts a value into an instant, if it represents one.
#[must_use]
pub fn to_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Date(date) => Some(*date),
        Value::String(text) => parse_date(text),
        Value::Number(millis) if millis.is_finite() => {
            DateTime::from_timestamp_millis(millis.trunc() as i64)
        }
        _ => None,
    }
}

fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

impl Validate for DateSchema {
    fn kind(&self) -> &'static str {
        "date"
    }

    fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    fn modifiers_mut(&mut self) -> &mut Modifiers {
        &mut self.modifiers
    }

    fn check(&self, value: &Value, cx: &ValidationContext<'_>) -> ValidationResult {
        let path = cx.path();
        let Some(date) = to_date(value) else {
            return ValidationResult::failure(self.modifiers.error(
                "invalid_date",
                "Must be a valid date",
                path,
            ));
        };

        let mut errors = Vec::new();

        if let Some(min) = &self.min
            && date < *min
        {
            errors.push(self.modifiers.error(
                "min_date",
                format!("Date must be after {}", format_date(min)),
                path,
            ));
        }

        if let Some(max) = &self.max
            && date > *max
        {
            errors.push(self.modifiers.error(
                "max_date",
                format!("Date must be before {}", format_date(max)),
                path,
            ));
        }

        if errors.is_empty() {
            ValidationResult::success(Value::Date(date))
        } else {
            ValidationResult::from_errors(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[rstest]
    #[case(Value::from("2024-01-15"), utc(2024, 1, 15))]
    #[case(Value::from("2024-01-15T00:00:00Z"), utc(2024, 1, 15))]
    #[case(Value::from("2024-01-15T02:00:00+02:00"), utc(2024, 1, 15))]
    #[case(Value::from("2024-01-15T00:00:00.000"), utc(2024, 1, 15))]
    #[case(Value::from(1_705_276_800_000_i64), utc(2024, 1, 15))]
    #[case(Value::Date(utc(2024, 1, 15)), utc(2024, 1, 15))]
    fn test_normalizes_to_date(#[case] input: Value, #[case] expected: DateTime<Utc>) {
        let result = DateSchema::new().validate(&input);
        assert!(result.is_valid(), "{:?}", result.messages());
        assert_eq!(result.into_value(), Some(Value::Date(expected)));
    }

    #[rstest]
    #[case(Value::from("not a date"))]
    #[case(Value::from("2024-02-30"))]
    #[case(Value::Bool(true))]
    #[case(Value::Number(f64::NAN))]
    #[case(Value::Array(vec![]))]
    fn test_rejects_invalid(#[case] input: Value) {
        let result = DateSchema::new().validate(&input);
        assert_eq!(result.messages(), vec!["Must be a valid date"]);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let schema = DateSchema::new()
            .min(utc(2024, 1, 1))
            .max(utc(2024, 12, 31));
        assert!(schema.validate(&Value::from("2024-01-01")).is_valid());
        assert!(schema.validate(&Value::from("2024-12-31")).is_valid());
    }

    #[test]
    fn test_bound_messages_use_iso_format() {
        let schema = DateSchema::new()
            .min(utc(2024, 1, 1))
            .max(utc(2024, 12, 31));
        assert_eq!(
            schema.validate(&Value::from("2023-06-01")).messages(),
            vec!["Date must be after 2024-01-01T00:00:00.000Z"]
        );
        assert_eq!(
            schema.validate(&Value::from("2025-06-01")).messages(),
            vec!["Date must be before 2024-12-31T00:00:00.000Z"]
        );
    }
}
