//! Property-based tests for shapeguard-validator.

use proptest::prelude::*;
use shapeguard_validator::foundation::{Validate, ValidateExt, Value};
use shapeguard_validator::schema::{self, array, number, object, string, union};

/// Arbitrary JSON-like values, nested a few levels deep.
fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1_000_000i64..1_000_000).prop_map(Value::from),
        (-1e6f64..1e6).prop_map(Value::Number),
        "[a-z]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-c]", inner), 0..4)
                .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
        ]
    })
}

fn sample_schemas() -> Vec<schema::Schema> {
    vec![
        string().min_length(2).max_length(5).into(),
        number().min(-10).max(10).integer().into(),
        array(number()).max_items(3).unique().into(),
        object([("a", string().into()), ("b", number().optional().into())]).into(),
        union([string().into(), number().positive().into()]).into(),
        schema::any().into(),
    ]
}

// ============================================================================
// VALIDITY MATCHES ERRORS: is_valid() == errors().is_empty()
// ============================================================================

proptest! {
    #[test]
    fn validity_matches_error_list(value in arb_value()) {
        for schema in sample_schemas() {
            let result = schema.validate(&value);
            prop_assert_eq!(result.is_valid(), result.errors().is_empty());
        }
    }
}

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn validation_is_idempotent(value in arb_value()) {
        for schema in sample_schemas() {
            let first = schema.validate(&value);
            let second = schema.validate(&value);
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn string_rules_idempotent(s in ".{0,12}") {
        let schema = string().min_length(3).max_length(8).email();
        let input = Value::from(s);
        prop_assert_eq!(schema.validate(&input), schema.validate(&input));
    }
}

// ============================================================================
// OPTIONAL: null and absent always pass
// ============================================================================

proptest! {
    #[test]
    fn optional_accepts_null_and_absent(min in 0usize..10) {
        let schema = string().min_length(min).optional();
        prop_assert!(schema.validate(&Value::Null).is_valid());
        prop_assert!(schema.validate_at(None, "field").is_valid());
        prop_assert_eq!(schema.validate_at(None, "field").into_value(), None);
    }

    #[test]
    fn required_rejects_null(min in 0usize..10) {
        let result = string().min_length(min).validate(&Value::Null);
        prop_assert_eq!(result.messages(), vec!["Field is required"]);
    }
}

// ============================================================================
// IDENTITY TRANSFORM: changes nothing
// ============================================================================

proptest! {
    #[test]
    fn identity_transform_is_transparent(value in arb_value()) {
        for schema in sample_schemas() {
            let plain = schema.validate(&value);
            let mapped = schema.clone().transform(Ok).validate(&value);
            prop_assert_eq!(plain, mapped);
        }
    }
}

// ============================================================================
// UNIQUENESS: exactly the repeated positions are reported
// ============================================================================

proptest! {
    #[test]
    fn unique_reports_every_repeat(items in prop::collection::vec(0i64..5, 0..12)) {
        let result = array(number()).unique().validate(&Value::from(
            items.iter().copied().map(Value::from).collect::<Vec<_>>(),
        ));

        let expected: Vec<usize> = (0..items.len())
            .filter(|&i| items[..i].contains(&items[i]))
            .collect();

        if expected.is_empty() {
            prop_assert!(result.is_valid());
        } else {
            let indices: Vec<String> = expected.iter().map(ToString::to_string).collect();
            prop_assert_eq!(
                result.messages(),
                vec![format!("Duplicate items found at indices: {}", indices.join(", "))]
            );
        }
    }
}

// ============================================================================
// STRICT OBJECTS: one error per unknown key
// ============================================================================

proptest! {
    #[test]
    fn strict_reports_each_unknown_key(
        extra in prop::collection::btree_set("[d-z][a-z]{0,5}", 0..5),
    ) {
        let schema = object([("a", number().into())]);
        let mut input = serde_json::Map::new();
        input.insert("a".to_owned(), serde_json::json!(1));
        for key in &extra {
            input.insert(key.clone(), serde_json::json!(true));
        }

        let result = schema.validate(&Value::from(serde_json::Value::Object(input)));
        let expected: Vec<String> = extra.iter().map(|key| format!("Unknown field: {key}")).collect();
        prop_assert_eq!(result.messages(), expected);
    }

    #[test]
    fn passthrough_accepts_any_extra_keys(
        extra in prop::collection::btree_set("[d-z][a-z]{0,5}", 0..5),
    ) {
        let schema = object([("a", number().into())]).passthrough();
        let mut input = serde_json::Map::new();
        input.insert("a".to_owned(), serde_json::json!(1));
        for key in &extra {
            input.insert(key.clone(), serde_json::json!(key));
        }

        let result = schema.validate(&Value::from(serde_json::Value::Object(input)));
        prop_assert!(result.is_valid());
        prop_assert_eq!(result.value().and_then(Value::as_object).map(|m| m.len()), Some(extra.len() + 1));
    }
}

// ============================================================================
// NUMBERS: bounds agree with plain comparison
// ============================================================================

proptest! {
    #[test]
    fn number_bounds_agree_with_comparison(n in -1000.0f64..1000.0, lo in -500i32..0, hi in 0i32..500) {
        let valid = number().min(lo).max(hi).validate(&Value::Number(n)).is_valid();
        prop_assert_eq!(valid, n >= f64::from(lo) && n <= f64::from(hi));
    }
}
