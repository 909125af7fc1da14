//! Property tests for the validation engine over arbitrary JSON objects.

use formval_engine::{validate, ValidationBuilder, ValidationConfig};
use proptest::prelude::*;
use serde_json::Value;

/// JSON values without floats, nested a few levels deep.
fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| serde_json::json!(n)),
        "[a-zA-Z0-9_ ]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-d]{1,2}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Objects drawing keys from the same small alphabet the config uses.
fn json_object() -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-d]{1,2}", json_value(), 0..6)
        .prop_map(|m| Value::Object(m.into_iter().collect()))
}

/// A configuration mixing every kind of rule over keys `a`..`d`.
fn mixed_config(top_stop: bool, field_stop: bool) -> ValidationConfig {
    ValidationBuilder::new()
        .stop_after_first_fail(top_stop)
        .add_field("a", |f| {
            f.make_required("a is required")
                .add_type_check(|v| !v.is_some_and(Value::is_string), "a must be a string")
                .stop_after_first_fail(field_stop)
                .add_validator(
                    |v| v.and_then(Value::as_str).is_some_and(|s| s.len() < 3),
                    "a is too short",
                )
                .add_validator(
                    |v| v.and_then(Value::as_str).is_some_and(|s| s.contains(' ')),
                    "a has spaces",
                )
        })
        .add_field("b", |f| {
            f.add_nested_config(
                ValidationBuilder::new()
                    .add_field("a", |f| f.add_validator(|v| v.is_none(), "b.a is missing"))
                    .add_field("c", |f| {
                        f.add_validator(|v| v.is_some_and(Value::is_null), "b.c is null")
                    }),
            )
            .add_validator(
                |v| v.is_some_and(|v| !v.is_object()),
                "b must be an object",
            )
        })
        .add_field("c", |f| {
            f.add_validator(
                |v| v.and_then(Value::as_i64).is_some_and(|n| n < 0),
                "c is negative",
            )
        })
        .build()
}

proptest! {
    /// Validation is deterministic and leaves the input untouched.
    #[test]
    fn validate_is_pure(object in json_object(), top in any::<bool>(), field in any::<bool>()) {
        let config = mixed_config(top, field);
        let before = object.clone();
        let first = validate(&object, &config).unwrap();
        let second = validate(&object, &config).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&object, &before);
    }

    /// `has_errors` agrees with the number of recorded messages.
    #[test]
    fn has_errors_iff_some_message(object in json_object(), top in any::<bool>(), field in any::<bool>()) {
        let bag = validate(&object, &mixed_config(top, field)).unwrap();
        prop_assert_eq!(bag.has_errors(), bag.message_count() > 0);
        prop_assert_eq!(bag.has_errors(), !bag.errors().is_empty());
    }

    /// A missing required field yields exactly its required message.
    #[test]
    fn missing_required_field_yields_single_message(object in json_object()) {
        let mut object = object;
        if let Value::Object(map) = &mut object {
            map.remove("a");
        }
        let bag = validate(&object, &mixed_config(false, false)).unwrap();
        let a = bag.field("a").unwrap();
        prop_assert_eq!(a.messages(), ["a is required".to_string()]);
    }

    /// With the top-level stop set, nothing after the first failed field runs.
    #[test]
    fn top_level_stop_after_missing_required(object in json_object()) {
        let mut object = object;
        if let Value::Object(map) = &mut object {
            map.remove("a");
        }
        let bag = validate(&object, &mixed_config(true, false)).unwrap();
        prop_assert_eq!(bag.errors().len(), 1);
    }

    /// Field-level stop records at most one validator message for that field.
    #[test]
    fn field_stop_records_at_most_one_message(object in json_object()) {
        let bag = validate(&object, &mixed_config(false, true)).unwrap();
        if let Some(a) = bag.field("a") {
            prop_assert!(a.messages().len() <= 1);
        }
    }

    /// Serialized reports keep `hasErrors` in sync with the in-memory flag.
    #[test]
    fn serialized_flag_matches(object in json_object()) {
        let bag = validate(&object, &mixed_config(false, false)).unwrap();
        let value = serde_json::to_value(&bag).unwrap();
        prop_assert_eq!(value["hasErrors"].as_bool(), Some(bag.has_errors()));
    }
}
