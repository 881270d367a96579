//! Property-based tests for the shift engine
//!
//! These tests verify invariants that should hold for all records:
//! identity on direct descriptors, batch order and length preservation, and
//! passthrough preserving unmapped fields.

use proptest::prelude::*;
use serde_json::{Map, Value};
use shiftify_core::{define_schema, FieldDescriptor, Schema, ShiftOptions};

/// Strategy for generating simple JSON values with controlled depth
fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z0-9 ]{0,20}".prop_map(Value::String),
    ];

    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Strategy for generating flat records
fn record_strategy() -> impl Strategy<Value = Map<String, Value>> {
    proptest::collection::btree_map("[a-z]{1,6}", json_value_strategy(), 0..6)
        .prop_map(|m| m.into_iter().collect())
}

fn identity_schema(record: &Map<String, Value>) -> Schema {
    record
        .keys()
        .map(|k| (k.clone(), FieldDescriptor::Direct))
        .collect()
}

proptest! {
    #[test]
    fn prop_identity_on_direct_descriptors(record in record_strategy()) {
        let engine = define_schema(identity_schema(&record), ShiftOptions::default());
        let input = Value::Object(record);
        prop_assert_eq!(engine.shift(&input).unwrap(), input);
    }

    #[test]
    fn prop_shift_many_matches_shift(records in proptest::collection::vec(record_strategy(), 0..8)) {
        let engine = define_schema(
            Schema::new()
                .field("a", FieldDescriptor::Direct)
                .field("b", "a.b"),
            ShiftOptions::default().with_strict(false),
        );
        let inputs: Vec<Value> = records.into_iter().map(Value::Object).collect();
        let batch = engine.shift_many(&inputs).unwrap();
        prop_assert_eq!(batch.len(), inputs.len());
        for (input, output) in inputs.iter().zip(batch.iter()) {
            prop_assert_eq!(&engine.shift(input).unwrap(), output);
        }
    }

    #[test]
    fn prop_passthrough_keeps_every_input_key(record in record_strategy()) {
        let engine = define_schema(Schema::new(), ShiftOptions::passthrough());
        let input = Value::Object(record);
        prop_assert_eq!(engine.shift(&input).unwrap(), input);
    }

    #[test]
    fn prop_explicit_output_keys_subset_of_schema(record in record_strategy()) {
        let engine = define_schema(
            Schema::new().field("x", FieldDescriptor::Direct),
            ShiftOptions::default().with_strict(false),
        );
        let output = engine.shift(&Value::Object(record)).unwrap();
        prop_assert!(output.as_object().unwrap().keys().all(|k| k == "x"));
    }
}
