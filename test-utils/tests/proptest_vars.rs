//! Property-based tests for the override merge and functional record updates.

use proptest::prelude::*;
use serde_json::{json, Value};
use test_utils::{
    fixture::Project,
    vars::{self, Vars, ORGANIZATION_ID_KEY},
};

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|v| Value::Number(v.into())),
        "[a-z0-9-]{0,12}".prop_map(Value::String),
    ]
}

fn vars_strategy() -> impl Strategy<Value = Vars> {
    prop::collection::btree_map("[a-z_]{1,16}", value_strategy(), 0..10)
        .prop_map(|map| map.into_iter().collect())
}

fn text_strategy() -> impl Strategy<Value = String> {
    "[ -~]{0,24}"
}

proptest! {
    #[test]
    fn merge_key_set_is_union(base in vars_strategy(), overrides in vars_strategy()) {
        let result = vars::merge(&base, Some(&overrides));

        for key in base.keys().chain(overrides.keys()) {
            prop_assert!(result.contains_key(key));
        }
        for key in result.keys() {
            prop_assert!(base.contains_key(key) || overrides.contains_key(key));
        }
    }

    #[test]
    fn merge_override_values_win(base in vars_strategy(), overrides in vars_strategy()) {
        let result = vars::merge(&base, Some(&overrides));

        for (key, value) in &overrides {
            prop_assert_eq!(&result[key.as_str()], value);
        }
        for (key, value) in &base {
            if !overrides.contains_key(key) {
                prop_assert_eq!(&result[key.as_str()], value);
            }
        }
    }

    #[test]
    fn merge_leaves_inputs_untouched(base in vars_strategy(), overrides in vars_strategy()) {
        let base_snapshot = base.clone();
        let overrides_snapshot = overrides.clone();

        let _ = vars::merge(&base, Some(&overrides));

        prop_assert_eq!(base, base_snapshot);
        prop_assert_eq!(overrides, overrides_snapshot);
    }

    #[test]
    fn get_organization_id_only_accepts_strings(value in value_strategy()) {
        let map = vars::from_pairs([(ORGANIZATION_ID_KEY, value.clone())]);
        let expected = match value {
            Value::String(s) => s,
            _ => "hadenlabs".to_string(),
        };

        prop_assert_eq!(vars::get_organization_id(&map), expected);
    }

    #[test]
    fn with_updates_one_field(
        organization_id in text_strategy(),
        name in text_strategy(),
        region in text_strategy(),
    ) {
        let original = Project::new_default().unwrap();
        let snapshot = original.clone();

        let updated = original
            .with_organization_id(organization_id.clone())
            .with_name(name.clone())
            .with_region(region.clone());

        prop_assert_eq!(&original, &snapshot);
        prop_assert_eq!(updated.organization_id(), organization_id.as_str());
        prop_assert_eq!(updated.name(), name.as_str());
        prop_assert_eq!(updated.region(), region.as_str());
        prop_assert_eq!(updated.database_password(), original.database_password());
        prop_assert_eq!(updated.instance_size(), original.instance_size());
    }

    #[test]
    fn set_field_touches_only_its_key(base in vars_strategy(), key in "[a-z_]{1,16}") {
        let result = vars::set_field(&base, key.clone(), json!("set"));

        prop_assert_eq!(&result[key.as_str()], &json!("set"));
        for (other, value) in &base {
            if other != &key {
                prop_assert_eq!(&result[other.as_str()], value);
            }
        }
    }
}
