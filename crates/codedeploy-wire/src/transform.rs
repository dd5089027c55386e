//! Key-case transformation
//!
//! Rewrites every map key of a [`Param`] tree into its wire form. The casing
//! policy travels down the recursion: a map entry renders its own key with
//! [`CaseRuleTable::effective_policy`] and hands
//! [`CaseRuleTable::child_policy`] to its value. Lists keep the policy of
//! their parent, so an override never leaks into sibling entries.

use crate::case::{CasingPolicy, render};
use crate::error::{WireError, WireResult};
use crate::param::{Param, ParamMap};
use crate::rules::CaseRuleTable;

use std::collections::HashSet;

use serde_json::{Map, Value};

/// Transforms a parameter tree into its wire representation.
///
/// The output has the same shape as the input: every map keeps all of its
/// entries (in order), every list keeps its length, and scalars are passed
/// through untouched.
///
/// # Examples
/// ```
/// use codedeploy_wire::{param_map, transform, CaseRuleTable, CasingPolicy, Param};
/// use serde_json::json;
///
/// let tree = Param::from(param_map! {
///     "abc_def" => 123,
///     "another_val" => param_map! { "embed_value" => "val2" },
/// });
/// let table = CaseRuleTable::empty();
///
/// let wire = transform(&tree, CasingPolicy::LowerInitial, &table);
/// assert_eq!(wire, json!({"abcDef": 123, "anotherVal": {"embedValue": "val2"}}));
///
/// let wire = transform(&tree, CasingPolicy::UpperInitial, &table);
/// assert_eq!(wire, json!({"AbcDef": 123, "AnotherVal": {"EmbedValue": "val2"}}));
/// ```
#[must_use]
pub fn transform(tree: &Param, policy: CasingPolicy, table: &CaseRuleTable) -> Value {
    match tree {
        Param::Null => Value::Null,
        Param::Bool(b) => Value::Bool(*b),
        Param::Number(n) => Value::Number(n.clone()),
        Param::String(s) => Value::String(s.clone()),
        Param::List(list) => Value::Array(list.iter().map(|v| transform(v, policy, table)).collect()),
        Param::Map(map) => Value::Object(transform_map(map, policy, table)),
    }
}

/// Transforms a keyed mapping, returning the wire object directly.
///
/// If two keys of one map render to the same wire key the later entry wins.
/// Run [`check_wire_keys`] first to reject such trees.
#[must_use]
pub fn transform_map(map: &ParamMap, policy: CasingPolicy, table: &CaseRuleTable) -> Map<String, Value> {
    let mut out = Map::new();
    for (raw_key, value) in map {
        let key = raw_key.as_str();
        let wire_key = render(key, table.effective_policy(key, policy));
        let child = table.child_policy(key, policy);
        out.insert(wire_key, transform(value, child, table));
    }
    out
}

/// Checks that no two keys of one map render to the same wire key.
///
/// Walks the tree with the same policy propagation as [`transform_map`].
///
/// # Errors
/// Returns [`WireError::DuplicateKey`] for the first key whose rendering is
/// already taken within its map.
pub fn check_wire_keys(map: &ParamMap, policy: CasingPolicy, table: &CaseRuleTable) -> WireResult {
    let mut seen = HashSet::with_capacity(map.len());
    for (raw_key, value) in map {
        let key = raw_key.as_str();
        let wire_key = render(key, table.effective_policy(key, policy));
        if seen.contains(&wire_key) {
            return Err(WireError::DuplicateKey {
                key: key.to_owned(),
                wire_key,
            });
        }
        check_param(value, table.child_policy(key, policy), table)?;
        seen.insert(wire_key);
    }
    Ok(())
}

fn check_param(param: &Param, policy: CasingPolicy, table: &CaseRuleTable) -> WireResult {
    match param {
        Param::List(list) => list.iter().try_for_each(|v| check_param(v, policy, table)),
        Param::Map(map) => check_wire_keys(map, policy, table),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::key::RawKey;
    use crate::param_map;

    use serde_json::json;

    const LOWER: CasingPolicy = CasingPolicy::LowerInitial;
    const UPPER: CasingPolicy = CasingPolicy::UpperInitial;

    fn tags_table() -> CaseRuleTable {
        CaseRuleTable::builder()
            .subkey(RawKey::from_static("tags"), UPPER)
            .build()
    }

    #[test]
    fn flat_map() {
        let tree = Param::from(param_map! { "abc_def" => 123, "another_val" => "val2" });
        let wire = transform(&tree, LOWER, &CaseRuleTable::empty());
        assert_eq!(wire, json!({"abcDef": 123, "anotherVal": "val2"}));
    }

    #[test]
    fn subkey_override_applies_to_descendants_only() {
        let tree = Param::from(param_map! {
            "tags" => vec![param_map! { "key" => "a", "value" => "b" }],
        });
        let wire = transform(&tree, LOWER, &tags_table());
        assert_eq!(wire, json!({"tags": [{"Key": "a", "Value": "b"}]}));
    }

    #[test]
    fn override_does_not_leak_into_siblings() {
        let tree = Param::from(param_map! {
            "tags" => vec![param_map! { "key" => "a", "value" => "b" }],
            "deployment_group" => param_map! { "service_role_arn" => "arn" },
        });
        let wire = transform(&tree, LOWER, &tags_table());
        assert_eq!(
            wire,
            json!({
                "tags": [{"Key": "a", "Value": "b"}],
                "deploymentGroup": {"serviceRoleArn": "arn"},
            })
        );
    }

    #[test]
    fn override_propagates_through_nested_lists_and_maps() {
        let table = CaseRuleTable::codedeploy();
        let tree = Param::from(param_map! {
            "ec2_tag_set" => param_map! {
                "ec2_tag_set_list" => vec![
                    vec![param_map! { "key" => "env", "value" => "prod", "type" => "KEY_AND_VALUE" }],
                    vec![],
                ],
            },
        });
        let wire = transform(&tree, LOWER, &table);
        assert_eq!(
            wire,
            json!({
                "ec2TagSet": {
                    "ec2TagSetList": [
                        [{"Key": "env", "Value": "prod", "Type": "KEY_AND_VALUE"}],
                        [],
                    ],
                },
            })
        );
    }

    #[test]
    fn deeper_subkey_wins() {
        let table = CaseRuleTable::builder()
            .subkey(RawKey::from_static("outer"), UPPER)
            .subkey(RawKey::from_static("inner"), LOWER)
            .build();
        let tree = Param::from(param_map! {
            "outer" => param_map! {
                "inner" => param_map! { "leaf_key" => 1 },
                "other" => param_map! { "leaf_key" => 2 },
            },
        });
        let wire = transform(&tree, LOWER, &table);
        assert_eq!(
            wire,
            json!({
                "outer": {
                    "Inner": {"leafKey": 1},
                    "Other": {"LeafKey": 2},
                },
            })
        );
    }

    #[test]
    fn key_override_renders_key_only() {
        let table = CaseRuleTable::builder()
            .key(RawKey::from_static("target_filters"), UPPER)
            .build();
        let tree = Param::from(param_map! {
            "target_filters" => param_map! { "target_status" => vec!["Failed"] },
            "next_token" => "t",
        });
        let wire = transform(&tree, LOWER, &table);
        assert_eq!(
            wire,
            json!({"TargetFilters": {"targetStatus": ["Failed"]}, "nextToken": "t"})
        );
    }

    #[test]
    fn scalars_pass_through() {
        for scalar in [Param::Null, Param::from(true), Param::from(1.5), Param::from("snake_case_value")] {
            let wire = transform(&scalar, UPPER, &CaseRuleTable::codedeploy());
            assert_eq!(wire, scalar_json(&scalar));
        }
        let list = Param::from(vec!["snake_case", "x-y"]);
        assert_eq!(transform(&list, UPPER, &CaseRuleTable::empty()), json!(["snake_case", "x-y"]));
    }

    fn scalar_json(p: &Param) -> Value {
        match p {
            Param::Null => Value::Null,
            Param::Bool(b) => json!(b),
            Param::Number(n) => Value::Number(n.clone()),
            Param::String(s) => json!(s),
            _ => unreachable!(),
        }
    }

    #[test]
    fn empty_map() {
        for policy in [LOWER, UPPER] {
            let wire = transform(&Param::Map(ParamMap::new()), policy, &CaseRuleTable::codedeploy());
            assert_eq!(wire, json!({}));
        }
    }

    #[test]
    fn colliding_keys_are_detected() {
        let map = param_map! { "abc_def" => 1, "abcDef" => 2, "abc-def" => 3 };
        match check_wire_keys(&map, LOWER, &CaseRuleTable::empty()) {
            Err(WireError::DuplicateKey { key, wire_key }) => {
                assert_eq!(key, "abcDef");
                assert_eq!(wire_key, "abcDef");
            }
            other => panic!("unexpected: {other:?}"),
        }

        let nested = param_map! { "tags" => vec![param_map! { "key" => "a", "Key" => "b" }] };
        assert!(check_wire_keys(&nested, LOWER, &CaseRuleTable::codedeploy()).is_err());

        let distinct = param_map! { "abc_def" => 1, "abc_defg" => 2 };
        assert!(check_wire_keys(&distinct, LOWER, &CaseRuleTable::empty()).is_ok());
    }

    #[test]
    fn collisions_follow_key_overrides() {
        let map = param_map! { "abc_def" => 1, "AbcDef" => 2 };
        assert!(check_wire_keys(&map, LOWER, &CaseRuleTable::empty()).is_err());

        let table = CaseRuleTable::builder()
            .key(RawKey::from_static("abc_def"), UPPER)
            .build();
        let map = param_map! { "abc_def" => 1, "abc-def" => 2 };
        assert!(check_wire_keys(&map, LOWER, &table).is_ok());
        assert_eq!(
            transform_map(&map, LOWER, &table),
            *json!({"AbcDef": 1, "abcDef": 2}).as_object().unwrap()
        );
    }

    #[test]
    fn keys_are_kept_in_order() {
        let map = param_map! { "zeta_key" => 1, "alpha_key" => 2, "mid_key" => 3 };
        let out = transform_map(&map, LOWER, &CaseRuleTable::empty());
        let keys: Vec<&str> = out.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zetaKey", "alphaKey", "midKey"]);
    }
}
