//! Case rule table
//!
//! Most wire keys are plain camelCase, but a few substructures use PascalCase
//! keys. CodeDeploy tag filters are `{"Key": .., "Value": .., "Type": ..}` while
//! the collections holding them stay camelCase (`ec2TagFilters`).
//!
//! A [`CaseRuleTable`] records these exceptions along two independent axes:
//!
//! + `keys` forces the policy used to render a key itself.
//! + `subkeys` forces the policy inherited by everything nested under a key.
//!
//! Both are looked up by the raw (caller-supplied) key.

use crate::case::CasingPolicy;
use crate::key::RawKey;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-key casing overrides.
///
/// The table is an immutable value. Construct it with [`CaseRuleTable::builder`]
/// or start from [`CaseRuleTable::codedeploy`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseRuleTable {
    keys: BTreeMap<RawKey, CasingPolicy>,
    subkeys: BTreeMap<RawKey, CasingPolicy>,
}

/// Collections whose element keys are PascalCase on the wire
const PASCAL_CASE_COLLECTIONS: &[&str] = &[
    "tags",
    "tag_filters",
    "ec2_tag_filters",
    "on_premises_instance_tag_filters",
    "on_premises_tag_filters",
    "ec2_tag_set_list",
    "on_premises_tag_set_list",
    "target_filters",
];

impl CaseRuleTable {
    /// A table without overrides.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The rules for the CodeDeploy API.
    ///
    /// ```
    /// # use codedeploy_wire::{CaseRuleTable, CasingPolicy};
    /// let table = CaseRuleTable::codedeploy();
    /// let lower = CasingPolicy::LowerInitial;
    /// assert_eq!(table.effective_policy("tags", lower), lower);
    /// assert_eq!(table.child_policy("tags", lower), CasingPolicy::UpperInitial);
    /// ```
    #[must_use]
    pub fn codedeploy() -> Self {
        let mut b = Self::builder();
        for &key in PASCAL_CASE_COLLECTIONS {
            b.subkey(RawKey::from_static(key), CasingPolicy::UpperInitial);
        }
        b.build()
    }

    #[must_use]
    pub fn builder() -> CaseRuleTableBuilder {
        CaseRuleTableBuilder { table: Self::default() }
    }

    /// Returns a builder seeded with this table's entries.
    #[must_use]
    pub fn to_builder(&self) -> CaseRuleTableBuilder {
        CaseRuleTableBuilder { table: self.clone() }
    }

    /// Policy used to render `raw_key` itself.
    #[must_use]
    pub fn effective_policy(&self, raw_key: &str, inherited: CasingPolicy) -> CasingPolicy {
        self.keys.get(raw_key).copied().unwrap_or(inherited)
    }

    /// Policy inherited by the keys nested under `raw_key`.
    #[must_use]
    pub fn child_policy(&self, raw_key: &str, inherited: CasingPolicy) -> CasingPolicy {
        self.subkeys.get(raw_key).copied().unwrap_or(inherited)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.subkeys.is_empty()
    }
}

/// Builder for [`CaseRuleTable`]
#[derive(Debug)]
pub struct CaseRuleTableBuilder {
    table: CaseRuleTable,
}

impl CaseRuleTableBuilder {
    /// Forces the rendering policy of `key`.
    pub fn key(&mut self, key: RawKey, policy: CasingPolicy) -> &mut Self {
        self.table.keys.insert(key, policy);
        self
    }

    /// Forces the policy inherited by descendants of `key`.
    pub fn subkey(&mut self, key: RawKey, policy: CasingPolicy) -> &mut Self {
        self.table.subkeys.insert(key, policy);
        self
    }

    /// Removes any override registered for `key` on either axis.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.table.keys.remove(key);
        self.table.subkeys.remove(key);
        self
    }

    #[must_use]
    pub fn build(&mut self) -> CaseRuleTable {
        std::mem::take(&mut self.table)
    }
}
