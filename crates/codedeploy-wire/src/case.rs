//! Key tokenization and rendering

use serde::{Deserialize, Serialize};

/// Casing of the first word of a rendered key.
///
/// Every following word is always capitalized.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CasingPolicy {
    /// `camelCase`
    #[default]
    LowerInitial,
    /// `PascalCase`
    UpperInitial,
}

/// Splits a key into its words.
///
/// Boundaries are `_` and `-` (consumed) and the position right before an
/// ASCII uppercase letter. Digits never start a new word. Empty words are
/// discarded.
///
/// # Examples
/// ```
/// # use codedeploy_wire::case::tokenize;
/// assert_eq!(tokenize("a_more_complex_atom123"), ["a", "more", "complex", "atom123"]);
/// assert_eq!(tokenize("noChangeNeeded"), ["no", "Change", "Needed"]);
/// assert_eq!(tokenize("__ec2--tag__"), ["ec2", "tag"]);
/// ```
#[must_use]
pub fn tokenize(key: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;

    for (i, b) in key.bytes().enumerate() {
        if b == b'_' || b == b'-' {
            push_token(&mut tokens, &key[start..i]);
            start = i + 1;
        } else if b.is_ascii_uppercase() {
            push_token(&mut tokens, &key[start..i]);
            start = i;
        }
    }
    push_token(&mut tokens, &key[start..]);

    tokens
}

fn push_token<'a>(tokens: &mut Vec<&'a str>, token: &'a str) {
    if !token.is_empty() {
        tokens.push(token);
    }
}

/// Renders a key into its wire form under `policy`.
///
/// # Examples
/// ```
/// # use codedeploy_wire::case::{render, CasingPolicy};
/// assert_eq!(render("a_more_complex_atom123", CasingPolicy::LowerInitial), "aMoreComplexAtom123");
/// assert_eq!(render("deployment_group_name", CasingPolicy::UpperInitial), "DeploymentGroupName");
/// assert_eq!(render("Key", CasingPolicy::LowerInitial), "key");
/// ```
#[must_use]
pub fn render(key: &str, policy: CasingPolicy) -> String {
    let mut out = String::with_capacity(key.len());

    for (i, token) in tokenize(key).into_iter().enumerate() {
        if i == 0 && policy == CasingPolicy::LowerInitial {
            out.extend(token.chars().map(|c| c.to_ascii_lowercase()));
        } else {
            push_titlecase(&mut out, token);
        }
    }

    out
}

fn push_titlecase(out: &mut String, token: &str) {
    let mut chars = token.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.extend(chars.map(|c| c.to_ascii_lowercase()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use heck::{ToLowerCamelCase, ToUpperCamelCase};

    #[test]
    fn tokenize_separators() {
        assert_eq!(tokenize("abc_def"), ["abc", "def"]);
        assert_eq!(tokenize("abc-def"), ["abc", "def"]);
        assert_eq!(tokenize("abc_def-ghi"), ["abc", "def", "ghi"]);
        assert_eq!(tokenize("_abc__def_"), ["abc", "def"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize("__-").is_empty());
    }

    #[test]
    fn tokenize_capitals() {
        assert_eq!(tokenize("noChangeNeeded"), ["no", "Change", "Needed"]);
        assert_eq!(tokenize("NoChange"), ["No", "Change"]);
        assert_eq!(tokenize("ec2TagSet_list"), ["ec2", "Tag", "Set", "list"]);
        assert_eq!(tokenize("ARN"), ["A", "R", "N"]);
    }

    #[test]
    fn tokenize_digits_attach() {
        assert_eq!(tokenize("atomic123"), ["atomic123"]);
        assert_eq!(tokenize("s3_location"), ["s3", "location"]);
        assert_eq!(tokenize("ec2_tag_filters"), ["ec2", "tag", "filters"]);
        assert_eq!(tokenize("123abc"), ["123abc"]);
    }

    #[test]
    fn render_policies() {
        let key = "a_more_complex_atom123";
        assert_eq!(render(key, CasingPolicy::LowerInitial), "aMoreComplexAtom123");
        assert_eq!(render(key, CasingPolicy::UpperInitial), "AMoreComplexAtom123");

        assert_eq!(render("key", CasingPolicy::UpperInitial), "Key");
        assert_eq!(render("Value", CasingPolicy::LowerInitial), "value");
        assert_eq!(render("on-premises-instance", CasingPolicy::LowerInitial), "onPremisesInstance");
    }

    #[test]
    fn render_does_not_preserve_all_caps() {
        assert_eq!(render("resource_ARN", CasingPolicy::LowerInitial), "resourceARN");
        assert_eq!(render("IAM_user_arn", CasingPolicy::LowerInitial), "iAMUserArn");
        assert_eq!(render("s3_KEY", CasingPolicy::LowerInitial), "s3KEY");
    }

    #[test]
    fn render_is_idempotent() {
        let keys = [
            "abc_def",
            "a_more_complex_atom123",
            "noChangeNeeded",
            "ec2_tag_set_list",
            "on-premises-tag-set",
            "Key",
            "x",
            "deployment_config_name",
        ];
        for policy in [CasingPolicy::LowerInitial, CasingPolicy::UpperInitial] {
            for key in keys {
                let once = render(key, policy);
                assert_eq!(render(&once, policy), once, "{key:?} under {policy:?}");
            }
        }
    }

    #[test]
    fn render_agrees_with_heck_on_snake_case() {
        let keys = [
            "application_name",
            "deployment_group_name",
            "ignore_application_stop_failures",
            "next_token",
            "git_hub_location",
            "a_more_complex_atom123",
            "include_only_statuses",
        ];
        for key in keys {
            assert_eq!(render(key, CasingPolicy::LowerInitial), key.to_lower_camel_case());
            assert_eq!(render(key, CasingPolicy::UpperInitial), key.to_upper_camel_case());
        }
    }

    #[test]
    fn policy_serde() {
        let json = serde_json::to_string(&CasingPolicy::UpperInitial).unwrap();
        assert_eq!(json, "\"upper_initial\"");
        let policy: CasingPolicy = serde_json::from_str("\"lower_initial\"").unwrap();
        assert_eq!(policy, CasingPolicy::LowerInitial);
    }
}
