//! Tag lists

use crate::error::{WireError, WireResult};
use crate::key::RawKey;
use crate::param::{Param, ParamMap};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// A resource tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Reads a tag from `{key, value}`, `{Key, Value}` or a `[key, value]` pair.
    ///
    /// Both fields must be strings.
    #[must_use]
    pub fn from_param(param: &Param) -> Option<Self> {
        match param {
            Param::Map(map) => {
                let key = field(map, "key", "Key")?;
                let value = field(map, "value", "Value")?;
                Some(Self::new(key, value))
            }
            Param::List(list) => match list.as_slice() {
                [Param::String(key), Param::String(value)] => Some(Self::new(key.as_str(), value.as_str())),
                _ => None,
            },
            _ => None,
        }
    }
}

fn field<'a>(map: &'a ParamMap, lower: &str, upper: &str) -> Option<&'a str> {
    map.get(lower).or_else(|| map.get(upper)).and_then(Param::as_str)
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Tag {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl From<Tag> for Param {
    /// `{key, value}`, to be rendered by the transformation engine
    fn from(tag: Tag) -> Self {
        let mut map = ParamMap::with_capacity(2);
        map.insert(RawKey::from_static("key"), Param::String(tag.key));
        map.insert(RawKey::from_static("value"), Param::String(tag.value));
        Param::Map(map)
    }
}

/// Normalizes a caller-supplied tag list, dropping malformed elements.
///
/// ```
/// # use codedeploy_wire::{normalize_tags, Param, Tag};
/// let tags = normalize_tags([
///     Param::from(vec!["my_key", "value1"]),
///     Param::from(42),
/// ]);
/// assert_eq!(tags, [Tag::new("my_key", "value1")]);
/// ```
#[must_use]
pub fn normalize_tags(items: impl IntoIterator<Item = Param>) -> Vec<Tag> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let tag = Tag::from_param(&item);
            if tag.is_none() {
                warn!(index, ?item, "dropping malformed tag");
            }
            tag
        })
        .collect()
}

/// Normalizes a caller-supplied tag list, rejecting malformed elements.
///
/// # Errors
/// Returns [`WireError::MalformedTag`] for the first element that is not a tag.
pub fn try_normalize_tags(items: impl IntoIterator<Item = Param>) -> WireResult<Vec<Tag>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| Tag::from_param(&item).ok_or(WireError::MalformedTag { index }))
        .collect()
}

/// Builds the list value of a tag collection.
#[must_use]
pub fn tags_param(tags: impl IntoIterator<Item = Tag>) -> Param {
    Param::List(tags.into_iter().map(Param::from).collect())
}
