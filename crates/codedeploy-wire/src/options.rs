//! Option normalization
//!
//! Callers hand options over in several historical shapes. They all collapse
//! into one canonical [`ParamMap`] before transformation.

use crate::case::{CasingPolicy, render};
use crate::key::{RawKey, is_valid_key};
use crate::param::{Param, ParamMap};

use tracing::trace;

/// Wire key of the continuation token
pub const NEXT_TOKEN: &str = "nextToken";

/// Options in any of the accepted shapes.
///
/// Normalization is shallow: nested values are never inspected.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawOptions {
    /// Ordered `(key, value)` pairs. Duplicate keys: the last value wins.
    Pairs(Vec<(RawKey, Param)>),
    /// A single bare pair
    Pair(RawKey, Param),
    /// An already keyed mapping
    Map(ParamMap),
    /// No options supplied
    #[default]
    Empty,
}

impl RawOptions {
    /// Collapses the options into a keyed mapping.
    ///
    /// ```
    /// # use codedeploy_wire::{param_map, Param, RawKey, RawOptions};
    /// let expected = param_map! { "k" => "v" };
    ///
    /// let pairs = RawOptions::Pairs(vec![(RawKey::from_static("k"), Param::from("v"))]);
    /// let pair = RawOptions::Pair(RawKey::from_static("k"), Param::from("v"));
    /// let map = RawOptions::Map(param_map! { "k" => "v" });
    ///
    /// assert_eq!(pairs.normalize(), expected);
    /// assert_eq!(pair.normalize(), expected);
    /// assert_eq!(map.normalize(), expected);
    /// assert!(RawOptions::Empty.normalize().is_empty());
    /// ```
    #[must_use]
    pub fn normalize(self) -> ParamMap {
        match self {
            RawOptions::Pairs(pairs) => pairs.into_iter().collect(),
            RawOptions::Pair(key, value) => RawOptions::Pairs(vec![(key, value)]).normalize(),
            RawOptions::Map(map) => map,
            RawOptions::Empty => ParamMap::new(),
        }
    }
}

impl From<ParamMap> for RawOptions {
    fn from(map: ParamMap) -> Self {
        RawOptions::Map(map)
    }
}

impl From<Vec<(RawKey, Param)>> for RawOptions {
    fn from(pairs: Vec<(RawKey, Param)>) -> Self {
        RawOptions::Pairs(pairs)
    }
}

impl From<(RawKey, Param)> for RawOptions {
    fn from((key, value): (RawKey, Param)) -> Self {
        RawOptions::Pair(key, value)
    }
}

impl<T: Into<RawOptions>> From<Option<T>> for RawOptions {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(RawOptions::Empty, Into::into)
    }
}

/// Detects the shape of an untyped value.
///
/// + a map becomes [`RawOptions::Map`]
/// + `[key, value]` with a string key becomes [`RawOptions::Pair`]
/// + a non-empty list of `[key, value]` lists becomes [`RawOptions::Pairs`]
/// + anything else is [`RawOptions::Empty`]
impl From<Param> for RawOptions {
    fn from(param: Param) -> Self {
        match param {
            Param::Map(map) => RawOptions::Map(map),
            Param::List(list) => from_list(list),
            other => {
                trace!(?other, "unrecognized options shape, using empty options");
                RawOptions::Empty
            }
        }
    }
}

fn from_list(list: Vec<Param>) -> RawOptions {
    if is_pair(&list) {
        return into_pair(list).map_or(RawOptions::Empty, |(key, value)| RawOptions::Pair(key, value));
    }

    let all_pairs = !list.is_empty() && list.iter().all(|p| p.as_list().is_some_and(is_pair));
    if !all_pairs {
        trace!(len = list.len(), "unrecognized options list, using empty options");
        return RawOptions::Empty;
    }

    let pairs = list
        .into_iter()
        .filter_map(|item| match item {
            Param::List(pair) => into_pair(pair),
            _ => None,
        })
        .collect();
    RawOptions::Pairs(pairs)
}

fn is_pair(list: &[Param]) -> bool {
    match list {
        [Param::String(key), _] => is_valid_key(key),
        _ => false,
    }
}

fn into_pair(list: Vec<Param>) -> Option<(RawKey, Param)> {
    let [Param::String(key), value] = <[Param; 2]>::try_from(list).ok()? else {
        return None;
    };
    Some((RawKey::new(key).ok()?, value))
}

/// Extracts the continuation token from paging options.
///
/// Every entry other than the token is discarded. The token may be supplied
/// under any key that renders to `nextToken` (`next_token`, `next-token`,
/// `nextToken`); a `null` token counts as absent.
///
/// ```
/// # use codedeploy_wire::{build_paging, param_map, Param, RawOptions};
/// let paging = build_paging(param_map! { "next_token" => "123", "max_items" => 5 });
/// assert_eq!(paging, param_map! { "nextToken" => "123" });
///
/// assert!(build_paging(RawOptions::Empty).is_empty());
/// ```
#[must_use]
pub fn build_paging(opts: impl Into<RawOptions>) -> ParamMap {
    let token = opts
        .into()
        .normalize()
        .into_iter()
        .rev()
        .find(|(key, value)| !value.is_null() && render(key.as_str(), CasingPolicy::LowerInitial) == NEXT_TOKEN)
        .map(|(_, value)| value);

    let mut paging = ParamMap::new();
    if let Some(token) = token {
        paging.insert(RawKey::from_static(NEXT_TOKEN), token);
    }
    paging
}
