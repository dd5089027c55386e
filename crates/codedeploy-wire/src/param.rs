//! Parameter trees

use crate::case::{CasingPolicy, render};
use crate::error::{WireError, WireResult};
use crate::key::RawKey;

use std::collections::HashSet;

use indexmap::IndexMap;
use serde_json::{Number, Value};

/// Keyed mapping of a parameter tree
pub type ParamMap = IndexMap<RawKey, Param>;

/// A caller-supplied parameter tree.
///
/// The shape mirrors JSON, except that map keys are [`RawKey`]s that still
/// have to be rendered into wire keys.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Param {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    List(Vec<Param>),
    Map(ParamMap),
}

impl Param {
    /// Converts an untrusted JSON value into a parameter tree.
    ///
    /// # Errors
    /// + [`WireError::InvalidKey`] if an object key is not a valid [`RawKey`]
    /// + [`WireError::DuplicateKey`] if two keys of one object render to the same wire key
    /// + [`WireError::DepthExceeded`] if containers nest deeper than `max_depth`
    pub fn try_from_json(value: Value, max_depth: usize) -> WireResult<Self> {
        from_json(value, 0, max_depth)
    }

    /// Nesting depth of containers. Scalars have depth 0, `{}` and `[]` have depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Param::List(list) => 1 + list.iter().map(Param::depth).max().unwrap_or(0),
            Param::Map(map) => 1 + map.values().map(Param::depth).max().unwrap_or(0),
            _ => 0,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Param::Null)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Param::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Param]> {
        match self {
            Param::List(list) => Some(list),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_map(&self) -> Option<&ParamMap> {
        match self {
            Param::Map(map) => Some(map),
            _ => None,
        }
    }
}

fn from_json(value: Value, depth: usize, max_depth: usize) -> WireResult<Param> {
    let is_container = matches!(value, Value::Array(_) | Value::Object(_));
    if is_container && depth >= max_depth {
        return Err(WireError::DepthExceeded { max: max_depth });
    }
    Ok(match value {
        Value::Null => Param::Null,
        Value::Bool(b) => Param::Bool(b),
        Value::Number(n) => Param::Number(n),
        Value::String(s) => Param::String(s),
        Value::Array(arr) => {
            let list = arr.into_iter().map(|v| from_json(v, depth + 1, max_depth));
            Param::List(list.collect::<WireResult<_>>()?)
        }
        Value::Object(obj) => {
            let mut map = ParamMap::with_capacity(obj.len());
            let mut wire_keys = HashSet::with_capacity(obj.len());
            for (k, v) in obj {
                let key = RawKey::new(k)?;
                // Both casing policies collide on the same keys.
                let wire_key = render(key.as_str(), CasingPolicy::LowerInitial);
                if !wire_keys.insert(wire_key.clone()) {
                    return Err(WireError::DuplicateKey {
                        key: key.into_string(),
                        wire_key,
                    });
                }
                map.insert(key, from_json(v, depth + 1, max_depth)?);
            }
            Param::Map(map)
        }
    })
}

macro_rules! from_number {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Param {
                fn from(n: $ty) -> Self {
                    Param::Number(Number::from(n))
                }
            }
        )+
    };
}

from_number!(i32, i64, u32, u64, usize);

impl From<f64> for Param {
    /// Non-finite floats have no JSON representation and become [`Param::Null`].
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Param::Null, Param::Number)
    }
}

impl From<bool> for Param {
    fn from(b: bool) -> Self {
        Param::Bool(b)
    }
}

impl From<&str> for Param {
    fn from(s: &str) -> Self {
        Param::String(s.to_owned())
    }
}

impl From<String> for Param {
    fn from(s: String) -> Self {
        Param::String(s)
    }
}

impl From<ParamMap> for Param {
    fn from(map: ParamMap) -> Self {
        Param::Map(map)
    }
}

impl<T: Into<Param>> From<Vec<T>> for Param {
    fn from(list: Vec<T>) -> Self {
        Param::List(list.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Param::Null, Into::into)
    }
}

/// Builds a [`ParamMap`] from string-literal keys.
///
/// Keys are validated at compile time (see [`RawKey::from_static`]).
///
/// ```compile_fail
/// let map = codedeploy_wire::param_map! { "bad key.x" => 1 };
/// ```
///
/// ```
/// use codedeploy_wire::{param_map, Param};
///
/// let map = param_map! {
///     "application_name" => "my-app",
///     "revision" => param_map! { "revision_type" => "S3" },
/// };
/// assert_eq!(map.len(), 2);
/// assert_eq!(map["application_name"], Param::from("my-app"));
/// ```
#[macro_export]
macro_rules! param_map {
    () => {
        $crate::ParamMap::new()
    };
    ($($key:literal => $value:expr),+ $(,)?) => {{
        let mut map = $crate::ParamMap::new();
        $(
            map.insert(const { $crate::RawKey::from_static($key) }, $crate::Param::from($value));
        )+
        map
    }};
}
