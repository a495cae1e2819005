use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Filter;
use crate::metadata::Metadata;

/// The shapes accepted as "filters" by filtered get and delete requests.
///
/// Serializes adjacently tagged, e.g. `{"kind": "mapping", "value": {...}}`,
/// so that a mapping keyed by a condition name such as `"Exists"` reads back
/// as a mapping. [`to_value`](Self::to_value) renders the untagged shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FilterSpec {
    /// A structured predicate tree.
    Structured(Filter),
    /// Field equality on every key.
    Mapping(Map<String, Value>),
    /// Any of the mappings matches.
    Mappings(Vec<Map<String, Value>>),
}

impl FilterSpec {
    /// Builds a single-mapping spec from key/value pairs.
    ///
    /// ```
    /// use docindex_core::{FilterSpec, Metadata};
    ///
    /// let spec = FilterSpec::mapping([("lang", "en")]);
    /// assert!(spec.matches(&Metadata::new().with_field("lang", "en")));
    /// ```
    pub fn mapping<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Mapping(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// An empty mapping or list constrains nothing. A structured filter is
    /// never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Structured(_) => false,
            Self::Mapping(map) => map.is_empty(),
            Self::Mappings(maps) => maps.is_empty(),
        }
    }

    /// Evaluates the spec against document metadata. Empty specs match.
    pub fn matches(&self, metadata: &Metadata) -> bool {
        match self {
            Self::Structured(filter) => filter.matches(metadata),
            Self::Mapping(map) => mapping_matches(map, metadata),
            Self::Mappings(maps) => {
                maps.is_empty() || maps.iter().any(|map| mapping_matches(map, metadata))
            }
        }
    }

    /// Untagged JSON rendering used when reporting the spec as an ignored
    /// argument: a mapping as an object, a list as an array, a structured
    /// filter as its condition tree.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Structured(filter) => serde_json::to_value(filter)
                .unwrap_or_else(|e| Value::String(format!("{filter:?} ({e})"))),
            Self::Mapping(map) => Value::Object(map.clone()),
            Self::Mappings(maps) => maps.iter().cloned().map(Value::Object).collect(),
        }
    }
}

fn mapping_matches(map: &Map<String, Value>, metadata: &Metadata) -> bool {
    map.iter().all(|(key, want)| metadata.get(key) == Some(want))
}

impl From<Filter> for FilterSpec {
    fn from(filter: Filter) -> Self {
        Self::Structured(filter)
    }
}

impl From<Map<String, Value>> for FilterSpec {
    fn from(map: Map<String, Value>) -> Self {
        Self::Mapping(map)
    }
}

impl From<Vec<Map<String, Value>>> for FilterSpec {
    fn from(maps: Vec<Map<String, Value>>) -> Self {
        Self::Mappings(maps)
    }
}
