//! Node data model for the flat parent-pointer store.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Wire spelling of the top-level sentinel in a `parent` field.
const ROOT_SENTINEL: &str = "root";

/// A node identifier: either an integer or a string.
///
/// Equality is exact — `Int(1)` and `Str("1")` are different ids, with no
/// coercion between the numeric and string forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Int(i64),
    Str(String),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Int(n) => write!(f, "{n}"),
            NodeId::Str(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for NodeId {
    type Err = Infallible;

    /// Input that parses as a signed 64-bit integer becomes the integer
    /// variant; anything else is taken as a string id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<i64>()
            .map_or_else(|_| NodeId::Str(s.to_string()), NodeId::Int))
    }
}

impl From<i64> for NodeId {
    fn from(n: i64) -> Self {
        NodeId::Int(n)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId::Str(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId::Str(s)
    }
}

/// A node's parent reference: top level, or a child of the node with this id.
///
/// On the wire the top-level case is the bare string `"root"` and the id case
/// is the id value itself. A string id spelled exactly `root` therefore
/// cannot occur in a parent field — the sentinel takes precedence when
/// reading.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Parent {
    Root,
    Id(NodeId),
}

impl Parent {
    pub fn is_root(&self) -> bool {
        matches!(self, Parent::Root)
    }
}

impl fmt::Display for Parent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parent::Root => f.write_str(ROOT_SENTINEL),
            Parent::Id(id) => id.fmt(f),
        }
    }
}

impl FromStr for Parent {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ROOT_SENTINEL {
            Ok(Parent::Root)
        } else {
            Ok(Parent::Id(s.parse()?))
        }
    }
}

impl From<NodeId> for Parent {
    fn from(id: NodeId) -> Self {
        Parent::Id(id)
    }
}

impl Serialize for Parent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Parent::Root => serializer.serialize_str(ROOT_SENTINEL),
            Parent::Id(id) => id.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Parent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match NodeId::deserialize(deserializer)? {
            NodeId::Str(s) if s == ROOT_SENTINEL => Parent::Root,
            id => Parent::Id(id),
        })
    }
}

/// One element of the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub parent: Parent,
    /// Optional classification tag, serialized as `"type"`. `None` means the
    /// key is absent from the document, `Some(None)` that it is explicitly
    /// null; the distinction survives a round trip. The store attaches no
    /// meaning to it.
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none",
        with = "opt_kind"
    )]
    pub kind: Option<Option<String>>,
}

impl Node {
    pub fn is_top_level(&self) -> bool {
        self.parent.is_root()
    }
}

/// Absent-vs-null handling for the `type` field: the field only reaches
/// these functions when the key is present, so the inner `Option` carries
/// the null case.
mod opt_kind {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<Option<String>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(kind) => kind.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Option<String>>, D::Error> {
        Option::<String>::deserialize(deserializer).map(Some)
    }
}
