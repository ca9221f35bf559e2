use indexmap::IndexMap;
use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Field name to property, in declaration order
pub type PropertyContainer = IndexMap<String, Property>;

/// Type tag of a schema property
///
/// Tags the loader does not recognise are kept as `Unknown` so that the
/// emitter can report them with the offending value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyKind {
    Timestamp,
    Text,
    Uuid,
    Integer,
    Decimal,
    Boolean,
    Json,
    Object,
    Unknown(String),
}

impl PropertyKind {
    pub fn as_str(&self) -> &str {
        match self {
            PropertyKind::Timestamp => "timestamp",
            PropertyKind::Text => "text",
            PropertyKind::Uuid => "uuid",
            PropertyKind::Integer => "integer",
            PropertyKind::Decimal => "decimal",
            PropertyKind::Boolean => "boolean",
            PropertyKind::Json => "json",
            PropertyKind::Object => "object",
            PropertyKind::Unknown(tag) => tag,
        }
    }
}

impl From<String> for PropertyKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "timestamp" => PropertyKind::Timestamp,
            "text" => PropertyKind::Text,
            "uuid" => PropertyKind::Uuid,
            "integer" => PropertyKind::Integer,
            "decimal" => PropertyKind::Decimal,
            "boolean" => PropertyKind::Boolean,
            "json" => PropertyKind::Json,
            "object" => PropertyKind::Object,
            _ => PropertyKind::Unknown(tag),
        }
    }
}

impl From<&str> for PropertyKind {
    fn from(tag: &str) -> Self {
        PropertyKind::from(tag.to_string())
    }
}

impl From<PropertyKind> for String {
    fn from(kind: PropertyKind) -> Self {
        match kind {
            PropertyKind::Unknown(tag) => tag,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named field descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "type")]
    pub kind: PropertyKind,

    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,

    /// Field holds a sequence rather than a single value
    #[serde(default, skip_serializing_if = "is_false")]
    pub list: bool,

    /// Nested fields, only read for `object` properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<PropertyContainer>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Property {
    pub fn new(kind: impl Into<PropertyKind>) -> Self {
        Self {
            kind: kind.into(),
            optional: false,
            list: false,
            property: None,
        }
    }

    /// Create an `object` property with the given nested fields
    pub fn object(property: PropertyContainer) -> Self {
        Self {
            property: Some(property),
            ..Self::new(PropertyKind::Object)
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn list(mut self) -> Self {
        self.list = true;
        self
    }
}

/// Record selector shape(s) of a permit
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FilterSpec {
    /// One of several shapes, in declaration order
    Union(Vec<PropertyContainer>),
    Shape(PropertyContainer),
}

// Branches on the JSON kind so errors inside a shape keep their cause
impl<'de> Deserialize<'de> for FilterSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FilterSpecVisitor;

        impl<'de> Visitor<'de> for FilterSpecVisitor {
            type Value = FilterSpec;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a filter shape object or a list of shapes")
            }

            fn visit_seq<A>(self, seq: A) -> Result<FilterSpec, A::Error>
            where
                A: SeqAccess<'de>,
            {
                Vec::<PropertyContainer>::deserialize(SeqAccessDeserializer::new(seq))
                    .map(FilterSpec::Union)
            }

            fn visit_map<A>(self, map: A) -> Result<FilterSpec, A::Error>
            where
                A: MapAccess<'de>,
            {
                PropertyContainer::deserialize(MapAccessDeserializer::new(map))
                    .map(FilterSpec::Shape)
            }
        }

        deserializer.deserialize_any(FilterSpecVisitor)
    }
}

/// What filtering, effect and extension apply to an allowed change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutatePermit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<PropertyContainer>,

    /// Name of the schema whose type this permit extends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extend: Option<String>,
}

impl MutatePermit {
    pub fn filter(&self) -> Option<&FilterSpec> {
        self.filter.as_ref()
    }

    pub fn effect(&self) -> Option<&PropertyContainer> {
        self.effect.as_ref()
    }

    /// The extended schema name, if one is set and non-empty
    pub fn extend(&self) -> Option<&str> {
        self.extend.as_deref().filter(|name| !name.is_empty())
    }
}

/// Identity of the schema set being compiled.
///
/// Threaded through every emitter call unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base {
    #[serde(default)]
    pub name: String,
}

impl Base {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A file of named permits sharing one base
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermitDocument {
    #[serde(default)]
    pub base: Base,

    #[serde(default)]
    pub permit: IndexMap<String, MutatePermit>,
}
