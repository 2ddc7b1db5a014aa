use super::DocumentVersion;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDefinition {
    pub name: String,
    pub version: DocumentVersion,
    #[serde(rename = "type")]
    pub schema_type: String,
    pub data: SchemaBody,
}

// Only the members cross-checked against workflows are typed; `raw` keeps
// the whole body for compilation.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaBody {
    pub properties: Map<String, Value>,
    pub required: Vec<String>,
    raw: Value,
}

impl SchemaBody {
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }
}

#[derive(Deserialize)]
struct SchemaBodyFields {
    properties: Map<String, Value>,
    #[serde(default)]
    required: Vec<String>,
}

impl<'de> Deserialize<'de> for SchemaBody {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        let fields = serde_json::from_value::<SchemaBodyFields>(raw.clone())
            .map_err(serde::de::Error::custom)?;
        Ok(SchemaBody {
            properties: fields.properties,
            required: fields.required,
            raw,
        })
    }
}

impl Serialize for SchemaBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
