//! Schema model emitted for function-calling APIs.
//!
//! Serialization follows the JSON Schema subset accepted by function-calling
//! endpoints: empty descriptions, enums, properties, required lists and
//! missing items are omitted per node.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The `type` keyword of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Object,
    Array,
    String,
    Integer,
    Number,
    Boolean,
    /// Unsupported or unresolved type.
    Null,
}

/// Description of one function: its name, documentation and parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDetails {
    pub name: String,
    pub description: String,
    pub parameters: Definition,
}

/// One schema node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(rename = "type")]
    pub data_type: DataType,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Allowed values, in tag order.
    #[serde(default, rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,

    /// Child schemas of an `object` node, in declaration order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Definition>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Element schema of an `array` node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Definition>>,
}

impl Definition {
    #[must_use]
    pub fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            description: String::new(),
            enum_values: Vec::new(),
            properties: IndexMap::new(),
            required: Vec::new(),
            items: None,
        }
    }

    #[must_use]
    pub fn object() -> Self {
        Self::new(DataType::Object)
    }

    #[must_use]
    pub fn null() -> Self {
        Self::new(DataType::Null)
    }

    #[must_use]
    pub fn array(items: Self) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::new(DataType::Array)
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_enum(mut self, values: Vec<String>) -> Self {
        self.enum_values = values;
        self
    }

    /// Add (or replace) a property, listing it in `required` when asked.
    ///
    /// A name is listed in `required` at most once.
    pub fn insert_property(&mut self, name: impl Into<String>, definition: Self, required: bool) {
        let name = name.into();
        if required && !self.required.contains(&name) {
            self.required.push(name.clone());
        } else if !required {
            self.required.retain(|existing| existing != &name);
        }
        self.properties.insert(name, definition);
    }

    /// Remove and return the only property, if there is exactly one.
    ///
    /// # Errors
    /// Hands `self` back unchanged when it has zero or several properties.
    pub fn into_single_property(mut self) -> Result<Self, Self> {
        if self.properties.len() == 1
            && let Some((_, only)) = self.properties.pop()
        {
            return Ok(only);
        }
        Err(self)
    }
}
