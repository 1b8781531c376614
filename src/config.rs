//! Rendering configuration for function assertions.

use serde::{Deserialize, Serialize};

/// How the type name of a wrapped function is rendered in failure messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeNameStyle {
    /// Module paths stripped: `alloc::string::String` becomes `String`.
    #[default]
    Simple,
    /// The name exactly as reported by [`std::any::type_name`].
    Qualified,
}

/// Configuration shared by every assertion in a chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionConfig {
    /// Type name rendering for the function under test.
    #[serde(default)]
    pub type_names: TypeNameStyle,
    /// Description prefixed to failure messages as `[description] `.
    #[serde(default)]
    pub description: Option<String>,
}

impl AssertionConfig {
    /// Set type name style.
    pub fn with_type_names(mut self, type_names: TypeNameStyle) -> Self {
        self.type_names = type_names;
        self
    }

    /// Set failure message description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize this configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
