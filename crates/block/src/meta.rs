use serde::{Deserialize, Serialize};

/// Human-facing information shared by every field config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMeta {
    /// Label shown next to the input.
    #[serde(default)]
    pub label: String,

    /// Longer help text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether leaving the field empty is acceptable.
    #[serde(default)]
    pub optional: bool,
}

impl FieldMeta {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
