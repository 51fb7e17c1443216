//! Block definitions as they arrive from the form builder.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::BlockError;
use crate::kind::BlockType;
use crate::meta::FieldMeta;
use crate::types::*;

/// Stable identity of a block: a string key or a numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockKey {
    Id(u64),
    Name(String),
}

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for BlockKey {
    fn from(key: &str) -> Self {
        Self::Name(key.to_owned())
    }
}

impl From<String> for BlockKey {
    fn from(key: String) -> Self {
        Self::Name(key)
    }
}

impl From<u64> for BlockKey {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl PartialEq<str> for BlockKey {
    fn eq(&self, other: &str) -> bool {
        match self {
            Self::Id(id) => other.parse::<u64>().is_ok_and(|other| other == *id),
            Self::Name(name) => name == other,
        }
    }
}

impl PartialEq<&str> for BlockKey {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

// ============================================================================
// RICH TEXT
// ============================================================================

/// A run of text inside a heading or paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Record attribute the run is bound to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelRef>,
}

impl RichText {
    #[must_use]
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            url: None,
            model: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRef {
    pub id: u64,
    pub name: String,
    pub attribute: String,
}

// ============================================================================
// BLOCK KIND
// ============================================================================

/// Type-tagged payload of a block.
///
/// The `type` property selects the variant. Field payloads are read from
/// `config` or from a property named after the type tag; presentational
/// payloads from `text` or the type tag. Unrecognised tags become
/// [`BlockKind::Unknown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BlockKind {
    #[serde(rename = "checkbox_field", alias = "checkbox")]
    Checkbox {
        #[serde(alias = "checkbox_field")]
        config: CheckboxConfig,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
    },

    #[serde(rename = "single_select_field", alias = "single_select")]
    SingleSelect {
        #[serde(alias = "single_select_field")]
        config: SelectConfig,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
    },

    #[serde(rename = "text_field", alias = "text")]
    Text {
        #[serde(alias = "text_field")]
        config: TextConfig,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
    },

    #[serde(rename = "file_field", alias = "file")]
    File {
        #[serde(alias = "file_field")]
        config: FileConfig,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
    },

    #[serde(rename = "email_field", alias = "email")]
    Email {
        #[serde(alias = "email_field")]
        config: EmailConfig,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
    },

    #[serde(rename = "url_field", alias = "url")]
    Url {
        #[serde(alias = "url_field")]
        config: UrlConfig,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
    },

    #[serde(rename = "phone_field", alias = "phone")]
    Phone {
        #[serde(alias = "phone_field")]
        config: PhoneConfig,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
    },

    #[serde(rename = "heading_one")]
    HeadingOne {
        #[serde(default, alias = "heading_one")]
        text: Vec<RichText>,
    },

    #[serde(rename = "heading_two")]
    HeadingTwo {
        #[serde(default, alias = "heading_two")]
        text: Vec<RichText>,
    },

    #[serde(rename = "heading_three")]
    HeadingThree {
        #[serde(default, alias = "heading_three")]
        text: Vec<RichText>,
    },

    #[serde(rename = "divider")]
    Divider,

    #[serde(rename = "paragraph")]
    Paragraph {
        #[serde(default, alias = "paragraph")]
        text: Vec<RichText>,
    },

    #[serde(other)]
    Unknown,
}

impl BlockKind {
    /// `None` for [`BlockKind::Unknown`].
    #[must_use]
    pub fn block_type(&self) -> Option<BlockType> {
        Some(match self {
            Self::Checkbox { .. } => BlockType::Checkbox,
            Self::SingleSelect { .. } => BlockType::SingleSelect,
            Self::Text { .. } => BlockType::Text,
            Self::File { .. } => BlockType::File,
            Self::Email { .. } => BlockType::Email,
            Self::Url { .. } => BlockType::Url,
            Self::Phone { .. } => BlockType::Phone,
            Self::HeadingOne { .. } => BlockType::HeadingOne,
            Self::HeadingTwo { .. } => BlockType::HeadingTwo,
            Self::HeadingThree { .. } => BlockType::HeadingThree,
            Self::Divider => BlockType::Divider,
            Self::Paragraph { .. } => BlockType::Paragraph,
            Self::Unknown => return None,
        })
    }

    /// Common field metadata, for field variants only.
    #[must_use]
    pub fn field_meta(&self) -> Option<&FieldMeta> {
        match self {
            Self::Checkbox { config, .. } => Some(&config.meta),
            Self::SingleSelect { config, .. } => Some(&config.meta),
            Self::Text { config, .. } => Some(&config.meta),
            Self::File { config, .. } => Some(&config.meta),
            Self::Email { config, .. } | Self::Url { config, .. } => Some(&config.meta),
            Self::Phone { config, .. } => Some(&config.meta),
            Self::HeadingOne { .. }
            | Self::HeadingTwo { .. }
            | Self::HeadingThree { .. }
            | Self::Divider
            | Self::Paragraph { .. }
            | Self::Unknown => None,
        }
    }

    fn value_slot(&mut self) -> Option<&mut Option<Value>> {
        match self {
            Self::Checkbox { value, .. }
            | Self::SingleSelect { value, .. }
            | Self::Text { value, .. }
            | Self::File { value, .. }
            | Self::Email { value, .. }
            | Self::Url { value, .. }
            | Self::Phone { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Currently-held value, for field variants only.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Checkbox { value, .. }
            | Self::SingleSelect { value, .. }
            | Self::Text { value, .. }
            | Self::File { value, .. }
            | Self::Email { value, .. }
            | Self::Url { value, .. }
            | Self::Phone { value, .. } => value.as_ref(),
            _ => None,
        }
    }
}

// ============================================================================
// BLOCK
// ============================================================================

/// A single form element definition.
///
/// # Examples
///
/// ```
/// use formgate_block::prelude::*;
///
/// let block = Block::from_json(
///     r#"{"key": "name", "type": "text_field", "text_field": {"label": "Name", "optional": false}}"#,
/// )
/// .unwrap();
///
/// assert_eq!(block.block_type(), Some(BlockType::Text));
/// assert!(block.is_field());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub key: BlockKey,

    #[serde(flatten)]
    pub kind: BlockKind,
}

impl Block {
    #[must_use]
    pub fn new(key: impl Into<BlockKey>, kind: BlockKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }

    #[must_use]
    pub fn checkbox(key: impl Into<BlockKey>, config: CheckboxConfig) -> Self {
        Self::new(key, BlockKind::Checkbox { config, value: None })
    }

    #[must_use]
    pub fn single_select(key: impl Into<BlockKey>, config: SelectConfig) -> Self {
        Self::new(key, BlockKind::SingleSelect { config, value: None })
    }

    #[must_use]
    pub fn text(key: impl Into<BlockKey>, config: TextConfig) -> Self {
        Self::new(key, BlockKind::Text { config, value: None })
    }

    #[must_use]
    pub fn file(key: impl Into<BlockKey>, config: FileConfig) -> Self {
        Self::new(key, BlockKind::File { config, value: None })
    }

    #[must_use]
    pub fn email(key: impl Into<BlockKey>, config: EmailConfig) -> Self {
        Self::new(key, BlockKind::Email { config, value: None })
    }

    #[must_use]
    pub fn url(key: impl Into<BlockKey>, config: UrlConfig) -> Self {
        Self::new(key, BlockKind::Url { config, value: None })
    }

    #[must_use]
    pub fn phone(key: impl Into<BlockKey>, config: PhoneConfig) -> Self {
        Self::new(key, BlockKind::Phone { config, value: None })
    }

    /// Sets the currently-held value. Ignored for non-field blocks.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_value(mut self, value: Value) -> Self {
        if let Some(slot) = self.kind.value_slot() {
            *slot = Some(value);
        }
        self
    }

    /// Parses one block definition.
    pub fn from_json(json: &str) -> Result<Self, BlockError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a JSON array of block definitions.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, BlockError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, BlockError> {
        Ok(serde_json::from_value(value)?)
    }

    #[must_use]
    pub fn block_type(&self) -> Option<BlockType> {
        self.kind.block_type()
    }

    #[must_use]
    pub fn is_field(&self) -> bool {
        self.block_type().is_some_and(BlockType::is_field)
    }

    #[must_use]
    pub fn field_meta(&self) -> Option<&FieldMeta> {
        self.kind.field_meta()
    }

    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.kind.value()
    }
}
