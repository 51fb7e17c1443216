use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of block types.
///
/// Seven *field* types collect a value; the rest are presentational and never
/// produce a validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    #[serde(rename = "checkbox_field", alias = "checkbox")]
    Checkbox,
    #[serde(rename = "single_select_field", alias = "single_select")]
    SingleSelect,
    #[serde(rename = "text_field", alias = "text")]
    Text,
    #[serde(rename = "file_field", alias = "file")]
    File,
    #[serde(rename = "email_field", alias = "email")]
    Email,
    #[serde(rename = "url_field", alias = "url")]
    Url,
    #[serde(rename = "phone_field", alias = "phone")]
    Phone,
    HeadingOne,
    HeadingTwo,
    HeadingThree,
    Divider,
    Paragraph,
}

impl BlockType {
    /// Types that carry a user-supplied value.
    pub const FIELD_TYPES: [Self; 7] = [
        Self::Checkbox,
        Self::SingleSelect,
        Self::Text,
        Self::File,
        Self::Email,
        Self::Url,
        Self::Phone,
    ];

    /// Every block type, fields first.
    pub const ALL: [Self; 12] = [
        Self::Checkbox,
        Self::SingleSelect,
        Self::Text,
        Self::File,
        Self::Email,
        Self::Url,
        Self::Phone,
        Self::HeadingOne,
        Self::HeadingTwo,
        Self::HeadingThree,
        Self::Divider,
        Self::Paragraph,
    ];

    /// The wire tag used in block definitions.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Checkbox => "checkbox_field",
            Self::SingleSelect => "single_select_field",
            Self::Text => "text_field",
            Self::File => "file_field",
            Self::Email => "email_field",
            Self::Url => "url_field",
            Self::Phone => "phone_field",
            Self::HeadingOne => "heading_one",
            Self::HeadingTwo => "heading_two",
            Self::HeadingThree => "heading_three",
            Self::Divider => "divider",
            Self::Paragraph => "paragraph",
        }
    }

    /// Whether blocks of this type carry a value.
    #[must_use]
    pub const fn is_field(self) -> bool {
        matches!(
            self,
            Self::Checkbox
                | Self::SingleSelect
                | Self::Text
                | Self::File
                | Self::Email
                | Self::Url
                | Self::Phone
        )
    }

    /// Whether blocks of this type only present content.
    #[must_use]
    pub const fn is_presentational(self) -> bool {
        !self.is_field()
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_and_presentational_partition_all() {
        let fields = BlockType::ALL.iter().filter(|t| t.is_field()).count();
        let presentational = BlockType::ALL.iter().filter(|t| t.is_presentational()).count();
        assert_eq!(fields, BlockType::FIELD_TYPES.len());
        assert_eq!(fields + presentational, BlockType::ALL.len());
    }

    #[test]
    fn serde_uses_wire_tags() {
        for block_type in BlockType::ALL {
            let json = serde_json::to_value(block_type).unwrap();
            assert_eq!(json, serde_json::json!(block_type.as_str()));
            let back: BlockType = serde_json::from_value(json).unwrap();
            assert_eq!(back, block_type);
        }
    }

    #[test]
    fn short_aliases_are_accepted() {
        let parsed: BlockType = serde_json::from_str("\"single_select\"").unwrap();
        assert_eq!(parsed, BlockType::SingleSelect);
        let parsed: BlockType = serde_json::from_str("\"phone\"").unwrap();
        assert_eq!(parsed, BlockType::Phone);
    }
}
