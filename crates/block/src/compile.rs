//! Block-to-validator dispatch.

use crate::block::{Block, BlockKind};
use crate::error::BlockError;
use crate::options::CompileOptions;
use crate::presence;
use crate::types::domain::HostSource;
use crate::types::{checkbox, domain, file, phone, select, text};
use crate::validator::{FieldRules, FieldValidator};

/// Compiles the validator for one block.
///
/// With `allow_nullish` the validator accepts an absent or blank value even
/// when the block itself is required. Presentational blocks and unrecognised
/// block types have nothing to validate and yield `Ok(None)`.
///
/// # Examples
///
/// ```
/// use formgate_block::prelude::*;
/// use serde_json::json;
///
/// let block = Block::checkbox("agree", CheckboxConfig::new(FieldMeta::new("I agree")));
///
/// let strict = compile_block_validator(&block, false).unwrap().unwrap();
/// assert!(strict.validate(None).is_err());
///
/// let draft = compile_block_validator(&block, true).unwrap().unwrap();
/// assert_eq!(draft.validate(None), Ok(None));
/// ```
pub fn compile_block_validator(
    block: &Block,
    allow_nullish: bool,
) -> Result<Option<FieldValidator>, BlockError> {
    compile_block_validator_with(block, &CompileOptions::new().allow_nullish(allow_nullish))
}

/// Compiles the validator for one block with explicit options.
pub fn compile_block_validator_with(
    block: &Block,
    options: &CompileOptions,
) -> Result<Option<FieldValidator>, BlockError> {
    let (Some(block_type), Some(meta)) = (block.block_type(), block.field_meta()) else {
        return Ok(None);
    };
    let optional = presence::is_optional(options.allow_nullish, meta.optional);

    let rules: Box<dyn FieldRules> = match &block.kind {
        BlockKind::Checkbox { config, .. } => Box::new(checkbox::compile(config)),
        BlockKind::SingleSelect { config, .. } => Box::new(select::compile(config, optional)),
        BlockKind::Text { config, .. } => Box::new(text::compile(config, &block.key, optional)?),
        BlockKind::File { config, .. } => Box::new(file::compile(config, optional)),
        BlockKind::Email { config, .. } => {
            Box::new(domain::compile(config, HostSource::EmailAddress))
        }
        BlockKind::Url { config, .. } => Box::new(domain::compile(config, HostSource::Url)),
        BlockKind::Phone { config, .. } => Box::new(phone::compile(
            config,
            &block.key,
            options.default_country.as_ref(),
        )?),
        BlockKind::HeadingOne { .. }
        | BlockKind::HeadingTwo { .. }
        | BlockKind::HeadingThree { .. }
        | BlockKind::Divider
        | BlockKind::Paragraph { .. }
        | BlockKind::Unknown => return Ok(None),
    };

    tracing::debug!(
        key = %block.key,
        block_type = block_type.as_str(),
        optional,
        "compiled block validator"
    );

    Ok(Some(FieldValidator::new(
        block.key.clone(),
        block_type,
        optional,
        rules,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::RichText;
    use crate::kind::BlockType;
    use crate::meta::FieldMeta;
    use crate::types::*;
    use serde_json::json;

    #[test]
    fn presentational_blocks_have_no_validator() {
        let blocks = [
            Block::new("h1", BlockKind::HeadingOne { text: vec![RichText::plain("Hi")] }),
            Block::new("h2", BlockKind::HeadingTwo { text: vec![] }),
            Block::new("h3", BlockKind::HeadingThree { text: vec![] }),
            Block::new("d", BlockKind::Divider),
            Block::new("p", BlockKind::Paragraph { text: vec![] }),
            Block::new("?", BlockKind::Unknown),
        ];
        for block in &blocks {
            assert!(compile_block_validator(block, false).unwrap().is_none());
            assert!(compile_block_validator(block, true).unwrap().is_none());
        }
    }

    #[test]
    fn every_field_type_compiles() {
        let meta = FieldMeta::new("Field");
        let blocks = [
            Block::checkbox("a", CheckboxConfig::new(meta.clone())),
            Block::single_select("b", SelectConfig { meta: meta.clone(), ..SelectConfig::default() }),
            Block::text("c", TextConfig { meta: meta.clone(), ..TextConfig::default() }),
            Block::file("d", FileConfig { meta: meta.clone(), ..FileConfig::default() }),
            Block::email("e", EmailConfig { meta: meta.clone(), ..EmailConfig::default() }),
            Block::url("f", UrlConfig { meta: meta.clone(), ..UrlConfig::default() }),
            Block::phone("g", PhoneConfig { meta, ..PhoneConfig::default() }),
        ];

        let types: Vec<BlockType> = blocks
            .iter()
            .map(|block| compile_block_validator(block, false).unwrap().unwrap().block_type())
            .collect();
        assert_eq!(types, BlockType::FIELD_TYPES.to_vec());
    }

    #[test]
    fn allow_nullish_overrides_required_blocks() {
        let block = Block::text("name", TextConfig { meta: FieldMeta::new("Name"), ..TextConfig::default() });

        let strict = compile_block_validator(&block, false).unwrap().unwrap();
        assert!(!strict.is_optional());
        assert!(strict.validate(Some(&json!(""))).is_err());

        let lenient = compile_block_validator(&block, true).unwrap().unwrap();
        assert!(lenient.is_optional());
        assert_eq!(lenient.validate(Some(&json!("   "))), Ok(None));
        assert_eq!(lenient.validate(Some(&json!(null))), Ok(None));
    }

    #[test]
    fn compile_errors_surface() {
        let block = Block::text(
            "bad",
            TextConfig {
                pattern: Some(TextPattern { value: "[".into(), message: "x".into() }),
                ..TextConfig::default()
            },
        );
        let error = compile_block_validator(&block, false).unwrap_err();
        assert_eq!(error.code(), "BLOCK_INVALID_PATTERN");
    }
}
