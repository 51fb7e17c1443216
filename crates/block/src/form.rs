//! Whole-form validation over a list of blocks.

use std::collections::HashSet;

use formgate_validator::foundation::ValidationErrors;
use serde_json::{Map, Value};

use crate::block::{Block, BlockKey};
use crate::compile::compile_block_validator_with;
use crate::error::BlockError;
use crate::options::CompileOptions;
use crate::validator::FieldValidator;

/// Validators for every field block of a form, in block order.
///
/// # Examples
///
/// ```
/// use formgate_block::prelude::*;
/// use serde_json::json;
///
/// let blocks = vec![
///     Block::text("name", TextConfig { meta: FieldMeta::new("Name"), ..TextConfig::default() }),
///     Block::email("email", EmailConfig { meta: FieldMeta::new("Email").optional(true), ..EmailConfig::default() }),
/// ];
/// let form = FormValidator::compile(&blocks, &CompileOptions::default()).unwrap();
///
/// let data = json!({"name": " Ada ", "email": ""});
/// let output = form.validate(data.as_object().unwrap()).unwrap();
/// assert_eq!(serde_json::Value::Object(output), json!({"name": "Ada"}));
/// ```
#[derive(Debug, Default)]
pub struct FormValidator {
    fields: Vec<FieldValidator>,
}

impl FormValidator {
    /// Compiles every field block. Presentational and unknown blocks are
    /// skipped; when two blocks share a key the first one wins.
    pub fn compile<'a>(
        blocks: impl IntoIterator<Item = &'a Block>,
        options: &CompileOptions,
    ) -> Result<Self, BlockError> {
        let mut seen = HashSet::new();
        let mut fields = Vec::new();

        for block in blocks {
            if !seen.insert(&block.key) {
                tracing::debug!(key = %block.key, "skipping block with duplicate key");
                continue;
            }
            if let Some(field) = compile_block_validator_with(block, options)? {
                fields.push(field);
            }
        }

        Ok(Self { fields })
    }

    /// Validates submitted data keyed by block key.
    ///
    /// A missing entry counts as absent. The output holds the normalized
    /// value of every field that is present after normalization.
    pub fn validate(&self, data: &Map<String, Value>) -> Result<Map<String, Value>, FormErrors> {
        let mut output = Map::new();
        let mut errors = FormErrors::default();

        for field in &self.fields {
            let key = field.key().to_string();
            match field.validate(data.get(&key)) {
                Ok(Some(value)) => {
                    output.insert(key, value);
                }
                Ok(None) => {}
                Err(issues) => errors.fields.push((field.key().clone(), issues)),
            }
        }

        if errors.is_empty() {
            Ok(output)
        } else {
            Err(errors)
        }
    }

    /// Validates the values the blocks currently hold.
    pub fn validate_blocks(&self, blocks: &[Block]) -> Result<Map<String, Value>, FormErrors> {
        let mut data = Map::new();
        for block in blocks {
            if let Some(value) = block.value() {
                data.entry(block.key.to_string()).or_insert_with(|| value.clone());
            }
        }
        self.validate(&data)
    }

    /// Validator for `key`, if the form has a field with that key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValidator> {
        self.fields.iter().find(|field| *field.key() == *key)
    }

    /// Keys of the compiled fields, in block order.
    pub fn keys(&self) -> impl Iterator<Item = &BlockKey> {
        self.fields.iter().map(FieldValidator::key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ============================================================================
// FORM ERRORS
// ============================================================================

/// Issues of every rejected field, grouped by block key in block order.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("form validation failed for {} field(s)", .fields.len())]
pub struct FormErrors {
    fields: Vec<(BlockKey, ValidationErrors)>,
}

impl FormErrors {
    /// Issues for one field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ValidationErrors> {
        self.fields
            .iter()
            .find(|(field, _)| *field == *key)
            .map(|(_, errors)| errors)
    }

    /// Messages for one field, empty when the field passed.
    #[must_use]
    pub fn messages(&self, key: &str) -> Vec<&str> {
        self.get(key).map(ValidationErrors::messages).unwrap_or_default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &BlockKey> {
        self.fields.iter().map(|(key, _)| key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BlockKey, &ValidationErrors)> {
        self.fields.iter().map(|(key, errors)| (key, errors))
    }

    /// Number of rejected fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
