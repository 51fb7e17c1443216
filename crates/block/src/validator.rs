//! Compiled field validators.

use std::fmt;

use formgate_validator::foundation::{ValidationError, ValidationErrors};
use serde_json::Value;

use crate::block::BlockKey;
use crate::kind::BlockType;
use crate::presence;

/// Type-specific rules behind a [`FieldValidator`].
///
/// `check` only ever sees a present, non-null value; absence and blank
/// values on the optional path are handled by the validator itself.
pub(crate) trait FieldRules: fmt::Debug + Send + Sync {
    /// Issue reported when a required value is absent.
    fn required_error(&self) -> ValidationError {
        ValidationError::required()
    }

    /// Checks `value` and returns its normalized form.
    fn check(&self, value: &Value) -> Result<Value, ValidationErrors>;
}

/// A validator compiled from one field block.
///
/// Holds no mutable state: one instance may validate any number of values,
/// from any number of threads.
///
/// # Examples
///
/// ```
/// use formgate_block::prelude::*;
/// use serde_json::json;
///
/// let block = Block::text(
///     "name",
///     TextConfig {
///         meta: FieldMeta::new("Name"),
///         min_length: Some(3),
///         max_length: Some(10),
///         ..TextConfig::default()
///     },
/// );
/// let validator = compile_block_validator(&block, false).unwrap().unwrap();
///
/// assert_eq!(validator.validate(Some(&json!("  John "))), Ok(Some(json!("John"))));
/// assert!(validator.validate(Some(&json!("J"))).is_err());
/// assert!(validator.validate(None).is_err());
/// ```
pub struct FieldValidator {
    key: BlockKey,
    block_type: BlockType,
    optional: bool,
    rules: Box<dyn FieldRules>,
}

impl FieldValidator {
    pub(crate) fn new(
        key: BlockKey,
        block_type: BlockType,
        optional: bool,
        rules: Box<dyn FieldRules>,
    ) -> Self {
        Self {
            key,
            block_type,
            optional,
            rules,
        }
    }

    /// Key of the block this validator was compiled from.
    #[must_use]
    pub fn key(&self) -> &BlockKey {
        &self.key
    }

    #[must_use]
    pub fn block_type(&self) -> BlockType {
        self.block_type
    }

    /// Whether absent and blank values are accepted.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Validates a candidate value and returns its normalized form.
    ///
    /// `None` and JSON `null` mean the value is absent. `Ok(None)` means the
    /// field was accepted as absent.
    pub fn validate(&self, candidate: Option<&Value>) -> Result<Option<Value>, ValidationErrors> {
        let result = self.run(candidate);
        if let Err(errors) = &result {
            tracing::trace!(key = %self.key, issues = errors.len(), "block value rejected");
        }
        result
    }

    fn run(&self, candidate: Option<&Value>) -> Result<Option<Value>, ValidationErrors> {
        let Some(value) = presence::present(candidate) else {
            return if self.optional {
                Ok(None)
            } else {
                Err(self.rules.required_error().into())
            };
        };

        if self.optional && presence::is_blank(value) {
            return Ok(None);
        }

        self.rules.check(value).map(Some)
    }
}

impl fmt::Debug for FieldValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValidator")
            .field("key", &self.key)
            .field("block_type", &self.block_type)
            .field("optional", &self.optional)
            .field("rules", &self.rules)
            .finish()
    }
}
