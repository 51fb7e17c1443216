//! # formgate-block
//!
//! Compiles form block definitions into validators for the values users
//! submit.
//!
//! A block is one form element: a field that collects a value (checkbox,
//! select, text, file, email, URL, phone) or presentational content
//! (headings, divider, paragraph). [`compile_block_validator`] turns a field
//! block into a [`FieldValidator`](validator::FieldValidator) that checks a
//! candidate value against the block's config and returns its normalized
//! form. [`FormValidator`](form::FormValidator) does the same for a whole
//! form.
//!
//! ```
//! use formgate_block::prelude::*;
//! use serde_json::json;
//!
//! let block = Block::from_json(r#"{
//!     "key": "mobile",
//!     "type": "phone_field",
//!     "phone_field": {"label": "Mobile", "optional": false, "allowedCountries": ["AU"]}
//! }"#).unwrap();
//!
//! let validator = compile_block_validator(&block, false).unwrap().unwrap();
//! assert_eq!(
//!     validator.validate(Some(&json!("+61 404 001 111"))),
//!     Ok(Some(json!("+61404001111")))
//! );
//!
//! let errors = validator.validate(Some(&json!("+442071838750"))).unwrap_err();
//! assert_eq!(errors.messages(), vec!["Phone number must be from AU (+61)."]);
//! ```

pub mod block;
pub mod compile;
pub mod error;
pub mod form;
pub mod kind;
pub mod list;
pub mod meta;
pub mod numbering;
pub mod options;
pub mod presence;
pub mod types;
pub mod validator;

pub use compile::{compile_block_validator, compile_block_validator_with};

pub mod prelude {
    pub use crate::block::{Block, BlockKey, BlockKind, ModelRef, RichText};
    pub use crate::compile::{compile_block_validator, compile_block_validator_with};
    pub use crate::error::{BlockError, IssueKind};
    pub use crate::form::{FormErrors, FormValidator};
    pub use crate::kind::BlockType;
    pub use crate::meta::FieldMeta;
    pub use crate::options::{CompileOptions, DefaultCountry};
    pub use crate::validator::FieldValidator;

    pub use crate::types::*;

    pub use formgate_validator::foundation::{ValidationError, ValidationErrors};
}
