//! # formgate-validator
//!
//! Validation primitives used by the formgate block validators.
//!
//! ## Quick Start
//!
//! ```
//! use formgate_validator::prelude::*;
//!
//! // Independent rules, every failure reported
//! let username = RuleSet::<str>::new().rule(min_length(3)).rule(max_length(20));
//! assert!(username.check("alice").is_ok());
//! assert_eq!(username.check("al").unwrap_err().len(), 1);
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.
//!
//! ## Built-in Validators
//!
//! - **String**: [`MinLength`](validators::MinLength), [`MaxLength`](validators::MaxLength),
//!   [`MatchesRegex`](validators::MatchesRegex), [`Email`](validators::Email),
//!   [`Url`](validators::Url)
//! - **Membership**: [`OneOf`](validators::OneOf)
//! - **Collection**: [`MinSize`](validators::MinSize), [`MaxSize`](validators::MaxSize)
//! - **Boolean**: [`IsTrue`](validators::IsTrue)

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
