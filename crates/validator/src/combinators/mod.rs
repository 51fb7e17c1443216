//! Combinators that wrap a validator and adjust the errors it reports.

pub mod fatal;
pub mod message;

pub use fatal::{Fatal, fatal};
pub use message::{WithMessage, with_message};
