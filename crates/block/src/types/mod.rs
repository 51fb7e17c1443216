//! Field configs and their compilers, one module per field type.

pub mod checkbox;
pub mod domain;
pub mod file;
pub mod phone;
pub mod select;
pub mod text;

pub use checkbox::CheckboxConfig;
pub use domain::{AllowedDomain, DomainFieldConfig, EmailConfig, UrlConfig};
pub use file::{FileConfig, FileDescriptor};
pub use phone::PhoneConfig;
pub use select::{SelectConfig, SelectOption};
pub use text::{TextConfig, TextPattern};
