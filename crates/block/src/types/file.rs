use formgate_validator::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::list::disjunction;
use crate::meta::FieldMeta;
use crate::presence;
use crate::validator::FieldRules;

const ONLY_ONE_FILE: &str = "Only one file is allowed";
const AT_LEAST_ONE_FILE: &str = "At least one file is required";

/// Config of a file upload block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileConfig {
    #[serde(flatten)]
    pub meta: FieldMeta,

    /// Largest accepted file, in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u64>,

    /// Accepted MIME types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_types: Option<Vec<String>>,

    #[serde(default)]
    pub multiple: bool,
}

/// What the validator needs to know about one uploaded file.
///
/// Any other properties of the upload record are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    #[serde(rename = "type")]
    pub mime_type: String,
    pub size: u64,
}

impl FileDescriptor {
    #[must_use]
    pub fn new(mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            mime_type: mime_type.into(),
            size,
        }
    }
}

// ============================================================================
// PER-FILE RULES
// ============================================================================

/// MIME type allow-list, compared case-insensitively.
#[derive(Debug, Clone)]
struct AllowedTypes {
    types: Vec<String>,
    message: String,
}

impl AllowedTypes {
    fn new(types: &[String]) -> Self {
        let quoted = types.iter().map(|mime| format!("\"{mime}\""));
        Self {
            types: types.to_vec(),
            message: format!("File type must be {}.", disjunction(quoted)),
        }
    }
}

impl Validate for AllowedTypes {
    type Input = FileDescriptor;

    fn validate(&self, input: &FileDescriptor) -> Result<(), ValidationError> {
        if self
            .types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(&input.mime_type))
        {
            Ok(())
        } else {
            Err(
                ValidationError::new("file_type_not_allowed", self.message.clone())
                    .with_param("actual", input.mime_type.clone()),
            )
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct MaxFileSize {
    max: u64,
}

impl Validate for MaxFileSize {
    type Input = FileDescriptor;

    fn validate(&self, input: &FileDescriptor) -> Result<(), ValidationError> {
        if input.size <= self.max {
            Ok(())
        } else {
            Err(
                ValidationError::new("max_file_size", format!("File must be at most {} bytes", self.max))
                    .with_param("max", self.max.to_string())
                    .with_param("actual", input.size.to_string()),
            )
        }
    }
}

// ============================================================================
// COMPILER
// ============================================================================

#[derive(Debug)]
pub(crate) struct FileRules {
    count: RuleSet<[Value]>,
    each: RuleSet<FileDescriptor>,
}

pub(crate) fn compile(config: &FileConfig, optional: bool) -> FileRules {
    let at_most_one = (!config.multiple).then(|| max_size::<Value>(1).with_message(ONLY_ONE_FILE));
    let at_least_one = (!optional).then(|| {
        min_size::<Value>(1)
            .with_message(AT_LEAST_ONE_FILE)
            .with_code("required")
    });

    FileRules {
        count: RuleSet::new().rule_opt(at_most_one).rule_opt(at_least_one),
        each: RuleSet::new()
            .rule_opt(config.allowed_types.as_deref().map(AllowedTypes::new))
            .rule_opt(config.max_size.map(|max| MaxFileSize { max })),
    }
}

impl FieldRules for FileRules {
    fn required_error(&self) -> ValidationError {
        ValidationError::new("required", AT_LEAST_ONE_FILE)
    }

    fn check(&self, value: &Value) -> Result<Value, ValidationErrors> {
        let files = presence::expect_array(value)?;

        let mut errors = ValidationErrors::new();
        if let Err(count) = self.count.check(files) {
            errors.extend(count);
        }

        for (index, file) in files.iter().enumerate() {
            // A bare string references an upload stored elsewhere and carries
            // no type or size to check.
            if file.is_string() {
                continue;
            }

            let issues = match FileDescriptor::deserialize(file) {
                Ok(descriptor) => self.each.check(&descriptor).err(),
                Err(_) => Some(presence::type_mismatch("file", file)),
            };
            if let Some(issues) = issues {
                errors.extend(issues.with_field(index.to_string()));
            }
        }

        errors.into_result(value.clone())
    }
}
