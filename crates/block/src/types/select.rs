use formgate_validator::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::list::disjunction;
use crate::meta::FieldMeta;
use crate::presence;
use crate::validator::FieldRules;

const AT_LEAST_ONE_OPTION: &str = "At least one option is required";

/// One selectable option. `value` is compared, `label` is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Config of a select block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectConfig {
    #[serde(flatten)]
    pub meta: FieldMeta,

    #[serde(default)]
    pub options: Vec<SelectOption>,

    /// Accept an array of values instead of a single value.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub multiple: bool,
}

impl SelectConfig {
    /// The allowed values, in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|option| option.value.as_str())
    }

    /// `Must be one of `A`, `B`, or `C`.`
    #[must_use]
    pub fn membership_message(&self) -> String {
        let labels = self
            .options
            .iter()
            .map(|option| format!("`{}`", option.label));
        format!("Must be one of {}.", disjunction(labels))
    }
}

#[derive(Debug)]
pub(crate) struct SelectRules {
    member: WithMessage<OneOf>,
    multiple: bool,
    count: RuleSet<[Value]>,
}

pub(crate) fn compile(config: &SelectConfig, optional: bool) -> SelectRules {
    let at_least_one = (config.multiple && !optional).then(|| {
        min_size::<Value>(1)
            .with_message(AT_LEAST_ONE_OPTION)
            .with_code("required")
    });

    SelectRules {
        member: one_of(config.values()).with_message(config.membership_message()),
        multiple: config.multiple,
        count: RuleSet::new().rule_opt(at_least_one),
    }
}

impl SelectRules {
    fn check_many(&self, value: &Value) -> Result<Value, ValidationErrors> {
        let items = presence::expect_array(value)?;

        let mut errors = ValidationErrors::new();
        if let Err(count) = self.count.check(items) {
            errors.extend(count);
        }

        for (index, item) in items.iter().enumerate() {
            let issue = match item.as_str() {
                Some(choice) => self.member.validate(choice).err(),
                None => Some(ValidationError::type_mismatch(
                    "string",
                    presence::json_kind(item),
                )),
            };
            if let Some(issue) = issue {
                errors.add(issue.with_field(index.to_string()));
            }
        }

        errors.into_result(value.clone())
    }
}

impl FieldRules for SelectRules {
    fn required_error(&self) -> ValidationError {
        if self.multiple {
            ValidationError::new("required", AT_LEAST_ONE_OPTION)
        } else {
            ValidationError::required()
        }
    }

    fn check(&self, value: &Value) -> Result<Value, ValidationErrors> {
        if self.multiple {
            return self.check_many(value);
        }

        let choice = presence::expect_str(value)?;
        self.member.validate(choice)?;
        Ok(Value::String(choice.to_owned()))
    }
}
