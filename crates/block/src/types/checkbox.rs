use formgate_validator::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::meta::FieldMeta;
use crate::presence;
use crate::validator::FieldRules;

/// Config of a checkbox block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxConfig {
    #[serde(flatten)]
    pub meta: FieldMeta,

    /// Whether the box must be ticked. Defaults to `!optional`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl CheckboxConfig {
    #[must_use]
    pub fn new(meta: FieldMeta) -> Self {
        Self {
            meta,
            required: None,
        }
    }

    /// Whether `false` is rejected.
    #[must_use]
    pub fn must_be_checked(&self) -> bool {
        self.required.unwrap_or(!self.meta.optional)
    }
}

#[derive(Debug)]
pub(crate) struct CheckboxRules {
    checked: RuleSet<bool>,
}

pub(crate) fn compile(config: &CheckboxConfig) -> CheckboxRules {
    let ticked = config.must_be_checked().then(|| {
        is_true()
            .with_message("This field is required")
            .with_code("required")
    });

    CheckboxRules {
        checked: RuleSet::new().rule_opt(ticked),
    }
}

impl FieldRules for CheckboxRules {
    fn check(&self, value: &Value) -> Result<Value, ValidationErrors> {
        let checked = value
            .as_bool()
            .ok_or_else(|| presence::type_mismatch("boolean", value))?;
        self.checked.check(&checked)?;
        Ok(Value::Bool(checked))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn required_defaults_to_not_optional() {
        assert!(CheckboxConfig::new(FieldMeta::new("Agree")).must_be_checked());
        assert!(!CheckboxConfig::new(FieldMeta::new("Agree").optional(true)).must_be_checked());

        let config = CheckboxConfig {
            meta: FieldMeta::new("Agree").optional(true),
            required: Some(true),
        };
        assert!(config.must_be_checked());
    }

    #[test]
    fn unticked_required_box_fails() {
        let rules = compile(&CheckboxConfig::new(FieldMeta::new("Agree")));
        assert_eq!(rules.check(&json!(true)), Ok(json!(true)));

        let errors = rules.check(&json!(false)).unwrap_err();
        assert_eq!(errors.messages(), vec!["This field is required"]);
        assert_eq!(errors.errors()[0].code, "required");
    }

    #[test]
    fn non_boolean_is_a_type_mismatch() {
        let rules = compile(&CheckboxConfig::new(FieldMeta::new("Agree").optional(true)));
        assert_eq!(rules.check(&json!(false)), Ok(json!(false)));
        let errors = rules.check(&json!("yes")).unwrap_err();
        assert_eq!(errors.errors()[0].code, "type_mismatch");
    }
}
