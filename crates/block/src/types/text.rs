use formgate_validator::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::block::BlockKey;
use crate::error::BlockError;
use crate::meta::FieldMeta;
use crate::presence;
use crate::validator::FieldRules;

/// A regex the value must match, with the message shown when it does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPattern {
    pub value: String,
    pub message: String,
}

/// Config of a text block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextConfig {
    #[serde(flatten)]
    pub meta: FieldMeta,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<TextPattern>,
}

impl TextConfig {
    /// Minimum length actually enforced.
    ///
    /// A required field with no positive `min_length` needs at least one
    /// character.
    #[must_use]
    pub fn effective_min_length(&self, optional: bool) -> Option<usize> {
        match self.min_length {
            Some(min) if min > 0 => Some(min),
            _ if !optional => Some(1),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub(crate) struct TextRules {
    rules: RuleSet<str>,
}

pub(crate) fn compile(
    config: &TextConfig,
    key: &BlockKey,
    optional: bool,
) -> Result<TextRules, BlockError> {
    let pattern = config
        .pattern
        .as_ref()
        .map(|pattern| {
            MatchesRegex::new(&pattern.value)
                .map(|regex| regex.with_message(pattern.message.clone()))
                .map_err(|error| BlockError::InvalidPattern {
                    key: key.to_string(),
                    pattern: pattern.value.clone(),
                    reason: error.to_string(),
                })
        })
        .transpose()?;

    let rules = RuleSet::new()
        .rule_opt(pattern)
        .rule_opt(config.effective_min_length(optional).map(min_length))
        .rule_opt(config.max_length.map(max_length));

    Ok(TextRules { rules })
}

impl FieldRules for TextRules {
    fn check(&self, value: &Value) -> Result<Value, ValidationErrors> {
        let text = presence::expect_str(value)?.trim();
        self.rules.check(text)?;
        Ok(Value::String(text.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn bounded() -> TextConfig {
        TextConfig {
            meta: FieldMeta::new("Name"),
            min_length: Some(3),
            max_length: Some(10),
            pattern: None,
        }
    }

    #[rstest]
    #[case(Some(3), false, Some(3))]
    #[case(None, false, Some(1))]
    #[case(Some(0), false, Some(1))]
    #[case(None, true, None)]
    #[case(Some(0), true, None)]
    #[case(Some(2), true, Some(2))]
    fn min_length_defaults(
        #[case] declared: Option<usize>,
        #[case] optional: bool,
        #[case] expected: Option<usize>,
    ) {
        let config = TextConfig {
            min_length: declared,
            ..TextConfig::default()
        };
        assert_eq!(config.effective_min_length(optional), expected);
    }

    #[test]
    fn bounds_are_enforced_on_trimmed_text() {
        let rules = compile(&bounded(), &BlockKey::from("name"), false).unwrap();
        assert_eq!(rules.check(&json!("  John  ")), Ok(json!("John")));
        assert_eq!(
            rules.check(&json!("J")).unwrap_err().messages(),
            vec!["Must be at least 3 characters"]
        );
        assert_eq!(
            rules.check(&json!("Jonathan Doe")).unwrap_err().messages(),
            vec!["Must be at most 10 characters"]
        );
    }

    #[test]
    fn pattern_failure_uses_configured_message_and_accumulates() {
        let config = TextConfig {
            pattern: Some(TextPattern {
                value: "^[a-z]+$".into(),
                message: "Lowercase letters only".into(),
            }),
            ..bounded()
        };
        let rules = compile(&config, &BlockKey::from("name"), false).unwrap();

        let errors = rules.check(&json!("AB")).unwrap_err();
        assert_eq!(
            errors.messages(),
            vec!["Lowercase letters only", "Must be at least 3 characters"]
        );
    }

    #[test]
    fn invalid_pattern_fails_compilation() {
        let config = TextConfig {
            pattern: Some(TextPattern {
                value: "([a-z]".into(),
                message: "never shown".into(),
            }),
            ..bounded()
        };
        let error = compile(&config, &BlockKey::from("bio"), false).unwrap_err();
        assert!(matches!(
            error,
            BlockError::InvalidPattern { ref key, ref pattern, .. } if key == "bio" && pattern == "([a-z]"
        ));
    }

    #[test]
    fn camel_case_wire_format() {
        let config: TextConfig = serde_json::from_value(json!({
            "label": "Name",
            "description": null,
            "optional": false,
            "minLength": 3,
            "maxLength": null,
            "pattern": {"value": "^x", "message": "Start with x"}
        }))
        .unwrap();
        assert_eq!(config.min_length, Some(3));
        assert_eq!(config.max_length, None);
        assert_eq!(config.pattern.unwrap().message, "Start with x");
    }
}
