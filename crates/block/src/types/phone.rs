use formgate_validator::foundation::{RuleSet, Validate, ValidateExt, ValidationError, ValidationErrors};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::block::BlockKey;
use crate::error::BlockError;
use crate::list::disjunction;
use crate::meta::FieldMeta;
use crate::numbering::{self, ParsedPhone, PhoneCountry};
use crate::options::DefaultCountry;
use crate::presence;
use crate::validator::FieldRules;

/// Config of a phone number block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneConfig {
    #[serde(flatten)]
    pub meta: FieldMeta,

    /// ISO 3166-1 alpha-2 codes the number must belong to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_countries: Option<Vec<String>>,
}

/// Accepts numbers whose resolved country is in the allow-list.
///
/// A number with no country of its own resolves to the default country; with
/// neither it is rejected.
#[derive(Debug, Clone)]
struct AllowedCountries {
    countries: Vec<PhoneCountry>,
    default: Option<PhoneCountry>,
    message: String,
}

impl Validate for AllowedCountries {
    type Input = ParsedPhone;

    fn validate(&self, input: &ParsedPhone) -> Result<(), ValidationError> {
        let resolved = input.resolved_country(self.default.as_ref());
        let allowed = resolved
            .is_some_and(|id| self.countries.iter().any(|country| country.id() == id));

        if allowed {
            Ok(())
        } else {
            Err(ValidationError::new("country_not_allowed", self.message.clone()))
        }
    }
}

#[derive(Debug)]
pub(crate) struct PhoneRules {
    default: Option<PhoneCountry>,
    countries: RuleSet<ParsedPhone>,
}

pub(crate) fn compile(
    config: &PhoneConfig,
    key: &BlockKey,
    default_country: Option<&DefaultCountry>,
) -> Result<PhoneRules, BlockError> {
    let default = default_country.map(|country| country.country().clone());

    let allowed = config
        .allowed_countries
        .as_deref()
        .map(|codes| {
            let countries = codes
                .iter()
                .map(|code| {
                    PhoneCountry::lookup(code).ok_or_else(|| BlockError::UnsupportedCountry {
                        key: key.to_string(),
                        country: code.clone(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            let labels = countries.iter().map(PhoneCountry::label);
            let message = format!("Phone number must be from {}.", disjunction(labels));

            Ok::<_, BlockError>(AllowedCountries {
                countries,
                default: default.clone(),
                message,
            })
        })
        .transpose()?;

    Ok(PhoneRules {
        default,
        countries: RuleSet::new().rule_opt(allowed.map(ValidateExt::fatal)),
    })
}

impl FieldRules for PhoneRules {
    fn check(&self, value: &Value) -> Result<Value, ValidationErrors> {
        let raw = presence::expect_str(value)?.trim();
        if raw.is_empty() {
            return Err(ValidationError::required().into());
        }

        let parsed = numbering::parse(raw, self.default.as_ref())
            .ok_or_else(|| ValidationError::new("invalid_phone", "Invalid phone number").fatal())?;
        self.countries.check(&parsed)?;

        Ok(Value::String(parsed.e164().to_owned()))
    }
}
