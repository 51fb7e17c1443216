//! Email and URL blocks: syntax check plus an optional domain allow-list.

use formgate_validator::foundation::{RuleSet, Validate, ValidationError, ValidationErrors};
use formgate_validator::validators::{email, url};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::list::disjunction;
use crate::meta::FieldMeta;
use crate::presence;
use crate::validator::FieldRules;

/// One entry of a domain allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedDomain {
    pub domain: String,

    /// Match the host verbatim instead of as a suffix.
    #[serde(default)]
    pub exact: bool,
}

impl AllowedDomain {
    #[must_use]
    pub fn exact(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            exact: true,
        }
    }

    #[must_use]
    pub fn suffix(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            exact: false,
        }
    }

    /// Exact entries compare for equality; the rest accept any host that ends
    /// with the domain.
    ///
    /// ```
    /// use formgate_block::types::AllowedDomain;
    ///
    /// assert!(AllowedDomain::suffix("explorate.co").matches("app.explorate.co"));
    /// assert!(!AllowedDomain::exact("explorate.co").matches("app.explorate.co"));
    /// ```
    #[must_use]
    pub fn matches(&self, host: &str) -> bool {
        if self.exact {
            host == self.domain
        } else {
            host.ends_with(&self.domain)
        }
    }
}

/// Config shared by email and URL blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainFieldConfig {
    #[serde(flatten)]
    pub meta: FieldMeta,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_domains: Option<Vec<AllowedDomain>>,
}

pub type EmailConfig = DomainFieldConfig;
pub type UrlConfig = DomainFieldConfig;

// ============================================================================
// HOST EXTRACTION
// ============================================================================

/// Where the host of a value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HostSource {
    /// Everything after the first `@`.
    EmailAddress,
    /// The host of a parsed absolute URL.
    Url,
}

impl HostSource {
    fn host(self, value: &str) -> Option<String> {
        match self {
            Self::EmailAddress => value.split('@').nth(1).map(str::to_owned),
            Self::Url => ::url::Url::parse(value)
                .ok()?
                .host_str()
                .map(str::to_owned),
        }
    }
}

/// Accepts values whose host matches any allow-list entry.
#[derive(Debug, Clone)]
struct AllowedDomains {
    source: HostSource,
    entries: Vec<AllowedDomain>,
    message: String,
}

impl AllowedDomains {
    fn new(source: HostSource, entries: &[AllowedDomain]) -> Self {
        let quoted = entries.iter().map(|entry| format!("\"{}\"", entry.domain));
        Self {
            source,
            entries: entries.to_vec(),
            message: format!("Domain must be {}.", disjunction(quoted)),
        }
    }
}

impl Validate for AllowedDomains {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let host = self.source.host(input);
        let allowed = host
            .as_deref()
            .is_some_and(|host| self.entries.iter().any(|entry| entry.matches(host)));

        if allowed {
            Ok(())
        } else {
            Err(ValidationError::new("domain_not_allowed", self.message.clone())
                .with_param("host", host.unwrap_or_default()))
        }
    }
}

// ============================================================================
// COMPILER
// ============================================================================

#[derive(Debug)]
pub(crate) struct DomainRules {
    rules: RuleSet<str>,
}

pub(crate) fn compile(config: &DomainFieldConfig, source: HostSource) -> DomainRules {
    let rules = match source {
        HostSource::EmailAddress => RuleSet::new().rule(email()),
        HostSource::Url => RuleSet::new().rule(url()),
    };
    let domains = config
        .allowed_domains
        .as_deref()
        .map(|entries| AllowedDomains::new(source, entries));

    DomainRules {
        rules: rules.rule_opt(domains),
    }
}

impl FieldRules for DomainRules {
    fn check(&self, value: &Value) -> Result<Value, ValidationErrors> {
        let text = presence::expect_str(value)?.trim();
        if text.is_empty() {
            return Err(ValidationError::required().into());
        }

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

    fn email_config(entries: Vec<AllowedDomain>) -> DomainFieldConfig {
        DomainFieldConfig {
            meta: FieldMeta::new("Email"),
            allowed_domains: Some(entries),
        }
    }

    #[rstest]
    #[case("mark@explorate.co", true)]
    #[case("mark@gmail.com", false)]
    #[case("mark@sub.explorate.co", false)]
    fn exact_email_domain(#[case] address: &str, #[case] ok: bool) {
        let rules = compile(
            &email_config(vec![AllowedDomain::exact("explorate.co")]),
            HostSource::EmailAddress,
        );
        assert_eq!(rules.check(&json!(address)).is_ok(), ok);
    }

    #[test]
    fn suffix_email_domain() {
        let rules = compile(
            &email_config(vec![AllowedDomain::suffix("explorate.co")]),
            HostSource::EmailAddress,
        );
        assert_eq!(
            rules.check(&json!(" mark@sub.explorate.co ")),
            Ok(json!("mark@sub.explorate.co"))
        );
    }

    #[test]
    fn message_lists_quoted_domains() {
        let rules = compile(
            &email_config(vec![
                AllowedDomain::exact("explorate.co"),
                AllowedDomain::suffix("example.com"),
            ]),
            HostSource::EmailAddress,
        );
        assert_eq!(
            rules.check(&json!("mark@gmail.com")).unwrap_err().messages(),
            vec![r#"Domain must be "explorate.co" or "example.com"."#]
        );
    }

    #[test]
    fn url_host_is_matched() {
        let config = email_config(vec![AllowedDomain::suffix("explorate.co")]);
        let rules = compile(&config, HostSource::Url);
        assert!(rules.check(&json!("https://app.explorate.co/path")).is_ok());
        assert!(rules.check(&json!("https://explorate.com")).is_err());
    }

    #[test]
    fn malformed_url_fails_both_checks() {
        let config = email_config(vec![AllowedDomain::suffix("explorate.co")]);
        let errors = compile(&config, HostSource::Url)
            .check(&json!("explorate.co"))
            .unwrap_err();
        assert_eq!(
            errors.messages(),
            vec!["Invalid url", r#"Domain must be "explorate.co"."#]
        );
    }

    #[test]
    fn blank_value_on_required_path_is_required_issue() {
        let rules = compile(&DomainFieldConfig::default(), HostSource::EmailAddress);
        assert_eq!(
            rules.check(&json!("   ")).unwrap_err().messages(),
            vec!["This field is required"]
        );
    }

    #[test]
    fn hosts() {
        assert_eq!(
            HostSource::EmailAddress.host("a@b.co").as_deref(),
            Some("b.co")
        );
        assert_eq!(HostSource::EmailAddress.host("nobody"), None);
        assert_eq!(
            HostSource::Url.host("https://Explorate.CO:8443/x").as_deref(),
            Some("explorate.co")
        );
        assert_eq!(HostSource::Url.host("not a url"), None);
    }
}
