//! Integration tests for the prelude module.
//!
//! Verifies that `use formgate_validator::prelude::*` brings in everything
//! a consumer needs for common validation scenarios.

use formgate_validator::prelude::*;
use pretty_assertions::assert_eq;

// ============================================================================
// PRELUDE IMPORT SMOKE TEST
// ============================================================================

#[test]
fn prelude_import_provides_validate_trait() {
    let v = min_length(3).with_message("Too short");
    assert!(v.validate("hello").is_ok());
    assert_eq!(v.validate("hi").unwrap_err().message, "Too short");
}

// ============================================================================
// RULE SETS
// ============================================================================

#[test]
fn rule_set_reports_every_violation() {
    let rules = RuleSet::<str>::new()
        .rule(min_length(8))
        .rule(matches_regex("[0-9]").unwrap().with_message("Must contain a digit"))
        .rule(matches_regex("[A-Z]").unwrap().with_message("Must contain an uppercase letter"));

    let errors = rules.check("abc").unwrap_err();
    assert_eq!(
        errors.messages(),
        vec![
            "Must be at least 8 characters",
            "Must contain a digit",
            "Must contain an uppercase letter",
        ]
    );
}

#[test]
fn fatal_rule_hides_later_rules() {
    let rules = RuleSet::<str>::new()
        .rule(email().fatal())
        .rule(max_length(3));

    let errors = rules.check("not an email").unwrap_err();
    assert_eq!(errors.messages(), vec!["Invalid email"]);
}

#[test]
fn email_and_url_share_the_format_code() {
    assert_eq!(email().validate("x").unwrap_err().code, "invalid_format");
    assert_eq!(url().validate("x").unwrap_err().code, "invalid_format");
}

// ============================================================================
// MEMBERSHIP AND SIZE
// ============================================================================

#[test]
fn one_of_with_custom_message() {
    let v = one_of(["red", "green"]).with_message("Must be one of `Red` or `Green`.");
    assert!(v.validate("red").is_ok());
    assert_eq!(
        v.validate("blue").unwrap_err().message,
        "Must be one of `Red` or `Green`."
    );
}

#[test]
fn size_bounds_on_slices() {
    let rules = RuleSet::<[u32]>::new().rule(min_size(1)).rule(max_size(2));
    assert!(rules.check(&[1]).is_ok());
    assert!(rules.check(&[]).is_err());
    assert!(rules.check(&[1, 2, 3]).is_err());
}

#[test]
fn errors_pick_up_field_paths() {
    let errors = ValidationErrors::from(ValidationError::required()).with_field("2");
    assert_eq!(errors.errors()[0].field.as_deref(), Some("2"));
    assert_eq!(
        errors.to_string(),
        "Validation failed with 1 error(s):\n  1. [2] required: This field is required\n"
    );
}
