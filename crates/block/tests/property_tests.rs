//! Property-based tests for formgate-block.

use formgate_block::list::disjunction;
use formgate_block::prelude::*;
use proptest::prelude::*;
use serde_json::json;

fn text_validator(optional: bool) -> FieldValidator {
    let block = Block::text(
        "bio",
        TextConfig {
            meta: FieldMeta::new("Bio").optional(optional),
            min_length: Some(2),
            max_length: Some(40),
            pattern: None,
        },
    );
    compile_block_validator(&block, false).unwrap().unwrap()
}

// ============================================================================
// IDEMPOTENCE: validate(normalize(x)) == normalize(x)
// ============================================================================

proptest! {
    #[test]
    fn text_output_revalidates_to_itself(s in "\\PC{0,50}", optional in any::<bool>()) {
        let validator = text_validator(optional);
        if let Ok(Some(normalized)) = validator.validate(Some(&json!(s))) {
            prop_assert_eq!(validator.validate(Some(&normalized)), Ok(Some(normalized.clone())));
        }
    }

    #[test]
    fn phone_output_revalidates_to_itself(national in 400_000_000u64..499_999_999) {
        let block = Block::phone("mobile", PhoneConfig {
            meta: FieldMeta::new("Mobile"),
            allowed_countries: Some(vec!["AU".into()]),
        });
        let validator = compile_block_validator(&block, false).unwrap().unwrap();

        let raw = format!("+61 {national}");
        if let Ok(Some(normalized)) = validator.validate(Some(&json!(raw))) {
            prop_assert_eq!(validator.validate(Some(&normalized)), Ok(Some(normalized.clone())));
        }
    }

    #[test]
    fn email_output_revalidates_to_itself(local in "[a-z]{1,10}", pad in " {0,3}") {
        let block = Block::email("email", EmailConfig {
            meta: FieldMeta::new("Email"),
            allowed_domains: Some(vec![AllowedDomain::suffix("explorate.co")]),
        });
        let validator = compile_block_validator(&block, false).unwrap().unwrap();

        let raw = format!("{pad}{local}@explorate.co{pad}");
        let normalized = validator.validate(Some(&json!(raw))).unwrap().unwrap();
        prop_assert_eq!(validator.validate(Some(&normalized)), Ok(Some(normalized.clone())));
    }
}

// ============================================================================
// OPTIONALITY: optional fields never reject blank strings
// ============================================================================

proptest! {
    #[test]
    fn optional_blank_text_is_absent(s in "[ \\t\\n]{0,10}") {
        prop_assert_eq!(text_validator(true).validate(Some(&json!(s))), Ok(None));
    }

    #[test]
    fn validation_is_deterministic(s in "\\PC{0,30}") {
        let validator = text_validator(false);
        prop_assert_eq!(validator.validate(Some(&json!(s))), validator.validate(Some(&json!(s))));
    }
}

// ============================================================================
// LIST FORMATTER
// ============================================================================

proptest! {
    #[test]
    fn disjunction_of_two_uses_or(a in "[a-z]{1,5}", b in "[a-z]{1,5}") {
        prop_assert_eq!(disjunction([&a, &b]), format!("{a} or {b}"));
    }

    #[test]
    fn disjunction_of_one_is_identity(a in "[a-z]{1,8}") {
        prop_assert_eq!(disjunction([&a]), a);
    }
}
