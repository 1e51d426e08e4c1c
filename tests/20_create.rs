use rust_decimal::Decimal;
use uuid::Uuid;

use subsentry_api::auth::{AuthError, Identity};
use subsentry_api::config::SubscriptionConfig;
use subsentry_api::subscriptions::types::{
    BillingCycle, Category, Currency, Source, SubscriptionStatus,
};
use subsentry_api::subscriptions::{
    normalize_create, CreateError, CreateSubscriptionRequest, ValidationError,
};

fn identity() -> Identity {
    Identity {
        id: Uuid::new_v4(),
        email: "user@example.com".to_string(),
        name: "Test User".to_string(),
    }
}

fn config() -> SubscriptionConfig {
    SubscriptionConfig {
        default_currency: Currency::Inr,
    }
}

/// Minimal valid payload: the four required fields only.
fn base_request() -> CreateSubscriptionRequest {
    CreateSubscriptionRequest {
        name: Some("Netflix".to_string()),
        amount: Some(Decimal::from(649)),
        billing_cycle: Some("MONTHLY".to_string()),
        next_billing_date: Some("2025-01-01".to_string()),
        ..Default::default()
    }
}

#[test]
fn minimal_payload_gets_all_defaults() {
    let identity = identity();
    let entity = normalize_create(&identity, base_request(), &config()).unwrap();

    assert_eq!(entity.user_id, identity.id);
    assert_eq!(entity.name, "Netflix");
    assert_eq!(entity.amount, Decimal::from(649));
    assert_eq!(entity.billing_cycle, BillingCycle::Monthly);
    assert_eq!(entity.billing_cycle.as_str(), "monthly");
    assert_eq!(entity.currency, Currency::Inr);
    assert_eq!(entity.category, Category::Other);
    assert_eq!(entity.status, SubscriptionStatus::Active);
    assert_eq!(entity.source, Source::Manual);
    assert!(entity.reminder_enabled);
    assert_eq!(entity.reminder_days, 3);
    assert_eq!(entity.created_at, entity.updated_at);
}

#[test]
fn billing_cycle_is_case_normalized() {
    for raw in ["monthly", "Monthly", "MONTHLY", "mOnThLy"] {
        let req = CreateSubscriptionRequest {
            billing_cycle: Some(raw.to_string()),
            ..base_request()
        };
        let entity = normalize_create(&identity(), req, &config()).unwrap();
        assert_eq!(entity.billing_cycle, BillingCycle::Monthly, "input {raw}");
    }
}

#[test]
fn missing_fields_are_listed_exactly() {
    let req = CreateSubscriptionRequest {
        name: None,
        amount: None,
        ..base_request()
    };
    let err = normalize_create(&identity(), req, &config()).unwrap_err();
    match err {
        CreateError::Validation(ValidationError::MissingRequiredFields(fields)) => {
            assert_eq!(fields, vec!["name", "amount"]);
        }
        other => panic!("expected MissingRequiredFields, got {other:?}"),
    }
}

#[test]
fn whitespace_name_counts_as_missing() {
    let req = CreateSubscriptionRequest {
        name: Some("   ".to_string()),
        ..base_request()
    };
    let err = normalize_create(&identity(), req, &config()).unwrap_err();
    assert!(matches!(
        err,
        CreateError::Validation(ValidationError::MissingRequiredFields(_))
    ));
}

#[test]
fn zero_amount_counts_as_supplied() {
    let req = CreateSubscriptionRequest {
        amount: Some(Decimal::ZERO),
        ..base_request()
    };
    let entity = normalize_create(&identity(), req, &config()).unwrap();
    assert_eq!(entity.amount, Decimal::ZERO);
}

#[test]
fn negative_amount_is_rejected() {
    let req = CreateSubscriptionRequest {
        amount: Some(Decimal::from(-5)),
        ..base_request()
    };
    let err = normalize_create(&identity(), req, &config()).unwrap_err();
    assert_eq!(
        err,
        CreateError::Validation(ValidationError::InvalidAmount)
    );
}

#[test]
fn presence_check_runs_before_amount_check() {
    let req = CreateSubscriptionRequest {
        name: None,
        amount: Some(Decimal::from(-5)),
        ..base_request()
    };
    let err = normalize_create(&identity(), req, &config()).unwrap_err();
    assert!(matches!(
        err,
        CreateError::Validation(ValidationError::MissingRequiredFields(_))
    ));
}

#[test]
fn amount_check_runs_before_cycle_check() {
    let req = CreateSubscriptionRequest {
        amount: Some(Decimal::from(-5)),
        billing_cycle: Some("fortnightly".to_string()),
        ..base_request()
    };
    let err = normalize_create(&identity(), req, &config()).unwrap_err();
    assert_eq!(
        err,
        CreateError::Validation(ValidationError::InvalidAmount)
    );
}

#[test]
fn unknown_billing_cycle_lists_allowed_values() {
    let req = CreateSubscriptionRequest {
        billing_cycle: Some("fortnightly".to_string()),
        ..base_request()
    };
    let err = normalize_create(&identity(), req, &config()).unwrap_err();
    assert_eq!(
        err,
        CreateError::Validation(ValidationError::InvalidBillingCycle)
    );
    assert!(err.to_string().contains("daily, weekly, monthly, quarterly, yearly"));
}

#[test]
fn unparseable_date_is_rejected() {
    let req = CreateSubscriptionRequest {
        next_billing_date: Some("next tuesday".to_string()),
        ..base_request()
    };
    let err = normalize_create(&identity(), req, &config()).unwrap_err();
    assert!(matches!(
        err,
        CreateError::Validation(ValidationError::InvalidDate(_))
    ));
}

#[test]
fn nil_identity_is_rejected_after_field_validation() {
    let anon = Identity {
        id: Uuid::nil(),
        email: String::new(),
        name: String::new(),
    };
    let err = normalize_create(&anon, base_request(), &config()).unwrap_err();
    assert_eq!(err, CreateError::Auth(AuthError::MissingIdentity));

    // Field validation still wins over the identity re-check
    let req = CreateSubscriptionRequest {
        amount: Some(Decimal::from(-1)),
        ..base_request()
    };
    let err = normalize_create(&anon, req, &config()).unwrap_err();
    assert_eq!(
        err,
        CreateError::Validation(ValidationError::InvalidAmount)
    );
}

#[test]
fn explicit_optional_fields_are_preserved() {
    let req = CreateSubscriptionRequest {
        currency: Some("USD".to_string()),
        category: Some("Cloud Services".to_string()),
        status: Some("paused".to_string()),
        source: Some("gmail".to_string()),
        reminder_enabled: Some(false),
        reminder_days: Some(10),
        description: Some("Team plan".to_string()),
        website: Some("https://netflix.com".to_string()),
        ..base_request()
    };
    let entity = normalize_create(&identity(), req, &config()).unwrap();
    assert_eq!(entity.currency, Currency::Usd);
    assert_eq!(entity.category, Category::CloudServices);
    assert_eq!(entity.status, SubscriptionStatus::Paused);
    assert_eq!(entity.source, Source::Gmail);
    assert!(!entity.reminder_enabled);
    assert_eq!(entity.reminder_days, 10);
}

#[test]
fn explicit_zero_reminder_days_is_not_replaced_by_default() {
    // The legacy `reminderDays || 3` treated 0 as absent. That is not
    // reproduced: 0 stays 0 and the store constraint rejects it.
    let req = CreateSubscriptionRequest {
        reminder_days: Some(0),
        ..base_request()
    };
    let entity = normalize_create(&identity(), req, &config()).unwrap();
    assert_eq!(entity.reminder_days, 0);
}

#[test]
fn out_of_range_reminder_days_passes_validation() {
    // Range enforcement is the store layer's job
    let req = CreateSubscriptionRequest {
        reminder_days: Some(45),
        ..base_request()
    };
    let entity = normalize_create(&identity(), req, &config()).unwrap();
    assert_eq!(entity.reminder_days, 45);
}

#[test]
fn unknown_currency_is_rejected_with_allowed_values() {
    let req = CreateSubscriptionRequest {
        currency: Some("JPY".to_string()),
        ..base_request()
    };
    let err = normalize_create(&identity(), req, &config()).unwrap_err();
    match err {
        CreateError::Validation(ValidationError::InvalidFieldValue { field, allowed }) => {
            assert_eq!(field, "currency");
            assert!(allowed.contains(&"INR"));
        }
        other => panic!("expected InvalidFieldValue, got {other:?}"),
    }
}

#[test]
fn name_and_website_are_trimmed() {
    let req = CreateSubscriptionRequest {
        name: Some("  Netflix  ".to_string()),
        website: Some("  https://netflix.com  ".to_string()),
        ..base_request()
    };
    let entity = normalize_create(&identity(), req, &config()).unwrap();
    assert_eq!(entity.name, "Netflix");
    assert_eq!(entity.website.as_deref(), Some("https://netflix.com"));
}

#[test]
fn camel_case_wire_format_deserializes() {
    let req: CreateSubscriptionRequest = serde_json::from_str(
        r#"{
            "name": "Netflix",
            "amount": 649,
            "billingCycle": "MONTHLY",
            "nextBillingDate": "2025-01-01",
            "reminderDays": 7,
            "reminderEnabled": false
        }"#,
    )
    .unwrap();
    assert_eq!(req.billing_cycle.as_deref(), Some("MONTHLY"));
    assert_eq!(req.reminder_days, Some(7));

    let entity = normalize_create(&identity(), req, &config()).unwrap();
    assert_eq!(entity.billing_cycle, BillingCycle::Monthly);
    assert_eq!(entity.reminder_days, 7);
    assert!(!entity.reminder_enabled);
}

#[test]
fn non_boolean_reminder_enabled_defaults_to_true() {
    // A loosely-typed reminderEnabled must not reject the request; anything
    // but a strict boolean reads as unsupplied and takes the default.
    for raw in [r#""yes""#, "1", "null", r#""false""#, "[true]"] {
        let body = format!(
            r#"{{
                "name": "Netflix",
                "amount": 649,
                "billingCycle": "monthly",
                "nextBillingDate": "2025-01-01",
                "reminderEnabled": {raw}
            }}"#
        );
        let req: CreateSubscriptionRequest = serde_json::from_str(&body).unwrap();
        assert_eq!(req.reminder_enabled, None, "input {raw}");

        let entity = normalize_create(&identity(), req, &config()).unwrap();
        assert!(entity.reminder_enabled, "input {raw}");
    }

    // Strict booleans are preserved in both directions
    for (raw, expected) in [("true", true), ("false", false)] {
        let body = format!(
            r#"{{
                "name": "Netflix",
                "amount": 649,
                "billingCycle": "monthly",
                "nextBillingDate": "2025-01-01",
                "reminderEnabled": {raw}
            }}"#
        );
        let req: CreateSubscriptionRequest = serde_json::from_str(&body).unwrap();
        let entity = normalize_create(&identity(), req, &config()).unwrap();
        assert_eq!(entity.reminder_enabled, expected, "input {raw}");
    }
}
