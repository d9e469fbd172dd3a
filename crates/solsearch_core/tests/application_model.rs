use solsearch_core::{
    Application, ApplicationStatus, ApplicationValidationError, AppliedDate, NewApplication,
    Priority,
};

#[test]
fn status_parse_is_case_insensitive_and_trims() {
    assert_eq!(
        "interview".parse::<ApplicationStatus>().unwrap(),
        ApplicationStatus::Interview
    );
    assert_eq!(
        "  OFFER ".parse::<ApplicationStatus>().unwrap(),
        ApplicationStatus::Offer
    );

    let err = "Ghosted".parse::<ApplicationStatus>().unwrap_err();
    assert_eq!(err, ApplicationValidationError::InvalidStatus("Ghosted".to_string()));
}

#[test]
fn status_canonical_order_matches_funnel_order() {
    let names: Vec<&str> = ApplicationStatus::ALL.iter().map(|s| s.as_str()).collect();
    assert_eq!(names, ["Applied", "Interview", "Rejected", "Offer"]);
    assert!(ApplicationStatus::Applied < ApplicationStatus::Offer);
}

#[test]
fn priority_accepts_only_one_through_five() {
    for value in 1..=5u8 {
        assert_eq!(Priority::new(value).unwrap().get(), value);
    }
    assert_eq!(
        Priority::new(0).unwrap_err(),
        ApplicationValidationError::PriorityOutOfRange(0)
    );
    assert_eq!(
        "6".parse::<Priority>().unwrap_err(),
        ApplicationValidationError::PriorityOutOfRange(6)
    );
    assert_eq!(
        "-1".parse::<Priority>().unwrap_err(),
        ApplicationValidationError::PriorityOutOfRange(-1)
    );
    assert!(matches!(
        "high".parse::<Priority>(),
        Err(ApplicationValidationError::InvalidPriority(_))
    ));
}

#[test]
fn applied_date_rejects_impossible_and_unpadded_dates() {
    assert_eq!(AppliedDate::parse("2024-02-29").unwrap().to_string(), "2024-02-29");

    for bad in ["2024-02-30", "2023-02-29", "2024-13-01", "2024-1-5", "05/01/2024", ""] {
        assert!(
            matches!(AppliedDate::parse(bad), Err(ApplicationValidationError::InvalidDate(_))),
            "`{bad}` should be rejected"
        );
    }
}

#[test]
fn new_application_parse_reports_first_failing_field() {
    let parsed = NewApplication::parse(" Stripe ", "Backend Dev", "2024-03-01", "applied", "4")
        .unwrap();
    assert_eq!(parsed.company, "Stripe");
    assert_eq!(parsed.status, ApplicationStatus::Applied);
    assert_eq!(parsed.priority.get(), 4);

    assert_eq!(
        NewApplication::parse("   ", "Role", "bad-date", "nope", "9").unwrap_err(),
        ApplicationValidationError::EmptyField("company")
    );
    assert_eq!(
        NewApplication::parse("Acme", "", "2024-03-01", "Applied", "3").unwrap_err(),
        ApplicationValidationError::EmptyField("role")
    );
    assert!(matches!(
        NewApplication::parse("Acme", "Dev", "2024-02-30", "Applied", "3"),
        Err(ApplicationValidationError::InvalidDate(_))
    ));
}

#[test]
fn application_serialization_uses_plain_field_values() {
    let application = Application {
        id: 7,
        company: "OpenAI".to_string(),
        role: "Research Assistant".to_string(),
        date_applied: AppliedDate::parse("2024-05-17").unwrap(),
        status: ApplicationStatus::Interview,
        priority: Priority::new(5).unwrap(),
    };

    let json = serde_json::to_value(&application).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["date_applied"], "2024-05-17");
    assert_eq!(json["status"], "Interview");
    assert_eq!(json["priority"], 5);
    assert_eq!(application.stars(), "*****");

    let mut invalid = json.clone();
    invalid["priority"] = serde_json::json!(9);
    assert!(serde_json::from_value::<Application>(invalid).is_err());
}
