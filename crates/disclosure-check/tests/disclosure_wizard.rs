use disclosure_check::wizard::steps::{
    self, AdditionalDetailsForm, CardholderDetailsForm, CurrentAddressForm, DeclarationsForm,
    DeliveryDetailsForm, DocumentSelectionForm, PersonalDetailsForm, PreviousAddressDraft,
    ResidencyDateForm, SavedAddress, WizardStep,
};
use disclosure_check::wizard::{FormSession, PartialDate, PostalAddress, PreviousAddressForm};

fn current_address() -> PostalAddress {
    PostalAddress {
        address_line1: "8 LANYON PLACE".to_string(),
        town_city: "BELFAST".to_string(),
        county: "NORTHERN IRELAND".to_string(),
        country: "United Kingdom".to_string(),
        postcode: "BT1 3LP".to_string(),
        ..Default::default()
    }
}

fn previous_address() -> PostalAddress {
    PostalAddress {
        address_line1: "10 Main St".to_string(),
        town_city: "Derry".to_string(),
        country: "United Kingdom".to_string(),
        ..Default::default()
    }
}

fn fill_personal_details(session: &mut FormSession) {
    steps::submit(
        session,
        PersonalDetailsForm {
            title: "Mr".to_string(),
            surname: "Lanka".to_string(),
            forename: "Rajani".to_string(),
            middle_names: "Test one".to_string(),
            name_known_by: "Kanth".to_string(),
            other_surnames: vec!["Lanka one".to_string()],
            other_forenames: vec!["Rajani Kanth".to_string()],
            date_of_birth: PartialDate::new("01", "01", "2000"),
        },
    )
    .expect("personal details commit");
}

fn fill_additional_details(session: &mut FormSession) {
    steps::submit(
        session,
        AdditionalDetailsForm {
            gender: "male".to_string(),
            town_city: "Belfast".to_string(),
            country: "Northern Ireland".to_string(),
            nationality: "British".to_string(),
            has_national_insurance: true,
            national_insurance_number: "AB123456C".to_string(),
            has_driving_licence: true,
            driving_licence_number: "LANKA905123RK9PL".to_string(),
            contact_number: "028 9032 1234".to_string(),
            contact_email: "rajani.lanka@example.com".to_string(),
            ..Default::default()
        },
    )
    .expect("additional details commit");
}

#[test]
fn wizard_walkthrough_builds_a_complete_submission() {
    let mut session = FormSession::new();

    fill_personal_details(&mut session);
    fill_additional_details(&mut session);

    steps::submit(
        &mut session,
        CurrentAddressForm {
            address: current_address(),
        },
    )
    .expect("current address commits");

    steps::submit(
        &mut session,
        ResidencyDateForm {
            lived_since: PartialDate::new("15", "06", "2018"),
        },
    )
    .expect("residency date commits");

    let saved = steps::save_previous_address(
        &mut session,
        PreviousAddressDraft {
            form: PreviousAddressForm {
                id: None,
                address: previous_address(),
                lived_from: PartialDate::new("01", "03", "2014"),
                lived_to: PartialDate::new("14", "06", "2018"),
            },
        },
    )
    .expect("previous address saves");
    assert!(matches!(saved, SavedAddress::Added(_)));

    steps::submit(
        &mut session,
        DeliveryDetailsForm {
            paper_certificate: true,
            send_to_current_address: true,
            ..Default::default()
        },
    )
    .expect("delivery details commit");

    steps::submit(
        &mut session,
        DocumentSelectionForm {
            selected_documents: vec!["originalBirth".to_string(), "passport".to_string()],
            visa_share_code: String::new(),
        },
    )
    .expect("document selection commits");

    steps::submit(
        &mut session,
        DeclarationsForm {
            confirmed: true,
            declaration_date: PartialDate::new("12", "05", "2025"),
        },
    )
    .expect("declarations commit");

    steps::submit(&mut session, CardholderDetailsForm::default())
        .expect("cardholder details commit");

    // The committed session carries everything a submission needs.
    assert_eq!(session.full_name(), "Lanka, Rajani Test one");
    assert_eq!(session.current_address.address, current_address());
    assert_eq!(
        session.current_address.lived_since,
        PartialDate::new("15", "06", "2018")
    );
    assert_eq!(session.previous_addresses.len(), 1);
    assert_eq!(session.delivery_destination(), &current_address());
    assert_eq!(session.billing_address(), &current_address());
    assert!(session.declarations.all_confirmed());

    let snapshot = serde_json::to_value(&session).expect("session serializes");
    assert_eq!(snapshot["nationalInsuranceNumber"], "AB123456C");
    assert_eq!(snapshot["currentAddress"]["postcode"], "BT1 3LP");
    assert_eq!(snapshot["previousAddresses"][0]["townCity"], "Derry");
    assert_eq!(snapshot["sendToCurrentAddress"], true);
}

#[test]
fn wizard_blocks_forward_navigation_until_a_step_is_clean() {
    let mut session = FormSession::new();

    let errors = steps::submit(&mut session, PersonalDetailsForm::default())
        .expect_err("blank personal details fail");
    assert!(errors.get("surname").is_some());
    assert_eq!(session, FormSession::new());

    fill_personal_details(&mut session);
    assert_eq!(session.surname, "Lanka");
}

#[test]
fn navigation_order_matches_the_screen_sequence() {
    assert_eq!(
        WizardStep::DeliveryDetails.next(),
        Some(WizardStep::Summary)
    );
    assert_eq!(
        WizardStep::Declarations.back(),
        Some(WizardStep::DocumentUpload)
    );
    assert_eq!(WizardStep::Confirmation.next(), None);
    assert_eq!(WizardStep::Payment.number(), 12);
}
