use serde_json::json;

use super::common::*;
use crate::wizard::session::{
    AddressPatch, DatePatch, FormSession, SectionPatch, SessionError,
};

#[test]
fn scalar_sections_replace_and_are_idempotent() {
    let mut session = FormSession::new();
    session.update_section(SectionPatch::Title("Mr".to_string()));
    session.update_section(SectionPatch::Title("Mr".to_string()));
    assert_eq!(session.title, "Mr");
}

#[test]
fn list_sections_replace_wholesale() {
    let mut session = FormSession::new();
    session.update_section(SectionPatch::OtherSurnames(vec!["Lanka one".to_string()]));
    session.update_section(SectionPatch::OtherSurnames(vec!["Lanka two".to_string()]));
    assert_eq!(session.other_surnames, vec!["Lanka two".to_string()]);
}

#[test]
fn record_sections_merge_field_by_field() {
    let mut session = FormSession::new();
    session.update_section(SectionPatch::DateOfBirth(date_of_birth().into()));
    session.update_section(SectionPatch::DateOfBirth(DatePatch {
        year: Some("1999".to_string()),
        ..Default::default()
    }));

    assert_eq!(session.date_of_birth.day, "01");
    assert_eq!(session.date_of_birth.month, "01");
    assert_eq!(session.date_of_birth.year, "1999");
}

#[test]
fn delivery_address_survives_send_to_current_toggle() {
    let mut session = FormSession::new();
    assert!(session.send_to_current_address);

    session.update_section(SectionPatch::DeliveryAddress(AddressPatch {
        address_line1: Some("10 Main St".to_string()),
        town_city: Some("Derry".to_string()),
        country: Some("United Kingdom".to_string()),
        ..Default::default()
    }));
    session.update_section(SectionPatch::SendToCurrentAddress(false));

    assert_eq!(session.delivery_address.address_line1, "10 Main St");
    assert_eq!(session.delivery_destination().address_line1, "10 Main St");
}

#[test]
fn delivery_destination_prefers_current_address_while_flag_is_set() {
    let mut session = FormSession::new();
    session.update_section(SectionPatch::CurrentAddress(
        crate::wizard::session::CurrentAddressPatch {
            address: belfast_address().into(),
            lived_since: None,
        },
    ));
    session.update_section(SectionPatch::DeliveryAddress(derry_address().into()));

    assert_eq!(session.delivery_destination().town_city, "BELFAST");
    // The stored delivery address is shadowed, not cleared.
    assert_eq!(session.delivery_address.town_city, "Derry");
}

#[test]
fn setting_cardholder_same_copies_current_address() {
    let mut session = FormSession::new();
    session.update_section(SectionPatch::CurrentAddress(
        crate::wizard::session::CurrentAddressPatch {
            address: belfast_address().into(),
            lived_since: None,
        },
    ));
    session.update_section(SectionPatch::CardholderAddressSame(true));

    assert_eq!(session.cardholder_address, belfast_address());
    assert_eq!(session.billing_address().postcode, "BT1 3LP");
}

#[test]
fn declarations_flip_together() {
    let mut session = FormSession::new();
    assert!(!session.declarations.all_confirmed());
    assert!(!session.declarations.information_correct);

    session.confirm_declarations();

    assert!(session.declarations.all_confirmed());
    assert!(session.declarations.confirms_identity_documents);
}

#[test]
fn from_wire_rejects_unknown_sections() {
    let error = SectionPatch::from_wire("favouriteColour", json!("green"))
        .expect_err("unknown section must fail");
    assert!(matches!(error, SessionError::UnknownSection { name } if name == "favouriteColour"));
}

#[test]
fn from_wire_rejects_mistyped_payloads() {
    let error = SectionPatch::from_wire("paperCertificate", json!("yes"))
        .expect_err("bool section rejects strings");
    assert!(matches!(
        error,
        SessionError::InvalidPayload {
            section: "paperCertificate",
            ..
        }
    ));
}

#[test]
fn from_wire_applies_record_patches() {
    let mut session = FormSession::new();
    let patch = SectionPatch::from_wire(
        "deliveryAddress",
        json!({ "addressLine1": "10 Main St", "townCity": "Derry", "country": "United Kingdom" }),
    )
    .expect("wire patch decodes");

    session.update_section(patch);
    assert_eq!(session.delivery_address.address_line1, "10 Main St");
    assert_eq!(session.delivery_address.county, "");
}

#[test]
fn snapshot_serializes_in_wire_shape() {
    let session = completed_session();
    let snapshot = serde_json::to_value(&session).expect("session serializes");

    assert_eq!(snapshot["surname"], "Lanka");
    assert_eq!(snapshot["currentAddress"]["addressLine1"], "8 LANYON PLACE");
    assert_eq!(snapshot["currentAddress"]["livedSince"]["day"], "15");
    assert_eq!(snapshot["deliveryAddress"]["townCity"], "Derry");
    assert_eq!(snapshot["sendToCurrentAddress"], true);
    assert_eq!(snapshot["declarations"]["informationCorrect"], true);
    assert_eq!(snapshot["previousAddresses"][0]["townCity"], "Derry");
}

#[test]
fn snapshot_round_trips_through_json() {
    let session = completed_session();
    let encoded = serde_json::to_string(&session).expect("session serializes");
    let decoded: FormSession = serde_json::from_str(&encoded).expect("session deserializes");
    assert_eq!(decoded, session);
}
