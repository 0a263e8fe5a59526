use crate::wizard::session::{FormSession, PartialDate, PostalAddress, PreviousAddressForm};
use crate::wizard::steps::{
    self, AdditionalDetailsForm, CardholderDetailsForm, CurrentAddressForm, DeclarationsForm,
    DeliveryDetailsForm, DocumentSelectionForm, PersonalDetailsForm, PreviousAddressDraft,
    ResidencyDateForm,
};

pub(super) fn belfast_address() -> PostalAddress {
    PostalAddress {
        address_line1: "8 LANYON PLACE".to_string(),
        address_line2: String::new(),
        address_line3: String::new(),
        town_city: "BELFAST".to_string(),
        county: "NORTHERN IRELAND".to_string(),
        country: "United Kingdom".to_string(),
        postcode: "BT1 3LP".to_string(),
    }
}

pub(super) fn derry_address() -> PostalAddress {
    PostalAddress {
        address_line1: "10 Main St".to_string(),
        address_line2: String::new(),
        address_line3: String::new(),
        town_city: "Derry".to_string(),
        county: String::new(),
        country: "United Kingdom".to_string(),
        postcode: String::new(),
    }
}

pub(super) fn date_of_birth() -> PartialDate {
    PartialDate::new("01", "01", "2000")
}

pub(super) fn personal_details() -> PersonalDetailsForm {
    PersonalDetailsForm {
        title: "Mr".to_string(),
        surname: "Lanka".to_string(),
        forename: "Rajani".to_string(),
        middle_names: "Test one".to_string(),
        name_known_by: "Kanth".to_string(),
        other_surnames: vec!["Lanka one".to_string()],
        other_forenames: vec!["Rajani Kanth".to_string()],
        date_of_birth: date_of_birth(),
    }
}

pub(super) fn additional_details() -> AdditionalDetailsForm {
    AdditionalDetailsForm {
        gender: "male".to_string(),
        town_city: "Belfast".to_string(),
        country: "Northern Ireland".to_string(),
        nationality: "British".to_string(),
        has_national_insurance: true,
        national_insurance_number: "AB123456C".to_string(),
        national_insurance_reason: String::new(),
        has_driving_licence: true,
        driving_licence_number: "LANKA905123RK9PL".to_string(),
        has_passport: false,
        passport_number: String::new(),
        country_of_issue: String::new(),
        contact_number: "028 9032 1234".to_string(),
        contact_email: "rajani.lanka@example.com".to_string(),
    }
}

pub(super) fn current_address_form() -> CurrentAddressForm {
    CurrentAddressForm {
        address: belfast_address(),
    }
}

pub(super) fn residency_date_form() -> ResidencyDateForm {
    ResidencyDateForm {
        lived_since: PartialDate::new("15", "06", "2018"),
    }
}

pub(super) fn previous_address_draft() -> PreviousAddressDraft {
    PreviousAddressDraft {
        form: PreviousAddressForm {
            id: None,
            address: derry_address(),
            lived_from: PartialDate::new("01", "03", "2014"),
            lived_to: PartialDate::new("14", "06", "2018"),
        },
    }
}

pub(super) fn delivery_details() -> DeliveryDetailsForm {
    DeliveryDetailsForm {
        paper_certificate: true,
        send_to_current_address: true,
        delivery_address: derry_address(),
    }
}

pub(super) fn document_selection() -> DocumentSelectionForm {
    DocumentSelectionForm {
        selected_documents: vec!["originalBirth".to_string(), "passport".to_string()],
        visa_share_code: String::new(),
    }
}

pub(super) fn declarations_form() -> DeclarationsForm {
    DeclarationsForm {
        confirmed: true,
        declaration_date: PartialDate::new("12", "05", "2025"),
    }
}

pub(super) fn cardholder_details() -> CardholderDetailsForm {
    CardholderDetailsForm {
        same_as_current: true,
        cardholder_address: PostalAddress::default(),
    }
}

/// A session driven through every committing step with the sample applicant.
pub(super) fn completed_session() -> FormSession {
    let mut session = FormSession::new();
    steps::submit(&mut session, personal_details()).expect("personal details commit");
    steps::submit(&mut session, additional_details()).expect("additional details commit");
    steps::submit(&mut session, current_address_form()).expect("current address commits");
    steps::submit(&mut session, residency_date_form()).expect("residency date commits");
    steps::save_previous_address(&mut session, previous_address_draft())
        .expect("previous address saves");
    steps::submit(&mut session, delivery_details()).expect("delivery details commit");
    steps::submit(&mut session, document_selection()).expect("document selection commits");
    steps::submit(&mut session, declarations_form()).expect("declarations commit");
    steps::submit(&mut session, cardholder_details()).expect("cardholder details commit");
    session
}
