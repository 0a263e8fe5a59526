use serde::{Deserialize, Serialize};

/// Identifier wrapper for previous-address entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressId(pub String);

/// A date captured exactly as typed: three free-text components, validated
/// only when a step is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialDate {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl PartialDate {
    pub fn new(day: &str, month: &str, year: &str) -> Self {
        Self {
            day: day.to_string(),
            month: month.to_string(),
            year: year.to_string(),
        }
    }

    /// True when every component is still blank.
    pub fn is_blank(&self) -> bool {
        self.day.trim().is_empty() && self.month.trim().is_empty() && self.year.trim().is_empty()
    }
}

/// Structured postal address. Empty strings stand for unanswered fields so
/// every read path has a safe default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostalAddress {
    pub address_line1: String,
    pub address_line2: String,
    pub address_line3: String,
    pub town_city: String,
    pub county: String,
    pub country: String,
    pub postcode: String,
}

impl PostalAddress {
    pub fn is_blank(&self) -> bool {
        self.address_line1.trim().is_empty()
            && self.town_city.trim().is_empty()
            && self.country.trim().is_empty()
    }
}

/// The applicant's current home address plus the date they moved in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentAddress {
    #[serde(flatten)]
    pub address: PostalAddress,
    pub lived_since: PartialDate,
}

/// One entry in the address history, with the period the applicant lived
/// there. The date pair is not range-checked against itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousAddress {
    pub id: AddressId,
    #[serde(flatten)]
    pub address: PostalAddress,
    pub lived_from: PartialDate,
    pub lived_to: PartialDate,
}

/// The seven acknowledgement statements on the declarations screen. They are
/// only ever set together; no operation toggles one in isolation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Declarations {
    pub information_correct: bool,
    pub understands_false_statement_offence: bool,
    pub consents_to_record_checks: bool,
    pub agrees_code_of_practice: bool,
    pub understands_certificate_use: bool,
    pub agrees_terms_and_conditions: bool,
    pub confirms_identity_documents: bool,
}

impl Declarations {
    /// The state written when the applicant confirms the declarations step.
    pub fn confirmed() -> Self {
        Self {
            information_correct: true,
            understands_false_statement_offence: true,
            consents_to_record_checks: true,
            agrees_code_of_practice: true,
            understands_certificate_use: true,
            agrees_terms_and_conditions: true,
            confirms_identity_documents: true,
        }
    }

    pub fn all_confirmed(&self) -> bool {
        self.information_correct
            && self.understands_false_statement_offence
            && self.consents_to_record_checks
            && self.agrees_code_of_practice
            && self.understands_certificate_use
            && self.agrees_terms_and_conditions
            && self.confirms_identity_documents
    }
}

/// The accumulated application data spanning all wizard steps.
///
/// One instance exists per applicant session. Steps pre-populate their drafts
/// from it, validate locally, then commit section patches back; the snapshot
/// serialized at final submission is this struct, field for field, in the
/// wire shape the downstream disclosure backend expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormSession {
    pub title: String,
    pub surname: String,
    pub forename: String,
    pub middle_names: String,
    pub name_known_by: String,
    pub other_surnames: Vec<String>,
    pub other_forenames: Vec<String>,
    pub date_of_birth: PartialDate,

    pub gender: String,
    pub town_city: String,
    pub country: String,
    /// Empty means "not provided"; the reason field explains why.
    pub national_insurance_number: String,
    pub national_insurance_reason: String,
    pub driving_licence: bool,
    pub driving_licence_number: String,
    pub passport: bool,
    pub passport_number: String,
    pub country_of_issue: String,
    pub nationality: String,
    pub contact_number: String,
    pub contact_email: String,

    pub current_address: CurrentAddress,
    pub previous_addresses: Vec<PreviousAddress>,

    pub paper_certificate: bool,
    pub send_to_current_address: bool,
    pub delivery_address: PostalAddress,

    pub selected_documents: Vec<String>,
    pub visa_share_code: String,

    pub declarations: Declarations,

    pub cardholder_address_same: bool,
    pub cardholder_address: PostalAddress,
}

impl Default for FormSession {
    fn default() -> Self {
        Self {
            title: String::new(),
            surname: String::new(),
            forename: String::new(),
            middle_names: String::new(),
            name_known_by: String::new(),
            other_surnames: Vec::new(),
            other_forenames: Vec::new(),
            date_of_birth: PartialDate::default(),
            gender: String::new(),
            town_city: String::new(),
            country: String::new(),
            national_insurance_number: String::new(),
            national_insurance_reason: String::new(),
            driving_licence: false,
            driving_licence_number: String::new(),
            passport: false,
            passport_number: String::new(),
            country_of_issue: String::new(),
            nationality: String::new(),
            contact_number: String::new(),
            contact_email: String::new(),
            current_address: CurrentAddress::default(),
            previous_addresses: Vec::new(),
            paper_certificate: false,
            send_to_current_address: true,
            delivery_address: PostalAddress::default(),
            selected_documents: Vec::new(),
            visa_share_code: String::new(),
            declarations: Declarations::default(),
            cardholder_address_same: true,
            cardholder_address: PostalAddress::default(),
        }
    }
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where a paper certificate would be posted. The stored delivery address
    /// is kept even while it is shadowed by the current address.
    pub fn delivery_destination(&self) -> &PostalAddress {
        if self.send_to_current_address {
            &self.current_address.address
        } else {
            &self.delivery_address
        }
    }

    /// Billing address for the payment step.
    pub fn billing_address(&self) -> &PostalAddress {
        if self.cardholder_address_same {
            &self.current_address.address
        } else {
            &self.cardholder_address
        }
    }

    /// "Surname, Forename Middle" as rendered on the confirmation screen.
    pub fn full_name(&self) -> String {
        let mut name = format!("{}, {}", self.surname, self.forename);
        if !self.middle_names.trim().is_empty() {
            name.push(' ');
            name.push_str(&self.middle_names);
        }
        name
    }
}
