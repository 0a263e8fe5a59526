use serde::Deserialize;

use super::domain::{CurrentAddress, Declarations, FormSession, PartialDate, PostalAddress};

/// Partial update for a date triple; absent components keep their stored
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatePatch {
    pub day: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
}

impl DatePatch {
    pub fn apply(self, target: &mut PartialDate) {
        if let Some(day) = self.day {
            target.day = day;
        }
        if let Some(month) = self.month {
            target.month = month;
        }
        if let Some(year) = self.year {
            target.year = year;
        }
    }
}

impl From<PartialDate> for DatePatch {
    fn from(value: PartialDate) -> Self {
        Self {
            day: Some(value.day),
            month: Some(value.month),
            year: Some(value.year),
        }
    }
}

/// Partial update for a postal address; absent fields keep their stored
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressPatch {
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_line3: Option<String>,
    pub town_city: Option<String>,
    pub county: Option<String>,
    pub country: Option<String>,
    pub postcode: Option<String>,
}

impl AddressPatch {
    pub fn apply(self, target: &mut PostalAddress) {
        if let Some(value) = self.address_line1 {
            target.address_line1 = value;
        }
        if let Some(value) = self.address_line2 {
            target.address_line2 = value;
        }
        if let Some(value) = self.address_line3 {
            target.address_line3 = value;
        }
        if let Some(value) = self.town_city {
            target.town_city = value;
        }
        if let Some(value) = self.county {
            target.county = value;
        }
        if let Some(value) = self.country {
            target.country = value;
        }
        if let Some(value) = self.postcode {
            target.postcode = value;
        }
    }
}

impl From<PostalAddress> for AddressPatch {
    fn from(value: PostalAddress) -> Self {
        Self {
            address_line1: Some(value.address_line1),
            address_line2: Some(value.address_line2),
            address_line3: Some(value.address_line3),
            town_city: Some(value.town_city),
            county: Some(value.county),
            country: Some(value.country),
            postcode: Some(value.postcode),
        }
    }
}

/// Partial update for the current address. The `livedSince` triple is
/// replaced as a unit when present so the residency step cannot leave a
/// half-written date behind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentAddressPatch {
    #[serde(flatten)]
    pub address: AddressPatch,
    pub lived_since: Option<PartialDate>,
}

impl CurrentAddressPatch {
    pub fn apply(self, target: &mut CurrentAddress) {
        self.address.apply(&mut target.address);
        if let Some(lived_since) = self.lived_since {
            target.lived_since = lived_since;
        }
    }
}

/// One validated write against a single session section.
///
/// The merge strategy is fixed per variant: record sections carry patch
/// structs and merge field-by-field, list and scalar sections replace their
/// stored value outright. Unknown sections are unrepresentable here; the wire
/// boundary rejects them in [`SectionPatch::from_wire`].
#[derive(Debug, Clone, PartialEq)]
pub enum SectionPatch {
    Title(String),
    Surname(String),
    Forename(String),
    MiddleNames(String),
    NameKnownBy(String),
    OtherSurnames(Vec<String>),
    OtherForenames(Vec<String>),
    DateOfBirth(DatePatch),
    Gender(String),
    TownCity(String),
    Country(String),
    NationalInsuranceNumber(String),
    NationalInsuranceReason(String),
    DrivingLicence(bool),
    DrivingLicenceNumber(String),
    Passport(bool),
    PassportNumber(String),
    CountryOfIssue(String),
    Nationality(String),
    ContactNumber(String),
    ContactEmail(String),
    CurrentAddress(CurrentAddressPatch),
    PaperCertificate(bool),
    SendToCurrentAddress(bool),
    DeliveryAddress(AddressPatch),
    SelectedDocuments(Vec<String>),
    VisaShareCode(String),
    CardholderAddressSame(bool),
    CardholderAddress(AddressPatch),
}

/// Errors raised when a wire-level section update cannot be applied.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("unknown session section '{name}'")]
    UnknownSection { name: String },
    #[error("invalid payload for section '{section}': {source}")]
    InvalidPayload {
        section: &'static str,
        source: serde_json::Error,
    },
}

fn decode<T: serde::de::DeserializeOwned>(
    section: &'static str,
    value: serde_json::Value,
) -> Result<T, SessionError> {
    serde_json::from_value(value).map_err(|source| SessionError::InvalidPayload { section, source })
}

impl SectionPatch {
    /// Wire name of the section this patch writes.
    pub const fn section(&self) -> &'static str {
        match self {
            SectionPatch::Title(_) => "title",
            SectionPatch::Surname(_) => "surname",
            SectionPatch::Forename(_) => "forename",
            SectionPatch::MiddleNames(_) => "middleNames",
            SectionPatch::NameKnownBy(_) => "nameKnownBy",
            SectionPatch::OtherSurnames(_) => "otherSurnames",
            SectionPatch::OtherForenames(_) => "otherForenames",
            SectionPatch::DateOfBirth(_) => "dateOfBirth",
            SectionPatch::Gender(_) => "gender",
            SectionPatch::TownCity(_) => "townCity",
            SectionPatch::Country(_) => "country",
            SectionPatch::NationalInsuranceNumber(_) => "nationalInsuranceNumber",
            SectionPatch::NationalInsuranceReason(_) => "nationalInsuranceReason",
            SectionPatch::DrivingLicence(_) => "drivingLicence",
            SectionPatch::DrivingLicenceNumber(_) => "drivingLicenceNumber",
            SectionPatch::Passport(_) => "passport",
            SectionPatch::PassportNumber(_) => "passportNumber",
            SectionPatch::CountryOfIssue(_) => "countryOfIssue",
            SectionPatch::Nationality(_) => "nationality",
            SectionPatch::ContactNumber(_) => "contactNumber",
            SectionPatch::ContactEmail(_) => "contactEmail",
            SectionPatch::CurrentAddress(_) => "currentAddress",
            SectionPatch::PaperCertificate(_) => "paperCertificate",
            SectionPatch::SendToCurrentAddress(_) => "sendToCurrentAddress",
            SectionPatch::DeliveryAddress(_) => "deliveryAddress",
            SectionPatch::SelectedDocuments(_) => "selectedDocuments",
            SectionPatch::VisaShareCode(_) => "visaShareCode",
            SectionPatch::CardholderAddressSame(_) => "cardholderAddressSame",
            SectionPatch::CardholderAddress(_) => "cardholderAddress",
        }
    }

    /// Decode a `{section, value}` pair arriving over the wire. An unknown
    /// section name is a caller bug and fails loudly rather than being
    /// silently dropped.
    pub fn from_wire(section: &str, value: serde_json::Value) -> Result<Self, SessionError> {
        let patch = match section {
            "title" => SectionPatch::Title(decode("title", value)?),
            "surname" => SectionPatch::Surname(decode("surname", value)?),
            "forename" => SectionPatch::Forename(decode("forename", value)?),
            "middleNames" => SectionPatch::MiddleNames(decode("middleNames", value)?),
            "nameKnownBy" => SectionPatch::NameKnownBy(decode("nameKnownBy", value)?),
            "otherSurnames" => SectionPatch::OtherSurnames(decode("otherSurnames", value)?),
            "otherForenames" => SectionPatch::OtherForenames(decode("otherForenames", value)?),
            "dateOfBirth" => SectionPatch::DateOfBirth(decode("dateOfBirth", value)?),
            "gender" => SectionPatch::Gender(decode("gender", value)?),
            "townCity" => SectionPatch::TownCity(decode("townCity", value)?),
            "country" => SectionPatch::Country(decode("country", value)?),
            "nationalInsuranceNumber" => {
                SectionPatch::NationalInsuranceNumber(decode("nationalInsuranceNumber", value)?)
            }
            "nationalInsuranceReason" => {
                SectionPatch::NationalInsuranceReason(decode("nationalInsuranceReason", value)?)
            }
            "drivingLicence" => SectionPatch::DrivingLicence(decode("drivingLicence", value)?),
            "drivingLicenceNumber" => {
                SectionPatch::DrivingLicenceNumber(decode("drivingLicenceNumber", value)?)
            }
            "passport" => SectionPatch::Passport(decode("passport", value)?),
            "passportNumber" => SectionPatch::PassportNumber(decode("passportNumber", value)?),
            "countryOfIssue" => SectionPatch::CountryOfIssue(decode("countryOfIssue", value)?),
            "nationality" => SectionPatch::Nationality(decode("nationality", value)?),
            "contactNumber" => SectionPatch::ContactNumber(decode("contactNumber", value)?),
            "contactEmail" => SectionPatch::ContactEmail(decode("contactEmail", value)?),
            "currentAddress" => SectionPatch::CurrentAddress(decode("currentAddress", value)?),
            "paperCertificate" => {
                SectionPatch::PaperCertificate(decode("paperCertificate", value)?)
            }
            "sendToCurrentAddress" => {
                SectionPatch::SendToCurrentAddress(decode("sendToCurrentAddress", value)?)
            }
            "deliveryAddress" => SectionPatch::DeliveryAddress(decode("deliveryAddress", value)?),
            "selectedDocuments" => {
                SectionPatch::SelectedDocuments(decode("selectedDocuments", value)?)
            }
            "visaShareCode" => SectionPatch::VisaShareCode(decode("visaShareCode", value)?),
            "cardholderAddressSame" => {
                SectionPatch::CardholderAddressSame(decode("cardholderAddressSame", value)?)
            }
            "cardholderAddress" => {
                SectionPatch::CardholderAddress(decode("cardholderAddress", value)?)
            }
            other => {
                return Err(SessionError::UnknownSection {
                    name: other.to_string(),
                })
            }
        };
        Ok(patch)
    }
}

impl FormSession {
    /// Apply one section write. Mutation is visible to every subsequent read;
    /// callers validate before committing, there is no rollback.
    pub fn update_section(&mut self, patch: SectionPatch) {
        match patch {
            SectionPatch::Title(value) => self.title = value,
            SectionPatch::Surname(value) => self.surname = value,
            SectionPatch::Forename(value) => self.forename = value,
            SectionPatch::MiddleNames(value) => self.middle_names = value,
            SectionPatch::NameKnownBy(value) => self.name_known_by = value,
            SectionPatch::OtherSurnames(value) => self.other_surnames = value,
            SectionPatch::OtherForenames(value) => self.other_forenames = value,
            SectionPatch::DateOfBirth(patch) => patch.apply(&mut self.date_of_birth),
            SectionPatch::Gender(value) => self.gender = value,
            SectionPatch::TownCity(value) => self.town_city = value,
            SectionPatch::Country(value) => self.country = value,
            SectionPatch::NationalInsuranceNumber(value) => {
                self.national_insurance_number = value
            }
            SectionPatch::NationalInsuranceReason(value) => {
                self.national_insurance_reason = value
            }
            SectionPatch::DrivingLicence(value) => self.driving_licence = value,
            SectionPatch::DrivingLicenceNumber(value) => self.driving_licence_number = value,
            SectionPatch::Passport(value) => self.passport = value,
            SectionPatch::PassportNumber(value) => self.passport_number = value,
            SectionPatch::CountryOfIssue(value) => self.country_of_issue = value,
            SectionPatch::Nationality(value) => self.nationality = value,
            SectionPatch::ContactNumber(value) => self.contact_number = value,
            SectionPatch::ContactEmail(value) => self.contact_email = value,
            SectionPatch::CurrentAddress(patch) => patch.apply(&mut self.current_address),
            SectionPatch::PaperCertificate(value) => self.paper_certificate = value,
            SectionPatch::SendToCurrentAddress(value) => self.send_to_current_address = value,
            SectionPatch::DeliveryAddress(patch) => patch.apply(&mut self.delivery_address),
            SectionPatch::SelectedDocuments(value) => self.selected_documents = value,
            SectionPatch::VisaShareCode(value) => self.visa_share_code = value,
            SectionPatch::CardholderAddressSame(same) => {
                self.cardholder_address_same = same;
                if same {
                    self.cardholder_address = self.current_address.address.clone();
                }
            }
            SectionPatch::CardholderAddress(patch) => patch.apply(&mut self.cardholder_address),
        }
    }

    /// Confirm the declarations step. All seven flags flip together; partial
    /// confirmation does not exist.
    pub fn confirm_declarations(&mut self) {
        self.declarations = Declarations::confirmed();
    }
}
