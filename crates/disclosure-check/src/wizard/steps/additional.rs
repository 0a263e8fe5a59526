use serde::Deserialize;

use super::{FieldErrors, StepForm, WizardStep};
use crate::wizard::session::{FormSession, SectionPatch};
use crate::wizard::validation::{self, ValidationError};

/// Step 2 draft: demographics, identity documents held, and contact details.
///
/// The yes/no answers gate which dependent fields are mandatory; the same
/// conditional rules the screen applies live in [`StepForm::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalDetailsForm {
    pub gender: String,
    pub town_city: String,
    pub country: String,
    pub nationality: String,
    pub has_national_insurance: bool,
    pub national_insurance_number: String,
    pub national_insurance_reason: String,
    pub has_driving_licence: bool,
    pub driving_licence_number: String,
    pub has_passport: bool,
    pub passport_number: String,
    pub country_of_issue: String,
    pub contact_number: String,
    pub contact_email: String,
}

impl StepForm for AdditionalDetailsForm {
    fn step(&self) -> WizardStep {
        WizardStep::AdditionalDetails
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("gender", validation::required(&self.gender, "Gender"));
        errors.check("townCity", validation::required(&self.town_city, "Town/city"));
        errors.check("country", validation::required(&self.country, "Country"));
        errors.check(
            "nationality",
            validation::required(&self.nationality, "Nationality"),
        );
        errors.check("contactNumber", validation::phone(&self.contact_number));
        errors.check("contactEmail", validation::email(&self.contact_email));

        if self.has_national_insurance && self.national_insurance_number.trim().is_empty() {
            errors.push(
                "nationalInsuranceNumber",
                ValidationError::required("National Insurance number"),
            );
        } else if !self.national_insurance_number.trim().is_empty() {
            errors.check(
                "nationalInsuranceNumber",
                validation::national_insurance(&self.national_insurance_number),
            );
        }

        if !self.has_national_insurance && self.national_insurance_reason.trim().is_empty() {
            errors.push("nationalInsuranceReason", ValidationError::ReasonRequired);
        }

        if self.has_driving_licence && self.driving_licence_number.trim().is_empty() {
            errors.push(
                "drivingLicenceNumber",
                ValidationError::required("Driving licence number"),
            );
        }

        if self.has_passport {
            if self.passport_number.trim().is_empty() {
                errors.push("passportNumber", ValidationError::required("Passport number"));
            }
            if self.country_of_issue.trim().is_empty() {
                errors.push(
                    "countryOfIssue",
                    ValidationError::required("Country of issue"),
                );
            }
        }

        errors
    }

    fn commit(self, session: &mut FormSession) {
        // The number is stored only when the applicant answered yes; empty
        // means "not provided" downstream.
        let national_insurance_number = if self.has_national_insurance {
            self.national_insurance_number
        } else {
            String::new()
        };

        session.update_section(SectionPatch::Gender(self.gender));
        session.update_section(SectionPatch::TownCity(self.town_city));
        session.update_section(SectionPatch::Country(self.country));
        session.update_section(SectionPatch::NationalInsuranceNumber(
            national_insurance_number,
        ));
        session.update_section(SectionPatch::NationalInsuranceReason(
            self.national_insurance_reason,
        ));
        session.update_section(SectionPatch::DrivingLicence(self.has_driving_licence));
        session.update_section(SectionPatch::DrivingLicenceNumber(
            self.driving_licence_number,
        ));
        session.update_section(SectionPatch::Passport(self.has_passport));
        session.update_section(SectionPatch::PassportNumber(self.passport_number));
        session.update_section(SectionPatch::CountryOfIssue(self.country_of_issue));
        session.update_section(SectionPatch::Nationality(self.nationality));
        session.update_section(SectionPatch::ContactNumber(self.contact_number));
        session.update_section(SectionPatch::ContactEmail(self.contact_email));
    }
}
