use serde::Deserialize;

use super::{FieldErrors, StepForm, WizardStep};
use crate::wizard::session::{FormSession, PartialDate, SectionPatch};
use crate::wizard::validation;

/// Step 1 draft: names, aliases, and date of birth.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalDetailsForm {
    pub title: String,
    pub surname: String,
    pub forename: String,
    pub middle_names: String,
    pub name_known_by: String,
    pub other_surnames: Vec<String>,
    pub other_forenames: Vec<String>,
    pub date_of_birth: PartialDate,
}

impl StepForm for PersonalDetailsForm {
    fn step(&self) -> WizardStep {
        WizardStep::PersonalDetails
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("title", validation::required(&self.title, "Title"));
        errors.check("surname", validation::required(&self.surname, "Surname"));
        errors.check("forename", validation::required(&self.forename, "Forename"));
        errors.check("dateOfBirth", validation::date(&self.date_of_birth));
        errors
    }

    fn commit(self, session: &mut FormSession) {
        session.update_section(SectionPatch::Title(self.title));
        session.update_section(SectionPatch::Surname(self.surname));
        session.update_section(SectionPatch::Forename(self.forename));
        session.update_section(SectionPatch::MiddleNames(self.middle_names));
        session.update_section(SectionPatch::NameKnownBy(self.name_known_by));
        session.update_section(SectionPatch::OtherSurnames(self.other_surnames));
        session.update_section(SectionPatch::OtherForenames(self.other_forenames));
        session.update_section(SectionPatch::DateOfBirth(self.date_of_birth.into()));
    }
}
