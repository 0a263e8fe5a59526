use clap::Args;

use disclosure_check::error::AppError;
use disclosure_check::wizard::steps::{
    self, AdditionalDetailsForm, CardholderDetailsForm, CurrentAddressForm, DeclarationsForm,
    DeliveryDetailsForm, DocumentSelectionForm, PersonalDetailsForm, PreviousAddressDraft,
    ResidencyDateForm, StepForm, WizardStep,
};
use disclosure_check::wizard::{FormSession, PartialDate, PostalAddress, PreviousAddressForm};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the completed session as pretty JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let mut session = FormSession::new();

    apply(&mut session, sample_personal_details());
    apply(&mut session, sample_additional_details());
    apply(&mut session, sample_current_address());
    apply(
        &mut session,
        ResidencyDateForm {
            lived_since: PartialDate::new("15", "06", "2018"),
        },
    );

    match steps::save_previous_address(&mut session, sample_previous_address()) {
        Ok(saved) => println!(
            "step {:>2} ({}): saved previous address '{}'",
            WizardStep::AddressHistory.number(),
            WizardStep::AddressHistory.title(),
            saved.id().0
        ),
        Err(error) => println!(
            "step {:>2} ({}): rejected ({error})",
            WizardStep::AddressHistory.number(),
            WizardStep::AddressHistory.title()
        ),
    }

    apply(&mut session, sample_delivery_details());
    apply(&mut session, sample_document_selection());
    apply(
        &mut session,
        DeclarationsForm {
            confirmed: true,
            declaration_date: PartialDate::new("12", "05", "2025"),
        },
    );
    apply(&mut session, CardholderDetailsForm::default());

    println!();
    if args.json {
        let snapshot = serde_json::to_string_pretty(&session)
            .unwrap_or_else(|err| format!("serialization failed: {err}"));
        println!("{snapshot}");
    } else {
        render_summary(&session);
    }

    Ok(())
}

fn apply<F: StepForm>(session: &mut FormSession, form: F) {
    let step = form.step();
    match steps::submit(session, form) {
        Ok(()) => println!("step {:>2} ({}): committed", step.number(), step.title()),
        Err(errors) => {
            println!(
                "step {:>2} ({}): rejected with {} finding(s)",
                step.number(),
                step.title(),
                errors.len()
            );
            for (field, error) in errors.iter() {
                println!("         - {field}: {error}");
            }
        }
    }
}

fn render_summary(session: &FormSession) {
    println!("applicant:         {}", session.full_name());
    println!(
        "date of birth:     {}/{}/{}",
        session.date_of_birth.day, session.date_of_birth.month, session.date_of_birth.year
    );
    println!(
        "current address:   {}, {} {}",
        session.current_address.address.address_line1,
        session.current_address.address.town_city,
        session.current_address.address.postcode
    );
    println!(
        "previous entries:  {}",
        session.previous_addresses.len()
    );
    println!("delivery to:       {}", short_address(session.delivery_destination()));
    println!("billing address:   {}", short_address(session.billing_address()));
    println!(
        "documents:         {}",
        session.selected_documents.join(", ")
    );
    println!(
        "declarations:      {}",
        if session.declarations.all_confirmed() {
            "confirmed"
        } else {
            "incomplete"
        }
    );
}

fn short_address(address: &PostalAddress) -> String {
    format!("{}, {}", address.address_line1, address.town_city)
}

fn sample_personal_details() -> PersonalDetailsForm {
    PersonalDetailsForm {
        title: "Mr".to_string(),
        surname: "Lanka".to_string(),
        forename: "Rajani".to_string(),
        middle_names: "Test one".to_string(),
        name_known_by: "Kanth".to_string(),
        other_surnames: vec!["Lanka one".to_string()],
        other_forenames: vec!["Rajani Kanth".to_string()],
        date_of_birth: PartialDate::new("01", "01", "2000"),
    }
}

fn sample_additional_details() -> AdditionalDetailsForm {
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
    }
}

fn sample_current_address() -> CurrentAddressForm {
    CurrentAddressForm {
        address: PostalAddress {
            address_line1: "8 LANYON PLACE".to_string(),
            town_city: "BELFAST".to_string(),
            county: "NORTHERN IRELAND".to_string(),
            country: "United Kingdom".to_string(),
            postcode: "BT1 3LP".to_string(),
            ..Default::default()
        },
    }
}

fn sample_previous_address() -> PreviousAddressDraft {
    PreviousAddressDraft {
        form: PreviousAddressForm {
            id: None,
            address: PostalAddress {
                address_line1: "10 Main St".to_string(),
                town_city: "Derry".to_string(),
                country: "United Kingdom".to_string(),
                ..Default::default()
            },
            lived_from: PartialDate::new("01", "03", "2014"),
            lived_to: PartialDate::new("14", "06", "2018"),
        },
    }
}

fn sample_delivery_details() -> DeliveryDetailsForm {
    DeliveryDetailsForm {
        paper_certificate: true,
        send_to_current_address: true,
        ..Default::default()
    }
}

fn sample_document_selection() -> DocumentSelectionForm {
    DocumentSelectionForm {
        selected_documents: vec!["originalBirth".to_string(), "passport".to_string()],
        visa_share_code: String::new(),
    }
}
