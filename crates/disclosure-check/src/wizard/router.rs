use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::session::{AddressId, FormSession, SectionPatch, SessionError};
use super::steps::{
    self, AdditionalDetailsForm, CardholderDetailsForm, CurrentAddressForm, DeclarationsForm,
    DeliveryDetailsForm, DocumentSelectionForm, PersonalDetailsForm, PreviousAddressDraft,
    ResidencyDateForm, SaveAddressError, SavedAddress, StepForm,
};

/// One wizard session shared by every handler. The wizard is single-user;
/// the lock only guards against overlapping HTTP dispatches.
pub type SharedSession = Arc<Mutex<FormSession>>;

pub fn shared_session() -> SharedSession {
    Arc::new(Mutex::new(FormSession::new()))
}

/// Router builder exposing the form session over HTTP.
pub fn wizard_router(session: SharedSession) -> Router {
    Router::new()
        .route("/api/v1/session", get(snapshot_handler))
        .route("/api/v1/session/sections", post(section_handler))
        .route("/api/v1/session/steps/:step", post(step_handler))
        .route(
            "/api/v1/session/previous-addresses",
            get(list_addresses_handler).post(add_address_handler),
        )
        .route(
            "/api/v1/session/previous-addresses/:id",
            put(update_address_handler).delete(remove_address_handler),
        )
        .with_state(session)
}

#[derive(Debug, Deserialize)]
pub(crate) struct SectionUpdateRequest {
    pub(crate) section: String,
    pub(crate) value: serde_json::Value,
}

pub(crate) async fn snapshot_handler(State(session): State<SharedSession>) -> Json<FormSession> {
    let guard = session.lock().expect("session mutex poisoned");
    Json(guard.clone())
}

pub(crate) async fn section_handler(
    State(session): State<SharedSession>,
    Json(request): Json<SectionUpdateRequest>,
) -> Response {
    let patch = match SectionPatch::from_wire(&request.section, request.value) {
        Ok(patch) => patch,
        Err(error @ SessionError::UnknownSection { .. }) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": error.to_string() })),
            )
                .into_response();
        }
        Err(error @ SessionError::InvalidPayload { .. }) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": error.to_string() })),
            )
                .into_response();
        }
    };

    let section = patch.section();
    let mut guard = session.lock().expect("session mutex poisoned");
    guard.update_section(patch);
    (
        StatusCode::OK,
        Json(json!({ "section": section, "status": "updated" })),
    )
        .into_response()
}

fn submit_form<F: StepForm>(session: &SharedSession, form: F) -> Response {
    let step = form.step();
    let mut guard = session.lock().expect("session mutex poisoned");
    match steps::submit(&mut *guard, form) {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "step": step.number(), "status": "committed" })),
        )
            .into_response(),
        Err(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "errors": errors })),
        )
            .into_response(),
    }
}

fn decode_form<F: serde::de::DeserializeOwned>(
    value: serde_json::Value,
) -> Result<F, Response> {
    serde_json::from_value(value).map_err(|error| {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": format!("invalid step payload: {error}") })),
        )
            .into_response()
    })
}

pub(crate) async fn step_handler(
    State(session): State<SharedSession>,
    Path(step): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> Response {
    let result = match step.as_str() {
        "personal-details" => {
            decode_form::<PersonalDetailsForm>(payload).map(|form| submit_form(&session, form))
        }
        "additional-details" => {
            decode_form::<AdditionalDetailsForm>(payload).map(|form| submit_form(&session, form))
        }
        "current-address" => {
            decode_form::<CurrentAddressForm>(payload).map(|form| submit_form(&session, form))
        }
        "residency-date" => {
            decode_form::<ResidencyDateForm>(payload).map(|form| submit_form(&session, form))
        }
        "delivery-details" => {
            decode_form::<DeliveryDetailsForm>(payload).map(|form| submit_form(&session, form))
        }
        "document-selection" => {
            decode_form::<DocumentSelectionForm>(payload).map(|form| submit_form(&session, form))
        }
        "declarations" => {
            decode_form::<DeclarationsForm>(payload).map(|form| submit_form(&session, form))
        }
        "cardholder-details" => {
            decode_form::<CardholderDetailsForm>(payload).map(|form| submit_form(&session, form))
        }
        other => Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("unknown wizard step '{other}'") })),
        )
            .into_response()),
    };

    match result {
        Ok(response) | Err(response) => response,
    }
}

pub(crate) async fn list_addresses_handler(State(session): State<SharedSession>) -> Response {
    let guard = session.lock().expect("session mutex poisoned");
    (StatusCode::OK, Json(guard.previous_addresses.clone())).into_response()
}

fn saved_address_response(outcome: Result<SavedAddress, SaveAddressError>) -> Response {
    match outcome {
        Ok(SavedAddress::Added(id)) => {
            (StatusCode::CREATED, Json(json!({ "id": id.0 }))).into_response()
        }
        Ok(SavedAddress::Updated(id)) => {
            (StatusCode::OK, Json(json!({ "id": id.0 }))).into_response()
        }
        Err(SaveAddressError::Invalid(errors)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "errors": errors })),
        )
            .into_response(),
        Err(error @ SaveAddressError::UnknownId(_)) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": error.to_string() })),
        )
            .into_response(),
    }
}

pub(crate) async fn add_address_handler(
    State(session): State<SharedSession>,
    Json(draft): Json<PreviousAddressDraft>,
) -> Response {
    let mut guard = session.lock().expect("session mutex poisoned");
    saved_address_response(steps::save_previous_address(&mut guard, draft))
}

pub(crate) async fn update_address_handler(
    State(session): State<SharedSession>,
    Path(id): Path<String>,
    Json(mut draft): Json<PreviousAddressDraft>,
) -> Response {
    draft.form.id = Some(AddressId(id));
    let mut guard = session.lock().expect("session mutex poisoned");
    saved_address_response(steps::save_previous_address(&mut guard, draft))
}

pub(crate) async fn remove_address_handler(
    State(session): State<SharedSession>,
    Path(id): Path<String>,
) -> Response {
    let id = AddressId(id);
    let mut guard = session.lock().expect("session mutex poisoned");
    if guard.remove_previous_address(&id).applied() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("no previous address with id '{}'", id.0) })),
        )
            .into_response()
    }
}
