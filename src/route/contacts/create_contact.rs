use axum::extract::State;

use crate::{
    error::ApiError,
    extractor::{json::ApiJson, validated::Validated},
    server_error,
    state::ApiState,
    types::contact::{Contact, ContactFields},
};

/// Creates a new contact.
///
/// The response carries the generated id, which clients use to address the contact afterwards.
#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = "contact",
    request_body = ContactFields,
    responses(
        (status = 200, description = "New contact created", body = Contact),
        (status = 400, description = "Malformed or invalid contact"),
    )
)]
#[tracing::instrument(name = "create_contact", skip_all)]
pub async fn create_contact(
    State(state): State<ApiState>,
    Validated(ApiJson(fields)): Validated<ApiJson<ContactFields>>,
) -> Result<Contact, ApiError> {
    let contact = state
        .store()
        .create(fields)
        .await
        .map_err(server_error!(state))?;

    tracing::info!(id = %contact.id, "Contact created");

    Ok(contact)
}
