use axum::extract::State;

use crate::{
    error::ErrorVerbosityProvider,
    extractor::{json::ApiJson, path::ApiPath, validated::Validated},
    server_error,
    state::ApiState,
    types::contact::{Contact, ContactFields},
};

use super::{ContactError, ContactErrorType};

/// Replaces every field of a contact.
///
/// Optional fields missing from the body are cleared.
#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    tag = "contact",
    params(("id" = String, Path, description = "The contact to update")),
    request_body = ContactFields,
    responses(
        (status = 200, description = "Contact updated", body = Contact),
        (status = 400, description = "Malformed or invalid contact"),
        (status = 404, description = "Contact not found"),
    )
)]
#[tracing::instrument(name = "update_contact", skip_all)]
pub async fn update_contact(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<String>,
    Validated(ApiJson(fields)): Validated<ApiJson<ContactFields>>,
) -> Result<Contact, ContactError> {
    let contact = state
        .store()
        .replace(&id, fields)
        .await
        .map_err(server_error!(state))?;

    match contact {
        Some(contact) => {
            tracing::info!(%id, "Contact updated");

            Ok(contact)
        }
        None => {
            tracing::debug!(%id, "Contact not found");

            Err(ContactError::new(
                state.error_verbosity(),
                ContactErrorType::NotFound { id },
            ))
        }
    }
}
