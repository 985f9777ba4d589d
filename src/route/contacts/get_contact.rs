use axum::extract::State;

use crate::{
    error::ErrorVerbosityProvider, extractor::path::ApiPath, server_error, state::ApiState,
    types::contact::Contact,
};

use super::{ContactError, ContactErrorType};

/// Returns a contact by id.
#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    tag = "contact",
    params(("id" = String, Path, description = "The contact id")),
    responses(
        (status = 200, description = "The contact", body = Contact),
        (status = 404, description = "Contact not found"),
    )
)]
#[tracing::instrument(name = "get_contact", skip_all)]
pub async fn get_contact(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Contact, ContactError> {
    let contact = state
        .store()
        .get(&id)
        .await
        .map_err(server_error!(state))?;

    contact.ok_or_else(|| {
        tracing::debug!(%id, "Contact not found");

        ContactError::new(state.error_verbosity(), ContactErrorType::NotFound { id })
    })
}
