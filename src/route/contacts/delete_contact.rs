use axum::{extract::State, http::StatusCode};

use crate::{
    error::ErrorVerbosityProvider, extractor::path::ApiPath, server_error, state::ApiState,
};

use super::{ContactError, ContactErrorType};

/// Deletes a contact. Responds with an empty body.
#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    tag = "contact",
    params(("id" = String, Path, description = "The contact id")),
    responses(
        (status = 200, description = "Contact deleted"),
        (status = 404, description = "Contact not found"),
    )
)]
#[tracing::instrument(name = "delete_contact", skip_all)]
pub async fn delete_contact(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<String>,
) -> Result<StatusCode, ContactError> {
    let deleted = state
        .store()
        .delete(&id)
        .await
        .map_err(server_error!(state))?;

    if !deleted {
        tracing::debug!(%id, "Contact not found");

        return Err(ContactError::new(
            state.error_verbosity(),
            ContactErrorType::NotFound { id },
        ));
    }

    tracing::info!(%id, "Contact deleted");

    Ok(StatusCode::OK)
}
