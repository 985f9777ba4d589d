use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{error::ApiError, server_error, state::ApiState, types::contact::Contact};

#[derive(Debug)]
pub struct ListContactsResponse(pub Vec<Contact>);

impl IntoResponse for ListContactsResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}

/// Returns all contacts.
#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "contact",
    responses(
        (status = 200, description = "All contacts", body = [Contact]),
        (status = 500, description = "The contact store failed"),
    )
)]
#[tracing::instrument(name = "list_contacts", skip_all)]
pub async fn list_contacts(State(state): State<ApiState>) -> Result<ListContactsResponse, ApiError> {
    let contacts = state.store().list().await.map_err(server_error!(state))?;

    tracing::debug!(count = contacts.len(), "Listed contacts");

    Ok(ListContactsResponse(contacts))
}
