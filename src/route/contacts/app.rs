use axum::{routing::get, Router};

use crate::state::ApiState;

use super::{CONTACTS_PATH, CONTACT_PATH};

pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new()
        .route(
            CONTACTS_PATH,
            get(super::list_contacts::list_contacts).post(super::create_contact::create_contact),
        )
        .route(
            CONTACT_PATH,
            get(super::get_contact::get_contact)
                .put(super::update_contact::update_contact)
                .delete(super::delete_contact::delete_contact),
        )
}
