use axum::http::{HeaderMap, StatusCode};
use serde::Serialize;

use crate::error::{ResourceError, ResourceErrorProvider};

pub mod app;
pub mod create_contact;
pub mod delete_contact;
pub mod get_contact;
pub mod list_contacts;
pub mod update_contact;


/// Resource path of the contact collection.
pub const CONTACTS_PATH: &str = "/api/contacts";
/// Resource path of a single contact.
pub const CONTACT_PATH: &str = "/api/contacts/:id";

#[derive(Debug, Serialize)]
#[serde(tag = "error_type")]
pub enum ContactErrorType {
    NotFound {
        #[serde(skip)]
        id: String,
    },
}

#[derive(Debug, Serialize)]
pub struct ContactErrorContext {
    pub reason: String,
}

impl ResourceErrorProvider for ContactErrorType {
    type Context = ContactErrorContext;

    fn headers(&self) -> Option<HeaderMap> {
        None
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ContactErrorType::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ContactErrorType::NotFound { .. } => "Contact not found",
        }
    }

    fn context(&self) -> Self::Context {
        match self {
            ContactErrorType::NotFound { id } => ContactErrorContext {
                reason: format!("Contact with id {id} not found"),
            },
        }
    }
}

pub type ContactError = ResourceError<ContactErrorType>;
