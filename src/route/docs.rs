use axum::Router;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::types::contact::{Contact, ContactFields};

use super::contacts;

/// Mount point of the Swagger UI.
pub const SWAGGER_UI_PATH: &str = "/api-doc";
/// Location of the generated OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
pub const REDOC_PATH: &str = "/redoc";
pub const RAPIDOC_PATH: &str = "/rapidoc";

#[derive(OpenApi)]
#[openapi(
    info(title = "contacts-api", version = "1.0.0"),
    paths(
        contacts::list_contacts::list_contacts,
        contacts::get_contact::get_contact,
        contacts::create_contact::create_contact,
        contacts::update_contact::update_contact,
        contacts::delete_contact::delete_contact,
    ),
    components(schemas(Contact, ContactFields)),
    tags((name = "contact", description = "Contact management"))
)]
pub struct ApiDoc;

/// Serves the OpenAPI document together with Swagger UI, ReDoc and RapiDoc.
pub fn app() -> Router {
    Router::new()
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .merge(Redoc::with_url(REDOC_PATH, ApiDoc::openapi()))
        .merge(RapiDoc::new(OPENAPI_JSON_PATH).path(RAPIDOC_PATH))
}
