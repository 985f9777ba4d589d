use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A stored contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Identifier assigned by the store on creation.
    #[schema(example = "5f1c2a3e-8b7d-4c1e-9a0b-2d3e4f5a6b7c")]
    pub id: String,
    /// Contact name
    #[schema(example = "Juan")]
    pub first_name: String,
    /// Contact lastname
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Perez")]
    pub last_name: Option<String>,
    /// Contact email
    #[schema(example = "juan@gmail.com")]
    pub email: String,
    /// Contact favorite color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "blue")]
    pub favorite_color: Option<String>,
    /// Contact birthday
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "01-02-2024")]
    pub birthday: Option<String>,
}

impl IntoResponse for Contact {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Everything a client may set on a contact.
///
/// Used as the body of both create and update. An update replaces all fields,
/// so an omitted optional field is cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactFields {
    #[validate(length(min = 1, message = "Must not be empty"))]
    #[schema(example = "Juan")]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Perez")]
    pub last_name: Option<String>,
    #[validate(length(min = 1, message = "Must not be empty"))]
    #[schema(example = "juan@gmail.com")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "blue")]
    pub favorite_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "01-02-2024")]
    pub birthday: Option<String>,
}

impl ContactFields {
    pub fn into_contact(self, id: String) -> Contact {
        let ContactFields {
            first_name,
            last_name,
            email,
            favorite_color,
            birthday,
        } = self;

        Contact {
            id,
            first_name,
            last_name,
            email,
            favorite_color,
            birthday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn juan() -> ContactFields {
        ContactFields {
            first_name: "Juan".to_string(),
            last_name: None,
            email: "juan@gmail.com".to_string(),
            favorite_color: None,
            birthday: None,
        }
    }

    #[test]
    fn serializes_camel_case_and_skips_absent_fields() {
        let contact = juan().into_contact("abc".to_string());
        let json = serde_json::to_value(&contact).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "abc",
                "firstName": "Juan",
                "email": "juan@gmail.com",
            })
        );
    }

    #[test]
    fn missing_optional_fields_deserialize_as_none() {
        let fields: ContactFields =
            serde_json::from_str(r#"{"firstName":"Juan","email":"juan@gmail.com"}"#).unwrap();

        assert_eq!(fields, juan());
    }

    #[test]
    fn empty_required_fields_fail_validation() {
        let mut fields = juan();
        fields.first_name.clear();
        fields.email.clear();

        let errors = fields.validate().unwrap_err();

        assert_eq!(errors.field_errors().len(), 2);
    }
}
