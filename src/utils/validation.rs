use axum::{http::StatusCode, Json};
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use serde_json::json;
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

pub fn into_response(errors: ValidationErrors) -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({"errors": errors})))
}

pub struct DataUri<'a> {
    pub mime_type: &'a str,
    pub payload: &'a str,
}

/// Splits a `data:<mime>;base64,<payload>` string into its parts. The MIME
/// type must be present and the payload must decode as base64.
pub fn parse_data_uri(uri: &str) -> Option<DataUri<'_>> {
    let rest = uri.strip_prefix("data:")?;
    let (mime_type, payload) = rest.split_once(";base64,")?;

    if mime_type.is_empty() || !mime_type.contains('/') {
        return None;
    }

    if payload.is_empty() {
        return None;
    }

    BASE64_STANDARD.decode(payload).ok()?;

    Some(DataUri { mime_type, payload })
}

pub fn validate_media_data_uri(uri: &str) -> Result<(), ValidationError> {
    match parse_data_uri(uri) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("INVALID_MEDIA_DATA_URI").with_message(
            Cow::from("mediaDataUri must be a base64 data URI carrying a MIME type"),
        )),
    }
}
