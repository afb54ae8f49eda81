pub mod request {
    use crate::utils::validation::validate_media_data_uri;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    #[serde(rename_all = "camelCase")]
    pub struct Payload {
        #[validate(custom(code = "INVALID_MEDIA_DATA_URI", function = "validate_media_data_uri"))]
        pub media_data_uri: String,
        pub is_video: Option<bool>,
    }

}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde::Serialize;
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::utils::{storage::UploadedMedia, validation};

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Body {
        pub media_url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub thumbnail_url: Option<String>,
    }

    impl From<UploadedMedia> for Body {
        fn from(media: UploadedMedia) -> Self {
            Self {
                media_url: media.url,
                thumbnail_url: media.thumbnail_url,
            }
        }
    }

    pub enum Success {
        UploadedMedia(Body),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UploadedMedia(body) => (StatusCode::OK, Json(body)).into_response(),
            }
        }
    }

    pub enum Error {
        InvalidPayload(ValidationErrors),
        FailedToUploadMedia(String),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidPayload(errors) => {
                    validation::into_response(errors).into_response()
                }
                Self::FailedToUploadMedia(message) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": message })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;

}
