pub mod request {
    use crate::utils::validation::validate_media_data_uri;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "lowercase")]
    pub enum MediaType {
        Image,
        Video,
    }

    impl MediaType {
        pub fn is_video(&self) -> bool {
            matches!(self, Self::Video)
        }
    }

    #[derive(Deserialize, Validate)]
    #[serde(rename_all = "camelCase")]
    pub struct Payload {
        #[validate(custom(code = "INVALID_MEDIA_DATA_URI", function = "validate_media_data_uri"))]
        pub media_data_uri: String,
        pub media_type: MediaType,
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn media_types_deserialize_from_lowercase() {
            let payload = serde_json::from_str::<Payload>(
                r#"{"mediaDataUri": "data:image/png;base64,AAAA", "mediaType": "image"}"#,
            )
            .unwrap();
            assert_eq!(payload.media_type, MediaType::Image);

            let payload = serde_json::from_str::<Payload>(
                r#"{"mediaDataUri": "data:video/mp4;base64,AAAA", "mediaType": "video"}"#,
            )
            .unwrap();
            assert_eq!(payload.media_type, MediaType::Video);
        }

        #[test]
        fn an_unknown_media_type_is_rejected() {
            assert!(serde_json::from_str::<Payload>(
                r#"{"mediaDataUri": "data:image/gif;base64,AAAA", "mediaType": "gif"}"#,
            )
            .is_err());
        }

        #[test]
        fn only_videos_report_as_video() {
            assert!(MediaType::Video.is_video());
            assert!(!MediaType::Image.is_video());
        }

        #[test]
        fn a_malformed_data_uri_fails_validation() {
            let payload = serde_json::from_str::<Payload>(
                r#"{"mediaDataUri": "nope", "mediaType": "image"}"#,
            )
            .unwrap();

            assert!(payload.validate().is_err());
        }
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
        #[serde(skip_serializing_if = "Option::is_none")]
        pub dominant_color: Option<String>,
    }

    impl Body {
        pub fn assemble(media: UploadedMedia, dominant_color: Option<String>) -> Self {
            Self {
                media_url: media.url,
                thumbnail_url: media.thumbnail_url,
                dominant_color,
            }
        }
    }

    pub enum Success {
        ProcessedMedia(Body),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ProcessedMedia(body) => (StatusCode::OK, Json(body)).into_response(),
            }
        }
    }

    pub enum Error {
        InvalidPayload(ValidationErrors),
        FailedToUploadMedia(String),
        UploadReturnedNoUrl,
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
                Self::UploadReturnedNoUrl => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Media upload failed to return a URL" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
