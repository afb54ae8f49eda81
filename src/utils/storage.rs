use crate::types::StorageContext;
use crate::utils::validation;
use reqwest::{multipart::Form, Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Named pre-transformation pipeline the upload service applies to derive a
/// still-frame thumbnail from an uploaded video.
const VIDEO_THUMBNAIL_PIPELINE: &str = "so-1,w-640";

const GENERIC_UPLOAD_FAILURE: &str = "Failed to upload media";

#[derive(Debug)]
pub enum Error {
    InvalidMediaDataUri,
    UploadFailed(String),
}

impl Error {
    /// Sanitized single-line message safe to surface to the caller. The raw
    /// service payload is only ever logged server-side.
    pub fn message(&self) -> String {
        match self {
            Self::InvalidMediaDataUri => {
                String::from("mediaDataUri must be a base64 data URI carrying a MIME type")
            }
            Self::UploadFailed(message) => message.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transformation {
    None,
    VideoThumbnail,
}

impl Transformation {
    pub fn for_video(is_video: bool) -> Self {
        if is_video {
            Self::VideoThumbnail
        } else {
            Self::None
        }
    }

    /// Renders the `transformation` form field, or nothing when no server-side
    /// processing is requested.
    pub fn as_field(&self) -> Option<String> {
        match self {
            Self::None => None,
            Self::VideoThumbnail => Some(json!({ "pre": VIDEO_THUMBNAIL_PIPELINE }).to_string()),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    url: Option<String>,
    thumbnail_url: Option<String>,
    metadata: Option<Value>,
}

#[derive(Serialize, Clone, Debug, Deserialize)]
pub struct UploadedMedia {
    pub url: String,
    pub thumbnail_url: Option<String>,
}

pub fn parse_upload_response(data: &str) -> Result<UploadedMedia, Error> {
    let res = serde_json::from_str::<UploadResponse>(data).map_err(|err| {
        tracing::error!("Failed to deserialize upload service response: {:?}", err);
        Error::UploadFailed(String::from(GENERIC_UPLOAD_FAILURE))
    })?;

    let url = res
        .url
        .filter(|url| Url::parse(url).is_ok())
        .ok_or_else(|| {
            tracing::error!("Upload service response carried no usable url: {}", data);
            Error::UploadFailed(String::from(GENERIC_UPLOAD_FAILURE))
        })?;

    // the service sometimes reports the thumbnail only inside its metadata
    let thumbnail_url = res.thumbnail_url.or_else(|| {
        res.metadata
            .as_ref()
            .and_then(|metadata| metadata.get("thumbnailUrl"))
            .and_then(Value::as_str)
            .map(String::from)
    });

    Ok(UploadedMedia { url, thumbnail_url })
}

pub async fn upload_file(
    cfg: StorageContext,
    media_data_uri: String,
    transformation: Transformation,
) -> Result<UploadedMedia, Error> {
    validation::parse_data_uri(&media_data_uri).ok_or(Error::InvalidMediaDataUri)?;

    let file_name = format!("upload_{}", chrono::Utc::now().timestamp_millis());

    let mut form = Form::new()
        .text("file", media_data_uri)
        .text("fileName", file_name)
        .text("useUniqueFileName", "true");

    if let Some(field) = transformation.as_field() {
        form = form.text("transformation", field);
    }

    let res = Client::new()
        .post(cfg.upload_endpoint)
        .basic_auth(cfg.public_key, Some(cfg.private_key))
        .multipart(form)
        .send()
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while calling the upload service: {:?}", err);
            Error::UploadFailed(err.to_string())
        })?;

    let status = res.status();

    let data = res.text().await.map_err(|err| {
        tracing::error!(
            "Error occurred while reading the upload service response: {:?}",
            err
        );
        Error::UploadFailed(String::from(GENERIC_UPLOAD_FAILURE))
    })?;

    if status != StatusCode::OK {
        tracing::error!("Upload service rejected the file: {}", data);
        return Err(Error::UploadFailed(String::from(GENERIC_UPLOAD_FAILURE)));
    }

    parse_upload_response(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_transformation_is_attached_for_plain_uploads() {
        assert_eq!(Transformation::for_video(false), Transformation::None);
        assert!(Transformation::None.as_field().is_none());
    }

    #[test]
    fn video_uploads_carry_the_thumbnail_pipeline() {
        let transformation = Transformation::for_video(true);

        assert_eq!(transformation, Transformation::VideoThumbnail);

        let field = transformation.as_field().unwrap();
        assert!(field.contains("\"pre\""));
        assert!(field.contains(VIDEO_THUMBNAIL_PIPELINE));
    }

    #[test]
    fn parses_a_response_with_only_a_url() {
        let media =
            parse_upload_response(r#"{"url": "https://cdn.example/x.png"}"#).unwrap();

        assert_eq!(media.url, "https://cdn.example/x.png");
        assert!(media.thumbnail_url.is_none());
    }

    #[test]
    fn parses_a_response_with_a_thumbnail() {
        let media = parse_upload_response(
            r#"{"url": "https://cdn.example/x.mp4", "thumbnailUrl": "https://cdn.example/x.jpg"}"#,
        )
        .unwrap();

        assert_eq!(media.url, "https://cdn.example/x.mp4");
        assert_eq!(media.thumbnail_url.as_deref(), Some("https://cdn.example/x.jpg"));
    }

    #[test]
    fn falls_back_to_the_metadata_thumbnail() {
        let media = parse_upload_response(
            r#"{"url": "https://cdn.example/x.mp4", "metadata": {"thumbnailUrl": "https://cdn.example/meta.jpg"}}"#,
        )
        .unwrap();

        assert_eq!(media.thumbnail_url.as_deref(), Some("https://cdn.example/meta.jpg"));
    }

    #[test]
    fn a_direct_thumbnail_wins_over_the_metadata_one() {
        let media = parse_upload_response(
            r#"{"url": "https://cdn.example/x.mp4", "thumbnailUrl": "https://cdn.example/x.jpg", "metadata": {"thumbnailUrl": "https://cdn.example/meta.jpg"}}"#,
        )
        .unwrap();

        assert_eq!(media.thumbnail_url.as_deref(), Some("https://cdn.example/x.jpg"));
    }

    #[test]
    fn a_response_without_a_url_is_an_upload_error() {
        let err = parse_upload_response(r#"{"thumbnailUrl": "https://cdn.example/x.jpg"}"#)
            .unwrap_err();

        assert_eq!(err.message(), GENERIC_UPLOAD_FAILURE);
    }

    #[test]
    fn a_response_with_an_unparseable_url_is_an_upload_error() {
        assert!(parse_upload_response(r#"{"url": "not a url"}"#).is_err());
        assert!(parse_upload_response(r#"{"url": ""}"#).is_err());
    }

    #[test]
    fn a_non_json_response_is_an_upload_error() {
        assert!(parse_upload_response("<html>502 Bad Gateway</html>").is_err());
    }
}
