use super::types::{request, response};
use crate::{
    types::Context,
    utils::{storage, vision},
};
use reqwest::Url;
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload
        .validate()
        .map_err(response::Error::InvalidPayload)?;

    let transformation = storage::Transformation::for_video(payload.media_type.is_video());

    let uploaded = storage::upload_file(
        ctx.storage.clone(),
        payload.media_data_uri.clone(),
        transformation,
    )
    .await
    .map_err(|err| response::Error::FailedToUploadMedia(err.message()))?;

    if Url::parse(&uploaded.url).is_err() {
        return Err(response::Error::UploadReturnedNoUrl);
    }

    let dominant_color = match payload.media_type {
        request::MediaType::Image => {
            match vision::extract_dominant_color(ctx.vision.clone(), &payload.media_data_uri).await
            {
                Ok(color) => Some(color),
                Err(err) => {
                    tracing::warn!("Failed to extract a dominant color: {:?}", err);
                    None
                }
            }
        }
        request::MediaType::Video => None,
    };

    Ok(response::Success::ProcessedMedia(response::Body::assemble(
        uploaded,
        dominant_color,
    )))
}

#[cfg(test)]
mod tests {
    use super::super::types::response;
    use crate::utils::{storage, vision};
    use serde_json::json;

    #[test]
    fn an_uploaded_image_with_a_color_assembles_the_full_result() {
        let uploaded =
            storage::parse_upload_response(r#"{"url": "https://cdn.example/x.png"}"#).unwrap();

        let model_response = json!({
            "candidates": [{
                "content": { "parts": [{ "text": r##"{"dominantColor": "#1A2B3C"}"## }] }
            }]
        })
        .to_string();
        let color = vision::parse_model_response(&model_response).ok();

        let body = response::Body::assemble(uploaded, color);

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "mediaUrl": "https://cdn.example/x.png",
                "dominantColor": "#1A2B3C"
            })
        );
    }

    #[test]
    fn an_uploaded_video_never_carries_a_color() {
        let uploaded = storage::parse_upload_response(
            r#"{"url": "https://cdn.example/x.mp4", "thumbnailUrl": "https://cdn.example/x.jpg"}"#,
        )
        .unwrap();

        let body = response::Body::assemble(uploaded, None);

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "mediaUrl": "https://cdn.example/x.mp4",
                "thumbnailUrl": "https://cdn.example/x.jpg"
            })
        );
    }

    #[test]
    fn a_failed_color_extraction_still_yields_a_result() {
        let uploaded =
            storage::parse_upload_response(r#"{"url": "https://cdn.example/x.png"}"#).unwrap();

        let color = vision::parse_model_response("model unavailable").ok();
        assert!(color.is_none());

        let body = response::Body::assemble(uploaded, color);

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "mediaUrl": "https://cdn.example/x.png" })
        );
    }
}
