use crate::types::VisionContext;
use crate::utils::validation;
use regex::Regex;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};

const DOMINANT_COLOR_PROMPT: &str = "Look at the supplied image and pick the single dominant \
color that would work best as a background behind it. Answer with a JSON object holding one \
field, dominantColor, containing that color as a six digit hex string like #RRGGBB.";

#[derive(Debug)]
pub enum Error {
    InvalidMediaDataUri,
    RequestFailed,
    MalformedModelOutput,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ColorPayload {
    dominant_color: String,
}

pub fn is_hex_color(value: &str) -> bool {
    Regex::new(r"^#[0-9a-fA-F]{6}$")
        .expect("Invalid hex color pattern")
        .is_match(value)
}

fn build_request_body(mime_type: &str, payload: &str) -> Value {
    json!({
        "contents": [{
            "parts": [
                { "text": DOMINANT_COLOR_PROMPT },
                { "inlineData": { "mimeType": mime_type, "data": payload } }
            ]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "dominantColor": {
                        "type": "STRING",
                        "description": "The dominant color of the image as a hex string"
                    }
                },
                "required": ["dominantColor"]
            }
        }
    })
}

pub fn parse_model_response(data: &str) -> Result<String, Error> {
    let value = serde_json::from_str::<Value>(data).map_err(|err| {
        tracing::warn!("Failed to deserialize model response: {:?}", err);
        Error::MalformedModelOutput
    })?;

    let text = value
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            tracing::warn!("Model response carried no candidate text: {}", data);
            Error::MalformedModelOutput
        })?;

    let payload = serde_json::from_str::<ColorPayload>(text).map_err(|err| {
        tracing::warn!("Model output did not match the color schema: {:?}", err);
        Error::MalformedModelOutput
    })?;

    if !is_hex_color(&payload.dominant_color) {
        tracing::warn!(
            "Model returned a value that is not a hex color: {}",
            payload.dominant_color
        );
        return Err(Error::MalformedModelOutput);
    }

    Ok(payload.dominant_color)
}

/// Asks the generative model for the dominant color of an image. Callers are
/// expected to treat any error as "no color available" rather than aborting.
pub async fn extract_dominant_color(
    cfg: VisionContext,
    media_data_uri: &str,
) -> Result<String, Error> {
    let data_uri =
        validation::parse_data_uri(media_data_uri).ok_or(Error::InvalidMediaDataUri)?;

    let body = build_request_body(data_uri.mime_type, data_uri.payload);

    let endpoint = format!("{}/models/{}:generateContent", cfg.api_endpoint, cfg.model);

    let res = Client::new()
        .post(endpoint)
        .header("x-goog-api-key", cfg.api_key)
        .json(&body)
        .send()
        .await
        .map_err(|err| {
            tracing::warn!("Error occurred while calling the vision model: {:?}", err);
            Error::RequestFailed
        })?;

    let status = res.status();

    let data = res.text().await.map_err(|err| {
        tracing::warn!(
            "Error occurred while reading the vision model response: {:?}",
            err
        );
        Error::RequestFailed
    })?;

    if status != StatusCode::OK {
        tracing::warn!("Vision model rejected the request: {}", data);
        return Err(Error::RequestFailed);
    }

    parse_model_response(&data)
}
