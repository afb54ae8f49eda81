use super::types::{request, response};
use crate::{types::Context, utils::storage};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload
        .validate()
        .map_err(response::Error::InvalidPayload)?;

    let transformation = storage::Transformation::for_video(payload.is_video.unwrap_or(false));

    storage::upload_file(ctx.storage.clone(), payload.media_data_uri, transformation)
        .await
        .map(|media| response::Success::UploadedMedia(media.into()))
        .map_err(|err| response::Error::FailedToUploadMedia(err.message()))
}
