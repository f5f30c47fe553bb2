//! Data Transfer Objects - request types for the API.

use serde::Deserialize;

/// Body of a create or update request.
///
/// Only the caller-editable fields are read. Server-managed fields sent by the
/// client (`id`, `createdDate`, `modifiedDate`) are ignored, and a missing
/// field decodes as `None`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub post_content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}
