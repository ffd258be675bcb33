//! Signed upload URLs for build and preview artifacts

use serde::{Deserialize, Serialize};

use crate::{ClientResult, UsageClient};

/// Storage an artifact is uploaded to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadType {
    Build,
    Preview,
}

/// One file to upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFile {
    pub key: String,
    pub content_type: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignedUrlRequest<'a> {
    upload_type: UploadType,
    key: &'a str,
    content_type: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignedUrlsRequest<'a> {
    upload_type: UploadType,
    files: &'a [UploadFile],
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignedUrlResponse {
    signed_url: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignedUrlsResponse {
    signed_urls: Vec<String>,
}

impl UsageClient {
    /// Pre-signed URL to PUT one file to
    pub async fn get_signed_url(
        &self,
        upload_type: UploadType,
        key: &str,
        content_type: &str,
    ) -> ClientResult<String> {
        let body = SignedUrlRequest {
            upload_type,
            key,
            content_type,
        };
        let response: SignedUrlResponse = self
            .post("/upload-options/signed-url", &[], &body, None)
            .await?;
        Ok(response.signed_url)
    }

    /// Pre-signed URLs for several files, in the order of `files`
    pub async fn get_signed_urls(
        &self,
        upload_type: UploadType,
        files: &[UploadFile],
    ) -> ClientResult<Vec<String>> {
        let body = SignedUrlsRequest { upload_type, files };
        let response: SignedUrlsResponse = self
            .post("/upload-options/signed-url", &[], &body, None)
            .await?;
        Ok(response.signed_urls)
    }
}
