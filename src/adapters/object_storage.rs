use crate::common::error::{AppError, ServiceResult};
use crate::settings::AppSettings;
use reqwest::header::CONTENT_TYPE;
use std::sync::LazyLock;

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

fn make_object_url(base: &str, bucket: &str, key: &str) -> String {
    format!("{base}/{bucket}/{key}")
}

/// Writes one object into the storage backend. `overwrite` maps to the
/// backend's upsert header, so re-sending the same key replaces it.
pub async fn put(
    bucket: &str,
    key: &str,
    bytes: Vec<u8>,
    content_type: &str,
    overwrite: bool,
) -> ServiceResult<()> {
    let settings = AppSettings::get();
    let url = make_object_url(&settings.storage_base_url, bucket, key);
    let mut request = CLIENT
        .post(url)
        .header(CONTENT_TYPE, content_type)
        .body(bytes);
    if overwrite {
        request = request.header("x-upsert", "true");
    }
    if let Some(api_key) = &settings.storage_api_key {
        request = request.bearer_auth(api_key);
    }
    let response = request.send().await?;
    if !response.status().is_success() {
        tracing::error!(
            bucket,
            key,
            status = response.status().as_u16(),
            "Object storage rejected upload"
        );
        return Err(AppError::AttachmentsUploadFailed);
    }
    Ok(())
}

/// The publicly retrievable location for a stored key.
pub fn public_url(bucket: &str, key: &str) -> String {
    let settings = AppSettings::get();
    make_object_url(&settings.storage_public_base_url, bucket, key)
}
