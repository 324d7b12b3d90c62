use crate::adapters::object_storage;
use crate::common::error::{AppError, ServiceResult};
use crate::entities::messages::AttachmentRecord;
use crate::models::messages::UploadFile;
use crate::settings::AppSettings;
use chrono::Utc;

/// Replaces anything outside `[A-Za-z0-9._-]` so the storage key stays
/// plain ASCII whatever the user named their file.
pub fn safe_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
            true => c,
            false => '_',
        })
        .collect()
}

pub fn make_object_key(base_path: &str, filename: &str, uploaded_millis: i64) -> String {
    format!("{base_path}/{uploaded_millis}_{}", safe_filename(filename))
}

/// Uploads the given files in order and returns one record per file,
/// in the same order. Records keep the *original* filename for display
/// while the stored key carries the sanitized one. The first storage
/// failure aborts the remaining uploads, so a partial batch is never
/// silently padded out.
pub async fn upload_many(
    base_path: &str,
    files: Vec<UploadFile>,
) -> ServiceResult<Vec<AttachmentRecord>> {
    let settings = AppSettings::get();
    let mut records = Vec::with_capacity(files.len());
    for file in files {
        if file.bytes.len() > settings.max_attachment_size {
            return Err(AppError::AttachmentsTooLarge);
        }
        let size = file.bytes.len() as u64;
        let key = make_object_key(base_path, &file.name, Utc::now().timestamp_millis());
        object_storage::put(
            &settings.storage_bucket,
            &key,
            file.bytes,
            &file.mime_type,
            true,
        )
        .await?;
        records.push(AttachmentRecord {
            name: file.name,
            url: object_storage::public_url(&settings.storage_bucket, &key),
            size,
            mime_type: file.mime_type,
        });
    }
    Ok(records)
}

pub async fn upload_for_conversation(
    conversation_id: i64,
    files: Vec<UploadFile>,
) -> ServiceResult<Vec<AttachmentRecord>> {
    upload_many(&format!("conversations/{conversation_id}"), files).await
}

pub async fn upload_for_owner(
    owner_user_id: i64,
    file: UploadFile,
) -> ServiceResult<AttachmentRecord> {
    let mut records = upload_many(&format!("documents/{owner_user_id}"), vec![file]).await?;
    // upload_many returns exactly one record per input file
    Ok(records.remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_and_accents_become_underscores() {
        assert_eq!(safe_filename("rapport final.pdf"), "rapport_final.pdf");
        assert_eq!(safe_filename("état des lieux.docx"), "_tat_des_lieux.docx");
    }

    #[test]
    fn allowed_characters_pass_through() {
        assert_eq!(safe_filename("photo-2024_03.png"), "photo-2024_03.png");
    }

    #[test]
    fn object_key_is_plain_ascii() {
        let key = make_object_key("conversations/12", "rapport final.pdf", 1_710_000_000_000);
        assert_eq!(key, "conversations/12/1710000000000_rapport_final.pdf");
        let path_part = key.split('/').next_back().unwrap();
        assert!(
            path_part
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        );
    }
}
