use crate::api::RequestContext;
use crate::common::error::{AppError, ServiceResponse};
use crate::models::documents::Document;
use crate::models::messages::UploadFile;
use crate::models::sessions::Session;
use crate::usecases::documents;
use axum::Json;
use axum::extract::{Multipart, Path};

/// Multipart form: an optional `owner_user_id` and `lease_id`, plus
/// one `file` part. Without an owner the caller files it for
/// themselves.
pub async fn upload(
    ctx: RequestContext,
    session: Session,
    mut multipart: Multipart,
) -> ServiceResponse<Document> {
    let mut owner_user_id = session.user_id;
    let mut lease_id = None;
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::DecodingRequestFailed)?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("owner_user_id") => {
                let text = field
                    .text()
                    .await
                    .map_err(|_| AppError::DecodingRequestFailed)?;
                owner_user_id = text
                    .parse()
                    .map_err(|_| AppError::DecodingRequestFailed)?;
            }
            Some("lease_id") => {
                let text = field
                    .text()
                    .await
                    .map_err(|_| AppError::DecodingRequestFailed)?;
                lease_id = Some(
                    text.parse()
                        .map_err(|_| AppError::DecodingRequestFailed)?,
                );
            }
            Some("file") => {
                let name = field.file_name().unwrap_or("document").to_string();
                let mime_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| AppError::DecodingRequestFailed)?;
                file = Some(UploadFile {
                    name,
                    mime_type,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    let file = file.ok_or(AppError::DecodingRequestFailed)?;
    let document = documents::upload(
        &ctx,
        &session,
        documents::UploadDocumentArgs {
            owner_user_id,
            lease_id,
            file,
        },
    )
    .await?;
    Ok(Json(document))
}

pub async fn list_mine(ctx: RequestContext, session: Session) -> ServiceResponse<Vec<Document>> {
    let documents = documents::list_for_owner(&ctx, &session, session.user_id).await?;
    Ok(Json(documents))
}

pub async fn list_for_user(
    ctx: RequestContext,
    session: Session,
    Path(user_id): Path<i64>,
) -> ServiceResponse<Vec<Document>> {
    let documents = documents::list_for_owner(&ctx, &session, user_id).await?;
    Ok(Json(documents))
}
