use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::documents::Document;
use crate::models::messages::UploadFile;
use crate::models::sessions::Session;
use crate::repositories::documents;
use crate::usecases::{attachments, users};

pub struct UploadDocumentArgs {
    pub owner_user_id: i64,
    pub lease_id: Option<i64>,
    pub file: UploadFile,
}

/// Stores a document's bytes and its metadata row. Admins can file a
/// document for any user; tenants only into their own space.
pub async fn upload<C: Context>(
    ctx: &C,
    session: &Session,
    args: UploadDocumentArgs,
) -> ServiceResult<Document> {
    if session.require_staff().is_err() && args.owner_user_id != session.user_id {
        return Err(AppError::Unauthorized);
    }
    let owner = users::fetch_one(ctx, args.owner_user_id).await?;

    let record = attachments::upload_for_owner(owner.user_id, args.file).await?;
    let document_id = documents::create(
        ctx,
        documents::CreateDocumentArgs {
            owner_user_id: owner.user_id,
            lease_id: args.lease_id,
            name: &record.name,
            url: &record.url,
            size: record.size,
            mime_type: &record.mime_type,
            uploaded_by: session.user_id,
        },
    )
    .await?;
    fetch_one(ctx, document_id as i64).await
}

pub async fn fetch_one<C: Context>(ctx: &C, document_id: i64) -> ServiceResult<Document> {
    match documents::fetch_one(ctx, document_id).await {
        Ok(document) => Ok(Document::from(document)),
        Err(sqlx::Error::RowNotFound) => Err(AppError::DocumentsNotFound),
        Err(e) => unexpected(e),
    }
}

pub async fn list_for_owner<C: Context>(
    ctx: &C,
    session: &Session,
    owner_user_id: i64,
) -> ServiceResult<Vec<Document>> {
    if session.require_staff().is_err() && owner_user_id != session.user_id {
        return Err(AppError::Unauthorized);
    }
    let entities = documents::fetch_by_owner(ctx, owner_user_id).await?;
    Ok(entities.into_iter().map(Document::from).collect())
}
