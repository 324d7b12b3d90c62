use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

pub type ServiceResult<T> = Result<T, AppError>;
pub type ServiceResponse<T> = ServiceResult<Json<T>>;

#[track_caller]
pub fn unexpected<T, E: Into<anyhow::Error>>(e: E) -> ServiceResult<T> {
    let caller = std::panic::Location::caller();
    error!("An unexpected error has occurred at {caller}: {}", e.into());
    Err(AppError::Unexpected)
}

#[derive(Debug)]
pub enum AppError {
    Unexpected,
    Unauthorized,
    DecodingRequestFailed,

    SessionsInvalidCredentials,
    SessionsLoginForbidden,

    UsersNotFound,
    UsersEmailTaken,

    BuildingsNotFound,

    ApartmentsNotFound,
    ApartmentsNotVacant,

    LeasesNotFound,
    LeasesAlreadyTerminated,

    ConversationsNotFound,

    MessagesEmpty,
    MessagesTooLong,

    AttachmentsUploadFailed,
    AttachmentsTooLarge,

    IncidentsNotFound,

    DocumentsNotFound,

    ApplicationsNotFound,
    ApplicationsAlreadyReviewed,
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    #[track_caller]
    fn from(e: E) -> Self {
        unexpected::<(), E>(e).unwrap_err()
    }
}

impl AppError {
    pub const fn code(&self) -> &'static str {
        match self {
            AppError::Unexpected => "unexpected",
            AppError::Unauthorized => "unauthorized",
            AppError::DecodingRequestFailed => "decoding_request_failed",

            AppError::SessionsInvalidCredentials => "sessions.invalid_credentials",
            AppError::SessionsLoginForbidden => "sessions.login_forbidden",

            AppError::UsersNotFound => "users.not_found",
            AppError::UsersEmailTaken => "users.email_taken",

            AppError::BuildingsNotFound => "buildings.not_found",

            AppError::ApartmentsNotFound => "apartments.not_found",
            AppError::ApartmentsNotVacant => "apartments.not_vacant",

            AppError::LeasesNotFound => "leases.not_found",
            AppError::LeasesAlreadyTerminated => "leases.already_terminated",

            AppError::ConversationsNotFound => "conversations.not_found",

            AppError::MessagesEmpty => "messages.empty",
            AppError::MessagesTooLong => "messages.too_long",

            AppError::AttachmentsUploadFailed => "attachments.upload_failed",
            AppError::AttachmentsTooLarge => "attachments.too_large",

            AppError::IncidentsNotFound => "incidents.not_found",

            AppError::DocumentsNotFound => "documents.not_found",

            AppError::ApplicationsNotFound => "applications.not_found",
            AppError::ApplicationsAlreadyReviewed => "applications.already_reviewed",
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            AppError::Unexpected => "An unexpected error has occurred.",
            AppError::Unauthorized => "You are not authorized to perform this action.",
            AppError::DecodingRequestFailed => "Failed to decode request",

            AppError::SessionsInvalidCredentials => {
                "You have entered an invalid email or password."
            }
            AppError::SessionsLoginForbidden => "Your account is not allowed to log in.",

            AppError::UsersNotFound => "This user does not exist.",
            AppError::UsersEmailTaken => "An account with this email already exists.",

            AppError::BuildingsNotFound => "This building does not exist.",

            AppError::ApartmentsNotFound => "This apartment does not exist.",
            AppError::ApartmentsNotVacant => "This apartment is not vacant.",

            AppError::LeasesNotFound => "This lease does not exist.",
            AppError::LeasesAlreadyTerminated => "This lease has already been terminated.",

            AppError::ConversationsNotFound => "This conversation does not exist.",

            AppError::MessagesEmpty => {
                "A message needs either text content or at least one attachment."
            }
            AppError::MessagesTooLong => "Your message was too long. It has not been sent.",

            AppError::AttachmentsUploadFailed => {
                "An attachment could not be uploaded. Please try again."
            }
            AppError::AttachmentsTooLarge => "One of the attachments exceeds the size limit.",

            AppError::IncidentsNotFound => "This incident does not exist.",

            AppError::DocumentsNotFound => "This document does not exist.",

            AppError::ApplicationsNotFound => "This application does not exist.",
            AppError::ApplicationsAlreadyReviewed => {
                "This application has already been reviewed."
            }
        }
    }

    pub const fn http_status_code(&self) -> StatusCode {
        match self {
            AppError::DecodingRequestFailed
            | AppError::MessagesEmpty
            | AppError::MessagesTooLong
            | AppError::AttachmentsTooLarge => StatusCode::BAD_REQUEST,

            AppError::Unauthorized | AppError::SessionsInvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }

            AppError::SessionsLoginForbidden => StatusCode::FORBIDDEN,

            AppError::UsersNotFound
            | AppError::BuildingsNotFound
            | AppError::ApartmentsNotFound
            | AppError::LeasesNotFound
            | AppError::ConversationsNotFound
            | AppError::IncidentsNotFound
            | AppError::DocumentsNotFound
            | AppError::ApplicationsNotFound => StatusCode::NOT_FOUND,

            AppError::UsersEmailTaken
            | AppError::ApartmentsNotVacant
            | AppError::LeasesAlreadyTerminated
            | AppError::ApplicationsAlreadyReviewed => StatusCode::CONFLICT,

            AppError::AttachmentsUploadFailed => StatusCode::BAD_GATEWAY,

            AppError::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub const fn response_parts(&self) -> (StatusCode, Json<ErrorResponse>) {
        let status = self.http_status_code();
        let response = ErrorResponse {
            code: self.code(),
            message: self.message(),
        };
        (status, Json(response))
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.response_parts().into_response()
    }
}
