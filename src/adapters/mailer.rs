use crate::common::error::{AppError, ServiceResult};
use crate::settings::AppSettings;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

#[derive(Serialize)]
struct RejectionNotice<'a> {
    to: &'a str,
    from: &'a str,
    applicant_name: &'a str,
    reason: &'a str,
}

#[derive(Deserialize)]
struct MailerResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Sends the rejection notice for a reviewed application. Callers
/// treat this as a notifier: a failure is worth logging, never worth
/// failing the review itself.
pub async fn send_rejection_notice(
    to: &str,
    applicant_name: &str,
    reason: &str,
) -> ServiceResult<()> {
    let settings = AppSettings::get();
    let (Some(base_url), Some(sender)) = (&settings.mailer_base_url, &settings.mailer_sender)
    else {
        tracing::warn!(to, "Mailer not configured, skipping rejection notice");
        return Ok(());
    };

    let url = format!("{base_url}/send");
    let notice = RejectionNotice {
        to,
        from: sender,
        applicant_name,
        reason,
    };
    let mut request = CLIENT.post(url).json(&notice);
    if let Some(api_key) = &settings.mailer_api_key {
        request = request.bearer_auth(api_key);
    }
    let response: MailerResponse = request.send().await?.json().await?;
    if let Some(error) = response.error {
        tracing::error!(to, error, "Mailer refused the rejection notice");
        return Err(AppError::Unexpected);
    }
    if response.success {
        tracing::info!(to, mail_id = ?response.id, "Rejection notice sent");
    }
    Ok(())
}
