use crate::common::error::ServiceResult;
use crate::settings::AppSettings;
use discord_webhook2::message::Message;
use discord_webhook2::webhook::DiscordWebhook;
use iso8061_timestamp::Timestamp;

const INFO_COLOR: u32 = 0x2e86de;
const ALERT_COLOR: u32 = 0xe74c3c;

pub async fn info(title: &str, description: &str) -> ServiceResult<()> {
    send(title, description, INFO_COLOR).await
}

pub async fn alert(title: &str, description: &str) -> ServiceResult<()> {
    send(title, description, ALERT_COLOR).await
}

pub async fn send(title: &str, description: &str, color: u32) -> ServiceResult<()> {
    let settings = AppSettings::get();
    let Some(webhook_url) = &settings.discord_webhook_url else {
        tracing::warn!(title, description, "Discord webhook url not set");
        return Ok(());
    };

    let webhook = DiscordWebhook::new(webhook_url)?;
    webhook
        .send(&Message::new(|message| {
            message.embed(|embed| {
                embed
                    .description(description)
                    .author(|author| author.name(title))
                    .color(color)
                    .footer(|footer| footer.text("gestloc-service"))
                    .timestamp(Timestamp::now_utc())
            })
        }))
        .await?;

    Ok(())
}
