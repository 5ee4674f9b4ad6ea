use tracing_subscriber::EnvFilter;
use twilio_sms::{Credentials, MessageFilter, TwilioClient, TwilioError};

#[tokio::main]
async fn main() -> Result<(), TwilioError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let mut filter = MessageFilter::new().page_size(20);
    if let Ok(to) = std::env::var("TWILIO_TO") {
        filter = filter.to(to);
    }
    if let Ok(date) = std::env::var("TWILIO_DATE_SENT") {
        filter = filter.date_sent(date);
    }

    let client = TwilioClient::new(Credentials::from_env()?);
    let mut page = client.list_messages(&filter).await?;
    let mut pages = 1;

    loop {
        for record in &page.messages {
            println!(
                "{} {} {} -> {}: {}",
                record.sid,
                record.status.as_str(),
                record.from,
                record.to,
                record.body
            );
        }

        if pages >= 3 {
            break;
        }
        match client.next_page(&page).await? {
            Some(next) => {
                page = next;
                pages += 1;
            }
            None => break,
        }
    }

    Ok(())
}
