use std::io;

use tracing_subscriber::EnvFilter;
use twilio_sms::{Address, Credentials, MessageBody, SendMessage, SendOptions, TwilioClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let from = required_env("TWILIO_FROM")?;
    let to = required_env("TWILIO_TO")?;
    let status_callback = std::env::var("TWILIO_STATUS_CALLBACK").unwrap_or_default();

    let client = TwilioClient::new(Credentials::from_env()?);
    let request = SendMessage::new(
        Address::sender(from)?,
        Address::recipient(to)?,
        MessageBody::new("Hello from twilio-sms")?,
        SendOptions::from_raw(&status_callback, "")?,
    );
    let record = client.send_message(request).await?;

    println!(
        "sid: {}, status: {}, date_created: {:?}",
        record.sid,
        record.status.as_str(),
        record.date_created
    );

    Ok(())
}

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}
