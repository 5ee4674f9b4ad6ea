use std::io;

use tracing_subscriber::EnvFilter;
use twilio_sms::{Credentials, MessageSid, TwilioClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let sid = std::env::var("TWILIO_MESSAGE_SID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TWILIO_MESSAGE_SID environment variable is required",
        )
    })?;

    let client = TwilioClient::new(Credentials::from_env()?);
    let record = client.get_message(&MessageSid::new(sid)?).await?;

    println!(
        "sid: {}, status: {}, to: {}, price: {:?} {:?}, date_sent: {:?}",
        record.sid,
        record.status.as_str(),
        record.to,
        record.price,
        record.price_unit,
        record.date_sent
    );

    Ok(())
}
