use std::io;

use stackverify::client::StackVerifyClientBuilder;
use stackverify::{Recipient, SendSms};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let phone = std::env::var("STACKVERIFY_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "STACKVERIFY_PHONE environment variable is required",
        )
    })?;
    let sender_id =
        std::env::var("STACKVERIFY_SENDER_ID").unwrap_or_else(|_| "StackVerify".to_owned());
    let message = std::env::var("STACKVERIFY_MESSAGE")
        .unwrap_or_else(|_| "Hello from the stackverify demo.".to_owned());

    // Reads STACKVERIFY_API_KEY and STACKVERIFY_BASE_URL.
    let client = StackVerifyClientBuilder::from_env().build()?;
    println!("mode: {}", client.mode());

    let request = SendSms::text(vec![Recipient::new(phone)?], sender_id, message);
    let response = client.send_sms(request).await?;
    println!("response: {}", response.into_json());

    Ok(())
}
