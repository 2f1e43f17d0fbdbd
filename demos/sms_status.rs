use std::io;

use stackverify::client::StackVerifyClientBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let message_id = std::env::var("STACKVERIFY_MESSAGE_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "STACKVERIFY_MESSAGE_ID environment variable is required",
        )
    })?;

    let client = StackVerifyClientBuilder::from_env().build()?;
    match client.get_sms_status(message_id).await {
        Ok(status) => println!("status: {}", status.into_json()),
        Err(err) => match err.api_error() {
            Some(api) => println!(
                "rejected: {} (status {}, code {:?}, retry after {:?})",
                api.message, api.status, api.code, api.retry_after
            ),
            None => return Err(err.into()),
        },
    }

    Ok(())
}
