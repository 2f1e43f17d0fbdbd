use std::io;

use stackverify::CreateEmailCampaign;
use stackverify::client::StackVerifyClientBuilder;

fn required(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let contact_list_id = required("STACKVERIFY_CONTACT_LIST_ID")?;
    let sending_domain_id = required("STACKVERIFY_SENDING_DOMAIN_ID")?;

    let client = StackVerifyClientBuilder::from_env().build()?;

    let domain = client.get_domain_status(sending_domain_id.as_str()).await?;
    println!("domain: {}", domain.into_json());

    let campaign = CreateEmailCampaign::new(
        "Demo campaign",
        "Hello from stackverify",
        contact_list_id,
        sending_domain_id,
    )
    .text_body("Hello!")
    .html_body("<p>Hello!</p>");
    let created = client.create_email_campaign(campaign).await?.into_json();
    println!("created: {created}");

    if std::env::var("STACKVERIFY_START").is_ok() {
        if let Some(id) = created.get("id").and_then(|id| id.as_str()) {
            let started = client.start_campaign(id).await?;
            println!("started: {}", started.into_json());
        }
    }

    Ok(())
}
