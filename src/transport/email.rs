use serde::Serialize;
use serde_json::Value;

use crate::domain::{CampaignId, CreateEmailCampaign, DomainId};

pub const CAMPAIGNS_PATH: [&str; 1] = ["campaigns"];

const EMAIL_CHANNEL: &str = "email";

#[derive(Debug, Serialize)]
struct CreateCampaignJsonRequest<'a> {
    name: &'a str,
    channel: &'static str,
    subject: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    html_body: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_body: Option<&'a str>,
    contact_list_id: &'a str,
    sending_domain_id: &'a str,
    status: &'a str,
    // Sent as `null` when unscheduled.
    scheduled_at: Option<&'a str>,
}

pub fn encode_create_campaign_json(
    request: &CreateEmailCampaign,
) -> Result<Value, serde_json::Error> {
    serde_json::to_value(CreateCampaignJsonRequest {
        name: &request.name,
        channel: EMAIL_CHANNEL,
        subject: &request.subject,
        html_body: request.html_body.as_deref(),
        text_body: request.text_body.as_deref(),
        contact_list_id: &request.contact_list_id,
        sending_domain_id: &request.sending_domain_id,
        status: &request.status,
        scheduled_at: request.scheduled_at.as_deref(),
    })
}

pub fn start_campaign_path(campaign_id: &CampaignId) -> [&str; 3] {
    ["campaigns", campaign_id.as_str(), "start"]
}

pub fn domain_status_path(domain_id: &DomainId) -> [&str; 2] {
    ["domains", domain_id.as_str()]
}
