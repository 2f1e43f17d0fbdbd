//! Transport layer: JSON wire format, endpoint paths and response normalization.

mod email;
mod response;
mod sms;

pub use email::{
    CAMPAIGNS_PATH, domain_status_path, encode_create_campaign_json, start_campaign_path,
};
pub use response::{decode_api_error, decode_response_body};
pub use sms::{SEND_SMS_PATH, encode_send_sms_json, sms_status_path};
