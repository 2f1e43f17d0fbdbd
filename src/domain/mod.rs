//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{CreateEmailCampaign, DEFAULT_CAMPAIGN_STATUS, SendSms};
pub use response::{ApiError, ResponseBody};
pub use validation::ValidationError;
pub use value::{
    ApiKey, BaseUrl, CampaignId, DEFAULT_BASE_URL, DomainId, MessageId, Mode, PhoneNumber,
    Recipient,
};
