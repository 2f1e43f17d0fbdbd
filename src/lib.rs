//! Typed Rust client for the StackVerify messaging API.
//!
//! The crate is split into a domain layer of validated types, a transport layer
//! for the JSON wire format, and a small client layer that owns the HTTP
//! transport and runs one request per call.
//!
//! ```rust,no_run
//! use stackverify::{CreateEmailCampaign, Recipient, SendSms, StackVerifyClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), stackverify::StackVerifyError> {
//!     let client = StackVerifyClient::new("sk_test_...")?;
//!
//!     let to = vec![Recipient::new("+15550001111")?];
//!     let sent = client.send_sms(SendSms::text(to, "ACME", "hello")).await?;
//!     println!("{:?}", sent.as_json());
//!
//!     let campaign = CreateEmailCampaign::new("Launch", "Hello", "cl_1", "sd_1");
//!     let _created = client.create_email_campaign(campaign).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    RequestOptions, StackVerifyClient, StackVerifyClientBuilder, StackVerifyError,
};
pub use domain::{
    ApiError, ApiKey, BaseUrl, CreateEmailCampaign, Mode, PhoneNumber, Recipient, ResponseBody,
    SendSms, ValidationError,
};
