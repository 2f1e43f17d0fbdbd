use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use phonenumber::country;
use url::Url;

use crate::domain::validation::ValidationError;

/// Default StackVerify API root.
pub const DEFAULT_BASE_URL: &str = "https://api.stackverify.site/api";

const TEST_KEY_PREFIX: &str = "sk_test_";

/// Characters left as-is in a path segment: alphanumerics plus `-_.!~*'()`.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn non_blank(value: String, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

// Identifiers go on the wire exactly as given.
fn require_present(value: String, field: &'static str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value)
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// StackVerify secret API key, sent as a bearer token.
///
/// Invariant: non-empty after trimming. `Debug` output never contains the key.
pub struct ApiKey(String);

impl ApiKey {
    /// Configuration field name (`api_key`).
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(non_blank(value.into(), Self::FIELD)?))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Environment the key belongs to, inferred from its prefix.
    pub fn mode(&self) -> Mode {
        if self.0.starts_with(TEST_KEY_PREFIX) {
            Mode::Test
        } else {
            Mode::Live
        }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"<redacted>").finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Sandbox (`sk_test_` keys) or production.
pub enum Mode {
    Test,
    Live,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Live => "live",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// API root every endpoint path is appended to.
///
/// Invariant: an absolute `http`/`https` URL without trailing slashes.
pub struct BaseUrl {
    raw: String,
    url: Url,
}

impl BaseUrl {
    /// Configuration field name (`base_url`).
    pub const FIELD: &'static str = "base_url";

    /// Parse a base URL, stripping any trailing slashes.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = non_blank(value.into(), Self::FIELD)?;
        let raw = value.trim_end_matches('/').to_owned();

        let url = Url::parse(&raw).map_err(|err| ValidationError::InvalidUrl {
            field: Self::FIELD,
            input: value.clone(),
            reason: err.to_string(),
        })?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(ValidationError::InvalidUrl {
                field: Self::FIELD,
                input: value,
                reason: "expected an absolute http(s) URL".to_owned(),
            });
        }

        Ok(Self { raw, url })
    }

    /// The base URL as configured, minus trailing slashes.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Append a caller-supplied path. Leading slashes of `path` are dropped so the
    /// result never contains `//` at the seam.
    pub fn join_path(&self, path: &str) -> Result<Url, url::ParseError> {
        Url::parse(&format!("{}/{}", self.raw, path.trim_start_matches('/')))
    }

    /// Append path segments, percent-escaping every reserved character in each.
    pub fn join_segments(&self, segments: &[&str]) -> Url {
        let mut path = self.url.path().trim_end_matches('/').to_owned();
        for segment in segments {
            path.push('/');
            path.extend(utf8_percent_encode(segment, PATH_SEGMENT));
        }
        let mut url = self.url.clone();
        url.set_path(&path);
        url
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// SMS destination address as sent in `recipients`.
///
/// Invariant: non-empty after trimming. No normalization is applied; parse into
/// [`PhoneNumber`] and convert it for E.164 output.
pub struct Recipient(String);

impl Recipient {
    /// Wire field name (`recipients`).
    pub const FIELD: &'static str = "recipients";

    /// Create a validated (non-empty) recipient.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(non_blank(value.into(), Self::FIELD)?))
    }

    /// Trimmed value as sent to StackVerify.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for Recipient {
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality is based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input has no explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let raw = non_blank(input.into(), Recipient::FIELD)?;

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;
        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message id returned by `v1/sms/send`.
pub struct MessageId(String);

impl MessageId {
    pub const FIELD: &'static str = "messageId";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(require_present(value.into(), Self::FIELD)?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sending domain id.
pub struct DomainId(String);

impl DomainId {
    pub const FIELD: &'static str = "domainId";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(require_present(value.into(), Self::FIELD)?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Campaign id returned by `campaigns`.
pub struct CampaignId(String);

impl CampaignId {
    pub const FIELD: &'static str = "campaignId";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(require_present(value.into(), Self::FIELD)?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
