use crate::domain::validation::ValidationError;
use crate::domain::value::Recipient;

/// Campaign status used when the caller does not pick one.
pub const DEFAULT_CAMPAIGN_STATUS: &str = "draft";

#[derive(Debug, Clone, Default)]
/// Payload for `v1/sms/send`.
///
/// Either `body` or `template_id` must be present; `sender_id` is always required.
/// Blank strings count as absent.
pub struct SendSms {
    pub recipients: Vec<Recipient>,
    pub body: Option<String>,
    pub sender_id: String,
    pub template_id: Option<String>,
    /// Passed through verbatim (the API expects an ISO-8601 timestamp).
    pub schedule_at: Option<String>,
}

impl SendSms {
    pub const BODY_FIELD: &'static str = "body";
    pub const SENDER_ID_FIELD: &'static str = "sender_id";
    pub const TEMPLATE_ID_FIELD: &'static str = "templateId";

    /// Plain-text message to `recipients` from `sender_id`.
    pub fn text(
        recipients: Vec<Recipient>,
        sender_id: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipients,
            body: Some(body.into()),
            sender_id: sender_id.into(),
            ..Default::default()
        }
    }

    /// Templated message to `recipients` from `sender_id`.
    pub fn template(
        recipients: Vec<Recipient>,
        sender_id: impl Into<String>,
        template_id: impl Into<String>,
    ) -> Self {
        Self {
            recipients,
            template_id: Some(template_id.into()),
            sender_id: sender_id.into(),
            ..Default::default()
        }
    }

    /// Schedule delivery instead of sending immediately.
    pub fn schedule_at(mut self, at: impl Into<String>) -> Self {
        self.schedule_at = Some(at.into());
        self
    }

    /// Check required fields in order: recipients, body/template, sender id.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.recipients.is_empty() {
            return Err(ValidationError::Empty {
                field: Recipient::FIELD,
            });
        }
        if is_absent(self.body.as_deref()) && is_absent(self.template_id.as_deref()) {
            return Err(ValidationError::MissingContent {
                fields: [Self::BODY_FIELD, Self::TEMPLATE_ID_FIELD],
            });
        }
        if is_blank(&self.sender_id) {
            return Err(ValidationError::Empty {
                field: Self::SENDER_ID_FIELD,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
/// Payload for `campaigns`. The channel is always `email`.
pub struct CreateEmailCampaign {
    pub name: String,
    pub subject: String,
    pub html_body: Option<String>,
    pub text_body: Option<String>,
    pub contact_list_id: String,
    pub sending_domain_id: String,
    /// Defaults to [`DEFAULT_CAMPAIGN_STATUS`].
    pub status: String,
    pub scheduled_at: Option<String>,
}

impl Default for CreateEmailCampaign {
    fn default() -> Self {
        Self {
            name: String::new(),
            subject: String::new(),
            html_body: None,
            text_body: None,
            contact_list_id: String::new(),
            sending_domain_id: String::new(),
            status: DEFAULT_CAMPAIGN_STATUS.to_owned(),
            scheduled_at: None,
        }
    }
}

impl CreateEmailCampaign {
    pub const NAME_FIELD: &'static str = "name";
    pub const SUBJECT_FIELD: &'static str = "subject";
    pub const CONTACT_LIST_ID_FIELD: &'static str = "contact_list_id";
    pub const SENDING_DOMAIN_ID_FIELD: &'static str = "sending_domain_id";

    /// Draft campaign with all required fields set.
    pub fn new(
        name: impl Into<String>,
        subject: impl Into<String>,
        contact_list_id: impl Into<String>,
        sending_domain_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            subject: subject.into(),
            contact_list_id: contact_list_id.into(),
            sending_domain_id: sending_domain_id.into(),
            ..Default::default()
        }
    }

    pub fn html_body(mut self, html: impl Into<String>) -> Self {
        self.html_body = Some(html.into());
        self
    }

    pub fn text_body(mut self, text: impl Into<String>) -> Self {
        self.text_body = Some(text.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn scheduled_at(mut self, at: impl Into<String>) -> Self {
        self.scheduled_at = Some(at.into());
        self
    }

    /// Report the first missing required field, in declaration order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            (Self::NAME_FIELD, &self.name),
            (Self::SUBJECT_FIELD, &self.subject),
            (Self::CONTACT_LIST_ID_FIELD, &self.contact_list_id),
            (Self::SENDING_DOMAIN_ID_FIELD, &self.sending_domain_id),
        ];
        match required.into_iter().find(|(_, value)| is_blank(value)) {
            Some((field, _)) => Err(ValidationError::Empty { field }),
            None => Ok(()),
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn is_absent(value: Option<&str>) -> bool {
    value.is_none_or(is_blank)
}
