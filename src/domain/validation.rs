use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    MissingContent { fields: [&'static str; 2] },
    InvalidPhoneNumber { input: String },
    InvalidUrl {
        field: &'static str,
        input: String,
        reason: String,
    },
    InvalidHeaderValue { field: &'static str },
}

impl ValidationError {
    /// Name of the field that failed validation (the first one for `MissingContent`).
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field }
            | Self::InvalidHeaderValue { field }
            | Self::InvalidUrl { field, .. } => *field,
            Self::MissingContent { fields } => fields[0],
            Self::InvalidPhoneNumber { .. } => "recipients",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} is required"),
            Self::MissingContent { fields } => {
                write!(f, "{} or {} is required", fields[0], fields[1])
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidUrl {
                field,
                input,
                reason,
            } => write!(f, "invalid {field} {input}: {reason}"),
            Self::InvalidHeaderValue { field } => {
                write!(f, "{field} contains characters not allowed in an HTTP header")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "sender_id" };
        assert_eq!(err.to_string(), "sender_id is required");

        let err = ValidationError::MissingContent {
            fields: ["body", "templateId"],
        };
        assert_eq!(err.to_string(), "body or templateId is required");

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");

        let err = ValidationError::InvalidHeaderValue { field: "api_key" };
        assert_eq!(
            err.to_string(),
            "api_key contains characters not allowed in an HTTP header"
        );
    }

    #[test]
    fn field_names_the_offending_input() {
        assert_eq!(
            ValidationError::Empty {
                field: "sending_domain_id"
            }
            .field(),
            "sending_domain_id"
        );
        assert_eq!(
            ValidationError::MissingContent {
                fields: ["body", "templateId"]
            }
            .field(),
            "body"
        );
    }
}
