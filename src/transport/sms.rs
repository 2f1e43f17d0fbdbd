use serde::Serialize;
use serde_json::Value;

use crate::domain::{MessageId, SendSms};

pub const SEND_SMS_PATH: [&str; 3] = ["v1", "sms", "send"];

#[derive(Debug, Serialize)]
struct SendSmsJsonRequest<'a> {
    recipients: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a str>,
    sender_id: &'a str,
    #[serde(rename = "templateId", skip_serializing_if = "Option::is_none")]
    template_id: Option<&'a str>,
    #[serde(rename = "scheduleAt", skip_serializing_if = "Option::is_none")]
    schedule_at: Option<&'a str>,
}

pub fn encode_send_sms_json(request: &SendSms) -> Result<Value, serde_json::Error> {
    serde_json::to_value(SendSmsJsonRequest {
        recipients: request.recipients.iter().map(|r| r.as_str()).collect(),
        body: request.body.as_deref(),
        sender_id: &request.sender_id,
        template_id: request.template_id.as_deref(),
        schedule_at: request.schedule_at.as_deref(),
    })
}

pub fn sms_status_path(message_id: &MessageId) -> [&str; 4] {
    ["v1", "sms", "status", message_id.as_str()]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::Recipient;

    use super::*;

    #[test]
    fn encode_text_message_omits_absent_optionals() {
        let recipients = vec![
            Recipient::new("+15550001111").unwrap(),
            Recipient::new("+15550002222").unwrap(),
        ];
        let request = SendSms::text(recipients, "ACME", "hello");

        assert_eq!(
            encode_send_sms_json(&request).unwrap(),
            json!({
                "recipients": ["+15550001111", "+15550002222"],
                "body": "hello",
                "sender_id": "ACME",
            })
        );
    }

    #[test]
    fn encode_template_message_uses_camel_case_keys() {
        let request = SendSms::template(
            vec![Recipient::new("+15550001111").unwrap()],
            "ACME",
            "tpl_42",
        )
        .schedule_at("2026-11-01T09:00:00Z");

        assert_eq!(
            encode_send_sms_json(&request).unwrap(),
            json!({
                "recipients": ["+15550001111"],
                "sender_id": "ACME",
                "templateId": "tpl_42",
                "scheduleAt": "2026-11-01T09:00:00Z",
            })
        );
    }

    #[test]
    fn status_path_keeps_id_as_single_segment() {
        let id = MessageId::new("msg_123").unwrap();
        assert_eq!(sms_status_path(&id), ["v1", "sms", "status", "msg_123"]);
    }
}
