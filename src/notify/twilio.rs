/// Twilio WhatsApp notifier.
///
/// Sends the daily alert through Twilio's Messages REST endpoint:
///   https://api.twilio.com/2010-04-01/Accounts/{sid}/Messages.json
///
/// One POST per run over the WhatsApp sandbox channel. Any failure
/// surfaces as `NotifyError` and aborts the run; there is no retry and
/// no partial delivery.

use crate::config::Credentials;
use serde::Deserialize;

// ============================================================================
// Channel constants
// ============================================================================

/// Twilio WhatsApp sandbox sender number.
pub const TWILIO_WHATSAPP_NUMBER: &str = "whatsapp:+14155238886";

/// Fixed alert recipient.
pub const RECIPIENT_WHATSAPP: &str = "whatsapp:+8801978163944";

const TWILIO_API_BASE_URL: &str = "https://api.twilio.com/2010-04-01";

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug)]
pub enum NotifyError {
    /// HTTP transport to Twilio failed.
    Network(String),
    /// Twilio answered with a non-success status (bad credentials,
    /// recipient not joined to the sandbox, malformed number).
    Rejected(String),
    /// Success status but a response body we could not read the SID from.
    ParseError(String),
}

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotifyError::Network(msg) => write!(f, "Twilio request failed: {}", msg),
            NotifyError::Rejected(msg) => write!(f, "Twilio rejected the message: {}", msg),
            NotifyError::ParseError(msg) => write!(f, "Twilio response malformed: {}", msg),
        }
    }
}

impl std::error::Error for NotifyError {}

// ============================================================================
// Messages API
// ============================================================================

#[derive(Deserialize)]
struct MessageResponse {
    sid: String,
}

/// Builds the Messages endpoint URL for an account SID.
pub fn build_messages_url(account_sid: &str) -> String {
    format!("{}/Accounts/{}/Messages.json", TWILIO_API_BASE_URL, account_sid)
}

/// Extracts the provider-assigned message SID from a Messages API
/// response body.
pub fn parse_message_response(json: &str) -> Result<String, NotifyError> {
    let response: MessageResponse = serde_json::from_str(json)
        .map_err(|e| NotifyError::ParseError(format!("JSON deserialization failed: {}", e)))?;
    Ok(response.sid)
}

/// Sends `body` to the fixed WhatsApp recipient. Returns the Twilio
/// message SID on success.
///
/// Twilio authenticates with HTTP basic auth (account SID as username,
/// auth token as password) and takes the message as form fields.
pub fn send_whatsapp_alert(
    client: &reqwest::blocking::Client,
    credentials: &Credentials,
    body: &str,
) -> Result<String, NotifyError> {
    let url = build_messages_url(&credentials.twilio_account_sid);
    let params = [
        ("Body", body),
        ("From", TWILIO_WHATSAPP_NUMBER),
        ("To", RECIPIENT_WHATSAPP),
    ];

    let response = client
        .post(&url)
        .basic_auth(&credentials.twilio_account_sid, Some(&credentials.twilio_auth_token))
        .form(&params)
        .send()
        .map_err(|e| NotifyError::Network(format!("request failed: {}", e)))?;

    let status = response.status();
    let text = response
        .text()
        .map_err(|e| NotifyError::Network(format!("reading body failed: {}", e)))?;

    if !status.is_success() {
        // Error bodies carry Twilio's error code and message.
        return Err(NotifyError::Rejected(format!("{}: {}", status, text)));
    }

    parse_message_response(&text)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Trimmed-down Messages API success body (real responses carry many
    /// more fields; only `sid` matters to us).
    const MESSAGE_CREATED_JSON: &str = r#"{
      "sid": "SM8f3b7a2c9d1e4f5a8b6c7d8e9f0a1b2c",
      "status": "queued",
      "from": "whatsapp:+14155238886",
      "to": "whatsapp:+8801978163944",
      "body": "🌞 No rain expected between 9 AM to 9 PM BDT. Enjoy your day!",
      "num_segments": "1",
      "direction": "outbound-api",
      "api_version": "2010-04-01",
      "price": null,
      "error_code": null,
      "error_message": null
    }"#;

    #[test]
    fn test_messages_url_embeds_account_sid() {
        let url = build_messages_url("ACffffffffffffffffffffffffffffffff");
        assert_eq!(
            url,
            "https://api.twilio.com/2010-04-01/Accounts/ACffffffffffffffffffffffffffffffff/Messages.json"
        );
    }

    #[test]
    fn test_parse_message_response_extracts_sid() {
        let sid = parse_message_response(MESSAGE_CREATED_JSON)
            .expect("valid response body should parse");
        assert_eq!(sid, "SM8f3b7a2c9d1e4f5a8b6c7d8e9f0a1b2c");
    }

    #[test]
    fn test_parse_response_without_sid_is_parse_error() {
        let result = parse_message_response(r#"{ "status": "queued" }"#);
        assert!(
            matches!(result, Err(NotifyError::ParseError(_))),
            "a body without sid should be ParseError, got {:?}",
            result
        );
    }

    #[test]
    fn test_parse_malformed_body_is_parse_error() {
        let result = parse_message_response("<html>not json</html>");
        assert!(matches!(result, Err(NotifyError::ParseError(_))));
    }

    #[test]
    fn test_sender_and_recipient_are_whatsapp_addresses() {
        // The Messages API routes by the whatsapp: prefix; a bare E.164
        // number would go out as SMS instead.
        assert!(TWILIO_WHATSAPP_NUMBER.starts_with("whatsapp:+"));
        assert!(RECIPIENT_WHATSAPP.starts_with("whatsapp:+"));
    }

    #[test]
    fn test_rejection_error_carries_status_and_body() {
        let err = NotifyError::Rejected(format!(
            "{}: {}",
            "401 Unauthorized",
            r#"{"code": 20003, "message": "Authentication Error - invalid username"}"#
        ));
        let rendered = format!("{}", err);
        assert!(rendered.contains("401"));
        assert!(rendered.contains("20003"), "Twilio error code must survive into the message");
    }
}
