//! Wire types for the chat endpoints
//!
//! `/send_message`, `/export_chat`, `/clear_chat` and `/token/status` are owned by the
//! server; these types only describe what the client sends and reads back.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::message::{HistoryEntry, Message};

/// Fallback text when a failed response carries no `error` string
pub const UNKNOWN_ERROR: &str = "Неизвестная ошибка";

/// Body of `POST /send_message`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

impl SendMessageRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Successful `POST /send_message` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SendMessageResponse {
    pub response: String,
    /// Only its length is ever looked at
    #[serde(default)]
    pub history: Vec<Value>,
    #[serde(default)]
    pub token_status: Option<String>,
}

/// Error body carried by non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl ApiErrorBody {
    /// Parse a failed response body; anything that is not the expected JSON is an empty body.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    pub fn message(&self) -> &str {
        self.error.as_deref().unwrap_or(UNKNOWN_ERROR)
    }
}

/// What the server answered to a send, before it is turned into a chat message
#[derive(Debug, Clone, PartialEq)]
pub enum SendReply {
    Ok(SendMessageResponse),
    Failed { status: u16, body: ApiErrorBody },
}

/// Snapshot returned by `GET /export_chat`, consumed opaquely
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ChatExport(pub Value);

impl ChatExport {
    pub fn session_id(&self) -> &str {
        self.0
            .get("session_id")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
    }

    /// `gigachat-<session_id>-<YYYY-MM-DD>.json`
    pub fn file_name(&self, date: NaiveDate) -> String {
        format!(
            "gigachat-{}-{}.json",
            self.session_id(),
            date.format("%Y-%m-%d")
        )
    }

    /// Two-space indented JSON, the file body of the download
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.0)
    }

    /// Session history as transcript messages. Entries that do not parse are skipped.
    pub fn messages(&self) -> Vec<Message> {
        let Some(entries) = self.0.get("messages").and_then(Value::as_array) else {
            return Vec::new();
        };

        entries
            .iter()
            .filter_map(|entry| serde_json::from_value::<HistoryEntry>(entry.clone()).ok())
            .map(HistoryEntry::into_message)
            .collect()
    }
}

/// `POST /clear_chat` response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClearChatResponse {
    #[serde(default)]
    pub success: bool,
}

/// `GET /token/status` response.
///
/// The server answers either `{status, message}` when the token manager is missing or
/// `{has_token, expires_at, is_valid}` otherwise, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TokenStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub has_token: bool,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub is_valid: bool,
}

/// Condensed service state for the chat header badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Ready,
    TokenExpired,
    NotConfigured,
    Unavailable,
}

impl ServiceState {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceState::Ready => "GigaChat подключён",
            ServiceState::TokenExpired => "Токен истёк",
            ServiceState::NotConfigured => "Сервис не настроен",
            ServiceState::Unavailable => "Сервис недоступен",
        }
    }

    pub fn css_modifier(&self) -> &'static str {
        match self {
            ServiceState::Ready => "ready",
            ServiceState::TokenExpired => "expired",
            ServiceState::NotConfigured => "not-configured",
            ServiceState::Unavailable => "unavailable",
        }
    }
}

impl From<&TokenStatus> for ServiceState {
    fn from(status: &TokenStatus) -> Self {
        if status.status.as_deref() == Some("not_configured") {
            ServiceState::NotConfigured
        } else if status.has_token && status.is_valid {
            ServiceState::Ready
        } else {
            ServiceState::TokenExpired
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_ignores_unknown_fields() {
        let resp: SendMessageResponse = serde_json::from_str(
            r#"{"response":"hi","history":[1,2],"token_status":"valid","extra":true}"#,
        )
        .unwrap();
        assert_eq!(resp.response, "hi");
        assert_eq!(resp.history.len(), 2);
        assert_eq!(resp.token_status.as_deref(), Some("valid"));
    }

    #[test]
    fn test_error_body_message_and_fallback() {
        let body = ApiErrorBody::from_body(r#"{"error":"bad","details":"more"}"#);
        assert_eq!(body.message(), "bad");
        assert_eq!(body.details.as_deref(), Some("more"));

        let body = ApiErrorBody::from_body("<html>502 Bad Gateway</html>");
        assert_eq!(body.message(), UNKNOWN_ERROR);
    }

    #[test]
    fn test_export_file_name() {
        let export = ChatExport(json!({"session_id": "abc-123", "messages": []}));
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(export.file_name(date), "gigachat-abc-123-2024-03-09.json");
    }

    #[test]
    fn test_export_without_session_id() {
        let export = ChatExport(json!({"session_id": null}));
        assert_eq!(export.session_id(), "unknown");
    }

    #[test]
    fn test_export_pretty_json_uses_two_spaces() {
        let export = ChatExport(json!({"session_id": "s"}));
        let text = export.to_pretty_json().unwrap();
        assert_eq!(text, "{\n  \"session_id\": \"s\"\n}");
    }

    #[test]
    fn test_export_messages_skip_malformed() {
        let export = ChatExport(json!({
            "session_id": "s",
            "messages": [
                {"role": "user", "content": "q", "timestamp": "10:00:00"},
                {"role": "system", "content": "nope"},
                {"role": "assistant", "content": "a", "timestamp": "10:00:02"}
            ]
        }));
        let messages = export.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].content, "a");
        assert_eq!(messages[1].time_label(), "10:00:02");
    }

    #[test]
    fn test_service_state_from_token_status() {
        let not_configured: TokenStatus = serde_json::from_str(
            r#"{"status":"not_configured","message":"Менеджер токенов не инициализирован"}"#,
        )
        .unwrap();
        assert_eq!(ServiceState::from(&not_configured), ServiceState::NotConfigured);

        let ready: TokenStatus = serde_json::from_str(
            r#"{"has_token":true,"expires_at":"2024-01-01T10:00:00","is_valid":true}"#,
        )
        .unwrap();
        assert_eq!(ServiceState::from(&ready), ServiceState::Ready);

        let expired: TokenStatus =
            serde_json::from_str(r#"{"has_token":true,"expires_at":null,"is_valid":false}"#)
                .unwrap();
        assert_eq!(ServiceState::from(&expired), ServiceState::TokenExpired);
    }
}
