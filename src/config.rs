//! Client configuration
//!
//! Where the chat endpoints live. In the browser the page is served by the same origin
//! as the API, so the base URL stays empty and paths are used as-is.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub send_message_path: String,
    pub export_chat_path: String,
    pub clear_chat_path: String,
    pub token_status_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url().to_string(),
            send_message_path: "/send_message".to_string(),
            export_chat_path: "/export_chat".to_string(),
            clear_chat_path: "/clear_chat".to_string(),
            token_status_path: "/token/status".to_string(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn default_base_url() -> &'static str {
    ""
}

// Flask development server default
#[cfg(not(target_arch = "wasm32"))]
fn default_base_url() -> &'static str {
    "http://127.0.0.1:5000"
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Defaults, with `STEPPY_API_BASE_URL` overriding the base URL
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        match std::env::var("STEPPY_API_BASE_URL") {
            Ok(base_url) if !base_url.trim().is_empty() => Self::with_base_url(base_url),
            _ => Self::default(),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Join the base URL and an endpoint path
    pub fn url(&self, path: &str) -> String {
        if self.base_url.is_empty() {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn send_message_url(&self) -> String {
        self.url(&self.send_message_path)
    }

    pub fn export_chat_url(&self) -> String {
        self.url(&self.export_chat_path)
    }

    pub fn clear_chat_url(&self) -> String {
        self.url(&self.clear_chat_path)
    }

    pub fn token_status_url(&self) -> String {
        self.url(&self.token_status_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_origin_keeps_paths() {
        let config = ClientConfig::with_base_url("");
        assert_eq!(config.send_message_url(), "/send_message");
        assert_eq!(config.token_status_url(), "/token/status");
    }

    #[test]
    fn test_base_url_join() {
        let config = ClientConfig::with_base_url("http://localhost:5000/");
        assert_eq!(config.export_chat_url(), "http://localhost:5000/export_chat");
        assert_eq!(config.clear_chat_url(), "http://localhost:5000/clear_chat");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url":"http://api","send_message_path":"/chat/send"}"#)
                .unwrap();
        assert_eq!(config.send_message_url(), "http://api/chat/send");
        assert_eq!(config.export_chat_path, "/export_chat");
    }
}
