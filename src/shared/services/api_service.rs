//! HTTP transport for the chat endpoints
//!
//! Browser builds fetch through `gloo-net`, native builds (desktop, SSR, tests) through
//! `reqwest`. Both read the raw status and body and share the same decoding rules.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::domain::models::{
    ApiErrorBody, ChatExport, ClearChatResponse, SendMessageRequest, SendMessageResponse,
    SendReply, TokenStatus,
};
use crate::domain::services::ChatTransport;
use crate::shared::errors::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
}

/// Status and body of a response that arrived
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub ok: bool,
    pub body: String,
}

impl RawResponse {
    /// Interpret a `/send_message` response
    pub fn into_send_reply(self) -> Result<SendReply> {
        if self.ok {
            let response: SendMessageResponse = serde_json::from_str(&self.body)
                .map_err(|e| AppError::Decode(e.to_string()))?;
            Ok(SendReply::Ok(response))
        } else {
            Ok(SendReply::Failed {
                status: self.status,
                body: ApiErrorBody::from_body(&self.body),
            })
        }
    }

    /// Decode a 2xx JSON body, or turn the response into `AppError::Http`
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T> {
        if !self.ok {
            return Err(AppError::Http {
                status: self.status,
                message: ApiErrorBody::from_body(&self.body).message().to_string(),
            });
        }
        serde_json::from_str(&self.body).map_err(|e| AppError::Decode(e.to_string()))
    }
}

// API Service for centralized HTTP requests
#[derive(Debug, Clone)]
pub struct ApiService {
    config: ClientConfig,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl ApiService {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(ClientConfig::with_base_url(base_url))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[cfg(target_arch = "wasm32")]
    async fn fetch(&self, method: Method, url: &str, body: Option<String>) -> Result<RawResponse> {
        use gloo_net::http::Request;

        let transport = |e: gloo_net::Error| AppError::Transport(e.to_string());

        let response = match (method, body) {
            (Method::Get, _) => Request::get(url).send().await.map_err(transport)?,
            (Method::Post, Some(body)) => Request::post(url)
                .header("Content-Type", "application/json")
                .body(body)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?,
            (Method::Post, None) => Request::post(url).send().await.map_err(transport)?,
        };

        let status = response.status();
        let ok = response.ok();
        let body = response.text().await.map_err(transport)?;
        Ok(RawResponse { status, ok, body })
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn fetch(&self, method: Method, url: &str, body: Option<String>) -> Result<RawResponse> {
        let transport = |e: reqwest::Error| AppError::Transport(e.to_string());

        let mut request = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };
        if let Some(body) = body {
            request = request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;
        Ok(RawResponse {
            status: status.as_u16(),
            ok: status.is_success(),
            body,
        })
    }

    // Generic GET request
    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.fetch(Method::Get, url, None).await?.into_json()
    }
}

#[async_trait(?Send)]
impl ChatTransport for ApiService {
    async fn send_message(&self, request: &SendMessageRequest) -> Result<SendReply> {
        let body = serde_json::to_string(request)?;
        self.fetch(Method::Post, &self.config.send_message_url(), Some(body))
            .await?
            .into_send_reply()
    }

    async fn export_chat(&self) -> Result<ChatExport> {
        self.get(&self.config.export_chat_url()).await
    }

    async fn clear_chat(&self) -> Result<ClearChatResponse> {
        self.fetch(Method::Post, &self.config.clear_chat_url(), None)
            .await?
            .into_json()
    }

    async fn token_status(&self) -> Result<TokenStatus> {
        self.get(&self.config.token_status_url()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            ok: (200..300).contains(&status),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_ok_send_reply() {
        let reply = raw(200, r#"{"response":"hi","history":[1,2]}"#)
            .into_send_reply()
            .unwrap();
        match reply {
            SendReply::Ok(body) => {
                assert_eq!(body.response, "hi");
                assert_eq!(body.history.len(), 2);
            }
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn test_failed_send_reply_keeps_status() {
        let reply = raw(401, r#"{"error":"Ошибка аутентификации","details":"..."}"#)
            .into_send_reply()
            .unwrap();
        assert_eq!(
            reply,
            SendReply::Failed {
                status: 401,
                body: ApiErrorBody {
                    error: Some("Ошибка аутентификации".into()),
                    details: Some("...".into()),
                },
            }
        );
    }

    #[test]
    fn test_undecodable_success_is_decode_error() {
        let result = raw(200, "<html></html>").into_send_reply();
        assert!(matches!(result, Err(AppError::Decode(_))));
    }

    #[test]
    fn test_into_json_maps_http_error() {
        let result: Result<TokenStatus> =
            raw(503, r#"{"error":"Сервис GigaChat не настроен."}"#).into_json();
        match result {
            Err(AppError::Http { status, message }) => {
                assert_eq!(status, 503);
                assert!(message.contains("не настроен"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
