//! Chat send/receive/render cycle
//!
//! Written once against two seams: [`ChatTransport`] talks to the server, [`ChatView`]
//! is whatever renders the transcript (Dioxus signals in the app, a plain
//! [`Transcript`] in tests).

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::models::{
    ChatExport, ClearChatResponse, Message, SendMessageRequest, SendReply, ServiceState,
    TokenStatus, Transcript,
};
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::{self, LogOperation};

/// HTTP side of the chat. Futures are not `Send` so browser fetch can implement it.
#[async_trait(?Send)]
pub trait ChatTransport {
    /// `Ok` for any response that arrived, whatever its status. `Err` only when the
    /// request never completed or a 2xx body could not be decoded.
    async fn send_message(&self, request: &SendMessageRequest) -> Result<SendReply>;

    async fn export_chat(&self) -> Result<ChatExport>;

    async fn clear_chat(&self) -> Result<ClearChatResponse>;

    async fn token_status(&self) -> Result<TokenStatus>;
}

/// Rendering side of the chat
pub trait ChatView {
    fn input(&self) -> String;
    fn clear_input(&mut self);
    fn append(&mut self, message: Message);
    fn replace_messages(&mut self, messages: Vec<Message>);
    fn prepend_history(&mut self, history: Vec<Message>);
    fn set_typing(&mut self, visible: bool);
    fn scroll_to_bottom(&mut self);
    fn message_count(&self) -> usize;
}

impl ChatView for Transcript {
    fn input(&self) -> String {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn append(&mut self, message: Message) {
        self.push(message);
    }

    fn replace_messages(&mut self, messages: Vec<Message>) {
        self.reset(messages);
    }

    fn prepend_history(&mut self, history: Vec<Message>) {
        Transcript::prepend_history(self, history);
    }

    fn set_typing(&mut self, visible: bool) {
        self.typing = visible;
    }

    fn scroll_to_bottom(&mut self) {
        Transcript::scroll_to_bottom(self);
    }

    fn message_count(&self) -> usize {
        Transcript::message_count(self)
    }
}

/// How a send attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Empty or whitespace-only input, nothing happened
    Skipped,
    Replied,
    HttpError { status: u16 },
    TransportError,
}

#[derive(Debug, Clone)]
pub struct ChatClient<T> {
    transport: T,
}

impl<T: ChatTransport> ChatClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send the current input.
    ///
    /// Renders the user message before the request goes out, then exactly one
    /// assistant-styled message for the reply, the HTTP error or the transport error.
    /// The typing indicator is hidden and the view scrolled on every path.
    ///
    /// Overlapping sends are not guarded: each renders its reply when it arrives.
    pub async fn send_message<V: ChatView>(&self, view: &mut V) -> SendOutcome {
        let message = view.input().trim().to_string();
        if message.is_empty() {
            return SendOutcome::Skipped;
        }

        let request_id = Uuid::new_v4().to_string();

        view.append(Message::user(message.as_str()));
        view.clear_input();
        view.set_typing(true);
        view.scroll_to_bottom();
        logging::log_send_start(&request_id, message.len(), view.message_count());

        let request = SendMessageRequest::new(message);
        let (reply, outcome) = match self.transport.send_message(&request).await {
            Ok(SendReply::Ok(body)) => {
                let history_len = body.history.len();
                let reply = Message::assistant(body.response);
                logging::log_send_success(&request_id, history_len, view.message_count() + 1);
                (reply, SendOutcome::Replied)
            }
            Ok(SendReply::Failed { status, body }) => {
                logging::log_send_http_error(
                    &request_id,
                    status,
                    body.message(),
                    body.details.as_deref(),
                );
                (http_error_message(body.message()), SendOutcome::HttpError { status })
            }
            Err(e) => {
                logging::log_send_transport_error(&request_id, &e.to_string());
                (connection_error_message(&e), SendOutcome::TransportError)
            }
        };

        view.append(reply);
        view.set_typing(false);
        view.scroll_to_bottom();
        outcome
    }

    /// Fetch the export snapshot. Errors are returned untouched; nothing is rendered.
    pub async fn export_chat(&self) -> Result<ChatExport> {
        let export = self.transport.export_chat().await?;
        logging::log_operation_result(LogOperation::ExportChat, Ok(export.session_id()));
        Ok(export)
    }

    /// Put the server-side session history in front of the transcript.
    /// Messages sent while the restore was in flight stay after it.
    /// Returns the number of restored messages.
    pub async fn restore_history<V: ChatView>(&self, view: &mut V) -> Result<usize> {
        let export = self.transport.export_chat().await?;
        let messages = export.messages();
        let count = messages.len();
        view.prepend_history(messages);
        logging::log_operation_result(LogOperation::RestoreHistory, Ok(export.session_id()));
        Ok(count)
    }

    /// Ask the server to start a new session and empty the transcript.
    /// A failure is rendered as an assistant-styled error, like a failed send.
    pub async fn clear_chat<V: ChatView>(&self, view: &mut V) -> bool {
        let failure = match self.transport.clear_chat().await {
            Ok(ClearChatResponse { success: true }) => None,
            Ok(ClearChatResponse { success: false }) => {
                Some(http_error_message(crate::domain::models::UNKNOWN_ERROR))
            }
            Err(AppError::Http { message, .. }) => Some(http_error_message(&message)),
            Err(e) => Some(connection_error_message(&e)),
        };

        match failure {
            None => {
                view.replace_messages(Vec::new());
                logging::log_operation_result(LogOperation::ClearChat, Ok("cleared"));
                true
            }
            Some(message) => {
                logging::log_operation_result(
                    LogOperation::ClearChat,
                    Err(message.content.as_str()),
                );
                view.append(message);
                view.scroll_to_bottom();
                false
            }
        }
    }

    /// Service state for the header badge. Never fails: errors become `Unavailable`,
    /// except a 503 which the server sends when GigaChat is not configured.
    pub async fn service_state(&self) -> ServiceState {
        match self.transport.token_status().await {
            Ok(status) => ServiceState::from(&status),
            Err(AppError::Http { status: 503, .. }) => ServiceState::NotConfigured,
            Err(e) => {
                let error = e.to_string();
                logging::log_operation_result(LogOperation::TokenStatus, Err(error.as_str()));
                ServiceState::Unavailable
            }
        }
    }
}

fn http_error_message(error: &str) -> Message {
    Message::assistant(format!("Ошибка: {}", error))
}

fn connection_error_message(error: &AppError) -> Message {
    let detail = match error {
        AppError::Transport(detail) | AppError::Decode(detail) => detail.clone(),
        other => other.to_string(),
    };
    Message::assistant(format!("Ошибка соединения: {}", detail))
}
