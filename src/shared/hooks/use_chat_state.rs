use crate::config::ClientConfig;
use crate::domain::models::{Message, ServiceState, Transcript};
use crate::domain::services::{ChatClient, ChatView};
use crate::shared::services::ApiService;
use dioxus::prelude::*;

/// Chat state management hook
#[derive(Clone, Copy, PartialEq)]
pub struct ChatState {
    pub transcript: Signal<Transcript>,
    pub service_state: Signal<Option<ServiceState>>,
}

impl ChatState {
    /// Update the input box as the user types
    pub fn set_input(&mut self, value: String) {
        self.transcript.write().input = value;
    }

    pub fn message_count(&self) -> usize {
        self.transcript.read().message_count()
    }
}

impl ChatView for ChatState {
    fn input(&self) -> String {
        self.transcript.read().input.clone()
    }

    fn clear_input(&mut self) {
        self.transcript.write().input.clear();
    }

    fn append(&mut self, message: Message) {
        self.transcript.write().push(message);
    }

    fn replace_messages(&mut self, messages: Vec<Message>) {
        self.transcript.write().reset(messages);
    }

    fn prepend_history(&mut self, history: Vec<Message>) {
        self.transcript.write().prepend_history(history);
    }

    fn set_typing(&mut self, visible: bool) {
        self.transcript.write().typing = visible;
    }

    fn scroll_to_bottom(&mut self) {
        self.transcript.write().scroll_to_bottom();
    }

    fn message_count(&self) -> usize {
        ChatState::message_count(self)
    }
}

/// Hook to manage chat state
pub fn use_chat_state() -> ChatState {
    let transcript = use_signal(Transcript::new);
    let service_state = use_signal(|| None::<ServiceState>);

    ChatState {
        transcript,
        service_state,
    }
}

/// Chat client bound to the configured endpoints, created once per component
pub fn use_chat_client() -> ChatClient<ApiService> {
    let config = try_use_context::<ClientConfig>().unwrap_or_default();
    use_hook(move || ChatClient::new(ApiService::new(config)))
}
