use super::message::Message;

/// Everything the chat page shows: rendered messages, the input box, the typing
/// indicator and a scroll request counter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    messages: Vec<Message>,
    pub input: String,
    pub typing: bool,
    scroll_epoch: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_messages(messages: Vec<Message>) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of rendered messages. Derived, never stored.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Replace the rendered messages (clear)
    pub fn reset(&mut self, messages: Vec<Message>) {
        self.messages = messages;
        self.scroll_to_bottom();
    }

    /// Insert restored history ahead of whatever was rendered since the page loaded
    pub fn prepend_history(&mut self, history: Vec<Message>) {
        self.messages.splice(0..0, history);
        self.scroll_to_bottom();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_epoch = self.scroll_epoch.wrapping_add(1);
    }

    /// Bumped on every scroll request; the view scrolls whenever it changes.
    pub fn scroll_epoch(&self) -> u64 {
        self.scroll_epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Role;

    #[test]
    fn test_count_follows_messages() {
        let mut transcript = Transcript::new();
        assert_eq!(transcript.message_count(), 0);

        transcript.push(Message::user("a"));
        transcript.push(Message::assistant("b"));
        assert_eq!(transcript.message_count(), 2);

        transcript.reset(Vec::new());
        assert_eq!(transcript.message_count(), 0);
    }

    #[test]
    fn test_reset_requests_scroll() {
        let mut transcript = Transcript::with_messages(vec![Message::user("a")]);
        let before = transcript.scroll_epoch();
        transcript.reset(vec![Message::new(Role::Assistant, "restored")]);
        assert_ne!(transcript.scroll_epoch(), before);
        assert_eq!(transcript.messages()[0].content, "restored");
    }

    #[test]
    fn test_editing_input_does_not_request_scroll() {
        let mut transcript = Transcript::with_messages(vec![Message::user("a")]);
        let before = transcript.scroll_epoch();

        transcript.input = "typing...".to_string();
        transcript.input.clear();
        transcript.typing = true;

        assert_eq!(transcript.scroll_epoch(), before);
    }

    #[test]
    fn test_prepend_history_keeps_live_messages() {
        let mut transcript = Transcript::with_messages(vec![Message::user("live")]);
        transcript.prepend_history(vec![
            Message::user("old question"),
            Message::assistant("old answer"),
        ]);

        let contents: Vec<&str> = transcript.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["old question", "old answer", "live"]);
        assert_eq!(transcript.message_count(), 3);
    }
}
