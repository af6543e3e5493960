//! Message rendering component
//!
//! Displays individual messages in the chat transcript

use crate::domain::models::Message;
use dioxus::prelude::*;

/// Renders a single message: sender badge, text with line breaks, render time.
/// Content is always inserted as text, never as HTML.
#[component]
pub fn MessageItem(message: Message) -> Element {
    let role = message.role;
    let time = message.time_label();
    let lines: Vec<String> = message
        .content_lines()
        .into_iter()
        .map(str::to_string)
        .collect();

    rsx! {
        div { class: "message {role.css_class()}",
            div { class: "message-content",
                strong {
                    i { class: "fas {role.icon()} me-2" }
                    "{role.label()}:"
                }
                br {}
                for (i, line) in lines.into_iter().enumerate() {
                    if i > 0 {
                        br {}
                    }
                    "{line}"
                }
            }
            div { class: "message-time text-end", "{time}" }
        }
    }
}
