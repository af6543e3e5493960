use crate::app::components::MessageItem;
use crate::domain::models::Transcript;
use crate::shared::constants::{CHAT_MESSAGES_ID, TYPING_INDICATOR_ID};
use crate::shared::services::browser;
use dioxus::prelude::*;

#[component]
pub fn ChatMessages(transcript: Signal<Transcript>) -> Element {
    // Only the epoch is tracked, so typing in the input never scrolls
    let scroll_epoch = use_memo(move || transcript.read().scroll_epoch());
    use_effect(move || {
        let _epoch = scroll_epoch();
        browser::scroll_to_bottom(CHAT_MESSAGES_ID);
    });

    let current = transcript.read();
    let typing_style = if current.typing {
        "display: block;"
    } else {
        "display: none;"
    };

    rsx! {
        div { id: CHAT_MESSAGES_ID, class: "chat-messages",
            if current.messages().is_empty() {
                EmptyState {}
            }
            for (i, message) in current.messages().iter().enumerate() {
                MessageItem { key: "{i}", message: message.clone() }
            }
            div {
                id: TYPING_INDICATOR_ID,
                class: "typing-indicator",
                style: "{typing_style}",
                span { class: "typing-indicator__dot" }
                span { class: "typing-indicator__dot" }
                span { class: "typing-indicator__dot" }
                span { class: "typing-indicator__text", "Steppy печатает..." }
            }
        }
    }
}

#[component]
fn EmptyState() -> Element {
    rsx! {
        div { class: "empty-state",
            div { class: "empty-state__icon", i { class: "fas fa-comments" } }
            h2 { class: "empty-state__title", "Начните разговор" }
            p { class: "empty-state__description",
                "Напишите Steppy, что вас беспокоит"
            }
        }
    }
}
