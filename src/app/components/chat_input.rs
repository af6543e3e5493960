//! Chat input: text field and send button

use crate::shared::constants::MESSAGE_INPUT_ID;
use crate::shared::hooks::ChatState;
use dioxus::prelude::*;

/// The send button stays enabled while a reply is pending; overlapping sends are allowed.
#[component]
pub fn ChatInput(chat: ChatState, on_submit: EventHandler<()>) -> Element {
    let mut chat = chat;
    let mut is_composing = use_signal(|| false);

    // Handle keypress (Enter to send)
    let handle_keypress = move |evt: Event<KeyboardData>| {
        if evt.key() == Key::Enter
            && !evt.modifiers().contains(Modifiers::SHIFT)
            && !is_composing()
        {
            evt.prevent_default();
            on_submit.call(());
        }
    };

    let value = chat.transcript.read().input.clone();

    rsx! {
        div { class: "chat-input input-group",
            input {
                id: MESSAGE_INPUT_ID,
                r#type: "text",
                class: "form-control chat-input__field",
                placeholder: "Введите сообщение...",
                autocomplete: "off",
                value: "{value}",
                oninput: move |evt| chat.set_input(evt.value()),
                onkeypress: handle_keypress,
                oncompositionstart: move |_| is_composing.set(true),
                oncompositionend: move |_| is_composing.set(false),
            }
            button {
                class: "btn btn-primary chat-input__send",
                title: "Отправить",
                onclick: move |_| on_submit.call(()),
                i { class: "fas fa-paper-plane" }
            }
        }
    }
}
