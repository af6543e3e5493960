use crate::domain::models::ServiceState;
use crate::shared::constants::MESSAGE_COUNT_ID;
use dioxus::prelude::*;

/// Title bar of the chat card: topic, service badge, message counter and actions
#[component]
pub fn ChatHeader(
    message_count: usize,
    #[props(default)] trigger: Option<String>,
    #[props(default)] service_state: Option<ServiceState>,
    on_export: EventHandler<()>,
    on_clear: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "chat-header",
            div { class: "chat-header__title",
                i { class: "fas fa-robot me-2" }
                "Steppy"
                if let Some(topic) = trigger {
                    span { class: "chat-header__topic", "Тема: {topic}" }
                }
            }

            div { class: "chat-header__meta",
                if let Some(state) = service_state {
                    span { class: "service-badge service-badge--{state.css_modifier()}",
                        "{state.label()}"
                    }
                }
                span { class: "chat-header__count",
                    "Сообщений: "
                    span { id: MESSAGE_COUNT_ID, "{message_count}" }
                }
                button {
                    class: "btn btn-outline-secondary btn-sm",
                    title: "Экспорт истории",
                    onclick: move |_| on_export.call(()),
                    i { class: "fas fa-download me-1" }
                    "Экспорт"
                }
                button {
                    class: "btn btn-outline-danger btn-sm",
                    title: "Новый диалог",
                    onclick: move |_| on_clear.call(()),
                    i { class: "fas fa-trash-alt me-1" }
                    "Очистить"
                }
            }
        }
    }
}
