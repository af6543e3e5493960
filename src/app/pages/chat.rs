use crate::app::components::{ChatHeader, ChatInput, ChatMessages};
use crate::domain::services::ChatClient;
use crate::shared::constants::MESSAGE_INPUT_ID;
use crate::shared::errors::Result;
use crate::shared::hooks::{use_chat_client, use_chat_state};
use crate::shared::logging::{self, LogOperation};
use crate::shared::services::{browser, ApiService};
use chrono::Utc;
use dioxus::prelude::*;

/// Fetch the export snapshot and hand it to the browser as a file
async fn export_to_file(client: &ChatClient<ApiService>) -> Result<()> {
    let export = client.export_chat().await?;
    let file_name = export.file_name(Utc::now().date_naive());
    browser::download_json(&file_name, &export.to_pretty_json()?)
}

#[component]
pub fn ChatPage(#[props(default)] trigger: Option<String>) -> Element {
    let chat = use_chat_state();
    let client = use_chat_client();

    if let Some(topic) = &trigger {
        tracing::debug!(trigger = %topic, "Chat opened from trigger");
    }

    // On mount: restore the session history, fetch the service badge, focus the input
    {
        let client = client.clone();
        use_effect(move || {
            let client = client.clone();
            let mut chat = chat;
            browser::focus(MESSAGE_INPUT_ID);

            spawn(async move {
                if let Err(e) = client.restore_history(&mut chat).await {
                    tracing::warn!(
                        operation = LogOperation::RestoreHistory.as_str(),
                        error = %e,
                        "History not restored"
                    );
                }
                let state = client.service_state().await;
                chat.service_state.set(Some(state));
            });
        });
    }

    // Send message handler
    let send_message = {
        let client = client.clone();
        move |_: ()| {
            let client = client.clone();
            let mut chat = chat;
            spawn(async move {
                client.send_message(&mut chat).await;
            });
        }
    };

    // Export has no error path for the user: failures are only logged
    let export_chat = {
        let client = client.clone();
        move |_: ()| {
            let client = client.clone();
            spawn(async move {
                if let Err(e) = export_to_file(&client).await {
                    let error = e.to_string();
                    logging::log_operation_result(LogOperation::ExportChat, Err(error.as_str()));
                }
            });
        }
    };

    let clear_chat = move |_: ()| {
        let client = client.clone();
        let mut chat = chat;
        spawn(async move {
            client.clear_chat(&mut chat).await;
        });
    };

    let service_state = *chat.service_state.read();

    rsx! {
        div { class: "chat-page",
            div { class: "chat-card",
                ChatHeader {
                    message_count: chat.message_count(),
                    trigger: trigger.clone(),
                    service_state,
                    on_export: export_chat,
                    on_clear: clear_chat,
                }
                ChatMessages { transcript: chat.transcript }
                ChatInput { chat, on_submit: send_message }
            }
        }
    }
}
