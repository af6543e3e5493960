use crate::app::components::TriggerCard;
use crate::app::pages::routes::go_to;
use crate::shared::constants::SUBMIT_TRIGGER_ID;
use crate::shared::hooks::use_trigger_selection;
use dioxus::prelude::*;

/// "What brings you here" page: pick one trigger card, then continue to the chat
#[component]
pub fn ProblemPage() -> Element {
    let mut trigger = use_trigger_selection();
    let selection = trigger.selection.read().clone();

    rsx! {
        div { class: "c-problem",
            h1 { class: "c-problem__title", "Что вас беспокоит?" }
            p { class: "c-problem__subtitle",
                "Выберите то, что ближе всего к вашей ситуации"
            }

            div { class: "c-problem__grid", role: "radiogroup",
                for option in selection.options().iter().copied() {
                    TriggerCard {
                        key: "{option.value}",
                        option,
                        selected: selection.is_selected(option.value),
                        on_select: move |value: &'static str| trigger.select(value),
                    }
                }
            }

            button {
                id: SUBMIT_TRIGGER_ID,
                class: "btn btn-primary btn-lg c-problem__submit",
                onclick: move |_| {
                    if let Some(target) = trigger.submit() {
                        go_to(target);
                    }
                },
                "Продолжить"
            }
        }
    }
}
