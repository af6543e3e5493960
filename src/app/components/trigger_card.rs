use crate::domain::models::TriggerOption;
use crate::shared::constants::TRIGGER_INPUT_NAME;
use dioxus::prelude::*;

/// One selectable card. The radio input mirrors `selected` for form semantics; the
/// click handler on the card is what changes the selection.
#[component]
pub fn TriggerCard(
    option: TriggerOption,
    selected: bool,
    on_select: EventHandler<&'static str>,
) -> Element {
    let card_class = if selected {
        "option-card selected"
    } else {
        "option-card"
    };

    rsx! {
        div {
            class: "{card_class}",
            role: "radio",
            aria_checked: "{selected}",
            onclick: move |_| on_select.call(option.value),
            input {
                r#type: "radio",
                class: "option-card__radio",
                name: TRIGGER_INPUT_NAME,
                value: option.value,
                checked: selected,
            }
            div { class: "option-card__icon", i { class: "fas {option.icon}" } }
            h3 { class: "option-card__title", "{option.title}" }
            p { class: "option-card__description", "{option.description}" }
        }
    }
}
