use crate::domain::models::DropdownItem;
use crate::shared::constants::{AVATAR_BUTTON_ID, DROPDOWN_MENU_ID, PROFILE_WIDGET_ID};
use crate::shared::hooks::UseProfileMenuReturn;
use dioxus::prelude::*;

/// Avatar button with its dropdown.
///
/// Clicks inside the widget stop here, so the layout's page click handler only ever
/// sees clicks from outside it.
#[component]
pub fn ProfileWidget(profile_menu: UseProfileMenuReturn) -> Element {
    let mut profile_menu = profile_menu;
    let (aria_expanded, menu_class) = {
        let menu = profile_menu.menu.read();
        (menu.aria_expanded(), menu.menu_class())
    };

    rsx! {
        div {
            id: PROFILE_WIDGET_ID,
            class: "profile-widget",
            onclick: move |evt| {
                evt.stop_propagation();
                profile_menu.on_page_click(true);
            },

            button {
                id: AVATAR_BUTTON_ID,
                class: "profile-widget__avatar",
                aria_haspopup: "true",
                aria_expanded: "{aria_expanded}",
                onclick: move |evt| {
                    evt.stop_propagation();
                    profile_menu.toggle();
                },
                i { class: "fas fa-user" }
            }

            ul {
                id: DROPDOWN_MENU_ID,
                class: "{menu_class}",
                onclick: move |evt| evt.stop_propagation(),
                for item in DropdownItem::ALL {
                    li {
                        a {
                            class: "dropdown-item",
                            href: "#",
                            onclick: move |evt| {
                                evt.prevent_default();
                                evt.stop_propagation();
                                profile_menu.activate(item);
                            },
                            i { class: "fas {item.icon()} me-2" }
                            "{item.label()}"
                        }
                    }
                }
            }
        }
    }
}
