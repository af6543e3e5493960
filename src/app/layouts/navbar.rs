use crate::app::components::ProfileWidget;
use crate::app::pages::routes::Route;
use crate::shared::hooks::UseProfileMenuReturn;
use dioxus::prelude::*;

/// Global navbar with logo, section links and the profile widget
#[component]
pub fn Navbar(profile_menu: UseProfileMenuReturn) -> Element {
    rsx! {
        nav { class: "c-navbar",
            Link {
                to: Route::Home {},
                class: "c-navbar__logo",
                i { class: "fas fa-shoe-prints me-2" }
                "Steppy"
            }

            div { class: "c-navbar__links",
                Link { to: Route::Problem {}, class: "c-navbar__link", "С чего начать" }
                Link {
                    to: Route::Chat { trigger: String::new() },
                    class: "c-navbar__link",
                    "Чат"
                }
            }

            div { class: "c-navbar__actions",
                ProfileWidget { profile_menu }
            }
        }
    }
}
