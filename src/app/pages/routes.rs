use crate::app::layouts::Navbar;
use crate::app::pages::{ChatPage, LandingPage, ProblemPage};
use crate::config::ClientConfig;
use crate::domain::models::NavTarget;
use crate::shared::hooks::use_profile_menu;
use crate::shared::logging;

use dioxus::prelude::*;

const FONT_AWESOME: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    // Landing page
    #[route("/")]
    Home {},

    // Trigger selection
    #[route("/problem")]
    Problem {},

    // Chat, optionally opened from a trigger card
    #[route("/chat?:trigger")]
    Chat { trigger: String },
}

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Problem => Route::Problem {},
            NavTarget::Chat => Route::Chat {
                trigger: String::new(),
            },
            NavTarget::ChatWithTrigger(trigger) => Route::Chat { trigger },
        }
    }
}

/// Navigate to one of the fixed page targets. Must be called under the router.
pub fn go_to(target: NavTarget) {
    logging::log_navigation(&target.path());
    navigator().push(Route::from(target));
}

#[component]
pub fn App() -> Element {
    use_context_provider(ClientConfig::from_env);

    use_effect(|| {
        tracing::info!("Steppy app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    // Use asset!() macro to ensure CSS is bundled and served correctly
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let mut profile_menu = use_profile_menu();

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        document::Link { rel: "stylesheet", href: FONT_AWESOME }
        // Any click reaching the layout came from outside the profile widget
        div {
            class: "c-layout",
            onclick: move |_| profile_menu.on_page_click(false),

            Navbar { profile_menu }

            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! { LandingPage {} }
}

#[component]
fn Problem() -> Element {
    rsx! { ProblemPage {} }
}

#[component]
fn Chat(trigger: String) -> Element {
    let trigger = (!trigger.is_empty()).then_some(trigger);
    rsx! { ChatPage { trigger } }
}
