use crate::app::pages::routes::go_to;
use crate::domain::models::NavTarget;
use crate::shared::constants::{LEARN_MORE_BUTTON_ID, START_BUTTON_ID};
use dioxus::prelude::*;

/// Feature card data for display
#[derive(Clone)]
struct FeatureCardData {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[FeatureCardData] = &[
    FeatureCardData {
        icon: "fa-comments",
        title: "Разговор без осуждения",
        description: "Steppy выслушает и поможет разложить ситуацию по шагам",
    },
    FeatureCardData {
        icon: "fa-shoe-prints",
        title: "Маленькие шаги",
        description: "Конкретные действия на сегодня вместо абстрактных советов",
    },
    FeatureCardData {
        icon: "fa-download",
        title: "История под рукой",
        description: "Экспортируйте диалог в файл и возвращайтесь к нему позже",
    },
];

/// Marketing landing page with the two entry points
#[component]
pub fn LandingPage() -> Element {
    rsx! {
        div { class: "c-landing",
            section { class: "c-landing__hero",
                h1 { class: "c-landing__title", "Steppy — ваш помощник на каждый шаг" }
                p { class: "c-landing__subtitle",
                    "ИИ-собеседник на базе GigaChat, который помогает справиться со стрессом, тревогой и прокрастинацией"
                }
                div { class: "c-landing__actions",
                    button {
                        id: START_BUTTON_ID,
                        class: "btn btn-primary btn-lg",
                        onclick: move |_| go_to(NavTarget::Problem),
                        "Начать бесплатно"
                    }
                    button {
                        id: LEARN_MORE_BUTTON_ID,
                        class: "btn btn-outline-primary btn-lg",
                        onclick: move |_| go_to(NavTarget::Chat),
                        "Узнать больше"
                    }
                }
            }

            section { class: "c-landing__features",
                for feature in FEATURES {
                    div { class: "c-feature-card",
                        div { class: "c-feature-card__icon", i { class: "fas {feature.icon}" } }
                        h3 { class: "c-feature-card__title", "{feature.title}" }
                        p { class: "c-feature-card__description", "{feature.description}" }
                    }
                }
            }
        }
    }
}
