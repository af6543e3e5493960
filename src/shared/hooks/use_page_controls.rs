//! Page interaction state: the profile dropdown and the trigger cards.
//! Each widget instance owns its own signal.

use crate::domain::models::{DropdownItem, NavTarget, ProfileMenu, TriggerSelection};
use crate::shared::errors::AppError;
use crate::shared::logging;
use crate::shared::services::browser;
use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub struct UseProfileMenuReturn {
    pub menu: Signal<ProfileMenu>,
}

impl UseProfileMenuReturn {
    pub fn toggle(&mut self) {
        self.menu.write().toggle();
        logging::log_profile_menu(self.menu.read().is_open());
    }

    /// Page-level click. Only writes when open so closed menus don't re-render.
    pub fn on_page_click(&mut self, inside_widget: bool) {
        if self.menu.read().is_open() {
            self.menu.write().on_page_click(inside_widget);
        }
    }

    pub fn activate(&mut self, item: DropdownItem) {
        let ack = self.menu.write().activate(item);
        browser::alert(ack);
    }
}

pub fn use_profile_menu() -> UseProfileMenuReturn {
    UseProfileMenuReturn {
        menu: use_signal(ProfileMenu::default),
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct UseTriggerSelectionReturn {
    pub selection: Signal<TriggerSelection>,
}

impl UseTriggerSelectionReturn {
    pub fn select(&mut self, value: &str) {
        self.selection.write().select(value);
    }

    /// Navigation target for the submit button. Without a selection the user gets a
    /// blocking alert and `None` is returned.
    pub fn submit(&self) -> Option<NavTarget> {
        match self.selection.read().submit() {
            Ok(target) => Some(target),
            Err(AppError::NoTriggerSelected) => {
                browser::alert("Пожалуйста, выберите один из вариантов.");
                None
            }
            Err(e) => {
                tracing::error!("Trigger submission failed: {}", e);
                None
            }
        }
    }
}

pub fn use_trigger_selection() -> UseTriggerSelectionReturn {
    UseTriggerSelectionReturn {
        selection: use_signal(TriggerSelection::default),
    }
}
