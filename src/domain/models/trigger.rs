//! Trigger cards on the `/problem` page
//!
//! A fixed set of cards behaving as one radio group. Submitting turns the selection
//! into a navigation to the chat page.

use crate::domain::models::NavTarget;
use crate::shared::errors::{AppError, Result};

/// One selectable card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerOption {
    pub value: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const TRIGGER_OPTIONS: &[TriggerOption] = &[
    TriggerOption {
        value: "stress",
        title: "Стресс",
        description: "Давление на работе или учёбе, не получается расслабиться",
        icon: "fa-bolt",
    },
    TriggerOption {
        value: "anxiety",
        title: "Тревога",
        description: "Беспокойство без явной причины, навязчивые мысли",
        icon: "fa-cloud-rain",
    },
    TriggerOption {
        value: "procrastination",
        title: "Прокрастинация",
        description: "Откладываю важные дела и не могу начать",
        icon: "fa-hourglass-half",
    },
    TriggerOption {
        value: "motivation",
        title: "Нет мотивации",
        description: "Пропал интерес к тому, что раньше радовало",
        icon: "fa-battery-quarter",
    },
];

/// Single-select state over a fixed set of options
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerSelection {
    options: &'static [TriggerOption],
    selected: Option<usize>,
}

impl Default for TriggerSelection {
    fn default() -> Self {
        Self::new(TRIGGER_OPTIONS)
    }
}

impl TriggerSelection {
    pub fn new(options: &'static [TriggerOption]) -> Self {
        Self {
            options,
            selected: None,
        }
    }

    pub fn options(&self) -> &'static [TriggerOption] {
        self.options
    }

    /// Clear every card, then mark the one carrying `value`. Unknown values clear only.
    pub fn select(&mut self, value: &str) {
        self.selected = self.options.iter().position(|o| o.value == value);
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected_value() == Some(value)
    }

    pub fn selected_value(&self) -> Option<&'static str> {
        self.selected.map(|i| self.options[i].value)
    }

    /// Navigation target for the submit button, or an error when nothing is selected
    pub fn submit(&self) -> Result<NavTarget> {
        self.selected_value()
            .map(|value| NavTarget::ChatWithTrigger(value.to_string()))
            .ok_or(AppError::NoTriggerSelected)
    }
}
