//! Profile dropdown in the navbar

/// Entries of the profile dropdown.
///
/// Profile, settings and logout are demo placeholders: activating one only produces an
/// acknowledgement text for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownItem {
    Profile,
    Settings,
    Logout,
}

impl DropdownItem {
    pub const ALL: [DropdownItem; 3] = [
        DropdownItem::Profile,
        DropdownItem::Settings,
        DropdownItem::Logout,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DropdownItem::Profile => "Мой профиль",
            DropdownItem::Settings => "Настройки",
            DropdownItem::Logout => "Выйти",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DropdownItem::Profile => "fa-user-circle",
            DropdownItem::Settings => "fa-cog",
            DropdownItem::Logout => "fa-sign-out-alt",
        }
    }

    pub fn acknowledgement(&self) -> &'static str {
        match self {
            DropdownItem::Profile => "Переход в профиль (демо)",
            DropdownItem::Settings => "Открыть настройки (демо)",
            DropdownItem::Logout => "Выход из аккаунта (демо-режим)",
        }
    }
}

/// Open/closed state of the dropdown, owned by the widget instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileMenu {
    open: bool,
}

impl ProfileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Avatar button click
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A click somewhere on the page. Clicks inside the widget never collapse it.
    pub fn on_page_click(&mut self, inside_widget: bool) {
        if !inside_widget {
            self.close();
        }
    }

    /// Item click: returns the acknowledgement to show, and always collapses afterwards.
    pub fn activate(&mut self, item: DropdownItem) -> &'static str {
        let ack = item.acknowledgement();
        self.close();
        ack
    }

    /// Value of the avatar button's `aria-expanded`
    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    pub fn menu_class(&self) -> &'static str {
        if self.open {
            "dropdown-menu show"
        } else {
            "dropdown-menu"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_state() {
        let mut menu = ProfileMenu::default();
        assert_eq!(menu.aria_expanded(), "false");

        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.aria_expanded(), "true");
        assert_eq!(menu.menu_class(), "dropdown-menu show");

        menu.toggle();
        assert!(!menu.is_open());
        assert_eq!(menu.menu_class(), "dropdown-menu");
    }

    #[test]
    fn test_outside_click_collapses() {
        let mut menu = ProfileMenu::default();
        menu.toggle();
        menu.on_page_click(false);
        assert!(!menu.is_open());
        assert_eq!(menu.aria_expanded(), "false");
    }

    #[test]
    fn test_inside_click_keeps_open() {
        let mut menu = ProfileMenu::default();
        menu.toggle();
        menu.on_page_click(true);
        assert!(menu.is_open());
    }

    #[test]
    fn test_item_activation_always_closes() {
        for item in DropdownItem::ALL {
            let mut menu = ProfileMenu::default();
            menu.toggle();
            let ack = menu.activate(item);
            assert!(ack.contains("демо"));
            assert!(!menu.is_open());
        }
    }
}
