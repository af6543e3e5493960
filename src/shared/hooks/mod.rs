// Custom Dioxus hooks
pub mod use_chat_state;
pub mod use_page_controls;

pub use use_chat_state::{use_chat_client, use_chat_state, ChatState};
pub use use_page_controls::{
    use_profile_menu, use_trigger_selection, UseProfileMenuReturn, UseTriggerSelectionReturn,
};
