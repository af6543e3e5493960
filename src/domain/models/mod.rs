// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod message;
pub mod transcript;
pub mod chat_api;
pub mod navigation;
pub mod profile_menu;
pub mod trigger;

pub use message::{HistoryEntry, Message, Role};
pub use transcript::Transcript;
pub use chat_api::{
    ApiErrorBody, ChatExport, ClearChatResponse, SendMessageRequest, SendMessageResponse,
    SendReply, ServiceState, TokenStatus, UNKNOWN_ERROR,
};
pub use navigation::NavTarget;
pub use profile_menu::{DropdownItem, ProfileMenu};
pub use trigger::{TriggerOption, TriggerSelection, TRIGGER_OPTIONS};
