pub mod chat_header;
pub mod chat_input;
pub mod chat_messages;
pub mod message_item;
pub mod profile_widget;
pub mod trigger_card;

pub use chat_header::ChatHeader;
pub use chat_input::ChatInput;
pub use chat_messages::ChatMessages;
pub use message_item::MessageItem;
pub use profile_widget::ProfileWidget;
pub use trigger_card::TriggerCard;
