// Element ids the stylesheet and page scripts rely on

pub const CHAT_MESSAGES_ID: &str = "chat-messages";
pub const MESSAGE_INPUT_ID: &str = "message-input";
pub const TYPING_INDICATOR_ID: &str = "typing-indicator";
pub const MESSAGE_COUNT_ID: &str = "message-count";

pub const AVATAR_BUTTON_ID: &str = "avatarBtn";
pub const DROPDOWN_MENU_ID: &str = "dropdownMenu";
pub const PROFILE_WIDGET_ID: &str = "profileWidget";

pub const START_BUTTON_ID: &str = "startFreeBtn";
pub const LEARN_MORE_BUTTON_ID: &str = "learnMoreBtn";
pub const SUBMIT_TRIGGER_ID: &str = "submitTrigger";

/// `name` of the radio inputs inside the trigger cards
pub const TRIGGER_INPUT_NAME: &str = "trigger";
