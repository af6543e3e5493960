// Domain services (business logic)

pub mod chat_client;

pub use chat_client::{ChatClient, ChatTransport, ChatView, SendOutcome};
