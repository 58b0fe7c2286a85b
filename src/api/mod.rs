//! REST client for the external chat service: chats and messages-per-chat
//! resources over JSON.

mod client;
mod error;

pub use client::RestClient;
pub use error::{ApiError, ApiOperation};

use crate::domain::{chat::Chat, message::Message};

/// Backend operations. Every call is a single attempt; any failure collapses
/// into an [`ApiError`] for that operation.
pub trait ChatApi {
    fn create_chat(&self, name: &str, created_by: &str) -> Result<Chat, ApiError>;

    fn list_chats(&self) -> Result<Vec<Chat>, ApiError>;

    fn delete_chat(&self, chat_id: &str) -> Result<(), ApiError>;

    fn create_message(&self, chat_id: &str, text: &str, sender: &str)
        -> Result<Message, ApiError>;

    fn list_messages(&self, chat_id: &str) -> Result<Vec<Message>, ApiError>;
}

/// Returns the api module name for smoke checks.
pub fn module_name() -> &'static str {
    "api"
}
