//! Use case for sending a message into the local store.

use crate::{
    domain::message::Message,
    infra::contracts::IdSource,
    store::{intent::MessageIntent, Store},
};

/// Command to post a message to a specific chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageCommand {
    pub chat_id: String,
    pub text: String,
    pub sender: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendMessageError {
    /// Message text is empty after trimming whitespace.
    EmptyMessage,
}

/// Appends a new message to the store.
///
/// The text is stored exactly as typed; only the emptiness check trims it.
/// The creation timestamp doubles as the message id.
///
/// # Errors
/// Returns `SendMessageError::EmptyMessage` if text is empty/whitespace, in
/// which case nothing is dispatched.
pub fn send_message(
    store: &mut Store,
    ids: &mut dyn IdSource,
    command: SendMessageCommand,
) -> Result<Message, SendMessageError> {
    if command.text.trim().is_empty() {
        return Err(SendMessageError::EmptyMessage);
    }

    let created_at = ids.timestamp();
    let message = Message {
        id: created_at.clone(),
        text: command.text,
        sender: command.sender,
        chat_id: command.chat_id,
        created_at,
    };

    store.dispatch(MessageIntent::Add(message.clone()));
    Ok(message)
}
