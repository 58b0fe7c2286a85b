//! Use case for editing the text of one of the current user's messages.

use crate::store::{intent::MessageIntent, selectors, Store};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditMessageCommand {
    pub chat_id: String,
    pub message_id: String,
    pub text: String,
    pub user: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMessageError {
    EmptyText,
    /// The message is not in this chat or was sent by someone else.
    NotOwnMessage,
}

impl EditMessageError {
    pub fn user_message(&self) -> &'static str {
        match self {
            EditMessageError::EmptyText => "Message text cannot be empty",
            EditMessageError::NotOwnMessage => "You can only edit your own messages.",
        }
    }
}

/// Replaces a message's text. The lookup is scoped to the chat's messages,
/// and only the sender may edit.
pub fn edit_message(store: &mut Store, command: EditMessageCommand) -> Result<(), EditMessageError> {
    if command.text.trim().is_empty() {
        return Err(EditMessageError::EmptyText);
    }

    let owned = selectors::messages_by_chat_id(store.state(), &command.chat_id)
        .into_iter()
        .find(|message| message.id == command.message_id)
        .is_some_and(|message| message.is_sent_by(&command.user));
    if !owned {
        return Err(EditMessageError::NotOwnMessage);
    }

    store.dispatch(MessageIntent::Update {
        id: command.message_id,
        text: command.text,
    });
    Ok(())
}
