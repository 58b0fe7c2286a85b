//! Use case for deleting one of the current user's messages.

use crate::store::{intent::MessageIntent, selectors, Store};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteMessageCommand {
    pub chat_id: String,
    pub message_id: String,
    pub user: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteMessageError {
    /// The message is not in this chat or was sent by someone else.
    NotOwnMessage,
}

impl DeleteMessageError {
    pub fn user_message(&self) -> &'static str {
        match self {
            DeleteMessageError::NotOwnMessage => "You can only delete your own messages.",
        }
    }
}

pub fn delete_message(
    store: &mut Store,
    command: DeleteMessageCommand,
) -> Result<(), DeleteMessageError> {
    let owned = selectors::messages_by_chat_id(store.state(), &command.chat_id)
        .into_iter()
        .find(|message| message.id == command.message_id)
        .is_some_and(|message| message.is_sent_by(&command.user));
    if !owned {
        return Err(DeleteMessageError::NotOwnMessage);
    }

    store.dispatch(MessageIntent::Remove(command.message_id));
    Ok(())
}
