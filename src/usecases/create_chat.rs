//! Use case for creating a chat in the local store.

use crate::{
    domain::chat::Chat,
    infra::contracts::IdSource,
    store::{intent::ChatIntent, Store},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateChatCommand {
    pub name: String,
    pub created_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateChatError {
    /// Name is empty after trimming whitespace.
    EmptyName,
}

impl CreateChatError {
    pub fn user_message(&self) -> &'static str {
        match self {
            CreateChatError::EmptyName => "Chat name cannot be empty",
        }
    }
}

/// Validates the name and appends a new chat with a generated id. The name
/// is kept as typed.
pub fn create_chat(
    store: &mut Store,
    ids: &mut dyn IdSource,
    command: CreateChatCommand,
) -> Result<Chat, CreateChatError> {
    if command.name.trim().is_empty() {
        return Err(CreateChatError::EmptyName);
    }

    let chat = Chat {
        id: ids.next_chat_id(),
        name: command.name,
        created_by: command.created_by,
    };

    store.dispatch(ChatIntent::Add(chat.clone()));
    Ok(chat)
}
