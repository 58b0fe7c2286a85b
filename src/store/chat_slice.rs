use crate::domain::chat::Chat;

use super::{
    intent::{ChatIntent, Intent},
    slice::SliceState,
};

pub type ChatsState = SliceState<Chat>;

/// Starts with no chats; they are created on the create-chat screen.
pub fn initial_state() -> ChatsState {
    ChatsState::default()
}

/// Applies one intent to the chat slice.
pub fn reduce(state: ChatsState, intent: &Intent) -> ChatsState {
    let Intent::Chats(intent) = intent else {
        return state;
    };

    match intent {
        ChatIntent::FetchStart => state.fetch_start(),
        ChatIntent::FetchSuccess(chats) => state.fetch_success(chats.clone()),
        ChatIntent::FetchFailure(message) => state.fetch_failure(message.clone()),
        ChatIntent::Add(chat) => state.append(chat.clone()),
        ChatIntent::Remove(chat_id) => state.remove_where(|chat| chat.id == *chat_id),
        ChatIntent::SetLoading(loading) => ChatsState {
            loading: *loading,
            ..state
        },
    }
}
