use crate::domain::message::Message;

use super::{
    intent::{Intent, MessageIntent},
    slice::SliceState,
};

pub type MessagesState = SliceState<Message>;

/// Builds the message slice with the bundled sample conversation, stamped
/// with `created_at`.
pub fn initial_state(created_at: &str) -> MessagesState {
    MessagesState::with_items(super::seed::sample_messages(created_at))
}

/// Applies one intent to the message slice.
pub fn reduce(state: MessagesState, intent: &Intent) -> MessagesState {
    let Intent::Messages(intent) = intent else {
        return state;
    };

    match intent {
        MessageIntent::FetchStart => state.fetch_start(),
        MessageIntent::FetchSuccess(messages) => state.fetch_success(messages.clone()),
        MessageIntent::FetchFailure(message) => state.fetch_failure(message.clone()),
        MessageIntent::Add(message) => state.append(message.clone()),
        MessageIntent::Remove(id) => state.remove_where(|message| message.id == *id),
        MessageIntent::Update { id, text } => update_text(state, id, text),
    }
}

/// Rewrites the text of the first message with `id`. Unknown ids leave the
/// state as it was.
fn update_text(mut state: MessagesState, id: &str, text: &str) -> MessagesState {
    if let Some(message) = state.items.iter_mut().find(|message| message.id == id) {
        message.text = text.to_owned();
    }
    state
}
