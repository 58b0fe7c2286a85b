//! Read-only projections of [`RootState`].

use crate::domain::{chat::Chat, message::Message};

use super::RootState;

pub fn chats(state: &RootState) -> &[Chat] {
    &state.chats.items
}

pub fn chats_loading(state: &RootState) -> bool {
    state.chats.loading
}

pub fn chats_error(state: &RootState) -> Option<&str> {
    state.chats.error.as_deref()
}

/// First chat with `chat_id`, or `None`.
pub fn chat_by_id<'a>(state: &'a RootState, chat_id: &str) -> Option<&'a Chat> {
    state.chats.items.iter().find(|chat| chat.id == chat_id)
}

/// Chats whose name contains `query`, ignoring case. An empty query matches
/// everything.
pub fn chats_matching<'a>(state: &'a RootState, query: &str) -> Vec<&'a Chat> {
    let query = query.to_lowercase();
    state
        .chats
        .items
        .iter()
        .filter(|chat| chat.name.to_lowercase().contains(&query))
        .collect()
}

/// What the chat list screen can show, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatListStatus<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Ready,
}

pub fn chat_list_status(state: &RootState) -> ChatListStatus<'_> {
    if chats_loading(state) {
        ChatListStatus::Loading
    } else if let Some(error) = chats_error(state) {
        ChatListStatus::Error(error)
    } else if chats(state).is_empty() {
        ChatListStatus::Empty
    } else {
        ChatListStatus::Ready
    }
}

pub fn messages(state: &RootState) -> &[Message] {
    &state.messages.items
}

/// Messages of one chat, in store order.
pub fn messages_by_chat_id<'a>(state: &'a RootState, chat_id: &str) -> Vec<&'a Message> {
    state
        .messages
        .items
        .iter()
        .filter(|message| message.chat_id == chat_id)
        .collect()
}

pub fn message_by_id<'a>(state: &'a RootState, message_id: &str) -> Option<&'a Message> {
    state
        .messages
        .items
        .iter()
        .find(|message| message.id == message_id)
}

pub fn messages_loading(state: &RootState) -> bool {
    state.messages.loading
}

pub fn messages_error(state: &RootState) -> Option<&str> {
    state.messages.error.as_deref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{
        chat_slice::ChatsState,
        intent::{ChatIntent, Intent, MessageIntent},
        message_slice::MessagesState,
    };

    const CREATED_AT: &str = "2026-02-14T10:00:00.000Z";

    fn ids(messages: &[&Message]) -> Vec<String> {
        messages.iter().map(|message| message.id.clone()).collect()
    }

    #[test]
    fn chat_list_status_prefers_loading_then_error_then_empty() {
        let mut state = RootState::seeded(CREATED_AT);
        assert_eq!(chat_list_status(&state), ChatListStatus::Empty);

        state.chats = ChatsState::with_items(vec![Chat::new("10", "General", "User")]);
        assert_eq!(chat_list_status(&state), ChatListStatus::Ready);

        state.chats.error = Some("boom".to_owned());
        assert_eq!(chat_list_status(&state), ChatListStatus::Error("boom"));

        state.chats.loading = true;
        assert_eq!(chat_list_status(&state), ChatListStatus::Loading);
    }

    #[test]
    fn filters_seed_messages_by_chat_id() {
        let state = RootState::seeded(CREATED_AT);

        assert_eq!(ids(&messages_by_chat_id(&state, "10")), vec!["1", "2"]);
        assert_eq!(ids(&messages_by_chat_id(&state, "15")), vec!["3", "4"]);
        assert!(messages_by_chat_id(&state, "99").is_empty());
    }

    #[test]
    fn filter_by_chat_id_is_stable_across_interleaving() {
        let mut state = RootState::seeded(CREATED_AT);
        state.messages = MessagesState::with_items(
            ["a", "b", "c", "d", "e"]
                .iter()
                .zip(["10", "15", "10", "15", "10"])
                .map(|(id, chat_id)| Message {
                    id: (*id).to_owned(),
                    text: String::new(),
                    sender: "userA".to_owned(),
                    chat_id: chat_id.to_owned(),
                    created_at: CREATED_AT.to_owned(),
                })
                .collect(),
        );

        assert_eq!(ids(&messages_by_chat_id(&state, "10")), vec!["a", "c", "e"]);
    }

    #[test]
    fn fetch_success_makes_all_chats_return_exactly_the_list() {
        let mut state = RootState::default();
        state.chats = ChatsState::with_items(vec![Chat::new("1", "Old", "User")]);
        let fetched = vec![Chat::new("2", "Fresh", "User")];

        let state = state.reduce(&Intent::Chats(ChatIntent::FetchSuccess(fetched.clone())));

        assert_eq!(chats(&state), fetched.as_slice());
    }

    #[test]
    fn chat_by_id_returns_first_duplicate() {
        let state = RootState::default()
            .reduce(&ChatIntent::Add(Chat::new("12", "First", "User")).into())
            .reduce(&ChatIntent::Add(Chat::new("12", "Second", "User")).into());

        assert_eq!(chats(&state).len(), 2);
        assert_eq!(
            chat_by_id(&state, "12").map(|chat| chat.name.as_str()),
            Some("First")
        );
    }

    #[test]
    fn chat_by_id_distinguishes_absence_from_empty_record() {
        let state = RootState::default().reduce(&ChatIntent::Add(Chat::new("", "", "")).into());

        assert_eq!(chat_by_id(&state, "missing"), None);
        assert_eq!(chat_by_id(&state, ""), Some(&Chat::new("", "", "")));
    }

    #[test]
    fn chats_matching_ignores_case_and_keeps_order() {
        let mut state = RootState::default();
        state.chats = ChatsState::with_items(vec![
            Chat::new("1", "Backend", "User"),
            Chat::new("2", "Design", "User"),
            Chat::new("3", "backlog", "User"),
        ]);

        let names: Vec<_> = chats_matching(&state, "BACK")
            .iter()
            .map(|chat| chat.name.as_str())
            .collect();

        assert_eq!(names, vec!["Backend", "backlog"]);
        assert_eq!(chats_matching(&state, "").len(), 3);
    }

    #[test]
    fn status_selectors_reflect_slice_flags() {
        let state = RootState::seeded(CREATED_AT)
            .reduce(&ChatIntent::FetchStart.into())
            .reduce(&MessageIntent::FetchFailure("boom".to_owned()).into());

        assert!(chats_loading(&state));
        assert_eq!(chats_error(&state), None);
        assert!(!messages_loading(&state));
        assert_eq!(messages_error(&state), Some("boom"));
        assert_eq!(messages(&state).len(), 4);
    }

    #[test]
    fn message_by_id_finds_first_match() {
        let state = RootState::seeded(CREATED_AT);

        assert_eq!(
            message_by_id(&state, "3").map(|message| message.sender.as_str()),
            Some("userA")
        );
        assert!(message_by_id(&state, "404").is_none());
    }
}
