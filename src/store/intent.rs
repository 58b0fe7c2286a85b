use crate::domain::{chat::Chat, message::Message};

/// A request to change store state. Each variant is addressed to exactly one
/// slice; the other slice passes its state through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Chats(ChatIntent),
    Messages(MessageIntent),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatIntent {
    FetchStart,
    FetchSuccess(Vec<Chat>),
    FetchFailure(String),
    Add(Chat),
    Remove(String),
    SetLoading(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageIntent {
    FetchStart,
    FetchSuccess(Vec<Message>),
    FetchFailure(String),
    Add(Message),
    Remove(String),
    Update { id: String, text: String },
}

impl Intent {
    /// Stable name used in logs, e.g. `chats/add`.
    pub fn kind(&self) -> &'static str {
        match self {
            Intent::Chats(intent) => match intent {
                ChatIntent::FetchStart => "chats/fetchStart",
                ChatIntent::FetchSuccess(_) => "chats/fetchSuccess",
                ChatIntent::FetchFailure(_) => "chats/fetchFailure",
                ChatIntent::Add(_) => "chats/add",
                ChatIntent::Remove(_) => "chats/remove",
                ChatIntent::SetLoading(_) => "chats/setLoading",
            },
            Intent::Messages(intent) => match intent {
                MessageIntent::FetchStart => "messages/fetchStart",
                MessageIntent::FetchSuccess(_) => "messages/fetchSuccess",
                MessageIntent::FetchFailure(_) => "messages/fetchFailure",
                MessageIntent::Add(_) => "messages/add",
                MessageIntent::Remove(_) => "messages/remove",
                MessageIntent::Update { .. } => "messages/update",
            },
        }
    }
}

impl From<ChatIntent> for Intent {
    fn from(intent: ChatIntent) -> Self {
        Intent::Chats(intent)
    }
}

impl From<MessageIntent> for Intent {
    fn from(intent: MessageIntent) -> Self {
        Intent::Messages(intent)
    }
}
