//! Local state store: two slices (chats, messages) composed under one root,
//! pure reducers, selectors and subscriber notification.

pub mod chat_slice;
pub mod intent;
pub mod message_slice;
mod seed;
pub mod selectors;
pub mod slice;

use std::fmt;

use chat_slice::ChatsState;
use intent::Intent;
use message_slice::MessagesState;

/// The whole state tree, keyed by slice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RootState {
    pub chats: ChatsState,
    pub messages: MessagesState,
}

impl RootState {
    /// State at process start: no chats, the sample messages stamped with
    /// `created_at`.
    pub fn seeded(created_at: &str) -> Self {
        Self {
            chats: chat_slice::initial_state(),
            messages: message_slice::initial_state(created_at),
        }
    }

    /// Routes `intent` through both slice reducers.
    pub fn reduce(self, intent: &Intent) -> Self {
        Self {
            chats: chat_slice::reduce(self.chats, intent),
            messages: message_slice::reduce(self.messages, intent),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut()>;

/// Owns the current [`RootState`] and is the only way to change it.
pub struct Store {
    state: RootState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl Store {
    pub fn new(initial: RootState) -> Self {
        Self {
            state: initial,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &RootState {
        &self.state
    }

    /// Applies one intent synchronously, then notifies every subscriber in
    /// registration order.
    pub fn dispatch(&mut self, intent: impl Into<Intent>) {
        let intent = intent.into();
        tracing::debug!(intent = intent.kind(), "dispatching intent");

        let previous = std::mem::take(&mut self.state);
        self.state = previous.reduce(&intent);

        for (_, subscriber) in &mut self.subscribers {
            subscriber();
        }
    }

    /// Registers `callback` to run after every dispatch. Callbacks receive no
    /// payload; they read the new snapshot through [`Store::state`].
    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// Returns the store module name for smoke checks.
pub fn module_name() -> &'static str {
    "store"
}
