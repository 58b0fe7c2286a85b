use std::time::{Duration, Instant};

use anyhow::Result;

use crate::{
    domain::{
        events::{AppEvent, KeyInput},
        shell_state::{Screen, ShellState},
    },
    infra::{config::AppConfig, contracts::IdSource},
    store::{
        intent::ChatIntent,
        selectors::{self, ChatListStatus},
        Store,
    },
};

use super::{
    contracts::ShellOrchestrator,
    create_chat::{create_chat, CreateChatCommand},
    delete_message::{delete_message, DeleteMessageCommand},
    edit_message::{edit_message, EditMessageCommand},
    send_message::{send_message, SendMessageCommand},
};

const CHAT_LIST_LOADING_TIMED_OUT: &str = "CHAT_LIST_LOADING_TIMED_OUT";

/// Per-session knobs taken from config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellSettings {
    pub current_user: String,
    pub loading_timeout: Duration,
}

impl ShellSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            current_user: config.user.id.clone(),
            loading_timeout: Duration::from_millis(config.ui.loading_timeout_ms),
        }
    }
}

pub struct DefaultShellOrchestrator<I>
where
    I: IdSource,
{
    state: ShellState,
    store: Store,
    ids: I,
    settings: ShellSettings,
    loading_deadline: Option<Instant>,
}

impl<I> DefaultShellOrchestrator<I>
where
    I: IdSource,
{
    pub fn new(store: Store, ids: I, settings: ShellSettings) -> Self {
        Self {
            state: ShellState::default(),
            store,
            ids,
            settings,
            loading_deadline: None,
        }
    }

    /// Starts the chat list: marks chats as loading and arms the one-shot
    /// deadline that clears the flag again.
    pub fn mount_chat_list(&mut self, now: Instant) {
        self.store.dispatch(ChatIntent::FetchStart);
        self.loading_deadline = Some(now + self.settings.loading_timeout);
    }

    /// Fires the loading deadline if it has passed. Fires at most once.
    pub fn poll_timers(&mut self, now: Instant) {
        let Some(deadline) = self.loading_deadline else {
            return;
        };
        if now < deadline {
            return;
        }

        self.loading_deadline = None;
        tracing::debug!(
            code = CHAT_LIST_LOADING_TIMED_OUT,
            "chat list loading deadline elapsed"
        );
        self.store.dispatch(ChatIntent::SetLoading(false));
    }

    fn handle_key(&mut self, key: KeyInput) {
        if self.state.alert().is_some() {
            if !key.ctrl && matches!(key.key.as_str(), "enter" | "esc") {
                self.state.dismiss_alert();
            }
            return;
        }

        match self.state.screen() {
            Screen::ChatList => self.handle_chat_list_key(key),
            Screen::ChatDetail => self.handle_chat_detail_key(key),
            Screen::CreateChat => self.handle_create_chat_key(key),
        }
    }

    fn visible_chat_ids(&self) -> Vec<String> {
        let query = self.state.chat_list().search().text();
        selectors::chats_matching(self.store.state(), query)
            .into_iter()
            .map(|chat| chat.id.clone())
            .collect()
    }

    fn handle_chat_list_key(&mut self, key: KeyInput) {
        let status = selectors::chat_list_status(self.store.state());
        if status != ChatListStatus::Ready {
            // Only the status text is on screen, so no row or search box can be acted on.
            self.state.chat_list_mut().set_search_focused(false);
            match key.key.as_str() {
                "n" if !key.ctrl => self.state.open_create_chat(),
                "q" if !key.ctrl => self.state.stop(),
                _ => {}
            }
            return;
        }

        if self.state.chat_list().is_search_focused() {
            match key.key.as_str() {
                "enter" | "esc" if !key.ctrl => {
                    self.state.chat_list_mut().set_search_focused(false);
                }
                _ => {
                    if self.state.chat_list_mut().search_mut().apply_key(&key) {
                        let len = self.visible_chat_ids().len();
                        self.state.chat_list_mut().clamp_selection(len);
                    }
                }
            }
            return;
        }

        if key.ctrl {
            return;
        }

        let visible = self.visible_chat_ids();
        // An unset selection behaves like the first row, which is what the list highlights.
        self.state.chat_list_mut().clamp_selection(visible.len());
        match key.key.as_str() {
            "/" => self.state.chat_list_mut().set_search_focused(true),
            "j" | "down" => self.state.chat_list_mut().select_next(visible.len()),
            "k" | "up" => self.state.chat_list_mut().select_previous(visible.len()),
            "n" => self.state.open_create_chat(),
            "q" => self.state.stop(),
            "enter" => {
                if let Some(chat_id) = self.selected_chat_id(&visible) {
                    let count = self.message_count(&chat_id);
                    self.state.open_chat(chat_id, count);
                }
            }
            "d" => {
                if let Some(chat_id) = self.selected_chat_id(&visible) {
                    self.store.dispatch(ChatIntent::Remove(chat_id));
                    let len = self.visible_chat_ids().len();
                    self.state.chat_list_mut().clamp_selection(len);
                }
            }
            _ => {}
        }
    }

    fn selected_chat_id(&self, visible: &[String]) -> Option<String> {
        self.state
            .chat_list()
            .selected_index()
            .and_then(|index| visible.get(index))
            .cloned()
    }

    fn handle_create_chat_key(&mut self, key: KeyInput) {
        match key.key.as_str() {
            "esc" if !key.ctrl => self.state.go_home(),
            "enter" if !key.ctrl => {
                let command = CreateChatCommand {
                    name: self.state.create_chat().name().text().to_owned(),
                    created_by: self.settings.current_user.clone(),
                };
                match create_chat(&mut self.store, &mut self.ids, command) {
                    Ok(_) => self.state.create_chat_mut().name_mut().clear(),
                    Err(error) => self.state.show_alert(error.user_message()),
                }
            }
            _ => {
                self.state.create_chat_mut().name_mut().apply_key(&key);
            }
        }
    }

    fn message_count(&self, chat_id: &str) -> usize {
        selectors::messages_by_chat_id(self.store.state(), chat_id).len()
    }

    fn handle_chat_detail_key(&mut self, key: KeyInput) {
        let Some(chat_id) = self.state.chat_detail().chat_id().map(str::to_owned) else {
            self.state.go_home();
            return;
        };

        if self.state.chat_detail().editing().is_some() {
            self.handle_edit_modal_key(&chat_id, key);
            return;
        }

        if self.state.chat_detail().is_composing() {
            self.handle_composer_key(&chat_id, key);
            return;
        }

        if key.ctrl {
            return;
        }

        let message_count = self.message_count(&chat_id);
        match key.key.as_str() {
            "esc" => self.state.go_home(),
            "i" => self.state.chat_detail_mut().set_composing(true),
            "j" | "down" => self.state.chat_detail_mut().select_next(message_count),
            "k" | "up" => self
                .state
                .chat_detail_mut()
                .select_previous(message_count),
            "e" | "enter" => {
                let selected = self.state.chat_detail().selected_index().and_then(|index| {
                    selectors::messages_by_chat_id(self.store.state(), &chat_id)
                        .get(index)
                        .map(|message| (message.id.clone(), message.text.clone()))
                });
                if let Some((message_id, text)) = selected {
                    self.state.chat_detail_mut().begin_edit(message_id, &text);
                }
            }
            _ => {}
        }
    }

    fn handle_composer_key(&mut self, chat_id: &str, key: KeyInput) {
        match key.key.as_str() {
            "esc" if !key.ctrl => self.state.chat_detail_mut().set_composing(false),
            "enter" if !key.ctrl => {
                let command = SendMessageCommand {
                    chat_id: chat_id.to_owned(),
                    text: self.state.chat_detail().composer().text().to_owned(),
                    sender: self.settings.current_user.clone(),
                };
                if send_message(&mut self.store, &mut self.ids, command).is_ok() {
                    let len = self.message_count(chat_id);
                    let detail = self.state.chat_detail_mut();
                    detail.composer_mut().clear();
                    detail.select_last(len);
                }
            }
            _ => {
                self.state.chat_detail_mut().composer_mut().apply_key(&key);
            }
        }
    }

    fn handle_edit_modal_key(&mut self, chat_id: &str, key: KeyInput) {
        let Some(session) = self.state.chat_detail().editing().cloned() else {
            return;
        };

        if key.ctrl && key.key == "d" {
            let command = DeleteMessageCommand {
                chat_id: chat_id.to_owned(),
                message_id: session.message_id,
                user: self.settings.current_user.clone(),
            };
            match delete_message(&mut self.store, command) {
                Ok(()) => {
                    let len = self.message_count(chat_id);
                    let detail = self.state.chat_detail_mut();
                    detail.end_edit();
                    detail.clamp_selection(len);
                }
                Err(error) => self.state.show_alert(error.user_message()),
            }
            return;
        }

        match key.key.as_str() {
            "esc" if !key.ctrl => self.state.chat_detail_mut().end_edit(),
            "enter" if !key.ctrl => {
                let command = EditMessageCommand {
                    chat_id: chat_id.to_owned(),
                    message_id: session.message_id,
                    text: session.buffer.text().to_owned(),
                    user: self.settings.current_user.clone(),
                };
                match edit_message(&mut self.store, command) {
                    Ok(()) => self.state.chat_detail_mut().end_edit(),
                    Err(error) => self.state.show_alert(error.user_message()),
                }
            }
            _ => {
                if let Some(session) = self.state.chat_detail_mut().editing_mut() {
                    session.buffer.apply_key(&key);
                }
            }
        }
    }
}

impl<I> ShellOrchestrator for DefaultShellOrchestrator<I>
where
    I: IdSource,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn store(&self) -> &Store {
        &self.store
    }

    fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    fn current_user(&self) -> &str {
        &self.settings.current_user
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => self.poll_timers(Instant::now()),
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key),
        }

        Ok(())
    }
}
