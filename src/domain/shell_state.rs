use super::text_input_state::TextInputState;

/// Screen currently shown by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    ChatList,
    ChatDetail,
    CreateChat,
}

/// Transient UI state. Everything here dies with the process; the chat and
/// message records themselves live in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    screen: Screen,
    chat_list: ChatListScreenState,
    chat_detail: ChatDetailScreenState,
    create_chat: CreateChatScreenState,
    alert: Option<String>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            running: true,
            screen: Screen::ChatList,
            chat_list: ChatListScreenState::default(),
            chat_detail: ChatDetailScreenState::default(),
            create_chat: CreateChatScreenState::default(),
            alert: None,
        }
    }
}

impl ShellState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn chat_list(&self) -> &ChatListScreenState {
        &self.chat_list
    }

    pub fn chat_list_mut(&mut self) -> &mut ChatListScreenState {
        &mut self.chat_list
    }

    pub fn chat_detail(&self) -> &ChatDetailScreenState {
        &self.chat_detail
    }

    pub fn chat_detail_mut(&mut self) -> &mut ChatDetailScreenState {
        &mut self.chat_detail
    }

    pub fn create_chat(&self) -> &CreateChatScreenState {
        &self.create_chat
    }

    pub fn create_chat_mut(&mut self) -> &mut CreateChatScreenState {
        &mut self.create_chat
    }

    pub fn go_home(&mut self) {
        self.screen = Screen::ChatList;
    }

    /// Opens the detail screen for `chat_id`, discarding any previous detail
    /// state. `message_count` positions the cursor on the newest message.
    pub fn open_chat(&mut self, chat_id: String, message_count: usize) {
        self.chat_detail = ChatDetailScreenState {
            chat_id: Some(chat_id),
            selected_index: message_count.checked_sub(1),
            ..ChatDetailScreenState::default()
        };
        self.screen = Screen::ChatDetail;
    }

    pub fn open_create_chat(&mut self) {
        self.create_chat = CreateChatScreenState::default();
        self.screen = Screen::CreateChat;
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatListScreenState {
    search: TextInputState,
    search_focused: bool,
    selected_index: Option<usize>,
}

impl ChatListScreenState {
    pub fn search(&self) -> &TextInputState {
        &self.search
    }

    pub fn search_mut(&mut self) -> &mut TextInputState {
        &mut self.search
    }

    pub fn is_search_focused(&self) -> bool {
        self.search_focused
    }

    pub fn set_search_focused(&mut self, focused: bool) {
        self.search_focused = focused;
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Keeps the selection inside a list of `len` visible rows.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected_index = match (self.selected_index, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(index), len) => Some(index.min(len - 1)),
        };
    }

    pub fn select_next(&mut self, len: usize) {
        self.clamp_selection(len);
        if let Some(index) = self.selected_index {
            self.selected_index = Some(std::cmp::min(index.saturating_add(1), len - 1));
        }
    }

    pub fn select_previous(&mut self, len: usize) {
        self.clamp_selection(len);
        if let Some(index) = self.selected_index {
            self.selected_index = Some(index.saturating_sub(1));
        }
    }
}

/// Modal edit session for one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub message_id: String,
    pub buffer: TextInputState,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatDetailScreenState {
    chat_id: Option<String>,
    composer: TextInputState,
    composing: bool,
    selected_index: Option<usize>,
    editing: Option<EditSession>,
}

impl ChatDetailScreenState {
    pub fn chat_id(&self) -> Option<&str> {
        self.chat_id.as_deref()
    }

    pub fn composer(&self) -> &TextInputState {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut TextInputState {
        &mut self.composer
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    pub fn set_composing(&mut self, composing: bool) {
        self.composing = composing;
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.selected_index = None;
            return;
        }

        self.selected_index = match self.selected_index {
            None => Some(0),
            Some(idx) => Some(std::cmp::min(idx + 1, len - 1)),
        };
    }

    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            self.selected_index = None;
            return;
        }

        self.selected_index = match self.selected_index {
            None => Some(len - 1),
            Some(idx) => Some(std::cmp::min(idx, len - 1).saturating_sub(1)),
        };
    }

    /// Follows the newest message after the list grew.
    pub fn select_last(&mut self, len: usize) {
        self.selected_index = len.checked_sub(1);
    }

    /// Keeps an existing selection inside a list of `len` messages.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected_index = match self.selected_index {
            Some(_) if len == 0 => None,
            Some(index) => Some(index.min(len - 1)),
            None => None,
        };
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut EditSession> {
        self.editing.as_mut()
    }

    pub fn begin_edit(&mut self, message_id: String, text: &str) {
        self.composing = false;
        self.editing = Some(EditSession {
            message_id,
            buffer: TextInputState::with_text(text),
        });
    }

    pub fn end_edit(&mut self) {
        self.editing = None;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateChatScreenState {
    name: TextInputState,
}

impl CreateChatScreenState {
    pub fn name(&self) -> &TextInputState {
        &self.name
    }

    pub fn name_mut(&mut self) -> &mut TextInputState {
        &mut self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_runs_on_chat_list_without_alert() {
        let state = ShellState::default();

        assert!(state.is_running());
        assert_eq!(state.screen(), Screen::ChatList);
        assert_eq!(state.alert(), None);
    }

    #[test]
    fn open_chat_resets_detail_state_and_selects_newest_message() {
        let mut state = ShellState::default();
        state.chat_detail_mut().composer_mut().insert_char('x');

        state.open_chat("10".to_owned(), 3);

        assert_eq!(state.screen(), Screen::ChatDetail);
        assert_eq!(state.chat_detail().chat_id(), Some("10"));
        assert!(state.chat_detail().composer().is_empty());
        assert_eq!(state.chat_detail().selected_index(), Some(2));
    }

    #[test]
    fn open_chat_without_messages_has_no_selection() {
        let mut state = ShellState::default();

        state.open_chat("99".to_owned(), 0);

        assert_eq!(state.chat_detail().selected_index(), None);
    }

    #[test]
    fn chat_list_selection_moves_within_bounds() {
        let mut list = ChatListScreenState::default();

        list.select_next(2);
        list.select_next(2);
        list.select_next(2);
        assert_eq!(list.selected_index(), Some(1));

        list.select_previous(2);
        list.select_previous(2);
        assert_eq!(list.selected_index(), Some(0));
    }

    #[test]
    fn chat_list_selection_clamps_when_list_shrinks() {
        let mut list = ChatListScreenState::default();
        list.select_next(5);
        list.select_next(5);
        list.select_next(5);

        list.clamp_selection(2);
        assert_eq!(list.selected_index(), Some(1));

        list.clamp_selection(0);
        assert_eq!(list.selected_index(), None);
    }

    #[test]
    fn detail_selection_starts_from_edges_when_unset() {
        let mut detail = ChatDetailScreenState::default();
        detail.select_previous(3);
        assert_eq!(detail.selected_index(), Some(2));

        let mut detail = ChatDetailScreenState::default();
        detail.select_next(3);
        assert_eq!(detail.selected_index(), Some(0));
    }

    #[test]
    fn begin_edit_prefills_buffer_and_leaves_composer() {
        let mut detail = ChatDetailScreenState::default();
        detail.set_composing(true);

        detail.begin_edit("1".to_owned(), "Hello");

        assert!(!detail.is_composing());
        let session = detail.editing().expect("edit session should be open");
        assert_eq!(session.message_id, "1");
        assert_eq!(session.buffer.text(), "Hello");

        detail.end_edit();
        assert!(detail.editing().is_none());
    }

    #[test]
    fn alert_can_be_shown_and_dismissed() {
        let mut state = ShellState::default();

        state.show_alert("Chat name cannot be empty");
        assert_eq!(state.alert(), Some("Chat name cannot be empty"));

        state.dismiss_alert();
        assert_eq!(state.alert(), None);
    }
}
