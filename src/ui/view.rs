use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::{
    domain::{
        chat::Chat,
        shell_state::{Screen, ShellState},
    },
    store::{
        selectors::{self, ChatListStatus},
        RootState,
    },
};

use super::message_rendering::{
    build_message_list_elements, element_to_list_item, message_index_to_element_index,
};
use super::styles;
use super::text_input::{render_text_input, TextInputView};

const LOADING_TEXT: &str = "Loading chats...";
const EMPTY_TEXT: &str = "No chats available. Create a new chat!";
const NO_MATCH_TEXT: &str = "No chats match the search.";
const LOADING_MESSAGES_TEXT: &str = "Loading messages...";
const NO_MESSAGES_TEXT: &str = "No messages in this chat yet.";

/// Input box height: border + text + border.
const INPUT_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame<'_>, state: &ShellState, root: &RootState, current_user: &str) {
    let [content_area, hint_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    match state.screen() {
        Screen::ChatList => render_chat_list(frame, content_area, state, root),
        Screen::ChatDetail => render_chat_detail(frame, content_area, state, root, current_user),
        Screen::CreateChat => render_create_chat(frame, content_area, state),
    }

    frame.render_widget(
        Paragraph::new(Span::styled(footer_hint(state), styles::hint_style())),
        hint_area,
    );

    if let Some(message) = state.alert() {
        render_alert(frame, message);
    }
}

/// What the chat list body shows, in precedence order.
#[derive(Debug, PartialEq, Eq)]
enum ChatListBody<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Ready(Vec<&'a Chat>),
}

fn chat_list_body<'a>(root: &'a RootState, query: &str) -> ChatListBody<'a> {
    match selectors::chat_list_status(root) {
        ChatListStatus::Loading => ChatListBody::Loading,
        ChatListStatus::Error(error) => ChatListBody::Error(error),
        ChatListStatus::Empty => ChatListBody::Empty,
        ChatListStatus::Ready => ChatListBody::Ready(selectors::chats_matching(root, query)),
    }
}

fn render_chat_list(frame: &mut Frame<'_>, area: Rect, state: &ShellState, root: &RootState) {
    let chat_list = state.chat_list();
    let block = chats_block("Chats".to_owned());

    match chat_list_body(root, chat_list.search().text()) {
        ChatListBody::Loading => {
            frame.render_widget(Paragraph::new(LOADING_TEXT).block(block), area);
        }
        ChatListBody::Error(error) => {
            let line = Span::styled(format!("Error: {error}"), styles::error_style());
            frame.render_widget(
                Paragraph::new(line).wrap(Wrap { trim: false }).block(block),
                area,
            );
        }
        ChatListBody::Empty => {
            let lines = vec![
                Line::from(EMPTY_TEXT),
                Line::default(),
                Line::from(Span::styled("Press n to create a chat", styles::hint_style())),
            ];
            frame.render_widget(Paragraph::new(lines).block(block), area);
        }
        ChatListBody::Ready(chats) => {
            let [search_area, list_area] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(INPUT_HEIGHT), Constraint::Min(1)])
                .areas(area);

            render_text_input(
                frame,
                search_area,
                chat_list.search(),
                TextInputView {
                    title: "Search",
                    placeholder: "Press / to search chats",
                    focused: chat_list.is_search_focused(),
                },
            );

            let block = chats_block(format!("Chats ({})", chats.len()));
            if chats.is_empty() {
                frame.render_widget(Paragraph::new(NO_MATCH_TEXT).block(block), list_area);
                return;
            }

            let items: Vec<ListItem<'static>> = chats
                .iter()
                .map(|chat| ListItem::new(chat_list_item_line(chat)))
                .collect();
            let list = List::new(items)
                .block(block)
                .highlight_style(styles::selection_style());

            let mut list_state = ListState::default();
            list_state.select(Some(chat_list.selected_index().unwrap_or(0).min(chats.len() - 1)));
            frame.render_stateful_widget(list, list_area, &mut list_state);
        }
    }
}

fn chats_block(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(styles::active_panel_border_style())
}

fn chat_list_item_line(chat: &Chat) -> Line<'static> {
    Line::from(vec![
        Span::styled(chat.name.clone(), styles::chat_name_style()),
        Span::styled(format!("  by {}", chat.created_by), styles::chat_creator_style()),
    ])
}

/// Title of the detail screen. Blank when the chat is no longer in the store.
fn chat_detail_title(root: &RootState, chat_id: &str) -> String {
    selectors::chat_by_id(root, chat_id)
        .map(|chat| chat.name.clone())
        .unwrap_or_default()
}

fn render_chat_detail(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &ShellState,
    root: &RootState,
    current_user: &str,
) {
    let detail = state.chat_detail();
    let chat_id = detail.chat_id().unwrap_or_default();

    let [messages_area, input_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(INPUT_HEIGHT)])
        .areas(area);

    let messages_focused = !detail.is_composing() && detail.editing().is_none();
    let border_style = if messages_focused {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };
    let block = Block::default()
        .title(chat_detail_title(root, chat_id))
        .borders(Borders::ALL)
        .border_style(border_style);

    let messages = selectors::messages_by_chat_id(root, chat_id);
    if selectors::messages_loading(root) {
        frame.render_widget(Paragraph::new(LOADING_MESSAGES_TEXT).block(block), messages_area);
    } else if let Some(error) = selectors::messages_error(root) {
        let line = Span::styled(format!("Error: {error}"), styles::error_style());
        frame.render_widget(
            Paragraph::new(line).wrap(Wrap { trim: false }).block(block),
            messages_area,
        );
    } else if messages.is_empty() {
        frame.render_widget(Paragraph::new(NO_MESSAGES_TEXT).block(block), messages_area);
    } else {
        let elements = build_message_list_elements(&messages, current_user);
        let items: Vec<ListItem<'static>> = elements.iter().map(element_to_list_item).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(styles::selection_style());

        let mut list_state = ListState::default();
        list_state.select(
            detail
                .selected_index()
                .and_then(|index| message_index_to_element_index(&elements, index)),
        );
        frame.render_stateful_widget(list, messages_area, &mut list_state);
    }

    render_text_input(
        frame,
        input_area,
        detail.composer(),
        TextInputView {
            title: "Message",
            placeholder: "Press 'i' to type a message...",
            focused: detail.is_composing(),
        },
    );

    if let Some(session) = detail.editing() {
        let modal = centered_rect(frame.area(), 60, INPUT_HEIGHT);
        frame.render_widget(Clear, modal);
        render_text_input(
            frame,
            modal,
            &session.buffer,
            TextInputView {
                title: "Edit message",
                placeholder: "",
                focused: state.alert().is_none(),
            },
        );
    }
}

fn render_create_chat(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let [name_area, body_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(INPUT_HEIGHT), Constraint::Min(1)])
        .areas(area);

    render_text_input(
        frame,
        name_area,
        state.create_chat().name(),
        TextInputView {
            title: "Create chat",
            placeholder: "Chat name",
            focused: state.alert().is_none(),
        },
    );

    let help = Paragraph::new("Type a name and press Enter to create the chat.")
        .style(styles::hint_style());
    frame.render_widget(help, body_area);
}

fn render_alert(frame: &mut Frame<'_>, message: &str) {
    let area = centered_rect(frame.area(), 50, 5);
    let lines = vec![
        Line::from(message.to_owned()),
        Line::default(),
        Line::from(Span::styled("Enter/Esc: dismiss", styles::hint_style())),
    ];
    let alert = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title("Alert")
            .borders(Borders::ALL)
            .border_style(styles::error_style()),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(alert, area);
}

/// A `width_percent` wide, `height` rows tall rectangle centered in `area`.
fn centered_rect(area: Rect, width_percent: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(width_percent)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

fn footer_hint(state: &ShellState) -> &'static str {
    if state.alert().is_some() {
        return "Enter/Esc: dismiss alert";
    }

    match state.screen() {
        Screen::ChatList if state.chat_list().is_search_focused() => {
            "type to filter | Enter/Esc: done"
        }
        Screen::ChatList => {
            "j/k: navigate | Enter: open | /: search | n: new chat | d: delete | q: quit"
        }
        Screen::ChatDetail => {
            let detail = state.chat_detail();
            if detail.editing().is_some() {
                "Enter: save | Ctrl+D: delete | Esc: cancel"
            } else if detail.is_composing() {
                "Enter: send | Esc: stop typing"
            } else {
                "j/k: select | i: compose | e/Enter: edit | Esc: back to chats"
            }
        }
        Screen::CreateChat => "Enter: create | Esc: back to chats",
    }
}
