//! Message list rendering logic.
//!
//! Handles visual formatting of messages including:
//! - Multi-line message display (time + sender on first line, text below)
//! - Sender grouping (consecutive messages from same sender show name only once)
//! - Date separators between messages from different days
//! - Own messages highlighted and labelled "You"

use chrono::NaiveDate;
use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::ListItem,
};

use crate::domain::message::Message;

use super::styles;

const UNKNOWN_DATE: &str = "Unknown date";
const UNKNOWN_TIME: &str = "??:??";
const OWN_SENDER_LABEL: &str = "You";

/// Represents a visual element in the messages list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageListElement {
    /// Date separator line (e.g., "——— 14 Feb 2026 ———").
    DateSeparator(String),
    /// A message with optional sender display.
    Message {
        time: String,
        sender: Option<String>,
        content: String,
        own: bool,
    },
}

/// Builds a list of visual elements from the messages of one chat.
///
/// Groups consecutive messages from the same sender and inserts date
/// separators. Messages with an unparseable `created_at` share one
/// "Unknown date" bucket.
pub fn build_message_list_elements(
    messages: &[&Message],
    current_user: &str,
) -> Vec<MessageListElement> {
    let mut elements = Vec::new();
    let mut prev_date: Option<Option<NaiveDate>> = None;
    let mut prev_sender: Option<&str> = None;

    for message in messages {
        let created_at = message.created_at_local();
        let msg_date = created_at.map(|dt| dt.date_naive());

        if prev_date != Some(msg_date) {
            elements.push(MessageListElement::DateSeparator(format_date(msg_date)));
            prev_sender = None;
        }

        let own = message.is_sent_by(current_user);
        let sender = (prev_sender != Some(message.sender.as_str())).then(|| {
            if own {
                OWN_SENDER_LABEL.to_owned()
            } else {
                message.sender.clone()
            }
        });

        elements.push(MessageListElement::Message {
            time: created_at
                .map(|dt| dt.format("%H:%M").to_string())
                .unwrap_or_else(|| UNKNOWN_TIME.to_owned()),
            sender,
            content: message.text.clone(),
            own,
        });

        prev_date = Some(msg_date);
        prev_sender = Some(message.sender.as_str());
    }

    elements
}

/// Converts a message index to the corresponding element index in the list.
///
/// Returns `None` if the message index is out of range.
pub fn message_index_to_element_index(
    elements: &[MessageListElement],
    message_index: usize,
) -> Option<usize> {
    elements
        .iter()
        .enumerate()
        .filter(|(_, element)| matches!(element, MessageListElement::Message { .. }))
        .nth(message_index)
        .map(|(element_index, _)| element_index)
}

/// Converts a list element to a ListItem for ratatui rendering.
pub fn element_to_list_item(element: &MessageListElement) -> ListItem<'static> {
    match element {
        MessageListElement::DateSeparator(date) => date_separator_item(date),
        MessageListElement::Message {
            time,
            sender,
            content,
            own,
        } => message_item(time, sender.as_deref(), content, *own),
    }
}

fn date_separator_item(date: &str) -> ListItem<'static> {
    let line = Line::from(vec![Span::styled(
        format!("——— {date} ———"),
        styles::date_separator_style(),
    )])
    .alignment(Alignment::Center);
    ListItem::new(vec![Line::default(), line])
}

fn message_item(time: &str, sender: Option<&str>, content: &str, own: bool) -> ListItem<'static> {
    let indent = "      "; // 6 spaces to align with time column
    let text_style = if own {
        styles::own_message_text_style()
    } else {
        styles::message_text_style()
    };
    let time_span = Span::styled(format!("{time:>5} "), styles::message_time_style());

    let mut lines = Vec::new();
    let mut content_lines = content.lines();

    if let Some(name) = sender {
        lines.push(Line::from(vec![
            time_span,
            Span::styled(format!("{name}:"), sender_style(own)),
        ]));
    } else if let Some(first_line) = content_lines.next() {
        lines.push(Line::from(vec![
            time_span,
            Span::styled(first_line.to_owned(), text_style),
        ]));
    } else {
        lines.push(Line::from(vec![time_span]));
    }

    for text_line in content_lines {
        lines.push(Line::from(vec![
            Span::raw(indent.to_owned()),
            Span::styled(text_line.to_owned(), text_style),
        ]));
    }

    ListItem::new(lines)
}

fn sender_style(own: bool) -> Style {
    if own {
        styles::own_sender_style()
    } else {
        styles::message_sender_style()
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        // Format: "14 Feb 2026"
        Some(date) => date.format("%-d %b %Y").to_string(),
        None => UNKNOWN_DATE.to_owned(),
    }
}
