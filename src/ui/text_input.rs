//! Single-line input field rendering, shared by the search box, the composer,
//! the edit modal and the chat name field.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::text_input_state::TextInputState;

use super::styles;

/// Prompt symbol shown before the input text.
const PROMPT_SYMBOL: &str = "> ";

/// How an input box should be drawn.
pub struct TextInputView<'a> {
    pub title: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
}

/// Renders a bordered input field. The terminal cursor is placed inside it
/// only while focused.
pub fn render_text_input(
    frame: &mut Frame<'_>,
    area: Rect,
    input_state: &TextInputState,
    view: TextInputView<'_>,
) {
    let border_style = if view.focused {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let paragraph = Paragraph::new(build_input_line(input_state, view.placeholder, view.focused))
        .block(
            Block::default()
                .title(view.title.to_owned())
                .borders(Borders::ALL)
                .border_style(border_style),
        );

    frame.render_widget(paragraph, area);

    if view.focused {
        // Use saturating arithmetic to prevent overflow with very long inputs
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(PROMPT_SYMBOL.len() as u16)
            .saturating_add(input_state.cursor_position().min(u16::MAX as usize) as u16);
        let cursor_y = area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Builds the line content for the input field. The placeholder shows only
/// while the buffer is empty and unfocused.
fn build_input_line(
    input_state: &TextInputState,
    placeholder: &str,
    is_focused: bool,
) -> Line<'static> {
    let prompt = Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_prompt_style());

    if !is_focused && input_state.is_empty() {
        return Line::from(vec![
            prompt,
            Span::styled(placeholder.to_owned(), styles::input_placeholder_style()),
        ]);
    }

    Line::from(vec![
        prompt,
        Span::styled(input_state.text().to_owned(), styles::input_text_style()),
    ])
}
