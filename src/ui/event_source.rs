use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    domain::events::{AppEvent, KeyInput},
    usecases::contracts::AppEventSource,
};

/// Also the tick interval that drives the loading deadline.
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

#[derive(Default)]
pub struct CrosstermEventSource;

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        match event::read()? {
            Event::Key(key) => Ok(map_key_event(key)),
            _ => Ok(None),
        }
    }
}

/// Normalizes a crossterm key press. Ctrl+C always quits; keys the shell has
/// no name for are dropped.
fn map_key_event(key: KeyEvent) -> Option<AppEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let name = match key.code {
        KeyCode::Char('c') if ctrl => return Some(AppEvent::QuitRequested),
        KeyCode::Char(ch) => return Some(AppEvent::InputKey(KeyInput::new(ch.to_string(), ctrl))),
        KeyCode::Enter => "enter",
        KeyCode::Esc => "esc",
        KeyCode::Backspace => "backspace",
        KeyCode::Delete => "delete",
        KeyCode::Left => "left",
        KeyCode::Right => "right",
        KeyCode::Up => "up",
        KeyCode::Down => "down",
        KeyCode::Home => "home",
        KeyCode::End => "end",
        _ => return None,
    };

    Some(AppEvent::InputKey(KeyInput::new(name, ctrl)))
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn ctrl_c_requests_quit() {
        let event = map_key_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert_eq!(event, Some(AppEvent::QuitRequested));
    }

    #[test]
    fn plain_q_is_a_regular_key() {
        let event = map_key_event(press(KeyCode::Char('q'), KeyModifiers::NONE));

        assert_eq!(event, Some(AppEvent::InputKey(KeyInput::new("q", false))));
    }

    #[test]
    fn ctrl_d_keeps_ctrl_flag() {
        let event = map_key_event(press(KeyCode::Char('d'), KeyModifiers::CONTROL));

        assert_eq!(event, Some(AppEvent::InputKey(KeyInput::new("d", true))));
    }

    #[test]
    fn named_keys_use_lowercase_names() {
        let event = map_key_event(press(KeyCode::Backspace, KeyModifiers::NONE));

        assert_eq!(
            event,
            Some(AppEvent::InputKey(KeyInput::new("backspace", false)))
        );
    }

    #[test]
    fn releases_and_unknown_keys_are_dropped() {
        let release = KeyEvent {
            code: KeyCode::Char('x'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };

        assert_eq!(map_key_event(release), None);
        assert_eq!(map_key_event(press(KeyCode::F(5), KeyModifiers::NONE)), None);
    }

    #[test]
    fn mock_source_drains_in_order() {
        let mut source = MockEventSource::from(vec![AppEvent::Tick, AppEvent::QuitRequested]);

        assert_eq!(source.next_event().expect("mock read"), Some(AppEvent::Tick));
        assert_eq!(
            source.next_event().expect("mock read"),
            Some(AppEvent::QuitRequested)
        );
        assert_eq!(source.next_event().expect("mock read"), None);
    }
}
