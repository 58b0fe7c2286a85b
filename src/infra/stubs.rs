use anyhow::Result;

use crate::infra::{
    config::AppConfig,
    contracts::{ConfigAdapter, IdSource},
};

#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(AppConfig::default())
    }
}

/// Deterministic ids: chat ids count up from `next_chat`, timestamps are
/// one second apart starting at 2026-02-14T10:00:00Z.
#[derive(Debug, Clone)]
pub struct SequentialIdSource {
    next_chat: u32,
    ticks: u32,
}

impl Default for SequentialIdSource {
    fn default() -> Self {
        Self {
            next_chat: 10,
            ticks: 0,
        }
    }
}

impl SequentialIdSource {
    pub fn starting_at(next_chat: u32) -> Self {
        Self {
            next_chat,
            ..Self::default()
        }
    }
}

impl IdSource for SequentialIdSource {
    fn next_chat_id(&mut self) -> String {
        let id = self.next_chat;
        self.next_chat += 1;
        id.to_string()
    }

    fn timestamp(&mut self) -> String {
        let stamp = format!("2026-02-14T10:00:{:02}.000Z", self.ticks % 60);
        self.ticks += 1;
        stamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_config_returns_defaults() {
        let adapter = StubConfigAdapter;
        let config = adapter.load().expect("stub config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn sequential_ids_are_deterministic() {
        let mut source = SequentialIdSource::starting_at(42);

        assert_eq!(source.next_chat_id(), "42");
        assert_eq!(source.next_chat_id(), "43");
        assert_eq!(source.timestamp(), "2026-02-14T10:00:00.000Z");
        assert_eq!(source.timestamp(), "2026-02-14T10:00:01.000Z");
    }
}
