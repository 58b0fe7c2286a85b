use anyhow::Result;

use crate::infra::config::AppConfig;

pub trait ConfigAdapter {
    fn load(&self) -> Result<AppConfig>;
}

/// Source of client-generated identities for new records.
pub trait IdSource {
    fn next_chat_id(&mut self) -> String;

    /// Current time as an RFC 3339 string. Doubles as the id of a new message.
    fn timestamp(&mut self) -> String;
}
