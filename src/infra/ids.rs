use chrono::{SecondsFormat, Utc};
use rand::Rng;

use crate::infra::contracts::IdSource;

/// Smallest generated chat id.
const CHAT_ID_BASE: u32 = 10;
/// Number of distinct chat ids the generator can produce.
const CHAT_ID_SPAN: u32 = 10;

/// Chat ids are random numbers in `10..20`, message ids are creation
/// timestamps. Both collide easily; the seeded sample chats live in the same
/// range so newly created chats can pick up the sample messages.
#[derive(Debug, Default)]
pub struct RandomIdSource;

impl IdSource for RandomIdSource {
    fn next_chat_id(&mut self) -> String {
        let offset = rand::thread_rng().gen_range(0..CHAT_ID_SPAN);
        (CHAT_ID_BASE + offset).to_string()
    }

    fn timestamp(&mut self) -> String {
        now_rfc3339()
    }
}

/// Current UTC time with millisecond precision, e.g. `2026-02-14T10:00:00.000Z`.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_ids_stay_in_two_digit_range() {
        let mut source = RandomIdSource;

        for _ in 0..200 {
            let id: u32 = source.next_chat_id().parse().expect("id should be numeric");
            assert!((10..20).contains(&id));
        }
    }

    #[test]
    fn timestamp_is_rfc3339_with_millis() {
        let mut source = RandomIdSource;

        let stamp = source.timestamp();

        assert!(chrono::DateTime::parse_from_rfc3339(&stamp).is_ok());
        assert!(stamp.ends_with('Z'));
        assert_eq!(stamp.len(), "2026-02-14T10:00:00.000Z".len());
    }
}
