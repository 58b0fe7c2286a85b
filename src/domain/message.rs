use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A chat message. `chat_id` points at [`super::chat::Chat::id`] but the link
/// is never validated, so orphaned messages are representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: String,
    pub chat_id: String,
    /// RFC 3339 timestamp string as produced by the client or the backend.
    pub created_at: String,
}

impl Message {
    /// Returns true if `user` sent this message.
    pub fn is_sent_by(&self, user: &str) -> bool {
        self.sender == user
    }

    /// Parses `created_at` into local time.
    ///
    /// Returns `None` for strings that are not valid RFC 3339; callers render
    /// those as an unknown time instead of failing.
    pub fn created_at_local(&self) -> Option<DateTime<Local>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(sender: &str, created_at: &str) -> Message {
        Message {
            id: "1".to_owned(),
            text: "Hello".to_owned(),
            sender: sender.to_owned(),
            chat_id: "10".to_owned(),
            created_at: created_at.to_owned(),
        }
    }

    #[test]
    fn is_sent_by_compares_sender_identity() {
        let message = msg("userA", "2026-02-14T10:00:00.000Z");

        assert!(message.is_sent_by("userA"));
        assert!(!message.is_sent_by("userB"));
    }

    #[test]
    fn created_at_local_parses_rfc3339() {
        let message = msg("userA", "2026-02-14T10:00:00.000Z");

        let parsed = message.created_at_local().expect("timestamp should parse");

        assert_eq!(parsed.timestamp_millis(), 1_771_063_200_000);
    }

    #[test]
    fn created_at_local_rejects_garbage() {
        let message = msg("userA", "yesterday");

        assert!(message.created_at_local().is_none());
    }

    #[test]
    fn uses_camel_case_chat_id_on_the_wire() {
        let message = msg("userA", "2026-02-14T10:00:00.000Z");

        let json = serde_json::to_value(&message).expect("message should serialize");

        assert_eq!(json["chatId"], "10");
        assert_eq!(json["createdAt"], "2026-02-14T10:00:00.000Z");
    }
}
