use crate::domain::message::Message;

const SAMPLE_MESSAGES: [(&str, &str, &str, &str); 4] = [
    ("1", "Hello from user A", "userA", "10"),
    ("2", "Hello from user B", "userB", "10"),
    ("3", "Another message from user A", "userA", "15"),
    ("4", "Another message from user B", "userB", "15"),
];

/// Sample conversation the message slice starts with.
pub fn sample_messages(created_at: &str) -> Vec<Message> {
    SAMPLE_MESSAGES
        .iter()
        .map(|(id, text, sender, chat_id)| Message {
            id: (*id).to_owned(),
            text: (*text).to_owned(),
            sender: (*sender).to_owned(),
            chat_id: (*chat_id).to_owned(),
            created_at: created_at.to_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_spans_two_chats_in_order() {
        let messages = sample_messages("2026-02-14T10:00:00.000Z");

        let pairs: Vec<_> = messages
            .iter()
            .map(|message| (message.id.as_str(), message.chat_id.as_str()))
            .collect();
        assert_eq!(pairs, vec![("1", "10"), ("2", "10"), ("3", "15"), ("4", "15")]);
        assert!(messages
            .iter()
            .all(|message| message.created_at == "2026-02-14T10:00:00.000Z"));
    }
}
