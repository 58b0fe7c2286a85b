use serde::{Deserialize, Serialize};

/// A chat room as known to the store and the backend.
///
/// Identity is the opaque `id`; uniqueness is expected but never enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: String,
    pub name: String,
    pub created_by: String,
}

impl Chat {
    pub fn new(id: impl Into<String>, name: impl Into<String>, created_by: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created_by: created_by.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let chat = Chat::new("10", "General", "User");

        let json = serde_json::to_value(&chat).expect("chat should serialize");

        assert_eq!(
            json,
            serde_json::json!({"id": "10", "name": "General", "createdBy": "User"})
        );
    }

    #[test]
    fn deserializes_backend_payload() {
        let chat: Chat =
            serde_json::from_str(r#"{"id":"42","name":"Ops","createdBy":"alice"}"#)
                .expect("payload should decode");

        assert_eq!(chat, Chat::new("42", "Ops", "alice"));
    }
}
