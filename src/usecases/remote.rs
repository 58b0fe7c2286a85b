//! One-shot backend calls driven from the command line.

use serde::Serialize;
use thiserror::Error;

use crate::api::{ApiError, ChatApi};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCommand {
    ListChats,
    CreateChat { name: String, created_by: String },
    DeleteChat { chat_id: String },
    ListMessages { chat_id: String },
    SendMessage { chat_id: String, text: String, sender: String },
}

#[derive(Debug, Error)]
pub enum RemoteCommandError {
    #[error("chat name cannot be empty")]
    EmptyChatName,
    #[error("message text cannot be empty")]
    EmptyMessage,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("failed to render response: {0}")]
    Render(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct Deleted<'a> {
    deleted: &'a str,
}

/// Runs `command` against `api` and returns the result as pretty JSON.
pub fn execute(api: &dyn ChatApi, command: RemoteCommand) -> Result<String, RemoteCommandError> {
    let rendered = match command {
        RemoteCommand::ListChats => serde_json::to_string_pretty(&api.list_chats()?)?,
        RemoteCommand::CreateChat { name, created_by } => {
            if name.trim().is_empty() {
                return Err(RemoteCommandError::EmptyChatName);
            }
            serde_json::to_string_pretty(&api.create_chat(&name, &created_by)?)?
        }
        RemoteCommand::DeleteChat { chat_id } => {
            api.delete_chat(&chat_id)?;
            serde_json::to_string_pretty(&Deleted { deleted: &chat_id })?
        }
        RemoteCommand::ListMessages { chat_id } => {
            serde_json::to_string_pretty(&api.list_messages(&chat_id)?)?
        }
        RemoteCommand::SendMessage {
            chat_id,
            text,
            sender,
        } => {
            if text.trim().is_empty() {
                return Err(RemoteCommandError::EmptyMessage);
            }
            serde_json::to_string_pretty(&api.create_message(&chat_id, &text, &sender)?)?
        }
    };

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use serde_json::{json, Value};

    use super::*;
    use crate::{
        api::ApiOperation,
        domain::{chat::Chat, message::Message},
    };

    #[derive(Default)]
    struct RecordingApi {
        calls: RefCell<Vec<String>>,
        fail: Option<ApiOperation>,
    }

    impl RecordingApi {
        fn failing(operation: ApiOperation) -> Self {
            Self {
                fail: Some(operation),
                ..Self::default()
            }
        }

        fn check(&self, operation: ApiOperation, call: String) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(call);
            match self.fail {
                Some(failing) if failing == operation => Err(ApiError::new(operation)),
                _ => Ok(()),
            }
        }
    }

    impl ChatApi for RecordingApi {
        fn create_chat(&self, name: &str, created_by: &str) -> Result<Chat, ApiError> {
            self.check(ApiOperation::CreateChat, format!("create_chat {name} {created_by}"))?;
            Ok(Chat::new("12", name, created_by))
        }

        fn list_chats(&self) -> Result<Vec<Chat>, ApiError> {
            self.check(ApiOperation::ListChats, "list_chats".to_owned())?;
            Ok(vec![Chat::new("10", "General", "alice")])
        }

        fn delete_chat(&self, chat_id: &str) -> Result<(), ApiError> {
            self.check(ApiOperation::DeleteChat, format!("delete_chat {chat_id}"))
        }

        fn create_message(
            &self,
            chat_id: &str,
            text: &str,
            sender: &str,
        ) -> Result<Message, ApiError> {
            self.check(
                ApiOperation::CreateMessage,
                format!("create_message {chat_id} {text} {sender}"),
            )?;
            Ok(Message {
                id: "5".to_owned(),
                text: text.to_owned(),
                sender: sender.to_owned(),
                chat_id: chat_id.to_owned(),
                created_at: "2026-02-14T10:00:00.000Z".to_owned(),
            })
        }

        fn list_messages(&self, chat_id: &str) -> Result<Vec<Message>, ApiError> {
            self.check(ApiOperation::ListMessages, format!("list_messages {chat_id}"))?;
            Ok(Vec::new())
        }
    }

    fn parse(output: &str) -> Value {
        serde_json::from_str(output).expect("output should be JSON")
    }

    #[test]
    fn list_chats_prints_records_with_wire_keys() {
        let api = RecordingApi::default();

        let output = execute(&api, RemoteCommand::ListChats).expect("list should succeed");

        assert_eq!(
            parse(&output),
            json!([{"id": "10", "name": "General", "createdBy": "alice"}])
        );
    }

    #[test]
    fn delete_reports_deleted_id() {
        let api = RecordingApi::default();

        let output = execute(
            &api,
            RemoteCommand::DeleteChat {
                chat_id: "10".to_owned(),
            },
        )
        .expect("delete should succeed");

        assert_eq!(parse(&output), json!({"deleted": "10"}));
        assert_eq!(api.calls.borrow().as_slice(), ["delete_chat 10"]);
    }

    #[test]
    fn blank_inputs_are_rejected_before_calling_backend() {
        let api = RecordingApi::default();

        let chat = execute(
            &api,
            RemoteCommand::CreateChat {
                name: " ".to_owned(),
                created_by: "User".to_owned(),
            },
        );
        let message = execute(
            &api,
            RemoteCommand::SendMessage {
                chat_id: "10".to_owned(),
                text: "".to_owned(),
                sender: "User".to_owned(),
            },
        );

        assert!(matches!(chat, Err(RemoteCommandError::EmptyChatName)));
        assert!(matches!(message, Err(RemoteCommandError::EmptyMessage)));
        assert!(api.calls.borrow().is_empty());
    }

    #[test]
    fn send_message_prints_created_record() {
        let api = RecordingApi::default();

        let output = execute(
            &api,
            RemoteCommand::SendMessage {
                chat_id: "15".to_owned(),
                text: "Hi".to_owned(),
                sender: "bob".to_owned(),
            },
        )
        .expect("send should succeed");

        let value = parse(&output);
        assert_eq!(value["chatId"], "15");
        assert_eq!(value["sender"], "bob");
    }

    #[test]
    fn backend_failure_surfaces_static_text() {
        let api = RecordingApi::failing(ApiOperation::ListMessages);

        let error = execute(
            &api,
            RemoteCommand::ListMessages {
                chat_id: "10".to_owned(),
            },
        )
        .expect_err("backend failure must propagate");

        assert_eq!(error.to_string(), "Failed to fetch messages");
    }
}
