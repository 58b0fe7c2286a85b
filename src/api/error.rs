use thiserror::Error;

/// Remote operations, one per endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOperation {
    CreateChat,
    ListChats,
    DeleteChat,
    CreateMessage,
    ListMessages,
}

impl ApiOperation {
    /// Static user-facing text reported when the operation fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            ApiOperation::CreateChat => "Failed to create chat",
            ApiOperation::ListChats => "Failed to fetch chats",
            ApiOperation::DeleteChat => "Failed to delete chat",
            ApiOperation::CreateMessage => "Failed to create message",
            ApiOperation::ListMessages => "Failed to fetch messages",
        }
    }

    /// Stable log code.
    pub fn code(self) -> &'static str {
        match self {
            ApiOperation::CreateChat => "API_CREATE_CHAT_FAILED",
            ApiOperation::ListChats => "API_LIST_CHATS_FAILED",
            ApiOperation::DeleteChat => "API_DELETE_CHAT_FAILED",
            ApiOperation::CreateMessage => "API_CREATE_MESSAGE_FAILED",
            ApiOperation::ListMessages => "API_LIST_MESSAGES_FAILED",
        }
    }
}

/// Failure of one remote call. The HTTP status or transport cause is logged
/// where it happens and deliberately not carried here; callers only learn
/// which operation failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    operation: ApiOperation,
    message: &'static str,
}

impl ApiError {
    pub fn new(operation: ApiOperation) -> Self {
        Self {
            operation,
            message: operation.failure_message(),
        }
    }

    pub fn operation(&self) -> ApiOperation {
        self.operation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_static_failure_message() {
        assert_eq!(
            ApiError::new(ApiOperation::CreateChat).to_string(),
            "Failed to create chat"
        );
        assert_eq!(
            ApiError::new(ApiOperation::ListMessages).to_string(),
            "Failed to fetch messages"
        );
    }

    #[test]
    fn keeps_failed_operation() {
        let error = ApiError::new(ApiOperation::DeleteChat);

        assert_eq!(error.operation(), ApiOperation::DeleteChat);
    }
}
