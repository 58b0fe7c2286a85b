use std::time::Duration;

use reqwest::{RequestBuilder, Response, Url};
use serde::{de::DeserializeOwned, Serialize};
use tokio::runtime::{Builder, Runtime};

use crate::{
    domain::{chat::Chat, message::Message},
    infra::{config::ApiConfig, error::AppError},
};

use super::{ApiError, ApiOperation, ChatApi};

const CHATS_RESOURCE: &str = "chats";
const MESSAGES_RESOURCE: &str = "messages";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateChatBody<'a> {
    name: &'a str,
    created_by: &'a str,
}

#[derive(Debug, Serialize)]
struct CreateMessageBody<'a> {
    text: &'a str,
    sender: &'a str,
}

/// Blocking facade over `reqwest`. Owns a current-thread runtime so callers
/// stay synchronous, like the rest of the app.
#[derive(Debug)]
pub struct RestClient {
    rt: Runtime,
    http: reqwest::Client,
    base_url: Url,
}

impl RestClient {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|error| AppError::HttpClientInit(Box::new(error)))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::HttpClientInit(
                format!("base url {base_url} cannot carry resource paths").into(),
            ));
        }

        let rt = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|error| AppError::HttpClientInit(Box::new(error)))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }

        let http = {
            let _guard = rt.enter();
            builder
                .build()
                .map_err(|error| AppError::HttpClientInit(Box::new(error)))?
        };

        Ok(Self { rt, http, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn fetch_json<T>(&self, operation: ApiOperation, request: RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        self.rt.block_on(async {
            let response = send_checked(operation, request).await?;
            response.json::<T>().await.map_err(|error| {
                tracing::warn!(
                    code = operation.code(),
                    error = %error,
                    "backend returned an undecodable body"
                );
                ApiError::new(operation)
            })
        })
    }

    fn fetch_empty(&self, operation: ApiOperation, request: RequestBuilder) -> Result<(), ApiError> {
        self.rt
            .block_on(send_checked(operation, request))
            .map(|_| ())
    }
}

async fn send_checked(
    operation: ApiOperation,
    request: RequestBuilder,
) -> Result<Response, ApiError> {
    let response = request.send().await.map_err(|error| {
        tracing::warn!(
            code = operation.code(),
            error = %error,
            "backend request failed before a response arrived"
        );
        ApiError::new(operation)
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(
            code = operation.code(),
            status = status.as_u16(),
            "backend rejected request"
        );
        return Err(ApiError::new(operation));
    }

    Ok(response)
}

impl ChatApi for RestClient {
    fn create_chat(&self, name: &str, created_by: &str) -> Result<Chat, ApiError> {
        let request = self
            .http
            .post(self.endpoint(&[CHATS_RESOURCE]))
            .json(&CreateChatBody { name, created_by });
        self.fetch_json(ApiOperation::CreateChat, request)
    }

    fn list_chats(&self) -> Result<Vec<Chat>, ApiError> {
        let request = self.http.get(self.endpoint(&[CHATS_RESOURCE]));
        self.fetch_json(ApiOperation::ListChats, request)
    }

    fn delete_chat(&self, chat_id: &str) -> Result<(), ApiError> {
        let request = self.http.delete(self.endpoint(&[CHATS_RESOURCE, chat_id]));
        self.fetch_empty(ApiOperation::DeleteChat, request)
    }

    fn create_message(
        &self,
        chat_id: &str,
        text: &str,
        sender: &str,
    ) -> Result<Message, ApiError> {
        let request = self
            .http
            .post(self.endpoint(&[CHATS_RESOURCE, chat_id, MESSAGES_RESOURCE]))
            .json(&CreateMessageBody { text, sender });
        self.fetch_json(ApiOperation::CreateMessage, request)
    }

    fn list_messages(&self, chat_id: &str) -> Result<Vec<Message>, ApiError> {
        let request = self
            .http
            .get(self.endpoint(&[CHATS_RESOURCE, chat_id, MESSAGES_RESOURCE]));
        self.fetch_json(ApiOperation::ListMessages, request)
    }
}
