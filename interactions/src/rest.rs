use crate::reply::MessagePayload;
use crate::ContractViolation;
use async_trait::async_trait;
use model::channel::message::Message;
use model::interaction::{InteractionResponse, ModalCallbackData};
use model::Snowflake;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

#[derive(thiserror::Error, Debug)]
pub enum RestError {
    #[error("error while performing HTTP request: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("error while encoding request: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("platform returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error(transparent)]
    Contract(#[from] ContractViolation),
}

/// Calls made on behalf of an interaction after (or instead of) the HTTP
/// response. Webhook calls are addressed by application id and token, the
/// callback endpoint by interaction id and token.
#[async_trait]
pub trait InteractionApi: Send + Sync {
    async fn follow_up(
        &self,
        application_id: Snowflake,
        token: &str,
        payload: MessagePayload,
    ) -> Result<Message, RestError>;

    /// `message_id` of `None` edits the original response.
    async fn edit_reply(
        &self,
        application_id: Snowflake,
        token: &str,
        payload: MessagePayload,
        message_id: Option<Snowflake>,
    ) -> Result<Message, RestError>;

    async fn delete_reply(
        &self,
        application_id: Snowflake,
        token: &str,
        message_id: Option<Snowflake>,
    ) -> Result<(), RestError>;

    async fn get_original_reply(
        &self,
        application_id: Snowflake,
        token: &str,
    ) -> Result<Message, RestError>;

    async fn create_modal(
        &self,
        interaction_id: Snowflake,
        token: &str,
        modal: ModalCallbackData,
    ) -> Result<(), RestError>;

    async fn update_message(
        &self,
        interaction_id: Snowflake,
        token: &str,
        payload: MessagePayload,
    ) -> Result<(), RestError>;
}

pub struct RestClient {
    http_client: reqwest::Client,
    api_base: Box<str>,
    bot_token: Box<str>,
}

impl RestClient {
    pub fn new(api_base: &str, bot_token: &str) -> Result<RestClient, RestError> {
        Ok(RestClient {
            http_client: RestClient::build_http_client()?,
            api_base: Box::from(api_base.trim_end_matches('/')),
            bot_token: Box::from(bot_token),
        })
    }

    fn build_http_client() -> Result<reqwest::Client, RestError> {
        reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(3))
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(RestError::ReqwestError)
    }

    fn webhook_message_url(
        &self,
        application_id: Snowflake,
        token: &str,
        message_id: Option<Snowflake>,
    ) -> String {
        let message = message_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "@original".to_owned());

        format!(
            "{}/webhooks/{}/{}/messages/{}",
            self.api_base, application_id, token, message
        )
    }

    fn callback_url(&self, interaction_id: Snowflake, token: &str) -> String {
        format!(
            "{}/interactions/{}/{}/callback",
            self.api_base, interaction_id, token
        )
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        debug!(%method, "Sending interaction request");

        self.http_client
            .request(method, url)
            .header("Authorization", format!("Bot {}", self.bot_token))
    }

    /// Attaches `body` as JSON, or as multipart with a `payload_json` part when
    /// there are files to upload.
    fn with_body<T: Serialize>(
        builder: RequestBuilder,
        body: &T,
        payload: MessagePayload,
    ) -> Result<RequestBuilder, RestError> {
        if payload.files.is_empty() {
            return Ok(builder.json(body));
        }

        let mut form = Form::new().part(
            "payload_json",
            Part::text(serde_json::to_string(body)?).mime_str("application/json")?,
        );

        for (i, file) in payload.files.into_iter().enumerate() {
            let name = file.part_name(i);
            form = form.part(name, Part::bytes(file.data).file_name(file.name));
        }

        Ok(builder.multipart(form))
    }

    async fn send(builder: RequestBuilder) -> Result<reqwest::Response, RestError> {
        let res = builder.send().await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(RestError::Status { status, body });
        }

        Ok(res)
    }

    async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, RestError> {
        Ok(RestClient::send(builder).await?.json().await?)
    }
}

fn prepare(mut payload: MessagePayload) -> MessagePayload {
    MessagePayload::describe_files(&mut payload.data, &payload.files);
    payload
}

#[async_trait]
impl InteractionApi for RestClient {
    async fn follow_up(
        &self,
        application_id: Snowflake,
        token: &str,
        payload: MessagePayload,
    ) -> Result<Message, RestError> {
        let payload = prepare(payload);
        let url = format!("{}/webhooks/{}/{}?wait=true", self.api_base, application_id, token);

        let data = payload.data.clone();
        let builder = RestClient::with_body(self.request(Method::POST, url), &data, payload)?;
        RestClient::send_json(builder).await
    }

    async fn edit_reply(
        &self,
        application_id: Snowflake,
        token: &str,
        payload: MessagePayload,
        message_id: Option<Snowflake>,
    ) -> Result<Message, RestError> {
        let payload = prepare(payload);
        let url = self.webhook_message_url(application_id, token, message_id);

        let data = payload.data.clone();
        let builder = RestClient::with_body(self.request(Method::PATCH, url), &data, payload)?;
        RestClient::send_json(builder).await
    }

    async fn delete_reply(
        &self,
        application_id: Snowflake,
        token: &str,
        message_id: Option<Snowflake>,
    ) -> Result<(), RestError> {
        let url = self.webhook_message_url(application_id, token, message_id);
        RestClient::send(self.request(Method::DELETE, url)).await?;
        Ok(())
    }

    async fn get_original_reply(
        &self,
        application_id: Snowflake,
        token: &str,
    ) -> Result<Message, RestError> {
        let url = self.webhook_message_url(application_id, token, None);
        RestClient::send_json(self.request(Method::GET, url)).await
    }

    async fn create_modal(
        &self,
        interaction_id: Snowflake,
        token: &str,
        modal: ModalCallbackData,
    ) -> Result<(), RestError> {
        let url = self.callback_url(interaction_id, token);
        let body = InteractionResponse::new_modal(modal);

        RestClient::send(self.request(Method::POST, url).json(&body)).await?;
        Ok(())
    }

    async fn update_message(
        &self,
        interaction_id: Snowflake,
        token: &str,
        payload: MessagePayload,
    ) -> Result<(), RestError> {
        let payload = prepare(payload);
        let url = self.callback_url(interaction_id, token);

        let body = InteractionResponse::new_update_message(payload.data.clone());
        let builder = RestClient::with_body(self.request(Method::POST, url), &body, payload)?;
        RestClient::send(builder).await?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Rejects every call; for tests that never reach the platform.
    pub(crate) struct NullApi;

    fn offline() -> RestError {
        RestError::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: "no platform in tests".to_owned(),
        }
    }

    #[async_trait]
    impl InteractionApi for NullApi {
        async fn follow_up(&self, _: Snowflake, _: &str, _: MessagePayload) -> Result<Message, RestError> {
            Err(offline())
        }

        async fn edit_reply(
            &self,
            _: Snowflake,
            _: &str,
            _: MessagePayload,
            _: Option<Snowflake>,
        ) -> Result<Message, RestError> {
            Err(offline())
        }

        async fn delete_reply(&self, _: Snowflake, _: &str, _: Option<Snowflake>) -> Result<(), RestError> {
            Err(offline())
        }

        async fn get_original_reply(&self, _: Snowflake, _: &str) -> Result<Message, RestError> {
            Err(offline())
        }

        async fn create_modal(&self, _: Snowflake, _: &str, _: ModalCallbackData) -> Result<(), RestError> {
            Err(offline())
        }

        async fn update_message(&self, _: Snowflake, _: &str, _: MessagePayload) -> Result<(), RestError> {
            Err(offline())
        }
    }

    #[test]
    fn test_urls() {
        let client = RestClient::new("https://discord.com/api/v10/", "secret").unwrap();

        assert_eq!(
            client.webhook_message_url(Snowflake(1), "tok", None),
            "https://discord.com/api/v10/webhooks/1/tok/messages/@original"
        );
        assert_eq!(
            client.webhook_message_url(Snowflake(1), "tok", Some(Snowflake(9))),
            "https://discord.com/api/v10/webhooks/1/tok/messages/9"
        );
        assert_eq!(
            client.callback_url(Snowflake(5), "tok"),
            "https://discord.com/api/v10/interactions/5/tok/callback"
        );
    }
}
