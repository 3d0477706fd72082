use std::fmt::Display;

use async_trait::async_trait;
use mantabot_common::config::CONFIG;
use mantabot_common::util::discord::trim_content_fits;
use twilight_http::Client as HttpClient;
use twilight_http::error::ErrorType;
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, MessageMarker, UserMarker};

/// A message addressed by the ids needed to operate on it over the HTTP API.
///
/// Used both for messages the bot has sent and for the original command
/// message it may need to clean up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SentMessage {
    pub channel_id: Id<ChannelMarker>,
    pub id: Id<MessageMarker>,
}

/// Deletion failures the reply layer distinguishes.
#[derive(Debug)]
pub enum ClientError {
    /// The message no longer exists.
    NotFound,
    /// Any other platform-level failure: missing permissions, rate limits,
    /// network errors.
    Failed(anyhow::Error),
}

impl Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => f.write_str("message no longer exists"),
            Self::Failed(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// The subset of the chat platform the reply layer consumes.
// Used as a trait object (`Arc<dyn ChatClient>`) shared between a reply and
// its detached cleanup tasks, so #[async_trait] for object safety.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Sends `content` to a channel, returning the ids of the created message.
    async fn create_message(&self, channel_id: Id<ChannelMarker>, content: &str) -> anyhow::Result<SentMessage>;

    /// Resolves the private channel for a user, opening one if none exists.
    async fn create_dm_channel(&self, user_id: Id<UserMarker>) -> anyhow::Result<Id<ChannelMarker>>;

    /// Deletes a message.
    async fn delete_message(
        &self,
        channel_id: Id<ChannelMarker>,
        message_id: Id<MessageMarker>,
    ) -> Result<(), ClientError>;

    /// Fires the typing indicator in a channel.
    async fn trigger_typing(&self, channel_id: Id<ChannelMarker>) -> anyhow::Result<()>;
}

/// Production [`ChatClient`] over `twilight_http`.
pub struct DiscordClient {
    http: HttpClient,
}

impl DiscordClient {
    pub fn new(token: String) -> Self {
        Self {
            http: HttpClient::new(token),
        }
    }

    /// Builds a client authenticated with the configured bot token.
    pub fn from_config() -> Self {
        Self::new(CONFIG.authentication.discord_token.clone())
    }
}

#[async_trait]
impl ChatClient for DiscordClient {
    async fn create_message(&self, channel_id: Id<ChannelMarker>, content: &str) -> anyhow::Result<SentMessage> {
        let mut content = content.to_owned();
        trim_content_fits(&mut content);

        let message = self
            .http
            .create_message(channel_id)
            .content(&content)
            .await?
            .model()
            .await?;

        Ok(SentMessage {
            channel_id: message.channel_id,
            id: message.id,
        })
    }

    async fn create_dm_channel(&self, user_id: Id<UserMarker>) -> anyhow::Result<Id<ChannelMarker>> {
        let channel = self.http.create_private_channel(user_id).await?.model().await?;
        Ok(channel.id)
    }

    async fn delete_message(
        &self,
        channel_id: Id<ChannelMarker>,
        message_id: Id<MessageMarker>,
    ) -> Result<(), ClientError> {
        match self.http.delete_message(channel_id, message_id).await {
            Ok(_) => Ok(()),
            Err(err) => {
                let not_found = matches!(err.kind(), ErrorType::Response { status, .. } if status.get() == 404);
                if not_found {
                    Err(ClientError::NotFound)
                } else {
                    Err(ClientError::Failed(err.into()))
                }
            },
        }
    }

    async fn trigger_typing(&self, channel_id: Id<ChannelMarker>) -> anyhow::Result<()> {
        self.http.create_typing_trigger(channel_id).await?;
        Ok(())
    }
}
