//! The [`Reply`] family.
//!
//! A reply abstracts how one command's output reaches the user. One instance
//! is created per inbound command, used for the duration of that request, and
//! discarded; it captures the triggering message's context up front and never
//! outlives the request scope.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mantabot_common::util::discord::user_mention;
use tokio::time::sleep;
use tracing::warn;
use twilight_model::channel::Message;
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, GuildMarker, MessageMarker, UserMarker};

use crate::client::{ChatClient, ClientError, SentMessage};

/// How long a self-cleaning error notice stays in the channel.
pub const ERROR_DELETE_DELAY: Duration = Duration::from_secs(10);

/// Context captured from the triggering message when a command is accepted.
///
/// Immutable for the lifetime of the reply. `guild_id` is `Some` exactly when
/// the message arrived in a guild channel; DMs carry no guild.
#[derive(Copy, Clone, Debug)]
pub struct ReplyData {
    pub message_id: Id<MessageMarker>,
    pub channel_id: Id<ChannelMarker>,
    pub guild_id: Option<Id<GuildMarker>>,
    pub author_id: Id<UserMarker>,
}

impl ReplyData {
    pub fn from_message(message: &Message) -> Self {
        Self {
            message_id: message.id,
            channel_id: message.channel_id,
            guild_id: message.guild_id,
            author_id: message.author.id,
        }
    }

    pub fn is_guild(&self) -> bool {
        self.guild_id.is_some()
    }

    /// The triggering message, shaped for the cleanup primitives.
    fn original(&self) -> SentMessage {
        SentMessage {
            channel_id: self.channel_id,
            id: self.message_id,
        }
    }
}

/// Best-effort deletion shared by every variant and every detached cleanup
/// task: a message that is already gone is ignored, any other platform
/// failure is logged and swallowed. Never surfaces an error.
pub async fn delete_message(client: &dyn ChatClient, message: SentMessage) {
    match client.delete_message(message.channel_id, message.id).await {
        Ok(()) | Err(ClientError::NotFound) => {},
        Err(err) => warn!("could not delete message {} in channel {}: {err}", message.id, message.channel_id),
    }
}

/// Sleeps for `delay`, then deletes `message`. Spawned as a detached task;
/// callers never await it.
pub async fn delete_after(client: Arc<dyn ChatClient>, message: SentMessage, delay: Duration) {
    sleep(delay).await;
    delete_message(&*client, message).await;
}

/// A strategy for delivering one command's responses.
///
/// `send` failures (network, permissions on send) propagate to the handler;
/// only deletion is shielded, via [`Reply::delete_message`].
#[async_trait]
pub trait Reply: Send + Sync {
    fn data(&self) -> &ReplyData;

    fn client(&self) -> &Arc<dyn ChatClient>;

    /// Hints to the user that a response is being prepared.
    async fn notify(&self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Delivers response content through this variant's channel.
    async fn send(&self, content: &str) -> anyhow::Result<SentMessage>;

    /// Delivers an error message.
    async fn error(&self, text: &str) -> anyhow::Result<SentMessage> {
        self.send(text).await
    }

    /// The uniform tolerant cleanup primitive; see [`delete_message`].
    async fn delete_message(&self, message: SentMessage) {
        delete_message(&**self.client(), message).await;
    }

    /// Runs when the request scope closes. Default: nothing.
    async fn cleanup(&self) {}
}

/// Runs `body` with `reply` in scope, then awaits the variant's exit cleanup
/// on success and on `Err` alike, before the result is returned. Cleanup
/// therefore runs exactly once per request. Panics unwind past the cleanup.
pub async fn scoped<T>(reply: &dyn Reply, body: impl Future<Output = anyhow::Result<T>>) -> anyhow::Result<T> {
    let result = body.await;
    reply.cleanup().await;
    result
}

/// Answers over a direct message to the command's author.
///
/// Guild-channel commands additionally get their triggering message removed,
/// detached from the send itself.
pub struct DirectReply {
    client: Arc<dyn ChatClient>,
    data: ReplyData,
}

impl DirectReply {
    pub fn new(client: Arc<dyn ChatClient>, data: ReplyData) -> Self {
        Self { client, data }
    }
}

#[async_trait]
impl Reply for DirectReply {
    fn data(&self) -> &ReplyData {
        &self.data
    }

    fn client(&self) -> &Arc<dyn ChatClient> {
        &self.client
    }

    async fn notify(&self) -> anyhow::Result<()> {
        let dm = self.client.create_dm_channel(self.data.author_id).await?;
        self.client.trigger_typing(dm).await
    }

    async fn send(&self, content: &str) -> anyhow::Result<SentMessage> {
        if self.data.is_guild() {
            // Detached: the DM goes out whether or not the original message
            // could be removed.
            let client = self.client.clone();
            let original = self.data.original();
            tokio::spawn(async move { delete_message(&*client, original).await });
        }

        let dm = self.client.create_dm_channel(self.data.author_id).await?;
        self.client.create_message(dm, content).await
    }
}

/// Answers in the originating channel, prefixed with the author's mention
/// when that channel is shared with other users.
pub struct MentionReply {
    client: Arc<dyn ChatClient>,
    data: ReplyData,
}

impl MentionReply {
    pub fn new(client: Arc<dyn ChatClient>, data: ReplyData) -> Self {
        Self { client, data }
    }
}

#[async_trait]
impl Reply for MentionReply {
    fn data(&self) -> &ReplyData {
        &self.data
    }

    fn client(&self) -> &Arc<dyn ChatClient> {
        &self.client
    }

    async fn notify(&self) -> anyhow::Result<()> {
        self.client.trigger_typing(self.data.channel_id).await
    }

    async fn send(&self, text: &str) -> anyhow::Result<SentMessage> {
        if self.data.is_guild() {
            let content = format!("{}: {text}", user_mention(self.data.author_id));
            self.client.create_message(self.data.channel_id, &content).await
        } else {
            self.client.create_message(self.data.channel_id, text).await
        }
    }
}

/// [`MentionReply`] that also removes the triggering message once the request
/// scope closes, and self-cleans its error notices after
/// [`ERROR_DELETE_DELAY`].
///
/// Composes a [`MentionReply`] for the delivery path rather than duplicating
/// it.
pub struct DeleteAndMentionReply {
    inner: MentionReply,
}

impl DeleteAndMentionReply {
    pub fn new(client: Arc<dyn ChatClient>, data: ReplyData) -> Self {
        Self {
            inner: MentionReply::new(client, data),
        }
    }
}

#[async_trait]
impl Reply for DeleteAndMentionReply {
    fn data(&self) -> &ReplyData {
        self.inner.data()
    }

    fn client(&self) -> &Arc<dyn ChatClient> {
        self.inner.client()
    }

    async fn notify(&self) -> anyhow::Result<()> {
        self.inner.notify().await
    }

    async fn send(&self, text: &str) -> anyhow::Result<SentMessage> {
        self.inner.send(text).await
    }

    async fn error(&self, text: &str) -> anyhow::Result<SentMessage> {
        let message = self.send(text).await?;

        // The notice self-cleans from shared channels; `error` itself returns
        // as soon as the send completes.
        if self.data().is_guild() {
            let client = self.client().clone();
            tokio::spawn(delete_after(client, message, ERROR_DELETE_DELAY));
        }

        Ok(message)
    }

    async fn cleanup(&self) {
        // Awaited as part of scope exit: the command message is gone before
        // the handler is considered finished. Nothing to clean up in DMs.
        if self.data().is_guild() {
            self.delete_message(self.data().original()).await;
        }
    }
}

/// Which delivery strategy the dispatch layer picked for a command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReplyKind {
    Direct,
    Mention,
    DeleteAndMention,
}

impl ReplyKind {
    pub fn instantiate(self, client: Arc<dyn ChatClient>, data: ReplyData) -> Box<dyn Reply> {
        match self {
            Self::Direct => Box::new(DirectReply::new(client, data)),
            Self::Mention => Box::new(MentionReply::new(client, data)),
            Self::DeleteAndMention => Box::new(DeleteAndMentionReply::new(client, data)),
        }
    }
}
