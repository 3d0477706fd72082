//! Response delivery for mantabot command handlers.
//!
//! The key things that make up this crate are:
//!
//! - The [`ChatClient`] trait: the slice of the Discord HTTP API the reply
//!   layer consumes (send, delete, open DM, typing indicator). Production
//!   uses [`DiscordClient`], a thin wrapper over `twilight_http::Client`;
//!   tests substitute a recording implementation.
//!
//! - The [`Reply`] trait and its three variants: [`DirectReply`] answers over
//!   DM, [`MentionReply`] answers in the originating channel with a mention
//!   prefix, and [`DeleteAndMentionReply`] additionally removes the
//!   triggering message once the request scope closes.
//!
//! The dispatch layer picks a [`ReplyKind`] per command, instantiates it with
//! the shared client and the captured [`ReplyData`], and drives the handler
//! inside [`scoped`] so exit cleanup runs on every path.

pub mod client;
pub mod reply;

pub use client::{ChatClient, ClientError, DiscordClient, SentMessage};
pub use reply::{
    DeleteAndMentionReply, DirectReply, ERROR_DELETE_DELAY, MentionReply, Reply, ReplyData, ReplyKind, scoped,
};
