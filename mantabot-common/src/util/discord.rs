use twilight_model::id::Id;
use twilight_model::id::marker::UserMarker;

/// Discord's message content limit, in characters.
pub const MAX_CONTENT_LENGTH: usize = 2000;

/// Formats a user ID as a pingable mention token.
pub fn user_mention(id: Id<UserMarker>) -> String {
    format!("<@{id}>")
}

/// Trims a `String` in-place such that it fits in Discord's 2000 character message limit.
pub fn trim_content_fits(content: &mut String) {
    if let Some((truncated_byte_index, _)) = content.char_indices().nth(MAX_CONTENT_LENGTH) {
        // If the content length exceeds 2000 characters, truncate it at the 2000th characters' byte index
        content.truncate(truncated_byte_index);
    }
}
