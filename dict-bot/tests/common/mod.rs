pub mod mock_bot;

use chrono::Utc;
use dbot_core::{Chat, Message, User};

/// Text message from user 123 ("Ada") in private chat 456.
pub fn text_message(content: &str) -> Message {
    Message {
        id: "42".to_string(),
        user: User {
            id: 123,
            username: Some("ada".to_string()),
            first_name: Some("Ada".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "Private".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        created_at: Utc::now(),
    }
}
