use crate::models::chat::ChatMessage;

/// In-memory conversation history for a single process lifetime.
///
/// Append-only and insertion-ordered. Messages are only ever added as a
/// complete user/assistant pair, so the log never holds a user message
/// without its corresponding reply.
#[derive(Debug, Default)]
pub struct ConversationLog {
    messages: Vec<ChatMessage>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a completed exchange: the user message immediately followed
    /// by the assistant reply.
    pub fn append_exchange(&mut self, user: ChatMessage, assistant: ChatMessage) {
        self.messages.push(user);
        self.messages.push(assistant);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn snapshot(&self) -> Vec<ChatMessage> {
        self.messages.clone()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
