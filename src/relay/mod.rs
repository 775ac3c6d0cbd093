use log::{info, error};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::history::ConversationLog;
use crate::llm::ChatClient;
use crate::models::chat::ChatMessage;

/// Reply returned for an empty or whitespace-only message; the provider is
/// not contacted and the log is left untouched.
pub const EMPTY_MESSAGE_REPLY: &str = "Please enter a message.";

/// Forwards a message plus the accumulated conversation to the completion
/// provider and records the exchange.
pub struct ChatRelay {
    client: Arc<dyn ChatClient>,
    log: Mutex<ConversationLog>,
}

impl ChatRelay {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self {
            client,
            log: Mutex::new(ConversationLog::new()),
        }
    }

    /// Relays `message` to the provider with the full conversation as
    /// context and returns the reply text.
    ///
    /// A provider failure is folded into the reply channel: the returned
    /// text embeds the raw error payload, and the log keeps only completed
    /// exchanges. The lock is held across the provider call so concurrent
    /// submits cannot interleave their user/assistant pairs.
    pub async fn submit(&self, message: &str) -> String {
        if message.trim().is_empty() {
            return EMPTY_MESSAGE_REPLY.to_string();
        }

        let user = ChatMessage::user(message);
        let mut log = self.log.lock().await;

        let mut context = log.snapshot();
        context.push(user.clone());

        match self.client.complete(&context).await {
            Ok(reply) => {
                log.append_exchange(user, ChatMessage::assistant(reply.clone()));
                info!("Exchange recorded, log now holds {} messages", log.len());
                reply
            }
            Err(e) => {
                error!("Provider call failed: {}", e);
                format!("Error: {}", e)
            }
        }
    }

    /// Full conversation history in insertion order.
    pub async fn history(&self) -> Vec<ChatMessage> {
        self.log.lock().await.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::test_stub::{StubClient, FailingClient};
    use crate::models::chat::Role;
    use reqwest::StatusCode;

    fn relay_with_reply(reply: &str) -> ChatRelay {
        ChatRelay::new(Arc::new(StubClient { reply: reply.to_string() }))
    }

    #[tokio::test]
    async fn submit_returns_reply_and_records_pair() {
        let relay = relay_with_reply("hi there");

        let reply = relay.submit("hello").await;
        assert_eq!(reply, "hi there");

        let history = relay.history().await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, Role::User);
        assert_eq!(history[0].content, "hello");
        assert_eq!(history[1].role, Role::Assistant);
        assert_eq!(history[1].content, "hi there");
    }

    #[tokio::test]
    async fn whitespace_message_short_circuits() {
        let relay = relay_with_reply("should not be used");

        let reply = relay.submit("   ").await;
        assert_eq!(reply, EMPTY_MESSAGE_REPLY);
        assert!(relay.history().await.is_empty());

        let reply = relay.submit("").await;
        assert_eq!(reply, EMPTY_MESSAGE_REPLY);
        assert!(relay.history().await.is_empty());
    }

    #[tokio::test]
    async fn history_grows_two_per_submission() {
        let relay = relay_with_reply("ok");

        for i in 0..3 {
            relay.submit(&format!("message {}", i)).await;
        }

        let history = relay.history().await;
        assert_eq!(history.len(), 6);
        for pair in history.chunks(2) {
            assert_eq!(pair[0].role, Role::User);
            assert_eq!(pair[1].role, Role::Assistant);
        }
    }

    #[tokio::test]
    async fn provider_error_is_echoed_as_text() {
        let relay = ChatRelay::new(Arc::new(FailingClient {
            status: StatusCode::TOO_MANY_REQUESTS,
            body: r#"{"error":"rate limited"}"#.to_string(),
        }));

        let reply = relay.submit("hello").await;
        assert!(reply.contains(r#"{"error":"rate limited"}"#));
        assert!(relay.history().await.is_empty());
    }
}
