use serde::{ Serialize, Deserialize };

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// Body of `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Reply body of `POST /chat`.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}
