use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Host address and port for the HTTP server to listen on.
    #[arg(long, env = "SERVER_ADDR", default_value = "127.0.0.1:4000")]
    pub server_addr: String,

    /// API Key for the chat completion provider. Startup fails without it.
    #[arg(long, env = "CHAT_API_KEY")]
    pub chat_api_key: String,

    /// Model name for chat completion (e.g., gpt-4o-mini)
    #[arg(long, env = "CHAT_MODEL", default_value = "gpt-4o-mini")]
    pub chat_model: String,

    /// Base URL for the chat completion provider API.
    #[arg(long, env = "CHAT_BASE_URL", default_value = "https://api.openai.com")]
    pub chat_base_url: String,

    /// Timeout in seconds for outbound provider requests.
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "30")]
    pub request_timeout_secs: u64,
}
