pub mod cli;
pub mod history;
pub mod llm;
pub mod models;
pub mod relay;
pub mod server;

use cli::Args;
use llm::LlmConfig;
use log::info;
use relay::ChatRelay;
use server::Server;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("Chat Model: {}", args.chat_model);
    info!("Chat Base URL: {}", args.chat_base_url);
    info!("Request Timeout: {}s", args.request_timeout_secs);
    info!("-------------------------");

    let config = LlmConfig {
        api_key: args.chat_api_key.clone(),
        model: args.chat_model.clone(),
        base_url: args.chat_base_url.clone(),
        timeout: Duration::from_secs(args.request_timeout_secs),
    };
    let client = llm::new_client(&config)?;
    let relay = Arc::new(ChatRelay::new(client));

    info!("Starting server on: {}", args.server_addr);
    let server = Server::new(args.server_addr.clone(), relay);
    server.run().await?;

    Ok(())
}
