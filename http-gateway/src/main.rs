use http_gateway::http::Server;
use http_gateway::{handlers, observability, Config, Result};
use interactions::{Gateway, RestClient, Verifier};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    let _guard = observability::configure(&config)?;

    let verifier = Verifier::from_hex(&config.public_key)?;
    let api = Arc::new(RestClient::new(&config.api_base, &config.bot_token)?);

    let registry = handlers::registry()?;
    info!(
        application_id = %config.application_id,
        commands = registry.command_count(),
        buttons = registry.button_count(),
        modals = registry.modal_count(),
        "Loaded handlers"
    );

    let mut gateway = Gateway::new(verifier, Arc::new(registry), api);
    if let Some(owner_id) = config.owner_id {
        gateway = gateway.with_owner(owner_id);
    }

    let server = Arc::new(Server::new(config, gateway));
    server.start().await
}
