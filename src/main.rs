use catalog_server::{build_repository, init_logger, Config, Server, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger(&config.log_level);

    tracing::info!(
        environment = %config.environment,
        backend = ?config.storage,
        "Catalog server starting"
    );

    let repo = build_repository(&config).await?;
    let state = ServerState::new(config.clone(), repo);

    let server = Server::new(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}
