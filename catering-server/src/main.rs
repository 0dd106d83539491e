use catering_server::{AppState, Config, Server, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment setup (dotenv, logging)
    setup_environment()?;

    print_banner();

    tracing::info!("Catering order server starting...");

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize application state (catalog warmup included)
    let (state, channels) = AppState::initialize(&config).await;

    // 4. Run the HTTP server (spawns background workers)
    let server = Server::with_state(config, state, channels);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
