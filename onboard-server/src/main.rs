use onboard_server::utils::logger::init_logger;
use onboard_server::{Config, Server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment (.env) then logging, before anything touches the database
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!(
        environment = %config.environment,
        "Restaurant onboarding server starting..."
    );

    let server = Server::new(config);
    server.run().await
}
