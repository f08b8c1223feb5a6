use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coursesite::api::router;
use coursesite::cli::{Cli, Command};
use coursesite::config::AppConfig;
use coursesite::site;
use coursesite::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "coursesite=debug,tower_http=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::new_from_env()?;
    let state = AppState::from_config(&config)?;

    match cli.command() {
        Command::Export { dir } => {
            site::export(&state.page_context(), dir)?;
            Ok(())
        }
        Command::Serve => {
            let app = router(state, &config.assets_dir);

            info!("listening on http://{}", config.bind_addr);
            let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
            axum::serve(listener, app).await?;

            Ok(())
        }
    }
}
