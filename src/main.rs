mod model;
mod server;

use dioxus_logger::tracing;

use crate::server::{config::Config, error::AppError, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    dioxus_logger::init(config.log_level)?;

    let gateway = startup::connect_gateway(&config).await?;
    startup::probe_store(gateway.as_ref()).await;

    tracing::info!(
        "Serving static files from {}",
        config.static_root.display()
    );

    let app = startup::build_app(AppState::new(
        gateway,
        config.static_root.clone(),
        config.credentials,
    ));

    startup::serve(app, &config.bind_address).await
}
