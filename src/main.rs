use axum::Server;
use project_tracker::{AppState, config::Config, create_app, db, init_tracing};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    init_tracing(&config);

    let pool = db::build_pool(&config.database())?;
    let addr: SocketAddr = config.server().address().parse()?;

    let state = Arc::new(AppState::new(pool, config));
    let app = create_app(state);

    info!(%addr, "Server running");
    Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
