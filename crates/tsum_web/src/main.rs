use tracing::info;
use tsum_web::{create_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let app = create_app(AppState::default()).await;
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    info!("Web form listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
