use std::sync::Arc;

use gleaner::api::create_router;
use gleaner::config::CONFIG;
use gleaner::jina::JinaClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let jina = Arc::new(JinaClient::new(CONFIG.jina_api_key.clone()));
    let app = create_router(jina);

    let listener = tokio::net::TcpListener::bind(&CONFIG.listen_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
