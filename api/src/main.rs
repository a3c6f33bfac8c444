use std::sync::Arc;

use clap::Parser;
use recipesnap_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if args.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let state = state(args.clone()).await?;
    let router = router(state)?;

    let address = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("RecipeSnap API listening on {}", address);

    axum::serve(listener, router).await?;

    Ok(())
}
