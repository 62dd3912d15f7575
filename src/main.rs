use pixels_petals_site::{
    app::App,
    types::{Config, Context, ToContext},
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::prelude::*;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let ctx: Arc<Context> = Arc::new(Config::default().to_context().await);
    let app = App::new(ctx);

    let shutdown = CancellationToken::new();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {:?}", err);
            }
            shutdown.cancel();
        }
    });

    if let Err(err) = app.serve(shutdown).await {
        tracing::error!("Server exited with an error: {:?}", err);
        std::process::exit(1);
    }
}
