use std::path::Path;

use tracing::info;

use crate::api;
use crate::cli::commands::ServeArgs;
use crate::config::{self, CrosscheckConfig};
use crate::errors::CrosscheckError;

pub async fn handle_serve(args: ServeArgs) -> Result<(), CrosscheckError> {
    info!(host = %args.host, port = args.port, "Starting API server");

    let config = match &args.config {
        Some(p) => config::parse_config(Path::new(p)).await?,
        None => CrosscheckConfig::default(),
    };

    let state = api::AppState::new(config);
    let app = api::build_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| CrosscheckError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
