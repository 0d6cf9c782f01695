use tracing::info;

use crate::api;
use crate::cli::commands::ServeArgs;
use crate::config::RelayConfig;
use crate::errors::RelayError;

pub async fn handle_serve(args: ServeArgs) -> Result<(), RelayError> {
    let config = RelayConfig::from_env()?;
    info!(host = %args.host, port = args.port, upstream = %config.base_url, "Starting relay server");

    let state = api::create_app_state(&config);
    let app = api::build_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| RelayError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
