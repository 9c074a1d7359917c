//! API command - JSON API only, no form page

use tracing::info;

use super::serve::{load_config, serve};
use super::ServerArgs;
use crate::api::create_api_router;
use crate::infrastructure::observability::init_tracing;

/// Run the API-only server
pub async fn run(args: ServerArgs) -> anyhow::Result<()> {
    let config = load_config();
    init_tracing(&config.logging, &config.observability.tracing);

    let state = crate::create_app_state(&config)?;
    let app = create_api_router(state);

    info!("Starting API server");
    serve(&config, &args, app).await
}
