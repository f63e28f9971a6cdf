use tracing::info;

use super::{routes, server::run_server};
use crate::{state::ServerConfig, AppState, Result};

pub(crate) async fn serve() -> Result<()> {
    let server_config = ServerConfig::from_env()?;
    let app_state = AppState::from_env()?;

    info!(
        endpoint = %app_state.contact.endpoint,
        form_wired = app_state.contact.form_wired,
        "Contact form configured"
    );

    run_server(
        routes::make_router().with_state(app_state),
        &server_config,
    )
    .await?;

    info!("Main Returning");

    Ok(())
}
