//! Backend entry-point: loads settings, installs tracing, and serves the
//! account endpoints, the bearer-gated resource, and health probes.

mod server;

use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use auth_gate::domain::TokenCodec;
use auth_gate::settings::AppSettings;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let bind_addr = settings.bind_addr().wrap_err("invalid bind address")?;
    let config = ServerConfig::new(bind_addr)
        .with_api_prefix(settings.api_prefix().wrap_err("invalid api prefix")?)
        .with_codec(TokenCodec::new(
            settings
                .token_delimiter()
                .wrap_err("invalid token delimiter")?,
        ));

    info!(bind_addr = %config.bind_addr(), "starting auth-gate");
    let server = create_server(config).wrap_err("failed to start server")?;
    server.await.wrap_err("server terminated with an error")
}
