//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Load and parse the view template
//! - Bind the listener
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener binds last (traffic only when ready)

use std::path::Path;

use tokio::net::TcpListener;

use crate::config::{load_config, ConfigError, ListenerConfig, ServerConfig};
use crate::render::{TemplateError, ViewTemplate};

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("failed to bind {address}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// Process-wide resources, loaded once.
#[derive(Debug)]
pub struct Startup {
    pub config: ServerConfig,
    pub template: ViewTemplate,
}

pub fn load(config_path: Option<&Path>) -> Result<Startup, StartupError> {
    let config = load_config(config_path)?;
    let template = ViewTemplate::load(config.render.template_path.as_deref().map(Path::new))?;
    Ok(Startup { config, template })
}

pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, StartupError> {
    let address = config.bind_address();
    let bound = TcpListener::bind(&address).await;
    bound.map_err(|source| StartupError::Bind { address, source })
}
