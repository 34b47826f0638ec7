//! Config command and configuration resolution.

use crate::cli::{ConfigArgs, EndpointArgs};
use crate::error::{CliError, Result};
use sift_processor::ProcessorConfig;
use tracing::debug;

/// Build the effective configuration: file (or defaults), then flag overrides.
pub fn resolve_config(args: &EndpointArgs) -> Result<ProcessorConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            ProcessorConfig::from_file(path)?
        }
        None => ProcessorConfig::default(),
    };

    if let Some(endpoint) = &args.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(model) = &args.model {
        config.model = model.clone();
    }

    config.validate().map_err(CliError::Config)?;
    Ok(config)
}

/// Execute the config command.
pub fn execute_config(args: ConfigArgs) -> Result<()> {
    let config = resolve_config(&args.endpoint)?;
    print!("{}", config.to_toml()?);
    Ok(())
}
