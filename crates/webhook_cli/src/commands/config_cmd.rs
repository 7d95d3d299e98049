use std::path::Path;

use tracing::{debug, error, info, instrument};

use crate::config::AppConfig;
use crate::errors::Error;

#[cfg(test)]
#[path = "config_cmd_tests.rs"]
mod tests;

/// Write a sample configuration file to `config_path`.
///
/// Refuses to overwrite an existing file.
#[instrument]
pub fn init_config(config_path: &Path) -> Result<(), Error> {
    debug!(message = "Initializing configuration", path = ?config_path);

    if config_path.exists() {
        let err = Error::Config(format!(
            "Configuration file already exists at {:?}",
            config_path
        ));
        error!(
            message = "Configuration file already exists",
            path = ?config_path,
            error = ?err
        );
        return Err(err);
    }

    AppConfig::sample().save(config_path)?;

    info!(message = "Configuration initialized", path = ?config_path);
    Ok(())
}
