//! Style configuration persistence
//!
//! The config lives in the platform config dir (`~/.config/hudstyle/style.toml`
//! on Linux) unless an explicit path is given. A missing file is created with
//! defaults on first load.

use std::path::Path;

use hudstyle_types::OverlayStyleConfig;
use tracing::debug;

use crate::error::ConfigError;

const APP_NAME: &str = "hudstyle";
const CONFIG_NAME: &str = "style";

/// Load the style config from `path`, or from the default location
pub fn load(path: Option<&Path>) -> Result<OverlayStyleConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading style config");
            confy::load_path(path)?
        }
        None => {
            debug!("Loading style config from default location");
            confy::load(APP_NAME, CONFIG_NAME)?
        }
    };
    Ok(config)
}

/// Write the style config to `path`, or to the default location
pub fn store(config: &OverlayStyleConfig, path: Option<&Path>) -> Result<(), ConfigError> {
    match path {
        Some(path) => confy::store_path(path, config),
        None => confy::store(APP_NAME, CONFIG_NAME, config),
    }
    .map_err(ConfigError::Save)
}
