//! Configuration file loading for price-predictor
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./predictor.toml` or `./.predictor.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/price-predictor/config.toml`
//! 4. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileArtifactsConfig, FileConfig, FileOutputConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
