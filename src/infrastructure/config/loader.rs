//! Layered loading of [`LogConfig`] from defaults, YAML and environment.

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;

use crate::domain::LoggingResult;
use crate::infrastructure::logging::LogConfig;

/// Project configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "logshim.yaml";

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "LOGSHIM_";

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `logshim.yaml` in the working directory (optional)
    /// 3. Environment variables (`LOGSHIM_*` prefix)
    pub fn load() -> LoggingResult<LogConfig> {
        Ok(Self::figment(CONFIG_FILE)
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?)
    }

    /// Load configuration from a specific file on top of the defaults
    pub fn load_from_file(path: impl AsRef<Path>) -> LoggingResult<LogConfig> {
        Ok(Self::figment(path).extract()?)
    }

    fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(LogConfig::default()))
            .merge(Yaml::file(path.as_ref()))
    }
}
