use crate::error::Error;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File as ConfigFile};
use serde::Deserialize;

pub const DEFAULT_PROTOCOL: &str = "http";
pub const DEFAULT_SERVER: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_CONTEXT_ROOT: &str = "nexus/";
pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin123";
pub const DEFAULT_REPOSITORY: &str = "releases";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_COUNT: u32 = 200;
pub const DEFAULT_EXPECT: usize = 1;
pub const DEFAULT_THROTTLE: usize = 1;

const CONFIG_FILE_NAME: &str = "nexus-prune";
const ENV_PREFIX: &str = "NEXUS_PRUNE";

/// Coordinates of a Nexus installation and the repository to work on.
#[derive(Debug, Clone, Deserialize)]
pub struct NexusInstance {
    pub protocol: String,
    pub server: String,
    pub port: u16,
    pub context_root: String,
    pub username: String,
    pub password: String,
    /// Empty for a global search. Deleting requires a repository.
    pub repository: String,
    pub timeout_secs: u64,
}

impl NexusInstance {
    /// `protocol://server:port/context_root/`, always ending in a slash.
    pub fn base_url(&self) -> String {
        let context_root = self.context_root.trim_matches('/');
        if context_root.is_empty() {
            format!("{}://{}:{}/", self.protocol, self.server, self.port)
        } else {
            format!(
                "{}://{}:{}/{}/",
                self.protocol, self.server, self.port, context_root
            )
        }
    }
}

impl Default for NexusInstance {
    fn default() -> Self {
        Self {
            protocol: DEFAULT_PROTOCOL.to_string(),
            server: DEFAULT_SERVER.to_string(),
            port: DEFAULT_PORT,
            context_root: DEFAULT_CONTEXT_ROOT.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            repository: DEFAULT_REPOSITORY.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    /// Result-size cap passed to the search endpoint.
    pub count: u32,
    /// Limit search to an artifact; empty for all.
    pub artifact: String,
    /// Limit search to a version, wildcards allowed; empty for all.
    pub version: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            artifact: String::new(),
            version: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetentionPolicy {
    /// Abort when a single search returns more artifacts than this.
    pub expect: usize,
    /// Maximum number of confirmed deletions per run.
    pub throttle: usize,
    pub keep_latest: bool,
    /// Report-only unless set.
    pub delete: bool,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            expect: DEFAULT_EXPECT,
            throttle: DEFAULT_THROTTLE,
            keep_latest: true,
            delete: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    pub nexus: NexusInstance,
    pub search: SearchSettings,
    pub retention: RetentionPolicy,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.nexus.server.trim().is_empty() {
            return Err(Error::InvalidConfig("server must not be empty".to_string()));
        }
        if self.search.count == 0 {
            return Err(Error::InvalidConfig("count must be at least 1".to_string()));
        }
        if self.retention.delete && self.nexus.repository.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "delete requires a repository id".to_string(),
            ));
        }
        Ok(())
    }

    /// Copy safe to print.
    pub fn redacted(&self) -> AppConfig {
        let mut copy = self.clone();
        copy.nexus.password = "********".to_string();
        copy
    }
}

/// Built-in defaults, then `nexus-prune.{toml,yaml,json}` if present, then
/// `NEXUS_PRUNE_*` environment variables (`__` separates nested keys).
pub fn load_configuration() -> Result<AppConfig, Error> {
    let builder = with_defaults(Config::builder())?
        .add_source(ConfigFile::with_name(CONFIG_FILE_NAME).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;
    Ok(builder.try_deserialize::<AppConfig>()?)
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, Error> {
    Ok(builder
        .set_default("nexus.protocol", DEFAULT_PROTOCOL)?
        .set_default("nexus.server", DEFAULT_SERVER)?
        .set_default("nexus.port", i64::from(DEFAULT_PORT))?
        .set_default("nexus.context_root", DEFAULT_CONTEXT_ROOT)?
        .set_default("nexus.username", DEFAULT_USERNAME)?
        .set_default("nexus.password", DEFAULT_PASSWORD)?
        .set_default("nexus.repository", DEFAULT_REPOSITORY)?
        .set_default("nexus.timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
        .set_default("search.count", i64::from(DEFAULT_COUNT))?
        .set_default("search.artifact", "")?
        .set_default("search.version", "")?
        .set_default("retention.expect", DEFAULT_EXPECT as i64)?
        .set_default("retention.throttle", DEFAULT_THROTTLE as i64)?
        .set_default("retention.keep_latest", true)?
        .set_default("retention.delete", false)?)
}
