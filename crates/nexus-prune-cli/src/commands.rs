use clap::{Args, Parser, Subcommand};
use nexus_prune_core::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "nexus-prune", version)]
#[command(about = "Cleans all but the latest release of Maven artifacts in Nexus", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search the given groups and delete all but the latest release
    Run(RunArgs),
    /// Print the effective configuration (password redacted)
    PrintConfig(ConfigOverrides),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Groups to process, or a single @filename with one group per line
    #[arg(required = true, value_name = "GROUP|@FILE")]
    pub groups: Vec<String>,

    #[command(flatten)]
    pub overrides: ConfigOverrides,
}

/// Command-line values take precedence over file and environment settings.
#[derive(Debug, Default, Args)]
pub struct ConfigOverrides {
    /// Nexus protocol (http/https)
    #[arg(long)]
    pub protocol: Option<String>,
    /// Nexus server name
    #[arg(long)]
    pub server: Option<String>,
    /// Nexus port
    #[arg(long)]
    pub port: Option<u16>,
    /// Nexus context root
    #[arg(long)]
    pub context_root: Option<String>,
    /// Nexus credentials
    #[arg(long)]
    pub username: Option<String>,
    /// Nexus credentials
    #[arg(long)]
    pub password: Option<String>,
    /// Nexus repository ID, empty for global search
    #[arg(long)]
    pub repository: Option<String>,
    /// HTTP request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
    /// Nexus count parameter in REST interface
    #[arg(long)]
    pub count: Option<u32>,
    /// Expected maximum number of results per group
    #[arg(long)]
    pub expect: Option<usize>,
    /// Maximum number of deletions in this run
    #[arg(long)]
    pub throttle: Option<usize>,
    /// Keep the latest release version
    #[arg(long, value_name = "BOOL")]
    pub keep_latest: Option<bool>,
    /// Delete search results (otherwise only display them)
    #[arg(long)]
    pub delete: bool,
    /// Limit search to an artifact
    #[arg(long)]
    pub artifact: Option<String>,
    /// Limit search to a specific version (may include wildcards)
    #[arg(long)]
    pub version: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(self, config: &mut AppConfig) {
        let nexus = &mut config.nexus;
        set(&mut nexus.protocol, self.protocol);
        set(&mut nexus.server, self.server);
        set(&mut nexus.port, self.port);
        set(&mut nexus.context_root, self.context_root);
        set(&mut nexus.username, self.username);
        set(&mut nexus.password, self.password);
        set(&mut nexus.repository, self.repository);
        set(&mut nexus.timeout_secs, self.timeout_secs);

        let search = &mut config.search;
        set(&mut search.count, self.count);
        set(&mut search.artifact, self.artifact);
        set(&mut search.version, self.version);

        let retention = &mut config.retention;
        set(&mut retention.expect, self.expect);
        set(&mut retention.throttle, self.throttle);
        set(&mut retention.keep_latest, self.keep_latest);
        if self.delete {
            retention.delete = true;
        }
    }
}

fn set<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}
