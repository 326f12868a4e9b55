pub mod config;
pub mod engine;
pub mod error;
pub mod gav;
pub mod groups;
pub mod nexus;
pub mod progress;
pub mod shuffle;
pub mod stats;

pub use config::AppConfig;
pub use engine::{RetentionEngine, RunOutcome, RunState, RunSummary};
pub use error::Error;
pub use gav::Gav;
pub use nexus::{ArtifactRepository, DeleteOutcome, NexusClient, SearchResponse};
pub use progress::{ProgressReporter, SilentReporter};
