use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid group arguments: {0}")]
    InvalidGroups(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Cannot parse search response: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP {method} {url} returned unexpected status {status}")]
    UnexpectedStatus {
        method: &'static str,
        url: String,
        status: u16,
    },
}
