pub mod client;
pub mod search;

pub use client::NexusClient;
pub use search::SearchResponse;

use crate::error::Error;
use crate::gav::Gav;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The repository answered 404; nothing was removed.
    AlreadyGone,
}

/// Search and delete operations of a Maven repository manager.
///
/// `NexusClient` talks REST; the retention engine only sees this trait.
pub trait ArtifactRepository {
    /// Search by the non-empty fields of `query`, returning at most `count` artifacts.
    fn search(&self, query: &Gav, count: u32) -> Result<SearchResponse, Error>;

    /// Remove the version directory of `gav`.
    fn delete(&self, gav: &Gav) -> Result<DeleteOutcome, Error>;
}

impl<T: ArtifactRepository + ?Sized> ArtifactRepository for &T {
    fn search(&self, query: &Gav, count: u32) -> Result<SearchResponse, Error> {
        (**self).search(query, count)
    }

    fn delete(&self, gav: &Gav) -> Result<DeleteOutcome, Error> {
        (**self).delete(gav)
    }
}
