use crate::gav::Gav;
use crate::stats::PerfSample;

/// Trait for reporting retention progress.
///
/// The CLI prints the artifact listing and the advisory; tests record calls.
/// All methods have default no-op implementations.
pub trait ProgressReporter {
    fn on_group_start(&self, _query: &Gav) {}
    fn on_artifact_found(&self, _gav: &Gav) {}
    fn on_search_complete(&self, _returned: usize, _total_count: usize) {}
    fn on_kept_latest(&self, _gav: &Gav) {}
    fn on_deleted(&self, _gav: &Gav, _sample: &PerfSample) {}
    fn on_already_gone(&self, _gav: &Gav) {}
    /// Some search in this run was truncated; re-running may find more.
    fn on_truncated_batch(&self) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}
