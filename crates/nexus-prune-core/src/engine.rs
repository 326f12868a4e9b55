use crate::config::{RetentionPolicy, SearchSettings};
use crate::error::Error;
use crate::gav::Gav;
use crate::nexus::{ArtifactRepository, DeleteOutcome};
use crate::progress::ProgressReporter;
use crate::stats::PerfSample;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Mutable state of one run, owned by the engine loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunState {
    /// Confirmed deletions so far.
    pub actions: usize,
    /// Elapsed time of each confirmed deletion, in whole milliseconds.
    pub latencies_ms: Vec<u64>,
    /// Sticky: set once any group came back truncated.
    pub truncated: bool,
}

impl RunState {
    pub fn record_deletion(&mut self, elapsed: Duration) -> PerfSample {
        self.actions += 1;
        self.latencies_ms.push(elapsed.as_millis() as u64);
        PerfSample::from_history(elapsed, &self.latencies_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every group was processed.
    Completed,
    /// The throttle ceiling was hit; the remaining candidates were left alone.
    ThrottleReached { actions: usize },
    /// One search returned more artifacts than expected; nothing more was touched.
    ExpectationExceeded { found: usize, expect: usize },
}

#[derive(Debug)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    pub state: RunState,
}

/// Walks the groups one at a time and deletes every version except the
/// latest release, within the throttle and expected-count limits.
pub struct RetentionEngine<R> {
    repository: R,
    search: SearchSettings,
    policy: RetentionPolicy,
}

impl<R: ArtifactRepository> RetentionEngine<R> {
    pub fn new(repository: R, search: SearchSettings, policy: RetentionPolicy) -> Self {
        Self {
            repository,
            search,
            policy,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Run the retention pass over `groups` in the given order.
    ///
    /// Any repository error aborts the pass and is returned as is. Guard and
    /// throttle stops are regular outcomes.
    pub fn run(
        &self,
        groups: &[String],
        reporter: &dyn ProgressReporter,
    ) -> Result<RunSummary, Error> {
        let mut state = RunState::default();
        let outcome = self.process_groups(groups, &mut state, reporter)?;

        if state.truncated {
            warn!("Truncated batch, consider re-running");
            reporter.on_truncated_batch();
        }

        Ok(RunSummary { outcome, state })
    }

    fn process_groups(
        &self,
        groups: &[String],
        state: &mut RunState,
        reporter: &dyn ProgressReporter,
    ) -> Result<RunOutcome, Error> {
        for group in groups {
            let query = Gav::new(group, &self.search.artifact, &self.search.version);
            info!("processing {}", query);
            reporter.on_group_start(&query);

            let found = self.repository.search(&query, self.search.count)?;
            for gav in found.artifacts() {
                reporter.on_artifact_found(gav);
            }

            let returned = found.returned();
            info!(
                "search returned {} artifacts out of {}",
                returned, found.total_count
            );
            reporter.on_search_complete(returned, found.total_count);

            if returned > self.policy.expect {
                return Ok(RunOutcome::ExpectationExceeded {
                    found: returned,
                    expect: self.policy.expect,
                });
            }

            for gav in found.artifacts() {
                if self.policy.keep_latest && gav.is_latest_release() {
                    info!("keeping latest version {} for {}", gav.version, gav);
                    reporter.on_kept_latest(gav);
                    continue;
                }

                if state.actions >= self.policy.throttle {
                    info!("throttle={} reached, exiting", state.actions);
                    return Ok(RunOutcome::ThrottleReached {
                        actions: state.actions,
                    });
                }

                if self.policy.delete {
                    self.delete_one(gav, state, reporter)?;
                }
            }

            if found.is_truncated() {
                state.truncated = true;
            }
        }

        Ok(RunOutcome::Completed)
    }

    fn delete_one(
        &self,
        gav: &Gav,
        state: &mut RunState,
        reporter: &dyn ProgressReporter,
    ) -> Result<(), Error> {
        let started = Instant::now();
        match self.repository.delete(gav)? {
            DeleteOutcome::Deleted => {
                let sample = state.record_deletion(started.elapsed());
                info!(
                    "[PERF] {:?}, average: {} ms, median: {} ms",
                    sample.elapsed, sample.mean_ms, sample.median_ms
                );
                reporter.on_deleted(gav, &sample);
            }
            DeleteOutcome::AlreadyGone => {
                reporter.on_already_gone(gav);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deletion_updates_running_stats() {
        let mut state = RunState::default();
        state.record_deletion(Duration::from_millis(10));
        state.record_deletion(Duration::from_micros(30_900));
        let sample = state.record_deletion(Duration::from_millis(2));

        assert_eq!(state.actions, 3);
        // sub-millisecond part is dropped
        assert_eq!(state.latencies_ms, vec![10, 30, 2]);
        assert_eq!(sample.mean_ms, 14);
        assert_eq!(sample.median_ms, 10);
    }
}
