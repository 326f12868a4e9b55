use nexus_prune_core::{Gav, ProgressReporter};

/// Prints every discovered artifact on stdout, so a report-only run doubles
/// as a listing. The truncation advisory and everything else go through the
/// tracing layers.
pub struct CliReporter;

impl ProgressReporter for CliReporter {
    fn on_artifact_found(&self, gav: &Gav) {
        println!("{}", gav.concise_notation());
    }
}
