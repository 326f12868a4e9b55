use crate::error::Error;
use std::fs;
use std::path::Path;
use tracing::debug;

const FILE_MARKER: char = '@';

/// Turn command-line arguments into the list of groups to process.
///
/// A single `@filename` argument reads one group per line from that file;
/// otherwise every argument is a group.
pub fn resolve_groups(args: &[String]) -> Result<Vec<String>, Error> {
    match args.first() {
        Some(first) if first.starts_with(FILE_MARKER) => {
            if args.len() > 1 {
                return Err(Error::InvalidGroups(format!(
                    "{} cannot be combined with other groups",
                    first
                )));
            }
            read_groups(Path::new(&first[FILE_MARKER.len_utf8()..]))
        }
        _ => Ok(args.to_vec()),
    }
}

/// Blank lines are skipped: an empty group would search the whole repository.
pub fn read_groups(path: &Path) -> Result<Vec<String>, Error> {
    let contents = fs::read_to_string(path)?;
    let groups: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();
    debug!("Read {} groups from {}", groups.len(), path.display());
    Ok(groups)
}
