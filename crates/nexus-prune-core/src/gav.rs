use serde::Deserialize;
use std::fmt;

/// Maven coordinates (group, artifact, version), extended by the Nexus
/// `latestRelease` field of the containing group/artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gav {
    #[serde(default)]
    pub group_id: String,
    #[serde(default)]
    pub artifact_id: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub latest_release: Option<String>,
}

impl Gav {
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> Self {
        Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
            latest_release: None,
        }
    }

    pub fn with_latest_release(mut self, latest_release: &str) -> Self {
        self.latest_release = Some(latest_release.to_string());
        self
    }

    /// `group:artifact:version`
    pub fn concise_notation(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }

    /// Repository path for group, artifact and version only.
    /// Classifier and extension are not covered, which is enough to delete
    /// a whole version directory.
    pub fn default_layout(&self) -> String {
        format!(
            "{}/{}/{}",
            self.group_id.replace('.', "/"),
            self.artifact_id,
            self.version
        )
    }

    pub fn is_latest_release(&self) -> bool {
        self.latest_release.as_deref() == Some(self.version.as_str())
    }
}

impl fmt::Display for Gav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.concise_notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let gav = Gav::new("my.group", "a1", "1.0.0");
        assert_eq!(gav.default_layout(), "my/group/a1/1.0.0");
    }

    #[test]
    fn test_default_layout_without_dots() {
        let gav = Gav::new("acme", "tool", "2.3");
        assert_eq!(gav.default_layout(), "acme/tool/2.3");
    }

    #[test]
    fn test_concise_notation() {
        let gav = Gav::new("my.group", "a1", "1.0.0");
        assert_eq!(gav.concise_notation(), "my.group:a1:1.0.0");
        assert_eq!(gav.to_string(), "my.group:a1:1.0.0");
    }

    #[test]
    fn test_is_latest_release() {
        let latest = Gav::new("g", "a", "2.0").with_latest_release("2.0");
        let older = Gav::new("g", "a", "1.0").with_latest_release("2.0");
        let unknown = Gav::new("g", "a", "1.0");
        assert!(latest.is_latest_release());
        assert!(!older.is_latest_release());
        assert!(!unknown.is_latest_release());
    }
}
