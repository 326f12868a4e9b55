use crate::error::Error;
use crate::gav::Gav;
use serde::Deserialize;

/// Body of the Nexus `lucene/search` endpoint (`searchNGResponse`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub total_count: usize,
    #[serde(default)]
    pub too_many_results: bool,
    #[serde(default)]
    data: ArtifactList,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
struct ArtifactList {
    #[serde(rename = "artifact", default)]
    artifacts: Vec<Gav>,
}

impl SearchResponse {
    pub fn new(total_count: usize, too_many_results: bool, artifacts: Vec<Gav>) -> Self {
        Self {
            total_count,
            too_many_results,
            data: ArtifactList { artifacts },
        }
    }

    pub fn parse(body: &str) -> Result<Self, Error> {
        Ok(quick_xml::de::from_str(body)?)
    }

    pub fn artifacts(&self) -> &[Gav] {
        &self.data.artifacts
    }

    /// Number of artifacts actually present in the body.
    pub fn returned(&self) -> usize {
        self.data.artifacts.len()
    }

    /// Nexus sometimes returns 200 out of 473, sometimes 73 out of 247.
    /// Either way some versions were not listed.
    pub fn is_truncated(&self) -> bool {
        self.too_many_results || self.returned() != self.total_count
    }
}
