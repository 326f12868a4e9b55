use super::{ArtifactRepository, DeleteOutcome, SearchResponse};
use crate::config::NexusInstance;
use crate::error::Error;
use crate::gav::Gav;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::{StatusCode, Url};
use std::time::Duration;
use tracing::{debug, info, warn};

const SEARCH_PATH: &str = "service/local/lucene/search";

/// Blocking REST client for a Nexus 2 repository manager.
pub struct NexusClient {
    instance: NexusInstance,
    base_url: Url,
    http: Client,
}

impl NexusClient {
    pub fn new(instance: NexusInstance) -> Result<Self, Error> {
        let base = instance.base_url();
        let base_url = Url::parse(&base).map_err(|e| Error::InvalidUrl {
            url: base.clone(),
            reason: e.to_string(),
        })?;
        debug!("base URL: {}", base_url);

        let http = Client::builder()
            .timeout(Duration::from_secs(instance.timeout_secs))
            .build()?;

        Ok(Self {
            instance,
            base_url,
            http,
        })
    }

    /// `GET` target for `query`; empty repository, artifact and version are left out.
    pub fn search_url(&self, query: &Gav, count: u32) -> Result<Url, Error> {
        let mut url = self.join(SEARCH_PATH)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("g", &query.group_id)
                .append_pair("count", &count.to_string());
            if !self.instance.repository.is_empty() {
                pairs.append_pair("repositoryId", &self.instance.repository);
            }
            if !query.artifact_id.is_empty() {
                pairs.append_pair("a", &query.artifact_id);
            }
            if !query.version.is_empty() {
                pairs.append_pair("v", &query.version);
            }
        }
        Ok(url)
    }

    pub fn delete_url(&self, gav: &Gav) -> Result<Url, Error> {
        self.join(&format!(
            "service/local/repositories/{}/content/{}",
            self.instance.repository,
            gav.default_layout()
        ))
    }

    fn join(&self, path: &str) -> Result<Url, Error> {
        self.base_url.join(path).map_err(|e| Error::InvalidUrl {
            url: format!("{}{}", self.base_url, path),
            reason: e.to_string(),
        })
    }
}

impl ArtifactRepository for NexusClient {
    fn search(&self, query: &Gav, count: u32) -> Result<SearchResponse, Error> {
        let url = self.search_url(query, count)?;
        let response = self
            .http
            .get(url.clone())
            .header(ACCEPT, "application/xml")
            .send()?;

        let status = response.status();
        info!("{} returns HTTP status code {}", url, status.as_u16());
        if status != StatusCode::OK {
            return Err(Error::UnexpectedStatus {
                method: "GET",
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        SearchResponse::parse(&body)
    }

    fn delete(&self, gav: &Gav) -> Result<DeleteOutcome, Error> {
        let url = self.delete_url(gav)?;
        info!("HTTP DELETE {}", url);
        let response = self
            .http
            .delete(url.clone())
            .basic_auth(&self.instance.username, Some(&self.instance.password))
            .send()?;

        match response.status() {
            StatusCode::NO_CONTENT => Ok(DeleteOutcome::Deleted),
            StatusCode::NOT_FOUND => {
                warn!("{} is already gone", gav);
                Ok(DeleteOutcome::AlreadyGone)
            }
            other => Err(Error::UnexpectedStatus {
                method: "DELETE",
                url: url.to_string(),
                status: other.as_u16(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(repository: &str) -> NexusClient {
        let instance = NexusInstance {
            repository: repository.to_string(),
            ..NexusInstance::default()
        };
        NexusClient::new(instance).unwrap()
    }

    #[test]
    fn test_search_url_group_only() {
        let url = client("releases")
            .search_url(&Gav::new("com.acme", "", ""), 200)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8081/nexus/service/local/lucene/search?g=com.acme&count=200&repositoryId=releases"
        );
    }

    #[test]
    fn test_search_url_with_filters_and_global_repository() {
        let url = client("")
            .search_url(&Gav::new("com.acme", "widget", "1.*"), 50)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8081/nexus/service/local/lucene/search?g=com.acme&count=50&a=widget&v=1.*"
        );
    }

    #[test]
    fn test_delete_url_uses_default_layout() {
        let url = client("releases")
            .delete_url(&Gav::new("com.acme.tools", "widget", "1.0.0"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8081/nexus/service/local/repositories/releases/content/com/acme/tools/widget/1.0.0"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let instance = NexusInstance {
            server: "bad host".to_string(),
            ..NexusInstance::default()
        };
        assert!(matches!(
            NexusClient::new(instance),
            Err(Error::InvalidUrl { .. })
        ));
    }
}
