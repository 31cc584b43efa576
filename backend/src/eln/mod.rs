//! Client side of the electronic lab notebook (eLabFTW) integration.
//!
//! Handlers talk to the notebook through the `ElnClient` trait so tests can
//! substitute a recording fake for the HTTP implementation in `elabftw`.

pub mod attachments;
pub mod elabftw;

pub use attachments::{collect_data_urls, decode_data_url, DataUrl};
pub use elabftw::ElabFtwClient;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ElnError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("notebook answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected notebook response: {0}")]
    UnexpectedResponse(String),
}

/// Where to reach a notebook instance and how to authenticate.
#[derive(Debug, Clone, PartialEq)]
pub struct ElnTarget {
    /// API root ending in `/api/v1/`.
    pub endpoint: String,
    pub token: String,
}

impl ElnTarget {
    /// Builds the API root from the instance URL entered by the user.
    pub fn new(instance_url: &str, token: &str) -> Self {
        let endpoint = format!("{}/api/v1/", instance_url.trim_end_matches('/'));
        Self {
            endpoint,
            token: token.to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }
}

/// A file attached to an experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait ElnClient: Send + Sync {
    /// Creates an empty experiment and returns its id.
    async fn create_experiment(&self, target: &ElnTarget) -> Result<i64, ElnError>;

    async fn update_experiment(
        &self,
        target: &ElnTarget,
        id: i64,
        title: &str,
        body: &str,
    ) -> Result<(), ElnError>;

    async fn upload_file(
        &self,
        target: &ElnTarget,
        id: i64,
        file: UploadFile,
    ) -> Result<(), ElnError>;

    async fn add_tag(&self, target: &ElnTarget, id: i64, tag: &str) -> Result<(), ElnError>;

    /// All tags known to the instance, passed through unchanged.
    async fn list_tags(&self, target: &ElnTarget) -> Result<serde_json::Value, ElnError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_instance_urls() {
        assert_eq!(
            ElnTarget::new("https://elab.example.org", "t").endpoint,
            "https://elab.example.org/api/v1/"
        );
        assert_eq!(
            ElnTarget::new("https://elab.example.org/", "t").endpoint,
            "https://elab.example.org/api/v1/"
        );
        assert_eq!(
            ElnTarget::new("https://api.lab.org", "t").endpoint,
            "https://api.lab.org/api/v1/"
        );
        assert_eq!(
            ElnTarget::new("https://api.lab.org//", "t").endpoint,
            "https://api.lab.org/api/v1/"
        );
        assert_eq!(
            ElnTarget::new("https://elab.example.org", "t").url("experiments/4"),
            "https://elab.example.org/api/v1/experiments/4"
        );
    }
}
