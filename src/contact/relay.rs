use async_trait::async_trait;
use std::time::Duration;

use super::ContactSubmission;
use crate::error::ContactError;

/// Something that accepts contact submissions.
#[async_trait]
pub trait FormRelay: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), ContactError>;
}

/// Posts submissions to a Web3Forms-compatible endpoint.
#[derive(Debug, Clone)]
pub struct Web3FormsRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl Web3FormsRelay {
    const TIMEOUT: Duration = Duration::from_secs(15);

    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = build_client(reqwest::Client::builder().timeout(Self::TIMEOUT));
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

/// Build `builder`, falling back to a default client (no timeout) on failure.
fn build_client(builder: reqwest::ClientBuilder) -> reqwest::Client {
    match builder.build() {
        Ok(client) => client,
        Err(err) => {
            tracing::warn!(%err, "form relay client setup failed, using defaults without a timeout");
            reqwest::Client::new()
        }
    }
}

#[async_trait]
impl FormRelay for Web3FormsRelay {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        tracing::debug!(endpoint = %self.endpoint, "posting contact form");

        self.client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(submission)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::tls::Version;

    #[test]
    fn test_unbuildable_client_falls_back() {
        // No TLS version satisfies both bounds
        let builder = reqwest::Client::builder()
            .min_tls_version(Version::TLS_1_3)
            .max_tls_version(Version::TLS_1_2);
        let _client = build_client(builder);
    }

    #[test]
    fn test_new_keeps_endpoint() {
        let relay = Web3FormsRelay::new("http://127.0.0.1:9/submit");
        assert_eq!(relay.endpoint, "http://127.0.0.1:9/submit");
    }
}
