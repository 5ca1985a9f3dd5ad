//! Caller side of `/api/generate`.
//!
//! Users always get a well-formed couplet: when the service cannot be reached
//! or reports a failure, [`Couplet::fallback`] is returned instead.

use anyhow::{anyhow, Result};
use tracing::{error, instrument};

use crate::couplet::Couplet;

#[derive(Clone, Debug)]
pub struct CoupletClient {
    base_url: String,
    http: reqwest::Client,
}

impl CoupletClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Request a couplet, surfacing any failure.
    #[instrument(level = "trace", skip(self))]
    pub async fn try_generate(&self, prompt: &str) -> Result<Couplet> {
        let url = format!("{}/api/generate", self.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[("prompt", prompt)])
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(anyhow!("couplet service error {status}: {body}"));
        }

        Ok(resp.json::<Couplet>().await?)
    }

    /// Request a couplet, substituting the fallback couplet on failure.
    pub async fn generate(&self, prompt: &str) -> Couplet {
        match self.try_generate(prompt).await {
            Ok(couplet) => couplet,
            Err(err) => {
                error!(error = %err, "Couplet request failed, using fallback");
                Couplet::fallback()
            }
        }
    }
}
