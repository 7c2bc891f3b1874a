use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use super::{ProblemStore, SubmissionStore};
use crate::config::Config;
use crate::domain::{NewSubmission, Problem, ProblemSummary, SubmissionReceipt};
use crate::error::{Error, Result};

/// HTTP client for the document-store API.
pub struct RestStore {
    client: Client,
    base: String,
    bearer: Option<SecretString>,
}

impl RestStore {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            // Remove trailing slashes to avoid //problems
            base: config.api_base.trim_end_matches('/').to_string(),
            bearer: None,
        })
    }

    /// Attach a bearer token to every request.
    pub fn with_bearer(mut self, token: SecretString) -> Self {
        self.bearer = Some(token);
        self
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.bearer {
            Some(token) => req.bearer_auth(token.expose_secret()),
            None => req,
        }
    }

    fn transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_connect() || e.is_timeout() {
            Error::StoreUnreachable {
                host: self.base.clone(),
            }
        } else {
            Error::Http(e)
        }
    }

    async fn status_error(response: reqwest::Response) -> Error {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        // The store wraps failures as {"error": "..."}; fall back to the raw body
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|m| m.as_str()).map(str::to_string))
            .unwrap_or(body);
        Error::Store {
            message: format!("HTTP {status}: {message}"),
        }
    }
}

#[async_trait]
impl ProblemStore for RestStore {
    async fn list_problems(&self) -> Result<Vec<ProblemSummary>> {
        let url = format!("{}/problems", self.base);
        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let problems = response.json::<Vec<ProblemSummary>>().await?;
        debug!(count = problems.len(), "problem catalog fetched");
        Ok(problems)
    }

    async fn fetch_problem(&self, id: &str) -> Result<Problem> {
        let url = format!("{}/problems/{}", self.base, id);
        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::ProblemNotFound { id: id.to_string() });
        }
        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        Ok(response.json::<Problem>().await?)
    }
}

#[async_trait]
impl SubmissionStore for RestStore {
    async fn append_submission(&self, submission: &NewSubmission) -> Result<SubmissionReceipt> {
        let url = format!("{}/submissions", self.base);
        let response = self
            .authorize(self.client.post(&url))
            .json(submission)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let receipt = response.json::<SubmissionReceipt>().await?;
        debug!(id = %receipt.id, problem = %submission.problem_id, "submission stored");
        Ok(receipt)
    }
}
