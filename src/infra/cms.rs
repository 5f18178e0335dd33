//! CMS adapter: the GraphQL network client behind the [`ContentSource`] seam.
//!
//! The core rendering pipeline never touches this module; page services
//! depend only on the trait, so tests swap in an in-memory source.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::config::CmsSettings;

#[derive(Debug, Error)]
pub enum CmsError {
    #[error("invalid CMS endpoint: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("cms returned errors: {message}")]
    Api { message: String },
    #[error("cms response carried no data")]
    MissingData,
}

/// Seam between page services and the CMS: a GraphQL query plus variables
/// in, the `data` object of the response out. Implementations must be
/// shareable across concurrent page builds.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn execute(&self, query: &str, variables: Value) -> Result<Value, CmsError>;
}

/// HTTP client for the hosted CMS GraphQL API.
#[derive(Clone)]
pub struct CmsClient {
    client: Client,
    endpoint: Url,
    api_token: String,
}

impl CmsClient {
    pub fn new(settings: &CmsSettings) -> Result<Self, CmsError> {
        let mut endpoint = Url::parse(&settings.endpoint)?;
        if settings.preview {
            endpoint = endpoint.join("preview")?;
        }

        let client = Client::builder().user_agent(Self::user_agent()).build()?;
        Ok(Self {
            client,
            endpoint,
            api_token: settings.api_token.clone(),
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("vetrina/", env!("CARGO_PKG_VERSION"))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ContentSource for CmsClient {
    async fn execute(&self, query: &str, variables: Value) -> Result<Value, CmsError> {
        let body = serde_json::json!({ "query": query, "variables": variables });

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let envelope: GraphqlResponse = response.json().await?;
        decode_envelope(envelope)
    }
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

fn decode_envelope(envelope: GraphqlResponse) -> Result<Value, CmsError> {
    if !envelope.errors.is_empty() {
        let message = envelope
            .errors
            .into_iter()
            .map(|error| error.message)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(CmsError::Api { message });
    }
    envelope.data.ok_or(CmsError::MissingData)
}
