use crate::solutions::SparqlSolutions;
use crate::{SparqlQueryable, SparqlStoreError};
use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, USER_AGENT};
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum SparqlEndpointError {
    #[error("Invalid endpoint url `{0}`")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("Error creating http client `{0}`")]
    CreateClient(reqwest::Error),
    #[error(transparent)]
    Request(reqwest::Error),
    #[error("Query timed out after {0:?}")]
    Timeout(Duration),
    #[error("Bad status code `{0}`")]
    BadStatusCode(String),
    #[error("Read response error `{0}`")]
    ReadResponse(reqwest::Error),
}

/// Connection details of a SPARQL over HTTP endpoint.
/// Defaults fit a local Virtuoso instance.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub protocol: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> StoreConfig {
        StoreConfig {
            protocol: "http".to_string(),
            host: "localhost".to_string(),
            port: 8890,
            username: "dba".to_string(),
            password: "admin".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl StoreConfig {
    pub fn endpoint_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&format!(
            "{}://{}:{}/sparql",
            self.protocol, self.host, self.port
        ))
    }
}

pub struct SparqlEndpoint {
    endpoint: Url,
    username: String,
    password: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl SparqlEndpoint {
    pub fn from_config(config: StoreConfig) -> Result<SparqlEndpoint, SparqlEndpointError> {
        let endpoint = config.endpoint_url()?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(SparqlEndpointError::CreateClient)?;
        Ok(SparqlEndpoint {
            endpoint,
            username: config.username,
            password: config.password,
            timeout: config.timeout,
            client,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SparqlQueryable for SparqlEndpoint {
    async fn execute(&self, query: &str) -> Result<SparqlSolutions, SparqlStoreError> {
        debug!("Sending query to {}", self.endpoint);
        let response = self
            .client
            .get(self.endpoint.clone())
            .basic_auth(&self.username, Some(&self.password))
            .header(
                ACCEPT,
                "application/sparql-results+json,application/json,text/javascript,application/javascript",
            )
            .header(USER_AGENT, "golem-api")
            .query(&[("query", query)])
            .query(&[("format", "json"), ("output", "json"), ("results", "json")])
            .send()
            .await;
        match response {
            Ok(response) => {
                if response.status().as_u16() != 200 {
                    Err(SparqlEndpointError::BadStatusCode(response.status().to_string()).into())
                } else {
                    let text = response
                        .text()
                        .await
                        .map_err(SparqlEndpointError::ReadResponse)?;
                    Ok(SparqlSolutions::from_json(&text)?)
                }
            }
            Err(error) => {
                if error.is_timeout() {
                    Err(SparqlEndpointError::Timeout(self.timeout).into())
                } else {
                    Err(SparqlEndpointError::Request(error).into())
                }
            }
        }
    }
}
