//! Query Execution Seam
//!
//! The handlers only translate parameters; running the query and serializing
//! results belongs to the engine. That boundary is the `QueryExecutor` trait:
//! production wires in the HTTP implementation below, tests inject a stub
//! that records the translated parameter bag.

use super::params::SolrParams;
use anyhow::Result;
use async_trait::async_trait;

/// The engine's serialized response, forwarded verbatim to the client.
///
/// The body is kept as text because the response writer is chosen by the
/// translated parameters: plain JSON normally, a JSONP wrapper when the
/// request carried a callback name.
#[derive(Debug, Clone)]
pub struct EngineResponse {
    pub status: u16,
    pub content_type: String,
    pub body: String,
}

/// Executes a translated parameter bag against the search engine.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, params: &SolrParams) -> Result<EngineResponse>;
}

/// HTTP implementation posting the parameter bag to the engine's select endpoint.
pub struct HttpQueryExecutor {
    client: reqwest::Client,
    select_url: String,
}

impl HttpQueryExecutor {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            select_url: format!("{}/select", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl QueryExecutor for HttpQueryExecutor {
    async fn execute(&self, params: &SolrParams) -> Result<EngineResponse> {
        let response = self
            .client
            .post(&self.select_url)
            .form(params.entries())
            .send()
            .await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("application/json")
            .to_string();
        let body = response.text().await?;

        Ok(EngineResponse {
            status,
            content_type,
            body,
        })
    }
}
