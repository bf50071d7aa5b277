use super::EntrezClient;
use super::error::{EntrezError, EntrezResult};
use super::record::{Record, SearchHits};
use super::xml;
use crate::config::EntrezConfig;
use reqwest::blocking::Client;
use std::time::Instant;
use tracing::{debug, info};

const ESEARCH_PATH: &str = "esearch.fcgi";
const EFETCH_PATH: &str = "efetch.fcgi";

/// Entrez E-utilities over HTTP.
pub struct HttpEntrezClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    max_results: usize,
}

impl HttpEntrezClient {
    pub fn new(config: &EntrezConfig) -> EntrezResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("biodata/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| EntrezError::Request {
                endpoint: "client",
                source,
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            max_results: config.max_results,
        })
    }

    fn get(&self, endpoint: &'static str, params: &[(&str, String)]) -> EntrezResult<String> {
        let url = format!("{}/{endpoint}", self.base_url);
        let mut query: Vec<(&str, String)> = params.to_vec();
        if let Some(key) = &self.api_key {
            query.push(("api_key", key.clone()));
        }

        let started = Instant::now();
        let response = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .map_err(|source| EntrezError::Request { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EntrezError::Status { endpoint, status });
        }

        let body = response
            .text()
            .map_err(|source| EntrezError::Request { endpoint, source })?;
        debug!(
            endpoint,
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "entrez response received"
        );
        Ok(body)
    }
}

/// GenPept is the protein flavour of the GenBank flat format.
fn rettype_for(database: &str) -> &'static str {
    if database == "protein" { "gp" } else { "gb" }
}

impl EntrezClient for HttpEntrezClient {
    fn search(&self, database: &str, filter: &str, query: &str) -> EntrezResult<SearchHits> {
        info!(database, filter, query, "esearch");
        let params = [
            ("db", database.to_string()),
            ("term", format!("{filter}[filter] {query}")),
            ("retmode", "xml".to_string()),
            ("sort", "relevance".to_string()),
            ("retmax", self.max_results.to_string()),
        ];
        let body = self.get(ESEARCH_PATH, &params)?;
        xml::decode_search(&body)
    }

    fn fetch_records(
        &self,
        database: &str,
        ids: &[String],
        full_sequence: bool,
    ) -> EntrezResult<Vec<Record>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        info!(database, count = ids.len(), full_sequence, "efetch");
        let mut params = vec![
            ("db", database.to_string()),
            ("id", ids.join(",")),
            ("retmode", "xml".to_string()),
            ("rettype", rettype_for(database).to_string()),
        ];
        if !full_sequence {
            params.push(("seq_start", "1".to_string()));
            params.push(("seq_stop", "1".to_string()));
        }

        let body = self.get(EFETCH_PATH, &params)?;
        xml::decode_records(&body)
    }
}
