//! HTTP access to the Geoconnex graph endpoint and the SHACL shape document.

use reqwest::Url;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use tracing::debug;

use crate::error::{GeoconnexError, GeoconnexResult};

pub const DEFAULT_GRAPH_ENDPOINT: &str = "https://graph.geoconnex.us/";
pub const DEFAULT_SHACL_SHAPE_URL: &str = "https://raw.githubusercontent.com/internetofwater/nabu/refs/heads/main/shacl_validator/shapes/geoconnex.ttl";

const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";
const SPARQL_QUERY: &str = "application/sparql-query";

/// Remote locations the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub graph: Url,
    pub shacl_shape: Url,
}

impl Endpoints {
    #[must_use]
    pub const fn new(graph: Url, shacl_shape: Url) -> Self {
        Self { graph, shacl_shape }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(
            Url::parse(DEFAULT_GRAPH_ENDPOINT).expect("valid Geoconnex graph endpoint"),
            Url::parse(DEFAULT_SHACL_SHAPE_URL).expect("valid Geoconnex SHACL shape URL"),
        )
    }
}

/// A successful query response: the body exactly as received plus its parsed form.
#[derive(Debug, Clone)]
pub struct SparqlResponse {
    body: String,
    json: Value,
}

impl SparqlResponse {
    #[must_use]
    pub const fn json(&self) -> &Value {
        &self.json
    }

    /// Raw response body text, exactly as the endpoint sent it.
    #[must_use]
    pub fn into_raw(self) -> String {
        self.body
    }
}

/// Stateless client for the Geoconnex SPARQL endpoint.
///
/// Every call is a single outbound request; nothing is cached, retried, or
/// throttled, and no timeout beyond the HTTP client default is configured.
#[derive(Debug, Clone)]
pub struct GeoconnexClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl Default for GeoconnexClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoconnexClient {
    /// Creates a client against the public Geoconnex endpoints.
    #[must_use]
    pub fn new() -> Self {
        Self::with_endpoints(Endpoints::default())
    }

    #[must_use]
    pub fn with_endpoints(endpoints: Endpoints) -> Self {
        Self::with_http(reqwest::Client::new(), endpoints)
    }

    /// Creates a client reusing an existing HTTP client.
    #[must_use]
    pub const fn with_http(http: reqwest::Client, endpoints: Endpoints) -> Self {
        Self { http, endpoints }
    }

    /// Runs a SPARQL query against the graph endpoint.
    ///
    /// The query text is sent verbatim as the POST body.
    ///
    /// # Errors
    /// Returns [`GeoconnexError::Http`] on transport failure or a non-success
    /// status, and [`GeoconnexError::InvalidJson`] (carrying the raw body) when
    /// the response is not JSON.
    pub async fn execute(&self, query: &str) -> GeoconnexResult<SparqlResponse> {
        debug!(endpoint = %self.endpoints.graph, query_len = query.len(), "running SPARQL query");
        let response = self
            .http
            .post(self.endpoints.graph.clone())
            .header(ACCEPT, SPARQL_RESULTS_JSON)
            .header(CONTENT_TYPE, SPARQL_QUERY)
            .body(query.to_owned())
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        debug!(body_len = body.len(), "SPARQL query answered");

        match serde_json::from_str(&body) {
            Ok(json) => Ok(SparqlResponse { body, json }),
            Err(source) => Err(GeoconnexError::InvalidJson { body, source }),
        }
    }

    /// Downloads the SHACL shape describing Geoconnex RDF data.
    ///
    /// The Turtle text is returned as-is; it is not parsed or validated.
    ///
    /// # Errors
    /// Returns [`GeoconnexError::Http`] on transport failure or a non-success status.
    pub async fn fetch_shacl_shape(&self) -> GeoconnexResult<String> {
        debug!(url = %self.endpoints.shacl_shape, "fetching SHACL shape");
        let shape = self
            .http
            .get(self.endpoints.shacl_shape.clone())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(shape)
    }
}
