//! Core types and services for geoconnex-mcp.
//!
//! This crate owns the SPARQL plumbing against the Geoconnex graph: the query
//! executor and SHACL shape fetcher, the parameterized query templates, and the
//! shapers that turn SPARQL JSON results into tool-sized answers.

pub mod client;
pub mod error;
pub mod lookup;
pub mod queries;
pub mod results;

pub use client::{Endpoints, GeoconnexClient, SparqlResponse};
pub use error::{GeoconnexError, GeoconnexResult};
pub use results::{Binding, NO_PID_FOUND, RdfTerm};
pub use reqwest::Url;
