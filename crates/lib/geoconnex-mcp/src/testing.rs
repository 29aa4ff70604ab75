//! In-process stand-in for the Geoconnex endpoints.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use geoconnex_core::{Endpoints, GeoconnexClient, Url};
use rmcp::model::CallToolResult;
use tokio::net::TcpListener;

use crate::GeoconnexMcp;

/// Starts a server answering both endpoints with `status` and `body`.
pub async fn spawn_server(status: StatusCode, body: &'static str) -> GeoconnexMcp {
    let app = Router::new()
        .route("/sparql", post(move || async move { (status, body) }))
        .route("/shape.ttl", get(move || async move { (status, body) }));
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind mock Geoconnex listener");
    let addr = listener.local_addr().expect("mock listener address");
    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("mock Geoconnex server failed");
    });

    let endpoints = Endpoints::new(
        Url::parse(&format!("http://{addr}/sparql")).expect("valid sparql url"),
        Url::parse(&format!("http://{addr}/shape.ttl")).expect("valid shape url"),
    );
    GeoconnexMcp::new(GeoconnexClient::with_endpoints(endpoints))
}

/// Text of the first content item of a tool result.
pub fn first_text(result: &CallToolResult) -> String {
    let value = serde_json::to_value(result).expect("serializable tool result");
    value["content"][0]["text"]
        .as_str()
        .expect("first content item is text")
        .to_string()
}
