use std::any::Any;
use std::borrow::Cow;
use std::future::Future;

use geoconnex_core::{GeoconnexError, GeoconnexResult};
use rmcp::ErrorData;
use rmcp::model::ErrorCode;
use tracing::{error, warn};

pub fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

pub fn map_err(err: GeoconnexError) -> ErrorData {
    warn!(error = %err, status = ?err.status(), "Geoconnex tool call failed");
    mcp_err(ErrorCode::INTERNAL_ERROR, err.to_string())
}

/// Runs a lookup on its own task so a failed result-shape assertion reaches the
/// caller as an error reply instead of tearing down the request handler.
pub async fn guarded<T, F>(lookup: F) -> Result<T, ErrorData>
where
    F: Future<Output = GeoconnexResult<T>> + Send + 'static,
    T: Send + 'static,
{
    match tokio::spawn(lookup).await {
        Ok(result) => result.map_err(map_err),
        Err(join_err) if join_err.is_panic() => {
            let message = panic_message(join_err.into_panic());
            error!(%message, "Geoconnex lookup aborted");
            Err(mcp_err(
                ErrorCode::INTERNAL_ERROR,
                format!("Geoconnex lookup aborted: {message}"),
            ))
        }
        Err(join_err) => Err(mcp_err(ErrorCode::INTERNAL_ERROR, join_err.to_string())),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => payload
            .downcast_ref::<&str>()
            .map_or_else(|| "unknown panic".to_string(), |message| (*message).to_string()),
    }
}
