//! Common utilities shared across API tools.
//!
//! Success payloads are relayed as text; failures become a structured
//! envelope `{"error": {"type": ..., "message": ...}}` so callers can
//! branch on the classification without parsing message text.

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

use crate::domains::api::{ApiError, Payload};
use crate::domains::tools::ToolError;

/// Default page size for list operations.
pub fn default_limit() -> u32 {
    50
}

/// Default page number for list operations.
pub fn default_page() -> u32 {
    1
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Relay a decoded API payload back to the client.
pub fn payload_result(payload: Payload) -> CallToolResult {
    success_result(payload.into_display_text())
}

/// Create an error result carrying a typed error envelope.
pub fn error_envelope(kind: &str, message: &str) -> CallToolResult {
    warn!(kind, "{message}");
    let envelope = serde_json::json!({
        "error": { "type": kind, "message": message }
    });
    CallToolResult::error(vec![Content::text(envelope.to_string())])
}

/// Envelope for a classified API failure.
pub fn api_error_result(error: &ApiError) -> CallToolResult {
    error_envelope(error.kind(), &error.to_string())
}

/// Envelope for a tool-layer failure (unknown tool, bad arguments).
pub fn tool_error_result(error: &ToolError) -> CallToolResult {
    error_envelope(error.kind(), &error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_error_envelope_shape() {
        let result = api_error_result(&ApiError::authentication("bad key"));
        assert_eq!(result.is_error, Some(true));

        let parsed: serde_json::Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(parsed["error"]["type"], "authentication_error");
        assert!(
            parsed["error"]["message"]
                .as_str()
                .unwrap()
                .contains("bad key")
        );
    }

    #[test]
    fn test_unknown_tool_envelope() {
        let result = tool_error_result(&ToolError::not_found("frobnicate"));
        let parsed: serde_json::Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(parsed["error"]["type"], "unknown_tool");
    }

    #[test]
    fn test_payload_result_success() {
        let result = payload_result(Payload::Json(serde_json::json!({"ok": true})));
        assert_ne!(result.is_error, Some(true));
        assert!(result_text(&result).contains("\"ok\": true"));
    }
}
