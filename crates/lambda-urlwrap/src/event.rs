//! Lambda Function URL event shapes
//!
//! Serde models for the JSON payloads the platform delivers and expects back.
//! Field names are camelCase on the wire. Only the fields this shim consumes
//! are modeled; everything else in the platform payload is ignored on
//! deserialization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Inbound Function URL invocation event
///
/// Constructed by the platform, consumed exactly once per invocation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionUrlRequest {
    /// Request metadata (method and path)
    #[serde(default)]
    pub request_context: RequestContext,

    /// Single-valued header map as delivered by the platform
    ///
    /// A JSON object cannot carry duplicate keys, so the iteration order of
    /// this map never affects the expanded request headers; duplicates in the
    /// raw text resolve to the last value during deserialization.
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Raw request body, carried verbatim (no base64 handling)
    #[serde(default)]
    pub body: String,
}

/// The `requestContext` envelope of the inbound event
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RequestContext {
    /// HTTP description block
    #[serde(default)]
    pub http: HttpDescription,
}

/// The `requestContext.http` block: method and path of the invocation
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HttpDescription {
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub path: String,
}

/// Outbound Function URL response event
///
/// Built once from the recorder's final state and returned to the platform.
///
/// `status_code` is `0` when the handler never set a status; this shim does
/// not default to 200 (see [`crate::response::response_from_recorder`]).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionUrlResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inbound_event_deserializes_from_platform_json() {
        let raw = r#"{
            "requestContext": { "http": { "method": "POST", "path": "/submit" } },
            "headers": { "content-type": "application/json" },
            "body": "{\"a\":1}"
        }"#;

        let event: FunctionUrlRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(event.request_context.http.method, "POST");
        assert_eq!(event.request_context.http.path, "/submit");
        assert_eq!(
            event.headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(event.body, "{\"a\":1}");
    }

    #[test]
    fn inbound_event_fields_default_when_absent() {
        let event: FunctionUrlRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(event.request_context.http.method, "");
        assert_eq!(event.request_context.http.path, "");
        assert!(event.headers.is_empty());
        assert_eq!(event.body, "");
    }

    #[test]
    fn duplicate_json_header_keys_resolve_to_the_last_value() {
        let raw = r#"{
            "requestContext": { "http": { "method": "GET", "path": "/" } },
            "headers": { "x-dup": "first", "x-dup": "second" },
            "body": ""
        }"#;

        let event: FunctionUrlRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(event.headers.len(), 1);
        assert_eq!(event.headers.get("x-dup").map(String::as_str), Some("second"));
    }

    #[test]
    fn outbound_event_serializes_with_camel_case_status() {
        let response = FunctionUrlResponse {
            status_code: 204,
            headers: HashMap::new(),
            body: String::new(),
        };

        let json: serde_json::Value = serde_json::to_value(&response).unwrap();
        assert_eq!(json["statusCode"], 204);
        assert_eq!(json["body"], "");
    }

    #[test]
    fn inbound_event_ignores_unknown_platform_fields() {
        let raw = r#"{
            "version": "2.0",
            "rawQueryString": "a=1",
            "requestContext": {
                "accountId": "123456789012",
                "http": { "method": "GET", "path": "/", "sourceIp": "1.2.3.4" }
            },
            "headers": {},
            "body": "",
            "isBase64Encoded": false
        }"#;

        let event: FunctionUrlRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(event.request_context.http.method, "GET");
        assert_eq!(event.request_context.http.path, "/");
    }
}
