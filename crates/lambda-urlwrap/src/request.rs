//! Inbound event to generic request translation

use std::str::FromStr;

use bytes::Bytes;
use http::{Request, Uri};
use tracing::debug;

use crate::error::{Result, UrlwrapError};
use crate::event::FunctionUrlRequest;
use crate::headers::expand_single_valued;

/// Convert an inbound Function URL event into an `http::Request<Bytes>`.
///
/// The path is parsed as a URI; a malformed path fails the translation and
/// the invocation never reaches the handler. Rejected paths are those with
/// invalid URI characters, a `%` not followed by two hex digits, or nothing
/// at all (`http::Uri` cannot represent an empty path). Headers are expanded
/// through [`expand_single_valued`] and the body is carried as verbatim bytes
/// with no decoding of any kind.
pub fn request_from_event(event: FunctionUrlRequest) -> Result<Request<Bytes>> {
    let path = &event.request_context.http.path;
    if !valid_percent_encoding(path) {
        return Err(UrlwrapError::InvalidPercentEncoding(path.clone()));
    }
    let uri = Uri::from_str(path)?;

    let mut request = Request::builder()
        .method(event.request_context.http.method.as_str())
        .uri(uri)
        .body(Bytes::from(event.body))?;

    *request.headers_mut() = expand_single_valued(&event.headers);

    debug!(
        "converted function URL event: {} {}",
        request.method(),
        request.uri()
    );

    Ok(request)
}

/// `http::Uri` lets a stray `%` through; the path contract treats any `%`
/// not followed by two hex digits as a parse failure.
fn valid_percent_encoding(path: &str) -> bool {
    let bytes = path.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len()
                || !bytes[i + 1].is_ascii_hexdigit()
                || !bytes[i + 2].is_ascii_hexdigit()
            {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UrlwrapError;
    use crate::event::{HttpDescription, RequestContext};
    use std::collections::HashMap;

    fn event(method: &str, path: &str) -> FunctionUrlRequest {
        FunctionUrlRequest {
            request_context: RequestContext {
                http: HttpDescription {
                    method: method.to_string(),
                    path: path.to_string(),
                },
            },
            headers: HashMap::new(),
            body: String::new(),
        }
    }

    #[test]
    fn method_path_and_body_carry_over() {
        let mut event = event("POST", "/items/42");
        event.body = "payload".to_string();

        let request = request_from_event(event).unwrap();
        assert_eq!(request.method(), http::Method::POST);
        assert_eq!(request.uri().path(), "/items/42");
        assert_eq!(request.body().as_ref(), b"payload");
    }

    #[test]
    fn headers_are_expanded_onto_the_request() {
        let mut event = event("GET", "/");
        event
            .headers
            .insert("x-test".to_string(), "1".to_string());
        event
            .headers
            .insert("accept".to_string(), "text/plain".to_string());

        let request = request_from_event(event).unwrap();
        assert_eq!(request.headers().get("x-test").unwrap(), "1");
        assert_eq!(request.headers().get("accept").unwrap(), "text/plain");
    }

    #[test]
    fn malformed_path_is_rejected() {
        let err = request_from_event(event("GET", "/items /42")).unwrap_err();
        assert!(matches!(err, UrlwrapError::InvalidPath(_)));
    }

    #[test]
    fn invalid_percent_encoding_is_rejected() {
        for path in ["/items/%zz", "/trailing%", "/short%a", "/%2"] {
            let err = request_from_event(event("GET", path)).unwrap_err();
            assert!(
                matches!(err, UrlwrapError::InvalidPercentEncoding(_)),
                "path {path:?} should fail percent validation"
            );
        }
    }

    #[test]
    fn valid_percent_encoding_passes_through_undecoded() {
        let request = request_from_event(event("GET", "/items/%2Fa%20b")).unwrap();
        assert_eq!(request.uri().path(), "/items/%2Fa%20b");
    }

    #[test]
    fn empty_path_is_rejected() {
        let err = request_from_event(event("GET", "")).unwrap_err();
        assert!(matches!(err, UrlwrapError::InvalidPath(_)));
    }

    #[test]
    fn malformed_method_is_rejected() {
        let err = request_from_event(event("NOT A METHOD", "/")).unwrap_err();
        assert!(matches!(err, UrlwrapError::Http(_)));
    }

    #[test]
    fn body_bytes_are_verbatim() {
        let mut event = event("PUT", "/raw");
        event.body = "no %2F decoding, no \\u0000 handling".to_string();

        let request = request_from_event(event).unwrap();
        assert_eq!(
            request.body().as_ref(),
            b"no %2F decoding, no \\u0000 handling"
        );
    }
}
