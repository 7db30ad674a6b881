//! Response sink capability and the buffering recorder behind it

use std::io;

use bytes::BytesMut;
use http::{HeaderMap, StatusCode};

/// The response-writing capability handlers are written against
///
/// Exactly three operations: header access, body writes, and a status setter.
/// There is no flush, no trailers, and no streaming — implementations buffer.
/// Within one invocation `headers_mut` always returns the same map, and later
/// `set_status` calls overwrite earlier ones, matching the header policy of
/// last write wins.
pub trait ResponseWriter {
    /// Mutable access to the response headers
    fn headers_mut(&mut self) -> &mut HeaderMap;

    /// Append `buf` to the response body, returning the number of bytes
    /// accepted (always all of them for in-memory implementations)
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;

    /// Record the response status code
    fn set_status(&mut self, status: StatusCode);
}

/// In-memory [`ResponseWriter`] that records everything the handler writes
///
/// Created fresh for each invocation and read once by the response translator
/// after the handler returns. The status stays unset until the handler calls
/// [`ResponseWriter::set_status`]; no implicit 200 default is applied.
#[derive(Debug, Default)]
pub struct ResponseRecorder {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: BytesMut,
}

impl ResponseRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded status code, or `None` if the handler never set one
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The accumulated body bytes
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl ResponseWriter for ResponseRecorder {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn set_status(&mut self, status: StatusCode) {
        self.status = Some(status);
    }
}
