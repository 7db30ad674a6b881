//! Recorder to outbound event translation

use tracing::debug;

use crate::event::FunctionUrlResponse;
use crate::headers::collapse_first_value;
use crate::recorder::ResponseRecorder;

/// Convert a fully-written [`ResponseRecorder`] into the outbound event.
///
/// Headers collapse to their first value per key, the body bytes become the
/// response string without encoding transformation (non-UTF-8 writes are
/// carried lossily), and an unset status comes through as `0` — this shim
/// deliberately does not substitute a 200.
///
/// This translation has no error path.
pub fn response_from_recorder(recorder: ResponseRecorder) -> FunctionUrlResponse {
    let status_code = recorder.status().map(|s| s.as_u16()).unwrap_or(0);
    let headers = collapse_first_value(recorder.headers());
    let body = String::from_utf8_lossy(recorder.body()).into_owned();

    debug!(
        "converted recorded response -> function URL event (status: {})",
        status_code
    );

    FunctionUrlResponse {
        status_code,
        headers,
        body,
    }
}
