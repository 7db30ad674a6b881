//! Handler contract and the Lambda invocation entry point

use std::future::{Ready, ready};

use bytes::Bytes;
use http::Request;
use lambda_runtime::LambdaEvent;
use tracing::debug;

use crate::error::Result;
use crate::event::{FunctionUrlRequest, FunctionUrlResponse};
use crate::recorder::{ResponseRecorder, ResponseWriter};
use crate::request::request_from_event;
use crate::response::response_from_recorder;

/// A synchronous request handler
///
/// Implementations receive a response sink and the translated request, write
/// whatever they want into the sink, and return. It is the handler's job to
/// set a status code; the shim applies no default. A panicking handler
/// unwinds through the shim uncaught — callers guard their own handlers.
///
/// Any `Fn(&mut dyn ResponseWriter, Request<Bytes>)` closure is a handler.
pub trait Handler {
    fn handle(&self, writer: &mut dyn ResponseWriter, request: Request<Bytes>);
}

impl<F> Handler for F
where
    F: Fn(&mut dyn ResponseWriter, Request<Bytes>),
{
    fn handle(&self, writer: &mut dyn ResponseWriter, request: Request<Bytes>) {
        self(writer, request)
    }
}

/// Run one invocation: translate the event, let the handler write into a
/// fresh recorder, and translate the recording back out.
///
/// A translation failure propagates before the handler runs; there is no
/// synthesized error response.
pub fn invoke<H>(handler: &H, event: FunctionUrlRequest) -> Result<FunctionUrlResponse>
where
    H: Handler,
{
    let request = request_from_event(event)?;

    let mut recorder = ResponseRecorder::new();
    handler.handle(&mut recorder, request);

    Ok(response_from_recorder(recorder))
}

/// Wrap a [`Handler`] into the service closure the Lambda runtime invokes.
///
/// The returned closure fits `lambda_runtime::service_fn`:
///
/// ```rust,no_run
/// use bytes::Bytes;
/// use http::{Request, StatusCode};
/// use lambda_runtime::{run, service_fn};
/// use lambda_urlwrap::{ResponseWriter, wrap_handler};
///
/// fn ok(writer: &mut dyn ResponseWriter, _request: Request<Bytes>) {
///     writer.set_status(StatusCode::OK);
///     writer.write(b"ok").unwrap();
/// }
///
/// #[tokio::main]
/// async fn main() -> Result<(), lambda_runtime::Error> {
///     run(service_fn(wrap_handler(ok))).await
/// }
/// ```
///
/// The future is always immediately ready: the shim itself never suspends,
/// the `async` surface exists only to satisfy the runtime's signature.
pub fn wrap_handler<H>(
    handler: H,
) -> impl Fn(
    LambdaEvent<FunctionUrlRequest>,
) -> Ready<std::result::Result<FunctionUrlResponse, lambda_runtime::Error>>
where
    H: Handler,
{
    move |event: LambdaEvent<FunctionUrlRequest>| {
        debug!(request_id = %event.context.request_id, "function URL invocation");
        ready(invoke(&handler, event.payload).map_err(Into::into))
    }
}
