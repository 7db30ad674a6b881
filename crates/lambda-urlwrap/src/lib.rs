//! Run plain synchronous request/response handlers behind AWS Lambda
//! Function URLs
//!
//! A Function URL delivers each request as one structured JSON event and
//! expects one structured JSON event back. This crate is the boundary glue in
//! between: it translates the inbound event into an `http::Request<Bytes>`,
//! lets a caller-supplied [`Handler`] write into a buffering
//! [`ResponseRecorder`], and translates the recording into the outbound event.
//!
//! ## Architecture
//!
//! Two pure translations and one recorder compose linearly per invocation:
//!
//! - **Request translation**: Function URL event -> `http::Request<Bytes>`
//! - **Response recording**: the [`ResponseWriter`] sink handlers write to
//! - **Response translation**: recorder state -> Function URL response event
//! - **Entry point**: [`wrap_handler`] sequences the three for the runtime
//!
//! There is no concurrency, retry, or state here; each invocation owns its
//! request, recorder, and response outright.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bytes::Bytes;
//! use http::{Request, StatusCode};
//! use lambda_runtime::{run, service_fn};
//! use lambda_urlwrap::{ResponseWriter, wrap_handler};
//!
//! fn hello(writer: &mut dyn ResponseWriter, request: Request<Bytes>) {
//!     writer.set_status(StatusCode::OK);
//!     writer
//!         .headers_mut()
//!         .insert("content-type", "text/plain".parse().unwrap());
//!     writer
//!         .write(format!("hello from {}", request.uri().path()).as_bytes())
//!         .unwrap();
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lambda_runtime::Error> {
//!     tracing_subscriber::fmt()
//!         .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
//!         .init();
//!
//!     run(service_fn(wrap_handler(hello))).await
//! }
//! ```

pub mod error;
pub mod event;
pub mod handler;
pub mod headers;
pub mod recorder;
pub mod request;
pub mod response;

// Re-exports for convenience
/// Function URL event shapes
pub use event::{FunctionUrlRequest, FunctionUrlResponse};
/// Translation error type and result alias
pub use error::{Result, UrlwrapError};
/// Handler contract and invocation entry points
pub use handler::{Handler, invoke, wrap_handler};
/// Response sink capability and its buffering implementation
pub use recorder::{ResponseRecorder, ResponseWriter};
