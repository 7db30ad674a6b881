//! Minimal Function URL echo handler
//!
//! Echoes the request method, path, and body back as plain text.
//!
//! ```bash
//! # Build and deploy with cargo-lambda
//! cargo lambda build --package echo-server
//! cargo lambda deploy --package echo-server
//! ```

use bytes::Bytes;
use http::{Request, StatusCode};
use lambda_runtime::{run, service_fn};
use lambda_urlwrap::{ResponseWriter, wrap_handler};
use tracing::info;

fn echo(writer: &mut dyn ResponseWriter, request: Request<Bytes>) {
    info!("echoing {} {}", request.method(), request.uri().path());

    writer.set_status(StatusCode::OK);
    writer
        .headers_mut()
        .insert("content-type", "text/plain".parse().unwrap());

    let line = format!("{} {}\n", request.method(), request.uri().path());
    writer.write(line.as_bytes()).unwrap();
    writer.write(request.body()).unwrap();
}

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    // Initialize tracing with RUST_LOG environment variable
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .without_time()
        .init();

    run(service_fn(wrap_handler(echo))).await
}
