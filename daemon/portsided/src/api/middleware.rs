use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

use tracing::{info, info_span, Instrument};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Wraps each request in a span and echoes its id back to the client.
pub async fn trace_request(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();

    let span = info_span!(
        "http_request",
        request_id = %request_id,
        method = %req.method(),
        uri = %req.uri(),
    );

    async move {
        info!("Request started");
        let mut response = next.run(req).await;
        info!(status = %response.status(), "Request finished");
        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response.headers_mut().insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
        }
        response
    }
    .instrument(span)
    .await
}
