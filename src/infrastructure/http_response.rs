// HTTP response utilities for HTML pages with optional Brotli encoding
use async_compression::tokio::bufread::BrotliEncoder;
use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, Response, StatusCode, header},
};
use tokio::io::AsyncReadExt;

/// Whether the client listed `br` in `Accept-Encoding` with a non-zero weight.
pub fn accepts_brotli(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.split(',').any(accepts_coding_br))
        .unwrap_or(false)
}

fn accepts_coding_br(entry: &str) -> bool {
    let mut params = entry.split(';');
    let coding = params.next().unwrap_or_default().trim();
    if !coding.eq_ignore_ascii_case("br") {
        return false;
    }

    let refused = params.any(|param| {
        param
            .trim()
            .strip_prefix("q=")
            .and_then(|q| q.trim().parse::<f32>().ok())
            .is_some_and(|q| q <= 0.0)
    });
    !refused
}

/// Build an HTML response, compressing the body with Brotli when asked to.
pub async fn html_response(html: String, compress: bool) -> Result<Response<Body>, StatusCode> {
    let raw = html.into_bytes();

    let (body_bytes, content_encoding) = if compress {
        let original_len = raw.len();
        let mut encoder = BrotliEncoder::new(std::io::Cursor::new(raw));
        let mut compressed = Vec::new();
        encoder.read_to_end(&mut compressed).await.map_err(|e| {
            tracing::error!("Brotli compression error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        tracing::debug!("Compressed page: {} -> {} bytes", original_len, compressed.len());
        (compressed, Some("br"))
    } else {
        (raw, None)
    };

    let mut response_builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .header(header::CONTENT_LENGTH, HeaderValue::from(body_bytes.len()))
        .header(header::VARY, "accept-encoding");

    if let Some(encoding) = content_encoding {
        response_builder = response_builder.header(header::CONTENT_ENCODING, encoding);
    }

    response_builder.body(Body::from(body_bytes)).map_err(|e| {
        tracing::error!("Response build error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
