use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use portside_domain::icon::{FetchError, IconSource};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("portside/", env!("CARGO_PKG_VERSION"));

/// `IconSource` over plain HTTPS with a per-request timeout and a cap on
/// the body size.
#[derive(Clone)]
pub struct HttpIconSource {
    client: Client,
    max_bytes: usize,
}

impl HttpIconSource {
    pub fn new(timeout: Duration, max_bytes: usize) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Network {
                url: String::new(),
                reason: e.to_string(),
            })?;
        Ok(Self { client, max_bytes })
    }
}

fn network(url: &str, err: reqwest::Error) -> FetchError {
    FetchError::Network {
        url: url.to_string(),
        reason: err.to_string(),
    }
}

#[async_trait]
impl IconSource for HttpIconSource {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        let mut resp = self.client.get(url).send().await.map_err(|e| network(url, e))?;

        if !resp.status().is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: resp.status().as_u16(),
            });
        }

        let too_large = || FetchError::TooLarge {
            url: url.to_string(),
            limit: self.max_bytes,
        };
        if resp.content_length().is_some_and(|len| len > self.max_bytes as u64) {
            return Err(too_large());
        }

        // Content-Length may be absent or wrong, so count while reading.
        let mut body = BytesMut::new();
        while let Some(chunk) = resp.chunk().await.map_err(|e| network(url, e))? {
            if body.len() + chunk.len() > self.max_bytes {
                return Err(too_large());
            }
            body.extend_from_slice(&chunk);
        }
        let body = body.freeze();
        debug!(url = %url, bytes = body.len(), "Fetched icon");
        Ok(body)
    }

    async fn exists(&self, url: &str) -> Result<bool, FetchError> {
        let resp = self.client.head(url).send().await.map_err(|e| network(url, e))?;
        debug!(url = %url, status = %resp.status(), "Probed icon");
        Ok(resp.status().is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const LIMIT: usize = 1024;

    /// Answers a single connection with `head` followed by `body_len` bytes
    /// and then closes it.
    async fn serve_once(head: String, body_len: usize) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;
            let _ = socket.write_all(head.as_bytes()).await;
            let _ = socket.write_all(&vec![b'x'; body_len]).await;
            let _ = socket.shutdown().await;
        });
        format!("http://{}/icon.png", addr)
    }

    fn source() -> HttpIconSource {
        HttpIconSource::new(Duration::from_secs(5), LIMIT).unwrap()
    }

    #[tokio::test]
    async fn test_body_within_limit() {
        let url = serve_once(format!("HTTP/1.1 200 OK\r\nContent-Length: {}\r\n\r\n", LIMIT), LIMIT).await;
        let body = source().fetch(&url).await.unwrap();
        assert_eq!(body.len(), LIMIT);
    }

    #[tokio::test]
    async fn test_declared_length_over_limit() {
        let url = serve_once(
            format!("HTTP/1.1 200 OK\r\nContent-Length: {}\r\n\r\n", LIMIT + 1),
            LIMIT + 1,
        )
        .await;
        let err = source().fetch(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::TooLarge { limit: LIMIT, .. }));
    }

    #[tokio::test]
    async fn test_undeclared_length_over_limit() {
        let url = serve_once("HTTP/1.1 200 OK\r\nConnection: close\r\n\r\n".to_string(), LIMIT * 4).await;
        let err = source().fetch(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::TooLarge { .. }));
        assert_eq!(err.to_string(), format!("Response from {} exceeds {} bytes", url, LIMIT));
    }

    #[tokio::test]
    async fn test_error_status() {
        let url = serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n".to_string(), 0).await;
        let err = source().fetch(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_network_error() {
        let source = HttpIconSource::new(Duration::from_millis(500), LIMIT).unwrap();
        // Nothing listens on the discard port on loopback.
        let err = source.fetch("http://127.0.0.1:9/icon.png").await.unwrap_err();
        assert!(matches!(err, FetchError::Network { .. }));

        let err = source.exists("http://127.0.0.1:9/icon.png").await.unwrap_err();
        assert!(matches!(err, FetchError::Network { .. }));
    }

    #[tokio::test]
    async fn test_invalid_url_is_a_network_error() {
        let source = HttpIconSource::new(Duration::from_secs(1), LIMIT).unwrap();
        let err = source.fetch("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::Network { ref url, .. } if url == "not a url"));
    }
}
