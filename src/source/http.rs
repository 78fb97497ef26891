//! HTTP data source.
//!
//! Fetches a clock record from a static JSON asset over plain GET -
//! no auth, no caching headers.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::{ClockSource, SourceError};
use crate::data::IncidentRecord;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A data source that fetches one clock record over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
    description: String,
}

impl HttpSource {
    /// Create a source with its own client and the default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");
        Self::with_client(client, url)
    }

    /// Create a source that shares an existing client.
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        let url = url.into();
        let description = format!("http: {}", url);
        Self {
            client,
            url,
            description,
        }
    }

    /// The endpoint this source fetches.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ClockSource for HttpSource {
    async fn fetch(&self) -> Result<IncidentRecord, SourceError> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::Http(format!(
                "{} returned status {}",
                self.url,
                response.status()
            )));
        }

        let record: IncidentRecord = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        Ok(record)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Join a base URL and a relative path with exactly one slash.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_source_new() {
        let source = HttpSource::new("http://localhost:8000/data/clock1.json");
        assert_eq!(source.url(), "http://localhost:8000/data/clock1.json");
        assert_eq!(
            source.description(),
            "http: http://localhost:8000/data/clock1.json"
        );
    }

    #[test]
    fn test_http_source_shared_client() {
        let client = Client::new();
        let a = HttpSource::with_client(client.clone(), "http://host/a.json");
        let b = HttpSource::with_client(client, "http://host/b.json");
        assert_ne!(a.url(), b.url());
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://host", "data/c.json"), "http://host/data/c.json");
        assert_eq!(join_url("http://host/", "data/c.json"), "http://host/data/c.json");
        assert_eq!(join_url("http://host/", "/data/c.json"), "http://host/data/c.json");
    }

    /// Serve a single canned HTTP response on a local socket.
    async fn one_shot_server(response: String) -> std::net::SocketAddr {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let _ = socket.write_all(response.as_bytes()).await;
        });
        addr
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let body = r#"{ "clock_name": "HTTP Clock" }"#;
        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\n\r\n{}",
            body.len(),
            body
        );
        let addr = one_shot_server(response).await;

        let source = HttpSource::new(format!("http://{}/clock.json", addr));
        let record = source.fetch().await.unwrap();
        assert_eq!(record.clock_name, "HTTP Clock");
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let response =
            "HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\n\r\n".to_string();
        let addr = one_shot_server(response).await;

        let source = HttpSource::new(format!("http://{}/clock.json", addr));
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SourceError::Http(_)));
        assert!(err.to_string().contains("500"));
    }
}
