use super::error::TransportError;
use crate::summary::SummarizeRequest;
use tracing::debug;

/// Status and body of an HTTP response, whatever the status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outbound calls to the summarization service
///
/// Implementations must not retry and must not impose a timeout.
/// An `Err` means no response was obtained at all; any HTTP status,
/// including failures, is an `Ok(RawResponse)`.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// POST the request as JSON
    async fn post_json(
        &self,
        url: &str,
        request: &SummarizeRequest,
    ) -> Result<RawResponse, TransportError>;

    /// Plain GET, used for liveness checks
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError>;
}

/// `reqwest`-backed transport
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    async fn read(response: reqwest::Response) -> Result<RawResponse, TransportError> {
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        debug!("Received HTTP {} ({} bytes)", status, body.len());
        Ok(RawResponse { status, body })
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        request: &SummarizeRequest,
    ) -> Result<RawResponse, TransportError> {
        let response = self.client.post(url).json(request).send().await?;
        Self::read(response).await
    }

    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        let response = self.client.get(url).send().await?;
        Self::read(response).await
    }
}
