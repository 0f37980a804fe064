use super::error::{FailureReason, SubmitRejected};
use super::normalize::classify_failure;
use super::state::{can_submit, SubmissionState};
use super::transport::{HttpTransport, Transport};
use crate::config::ServiceConfig;
use crate::summary::{SummarizeRequest, SummaryResult};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{error, info, warn};

/// Owns the submission state machine and issues the summarize call
///
/// One controller allows one request in flight. The state lock is only held
/// for transitions, never across the remote call.
pub struct SubmissionController {
    /// Outbound HTTP
    transport: Arc<dyn Transport>,

    /// `POST` target for transcripts
    summarize_url: String,

    /// Liveness endpoint of the same service
    health_url: String,

    /// Current state (only this controller writes it)
    state: Mutex<SubmissionState>,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

impl SubmissionController {
    pub fn new(transport: Arc<dyn Transport>, service: &ServiceConfig) -> Self {
        Self {
            transport,
            summarize_url: service.summarize_url(),
            health_url: service.health_url(),
            state: Mutex::new(SubmissionState::Idle),
        }
    }

    /// Controller talking HTTP to the configured service
    pub fn from_config(service: &ServiceConfig) -> Self {
        Self::new(Arc::new(HttpTransport::new()), service)
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SubmissionState {
        lock(&self.state).clone()
    }

    pub fn can_submit(&self, input: &str) -> bool {
        can_submit(&lock(&self.state), input)
    }

    /// Submit a transcript and wait for it to settle
    ///
    /// Every remote outcome comes back as `Ok` with a `Succeeded` or `Failed`
    /// state. `Err` means the submission was refused up front and nothing
    /// was sent.
    pub async fn submit(&self, transcript: &str) -> Result<SubmissionState, SubmitRejected> {
        let in_flight = self.begin(transcript)?;

        info!(
            "Submitting transcript to {} ({} chars)",
            self.summarize_url,
            transcript.chars().count()
        );

        let settled = match self.request_summary(transcript).await {
            Ok(result) => {
                info!(
                    "Summary received: {:?}",
                    result.meeting_title.as_deref().unwrap_or_default()
                );
                SubmissionState::Succeeded(result)
            }
            Err(reason) => {
                match (&reason, reason.status()) {
                    (FailureReason::Transport(e), _) => {
                        error!("Summarize request failed: {}", e)
                    }
                    (FailureReason::ContractViolation(e), _) => {
                        error!("Success response is not a summary: {}", e)
                    }
                    (_, Some(status)) => {
                        warn!("Summarization service returned {}: {}", status, reason)
                    }
                    (_, None) => warn!("Summarize request failed: {}", reason),
                }
                SubmissionState::Failed(reason.to_string())
            }
        };

        in_flight.settle(settled.clone());
        Ok(settled)
    }

    /// Check that the service is up (`GET /` answers `{"status":"ok"}`)
    pub async fn health(&self) -> Result<()> {
        let response = self
            .transport
            .get(&self.health_url)
            .await
            .with_context(|| {
                format!("Failed to reach summarization service at {}", self.health_url)
            })?;

        if !response.is_success() {
            bail!("Summarization service unhealthy (HTTP {})", response.status);
        }

        let health: HealthResponse = serde_json::from_slice(&response.body)
            .context("Failed to decode health response")?;
        if health.status != "ok" {
            bail!("Summarization service reported status {:?}", health.status);
        }

        info!("Summarization service at {} is healthy", self.health_url);
        Ok(())
    }

    /// Gate the submission and move to `InFlight`, clearing any prior result or error
    fn begin(&self, transcript: &str) -> Result<InFlight<'_>, SubmitRejected> {
        let mut state = lock(&self.state);

        if state.is_in_flight() {
            warn!("Rejected submission: a request is already in flight");
            return Err(SubmitRejected::InFlight);
        }
        if !can_submit(&state, transcript) {
            warn!("Rejected submission: transcript is empty");
            return Err(SubmitRejected::EmptyTranscript);
        }

        *state = SubmissionState::InFlight;
        Ok(InFlight {
            state: &self.state,
            settled: false,
        })
    }

    async fn request_summary(&self, transcript: &str) -> Result<SummaryResult, FailureReason> {
        let request = SummarizeRequest::new(transcript);

        let response = self
            .transport
            .post_json(&self.summarize_url, &request)
            .await
            .map_err(|e| FailureReason::transport(e.to_string()))?;

        if !response.is_success() {
            return Err(classify_failure(response.status, &response.body));
        }

        SummaryResult::from_slice(&response.body)
            .map_err(|e| FailureReason::ContractViolation(e.to_string()))
    }
}

/// In-flight marker; releases the controller if the submission is dropped unsettled
struct InFlight<'a> {
    state: &'a Mutex<SubmissionState>,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self, next: SubmissionState) {
        debug_assert!(next.is_settled());
        *lock(self.state) = next;
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut state = lock(self.state);
        if state.is_in_flight() {
            warn!("Submission dropped before settlement");
            *state = SubmissionState::Idle;
        }
    }
}

fn lock(state: &Mutex<SubmissionState>) -> MutexGuard<'_, SubmissionState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::{RawResponse, TransportError};

    /// Canned transport that records what it was asked to send
    struct StubTransport {
        reply: Result<RawResponse, TransportError>,
        sent: Mutex<Vec<(String, SummarizeRequest)>>,
    }

    impl StubTransport {
        fn replying(status: u16, body: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(RawResponse {
                    status,
                    body: body.as_bytes().to_vec(),
                }),
                sent: Mutex::new(Vec::new()),
            })
        }

        fn unreachable(message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(TransportError::new(message)),
                sent: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait::async_trait]
    impl Transport for StubTransport {
        async fn post_json(
            &self,
            url: &str,
            request: &SummarizeRequest,
        ) -> Result<RawResponse, TransportError> {
            self.sent
                .lock()
                .unwrap()
                .push((url.to_string(), request.clone()));
            self.reply.clone()
        }

        async fn get(&self, _url: &str) -> Result<RawResponse, TransportError> {
            self.reply.clone()
        }
    }

    fn controller(transport: Arc<StubTransport>) -> SubmissionController {
        SubmissionController::new(transport, &ServiceConfig::default())
    }

    #[tokio::test]
    async fn test_sends_untrimmed_transcript_to_summarize_url() {
        let transport = StubTransport::replying(200, r#"{"meeting_title":"Sync"}"#);
        let controller = controller(Arc::clone(&transport));

        let state = controller.submit("  Alice: ship next week.\n").await.unwrap();
        assert_eq!(state.result().unwrap().meeting_title.as_deref(), Some("Sync"));

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "http://127.0.0.1:8000/summarize");
        assert_eq!(sent[0].1.transcript, "  Alice: ship next week.\n");
    }

    #[tokio::test]
    async fn test_transport_error_becomes_failed_state() {
        let controller = controller(StubTransport::unreachable("connection refused"));

        let state = controller.submit("hello").await.unwrap();
        assert_eq!(state, SubmissionState::Failed("connection refused".to_string()));
        assert_eq!(controller.state(), state);
        assert!(controller.can_submit("hello"));
    }

    #[tokio::test]
    async fn test_blank_transport_error_uses_unknown_error() {
        let controller = controller(StubTransport::unreachable(""));

        let state = controller.submit("hello").await.unwrap();
        assert_eq!(state, SubmissionState::Failed("Unknown error".to_string()));
    }

    #[tokio::test]
    async fn test_contract_violation_becomes_failed_state() {
        let controller = controller(StubTransport::replying(200, "not json"));

        let state = controller.submit("hello").await.unwrap();
        let message = state.error_message().unwrap();
        assert!(message.starts_with("Unexpected response from summarization service"));
        assert!(!controller.state().is_in_flight());
    }

    #[tokio::test]
    async fn test_blank_transcript_is_rejected_without_sending() {
        let transport = StubTransport::replying(200, "{}");
        let controller = controller(Arc::clone(&transport));

        assert_eq!(
            controller.submit(" \n\t ").await,
            Err(SubmitRejected::EmptyTranscript)
        );
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert!(transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_new_submission_replaces_previous_failure() {
        let failing = controller(StubTransport::replying(500, ""));
        let state = failing.submit("first").await.unwrap();
        assert_eq!(state.error_message(), Some("Request failed (500)"));

        // Same state slot, new transport outcome
        let controller = SubmissionController {
            transport: StubTransport::replying(200, r#"{"meeting_title":"Second"}"#),
            ..failing
        };
        let state = controller.submit("second").await.unwrap();
        assert!(state.error_message().is_none());
        assert_eq!(state.result().unwrap().meeting_title.as_deref(), Some("Second"));
    }

    #[tokio::test]
    async fn test_health_requires_ok_status() {
        let healthy = controller(StubTransport::replying(200, r#"{"status":"ok"}"#));
        assert!(healthy.health().await.is_ok());

        let degraded = controller(StubTransport::replying(200, r#"{"status":"degraded"}"#));
        assert!(degraded.health().await.is_err());

        let down = controller(StubTransport::replying(503, ""));
        assert!(down.health().await.is_err());

        // Health checks never touch submission state
        assert_eq!(down.state(), SubmissionState::Idle);
    }
}
