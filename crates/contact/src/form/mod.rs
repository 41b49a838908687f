//! Client-side controller of the contact form.
//!
//! Owns the field values and the submission phase. At most one request is
//! in flight: `submit` is a no-op while a submission is pending or while the
//! success screen is shown. A success schedules an automatic reset which is
//! dropped if the visitor leaves the success screen first.

use std::{str::FromStr, sync::Arc, time::Duration};

use async_trait::async_trait;
use strum::Display;
use tokio::sync::{Mutex, watch};
use tracing::{debug, warn};

use crate::{Field, SubmissionInput, SubmissionResult};

cfg_if::cfg_if! {
    if #[cfg(feature = "http-transport")] {
        mod http;

        pub use http::HttpTransport;
    }
}

pub const AUTO_RESET_DELAY: Duration = Duration::from_secs(5);

#[derive(Display, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("unknown form field `{0}`")]
    UnknownField(String),
}

/// Carries a submission to the endpoint.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn send(&self, input: SubmissionInput) -> SubmissionResult;
}

#[async_trait]
impl Transport for crate::Command {
    async fn send(&self, input: SubmissionInput) -> SubmissionResult {
        self.submit(input).await.into()
    }
}

#[derive(Default)]
struct FormState {
    fields: SubmissionInput,
    phase: Phase,
    // bumped on every transition, lets a pending auto-reset detect it is stale
    episode: u64,
}

struct Shared {
    state: Mutex<FormState>,
    phase_tx: watch::Sender<Phase>,
}

impl Shared {
    fn transition(&self, state: &mut FormState, phase: Phase) {
        debug!(from = %state.phase, to = %phase, "Contact form transition");

        state.phase = phase;
        state.episode += 1;
        self.phase_tx.send_replace(phase);
    }
}

pub struct ContactForm<T: Transport> {
    shared: Arc<Shared>,
    transport: Arc<T>,
    reset_delay: Duration,
}

impl<T: Transport> Clone for ContactForm<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            transport: Arc::clone(&self.transport),
            reset_delay: self.reset_delay,
        }
    }
}

impl<T: Transport> ContactForm<T> {
    pub fn new(transport: Arc<T>) -> Self {
        let (phase_tx, _) = watch::channel(Phase::Idle);

        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(FormState::default()),
                phase_tx,
            }),
            transport,
            reset_delay: AUTO_RESET_DELAY,
        }
    }

    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    pub fn subscribe(&self) -> watch::Receiver<Phase> {
        self.shared.phase_tx.subscribe()
    }

    pub async fn phase(&self) -> Phase {
        self.shared.state.lock().await.phase
    }

    pub async fn fields(&self) -> SubmissionInput {
        self.shared.state.lock().await.fields.clone()
    }

    /// Overwrites one field by its form input name. Allowed in every phase.
    pub async fn update_field(&self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field = Field::from_str(name).map_err(|_| FormError::UnknownField(name.to_owned()))?;
        self.set_field(field, value).await;

        Ok(())
    }

    pub async fn set_field(&self, field: Field, value: impl Into<String>) {
        self.shared.state.lock().await.fields.set(field, value);
    }

    /// Leaves the success or error screen, keeping the typed values.
    pub async fn reset(&self) {
        let mut state = self.shared.state.lock().await;
        if matches!(state.phase, Phase::Succeeded | Phase::Failed) {
            self.shared.transition(&mut state, Phase::Idle);
        }
    }

    /// Sends the current values. Returns `None` when the call was ignored
    /// because the form is not in `Idle` or `Failed`.
    pub async fn submit(&self) -> Option<SubmissionResult> {
        let input = {
            let mut state = self.shared.state.lock().await;
            if !matches!(state.phase, Phase::Idle | Phase::Failed) {
                debug!(phase = %state.phase, "Submit ignored");
                return None;
            }

            self.shared.transition(&mut state, Phase::Submitting);
            state.fields.clone()
        };

        let result = self.transport.send(input).await;

        let mut state = self.shared.state.lock().await;
        if result.is_accepted() {
            self.shared.transition(&mut state, Phase::Succeeded);
            self.schedule_reset(state.episode);
        } else {
            warn!(result = ?result, "Contact form submission failed");
            self.shared.transition(&mut state, Phase::Failed);
        }

        Some(result)
    }

    fn schedule_reset(&self, episode: u64) {
        let shared = Arc::clone(&self.shared);
        let delay = self.reset_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut state = shared.state.lock().await;
            if state.phase == Phase::Succeeded && state.episode == episode {
                state.fields = SubmissionInput::default();
                shared.transition(&mut state, Phase::Idle);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    /// Transport answering with a fixed result, optionally held until released.
    struct Stub {
        calls: AtomicUsize,
        gate: Option<Notify>,
        result: SubmissionResult,
    }

    impl Stub {
        fn answering(result: SubmissionResult) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                gate: None,
                result,
            })
        }

        fn held(result: SubmissionResult) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                gate: Some(Notify::new()),
                result,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Transport for Stub {
        async fn send(&self, _input: SubmissionInput) -> SubmissionResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }

            self.result.clone()
        }
    }

    async fn fill<T: Transport>(form: &ContactForm<T>) {
        form.update_field("name", "Jean").await.unwrap();
        form.update_field("email", "jean@x.com").await.unwrap();
        form.update_field("company", "ACME").await.unwrap();
        form.update_field("project", "Site vitrine").await.unwrap();
    }

    fn accepted() -> SubmissionResult {
        SubmissionResult::Accepted("re_123".to_owned())
    }

    #[tokio::test]
    async fn test_update_field_rejects_unknown_names() {
        let form = ContactForm::new(Stub::answering(accepted()));

        assert!(matches!(
            form.update_field("message", "hello").await,
            Err(FormError::UnknownField(_))
        ));
        form.update_field("colors", "Bleu").await.unwrap();
        assert_eq!(form.fields().await.colors, "Bleu");
    }

    #[tokio::test]
    async fn test_success_then_failure_transitions() {
        let form = ContactForm::new(Stub::answering(accepted()));
        fill(&form).await;

        assert_eq!(form.submit().await, Some(accepted()));
        assert_eq!(form.phase().await, Phase::Succeeded);

        let failing = ContactForm::new(Stub::answering(SubmissionResult::DeliveryFailed(
            "boom".to_owned(),
        )));
        fill(&failing).await;
        failing.submit().await;
        assert_eq!(failing.phase().await, Phase::Failed);
        assert_eq!(failing.fields().await.name, "Jean");
    }

    #[tokio::test]
    async fn test_rejection_leads_to_failed_and_retry_is_allowed() {
        let stub = Stub::answering(SubmissionResult::Rejected(
            crate::MISSING_FIELDS_MESSAGE.to_owned(),
        ));
        let form = ContactForm::new(stub.clone());

        form.submit().await;
        assert_eq!(form.phase().await, Phase::Failed);

        assert!(form.submit().await.is_some());
        assert_eq!(stub.calls(), 2);

        form.reset().await;
        assert_eq!(form.phase().await, Phase::Idle);
    }

    #[tokio::test]
    async fn test_double_submit_issues_a_single_request() {
        let stub = Stub::held(accepted());
        let form = ContactForm::new(stub.clone());
        fill(&form).await;

        let first = tokio::spawn({
            let form = form.clone();
            async move { form.submit().await }
        });

        while form.phase().await != Phase::Submitting {
            tokio::task::yield_now().await;
        }

        assert_eq!(form.submit().await, None);
        assert_eq!(form.submit().await, None);

        if let Some(gate) = &stub.gate {
            gate.notify_one();
        }

        assert_eq!(first.await.unwrap(), Some(accepted()));
        assert_eq!(stub.calls(), 1);
        assert_eq!(form.phase().await, Phase::Succeeded);
    }

    #[tokio::test]
    async fn test_submit_is_ignored_while_success_is_shown() {
        let stub = Stub::answering(accepted());
        let form = ContactForm::new(stub.clone());

        form.submit().await;
        assert_eq!(form.submit().await, None);
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_auto_resets_and_clears_fields() {
        let form = ContactForm::new(Stub::answering(accepted()));
        let mut phases = form.subscribe();
        fill(&form).await;

        form.submit().await;
        assert_eq!(*phases.borrow_and_update(), Phase::Succeeded);

        tokio::time::sleep(Duration::from_millis(4_900)).await;
        assert_eq!(form.phase().await, Phase::Succeeded);
        assert_eq!(form.fields().await.name, "Jean");

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(form.phase().await, Phase::Idle);
        assert_eq!(form.fields().await, SubmissionInput::default());
        assert!(phases.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_auto_reset_has_no_effect_after_new_submission() {
        let stub = Stub::answering(accepted());
        let form = ContactForm::new(stub.clone());
        fill(&form).await;

        form.submit().await;
        tokio::time::sleep(Duration::from_secs(2)).await;

        // "send a new request" then submit again before the first timer fires
        form.reset().await;
        form.update_field("project", "Refonte").await.unwrap();
        form.submit().await;
        assert_eq!(stub.calls(), 2);

        tokio::time::sleep(Duration::from_millis(3_500)).await;
        assert_eq!(form.phase().await, Phase::Succeeded);
        assert_eq!(form.fields().await.project, "Refonte");

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(form.phase().await, Phase::Idle);
        assert_eq!(form.fields().await.project, "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_reset_keeps_fields_and_cancels_auto_reset() {
        let form = ContactForm::new(Stub::answering(accepted()));
        fill(&form).await;

        form.submit().await;
        form.reset().await;
        tokio::time::sleep(Duration::from_secs(10)).await;

        assert_eq!(form.phase().await, Phase::Idle);
        assert_eq!(form.fields().await.company, "ACME");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_delay_is_configurable() {
        let form = ContactForm::new(Stub::answering(accepted()))
            .with_reset_delay(Duration::from_secs(1));

        form.submit().await;
        tokio::time::sleep(Duration::from_millis(1_100)).await;

        assert_eq!(form.phase().await, Phase::Idle);
    }
}
