//! One generation cycle: description in, session state and notice out.
//!
//! ```text
//!  Idle ──trigger──► AwaitingInput          (description empty)
//!   │
//!   └──trigger──► Generating ──► Succeeded  (non-empty text)
//!                     │
//!                     └────────► Failed     (any error, or no credential)
//! ```
//!
//! The session is passed in by value and handed back inside
//! [`CycleOutcome`], so the presenter never touches shared storage.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use landing_core::{
    error::GenerationError,
    provider::{GenerateParameters, GenerationProvider},
    session::SessionState,
    template::PromptTemplate,
};
use landing_prompt::LandingPagePrompt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::notice::Notice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterState {
    Idle,
    AwaitingInput,
    Generating,
    Succeeded,
    Failed,
}

/// Per-session "generation in progress" indicator.
///
/// Only [`LoadingIndicator::show`] raises it, and the returned guard lowers
/// it again when dropped, whatever way the cycle ends.  Overlapping cycles
/// on one session each hold a guard; the indicator stays up until the last
/// one finishes.
#[derive(Debug, Clone, Default)]
pub struct LoadingIndicator(Arc<AtomicUsize>);

impl LoadingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self) -> LoadingGuard {
        self.0.fetch_add(1, Ordering::SeqCst);
        LoadingGuard(Arc::clone(&self.0))
    }

    pub fn is_visible(&self) -> bool {
        self.0.load(Ordering::SeqCst) > 0
    }
}

#[must_use = "the indicator is cleared as soon as the guard is dropped"]
#[derive(Debug)]
pub struct LoadingGuard(Arc<AtomicUsize>);

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone)]
pub struct CycleOutcome {
    pub session: SessionState,
    pub notice: Notice,
    /// Terminal state reached by the cycle; the surface returns to
    /// [`PresenterState::Idle`] once it has rendered.
    pub state: PresenterState,
}

/// Drives generation cycles against one backend.
///
/// `provider` is `None` when no API key was configured; every non-empty
/// trigger then fails with a configuration error without any network call.
#[derive(Clone)]
pub struct Presenter {
    provider: Option<Arc<dyn GenerationProvider>>,
}

impl Presenter {
    pub fn new(provider: Arc<dyn GenerationProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    pub fn without_credential() -> Self {
        Self { provider: None }
    }

    pub fn has_credential(&self) -> bool {
        self.provider.is_some()
    }

    /// Run one trigger → attempt → result cycle.
    ///
    /// Dropping the returned future (e.g. the HTTP client went away) fires
    /// `cancel`, which aborts the in-flight request.
    pub async fn run_cycle(
        &self,
        mut session: SessionState,
        description: &str,
        loading: &LoadingIndicator,
        cancel: CancellationToken,
    ) -> CycleOutcome {
        if description.trim().is_empty() {
            debug!("empty description, no generation attempted");
            session.record_no_attempt();
            return CycleOutcome {
                session,
                notice: Notice::empty_description(),
                state: PresenterState::AwaitingInput,
            };
        }

        let Some(provider) = self.provider.clone() else {
            warn!("generation requested without a configured API key");
            session.record_no_attempt();
            return CycleOutcome {
                session,
                notice: Notice::from(&GenerationError::MissingCredential),
                state: PresenterState::Failed,
            };
        };

        let _loading = loading.show();
        let _cancel_on_drop = cancel.clone().drop_guard();
        info!(
            description_len = description.len(),
            state = ?PresenterState::Generating,
            "generation started"
        );

        let params = GenerateParameters::new(
            LandingPagePrompt::new(description).into_prompt(),
            LandingPagePrompt::MODEL,
        );
        let task = tokio::spawn(async move { provider.generate(params, cancel).await });

        match task.await {
            Ok(Ok(markup)) if markup.is_empty() => {
                warn!("generation returned empty text");
                session.record_result(markup);
                CycleOutcome {
                    session,
                    notice: Notice::from(&GenerationError::UnexpectedShape(
                        "empty text part".into(),
                    )),
                    state: PresenterState::Failed,
                }
            }
            Ok(Ok(markup)) => {
                info!(markup_len = markup.len(), "generation succeeded");
                session.record_result(markup);
                CycleOutcome {
                    session,
                    notice: Notice::generated(),
                    state: PresenterState::Succeeded,
                }
            }
            Ok(Err(err)) if err.is_soft() => {
                warn!(error = %err, "generation produced no content");
                session.record_result(String::new());
                CycleOutcome {
                    session,
                    notice: Notice::from(&err),
                    state: PresenterState::Failed,
                }
            }
            Ok(Err(err)) => {
                error!(error = %err, kind = ?err.kind(), "generation failed");
                session.record_no_attempt();
                CycleOutcome {
                    session,
                    notice: Notice::from(&err),
                    state: PresenterState::Failed,
                }
            }
            Err(join_err) => {
                error!(error = %join_err, "generation task crashed");
                session.record_no_attempt();
                CycleOutcome {
                    session,
                    notice: Notice::unexpected(join_err),
                    state: PresenterState::Failed,
                }
            }
        }
    }
}
