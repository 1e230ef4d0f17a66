//! Claim processing simulator
//!
//! `ClaimProcessor` holds the state of one claim form: the entered values,
//! the attached files, the most recent decision, and whether a submission is
//! in flight. Submitting validates the form, waits out a configurable
//! decision delay on a spawned task, and produces exactly one decision.
//!
//! # Concurrency
//!
//! One submission may be in flight per processor; a second `submit` while the
//! first is pending fails with `ClaimError::SubmissionInProgress`. Separate
//! processors are independent and may submit concurrently.
//!
//! The delay runs on its own task, so dropping the future returned by
//! `submit` does not cancel the decision: it is still recorded on the
//! processor and the in-flight flag is still cleared.
//!
//! `reset_form` starts a new generation of the form. A decision still in
//! flight from an earlier generation is returned to its caller but is not
//! recorded, and it does not touch the in-flight flag of the new generation.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, Instrument};

use core_kernel::{Entropy, SubmissionId, ThreadEntropy};
use crate::claim::{Claim, ClaimSubmission};
use crate::decision::{decide, ClaimDecision};
use crate::error::ClaimError;
use crate::form::{ClaimForm, FormField, UploadedFile};

/// Default simulated decision latency
pub const DEFAULT_DECISION_DELAY: Duration = Duration::from_secs(2);

/// Processor settings
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// How long a submission waits before its decision is made
    pub decision_delay: Duration,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            decision_delay: DEFAULT_DECISION_DELAY,
        }
    }
}

impl ProcessorConfig {
    /// Configuration with no decision delay, for tests
    pub fn immediate() -> Self {
        Self {
            decision_delay: Duration::ZERO,
        }
    }
}

/// What a successful submission produces
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionOutcome {
    pub decision: ClaimDecision,
    /// The decision merged into a claim record, ready for the store
    pub claim: Claim,
}

#[derive(Debug, Default)]
struct ProcessorState {
    form: ClaimForm,
    decision: Option<ClaimDecision>,
    processing: bool,
    /// Bumped on every reset
    generation: u64,
}

/// State and workflow for one claim form
pub struct ClaimProcessor {
    state: Arc<Mutex<ProcessorState>>,
    entropy: Arc<dyn Entropy>,
    config: ProcessorConfig,
}

impl ClaimProcessor {
    /// Creates a processor drawing from the thread-local RNG
    pub fn new(config: ProcessorConfig) -> Self {
        Self::with_entropy(config, Arc::new(ThreadEntropy))
    }

    pub fn with_entropy(config: ProcessorConfig, entropy: Arc<dyn Entropy>) -> Self {
        Self {
            state: Arc::new(Mutex::new(ProcessorState::default())),
            entropy,
            config,
        }
    }

    fn lock(&self) -> MutexGuard<'_, ProcessorState> {
        lock_state(&self.state)
    }

    /// Sets one form field
    pub fn update_field(&self, field: FormField, value: impl Into<String>) {
        self.lock().form.set(field, value);
    }

    /// Sets one form field by its client-side name
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::UnknownField` if the name is not a form field.
    pub fn update_field_named(&self, name: &str, value: impl Into<String>) -> Result<(), ClaimError> {
        let field = name.parse::<FormField>()?;
        self.update_field(field, value);
        Ok(())
    }

    /// Appends files to the form
    pub fn add_files(&self, files: impl IntoIterator<Item = UploadedFile>) {
        let mut state = self.lock();
        state.form.files.extend(files);
        debug!(file_count = state.form.files.len(), "Files attached to claim form");
    }

    /// Removes the file at `index`; out-of-range indexes are ignored
    pub fn remove_file(&self, index: usize) -> Option<UploadedFile> {
        let mut state = self.lock();
        (index < state.form.files.len()).then(|| state.form.files.remove(index))
    }

    /// Clears the form, the last decision, and the in-flight flag
    pub fn reset_form(&self) {
        let mut state = self.lock();
        let generation = state.generation.wrapping_add(1);
        *state = ProcessorState {
            generation,
            ..ProcessorState::default()
        };
        debug!(generation, "Claim form reset");
    }

    /// Checks whether the fields required by `step` are filled in
    pub fn is_form_valid(&self, step: u8) -> bool {
        self.lock().form.is_step_complete(step)
    }

    /// Copy of the current form values
    pub fn form(&self) -> ClaimForm {
        self.lock().form.clone()
    }

    pub fn file_names(&self) -> Vec<String> {
        self.lock().form.file_names()
    }

    /// Most recent decision, if any
    pub fn last_decision(&self) -> Option<ClaimDecision> {
        self.lock().decision.clone()
    }

    /// Returns true while a submission is waiting on its decision
    pub fn is_processing(&self) -> bool {
        self.lock().processing
    }

    /// Submits the form for a decision
    ///
    /// The form is validated up front; an invalid form leaves the processor
    /// untouched. A valid form sets the in-flight flag, waits
    /// `decision_delay`, then records and returns the decision.
    ///
    /// # Errors
    ///
    /// - `SubmissionInProgress` if a submission on this processor is pending
    /// - any validation error from `ClaimForm::to_submission`
    /// - `DecisionTaskFailed` if the decision task panicked
    pub async fn submit(&self) -> Result<SubmissionOutcome, ClaimError> {
        let (submission, generation) = {
            let mut state = self.lock();
            if state.processing {
                return Err(ClaimError::SubmissionInProgress);
            }
            let submission = state.form.to_submission()?;
            state.processing = true;
            (submission, state.generation)
        };

        let submission_id = SubmissionId::new_v7();
        let span = tracing::info_span!("claim_submission", submission_id = %submission_id);
        info!(
            parent: &span,
            policy_number = %submission.policy_number,
            claim_type = %submission.claim_type,
            amount = %submission.amount,
            "Claim submitted for decision"
        );

        let task = tokio::spawn(
            run_decision(
                submission_id,
                submission,
                generation,
                Arc::clone(&self.state),
                Arc::clone(&self.entropy),
                self.config.decision_delay,
            )
            .instrument(span),
        );

        task.await.map_err(|e| {
            // The task never got to clear the flag
            finish(&self.state, generation, None);
            ClaimError::DecisionTaskFailed(e.to_string())
        })?
    }
}

impl Default for ClaimProcessor {
    fn default() -> Self {
        Self::new(ProcessorConfig::default())
    }
}

async fn run_decision(
    submission_id: SubmissionId,
    submission: ClaimSubmission,
    generation: u64,
    state: Arc<Mutex<ProcessorState>>,
    entropy: Arc<dyn Entropy>,
    delay: Duration,
) -> Result<SubmissionOutcome, ClaimError> {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let decision = match decide(submission_id, &submission, entropy.as_ref(), Utc::now()) {
        Ok(decision) => decision,
        Err(e) => {
            finish(&state, generation, None);
            return Err(e);
        }
    };
    let claim = Claim::from_decision(&submission, &decision);

    info!(
        reference_number = %decision.reference_number,
        approved = decision.approved,
        risk_level = ?decision.risk_level,
        payment_status = ?decision.payment_status,
        "Claim decision made"
    );

    finish(&state, generation, Some(decision.clone()));

    Ok(SubmissionOutcome { decision, claim })
}

/// Ends a submission started in `generation`
///
/// A reset since then owns the state, so a stale submission leaves it alone.
fn finish(state: &Mutex<ProcessorState>, generation: u64, decision: Option<ClaimDecision>) {
    let mut state = lock_state(state);
    if state.generation != generation {
        debug!(generation, current = state.generation, "Discarding decision for a reset form");
        return;
    }
    if decision.is_some() {
        state.decision = decision;
    }
    state.processing = false;
}

fn lock_state(state: &Mutex<ProcessorState>) -> MutexGuard<'_, ProcessorState> {
    // Every critical section leaves the state consistent, so a poisoned lock is still usable
    state.lock().unwrap_or_else(|e| e.into_inner())
}
