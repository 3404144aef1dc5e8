//! Save guard — the confirmation gate in front of the save workflow.
//!
//! The guard is a two-phase state machine:
//!
//! ```text
//! Idle → Checking → Allowed
//!                 → AwaitingConfirmation → Committed
//!                                        → Aborted
//! ```
//!
//! The first pass runs the check and, if anything is flagged, asks the
//! operator to confirm. The resumed pass carries the recorded answer and
//! never re-runs the check. Any failure during the check blocks the save
//! with a diagnostic message instead of letting it through.

use crate::aggregate::ConflictAggregator;
use crate::config::GuardConfig;
use crate::error::{CheckError, CheckResult};
use crate::report::{format_failure, format_report};
use crate::store::LiveRecordStore;
use serde::{Deserialize, Serialize};
use snapguard_model::LiveRecord;
use snapguard_types::RecordId;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// One record version in a pending save.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SaveTarget {
    pub id: RecordId,
    pub database: String,
    pub language: String,
    pub version: u32,
}

impl SaveTarget {
    pub fn new(
        id: RecordId,
        database: impl Into<String>,
        language: impl Into<String>,
        version: u32,
    ) -> Self {
        Self {
            id,
            database: database.into(),
            language: language.into(),
            version,
        }
    }

    /// The target addressing `record`.
    pub fn of(record: &LiveRecord) -> Self {
        Self::new(record.id, record.database.clone(), record.language.clone(), record.version)
    }
}

/// The set of records the save workflow is about to write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingSave {
    pub targets: Vec<SaveTarget>,
}

impl PendingSave {
    pub fn new(targets: Vec<SaveTarget>) -> Self {
        Self { targets }
    }
}

/// Operator answer recorded by the confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Yes,
    No,
    /// Dismissed or cancelled without an answer.
    Undefined,
}

impl Answer {
    /// Parses a prompt result. Anything other than `yes` or `no` is undefined.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" => Self::Yes,
            "no" => Self::No,
            _ => Self::Undefined,
        }
    }
}

/// Outcome of the first pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// Suspend the save and show `message` for confirmation.
    Block { message: String },
}

/// Outcome of the resumed pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Commit,
    Abort,
}

/// States of the confirmation gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Idle,
    Checking,
    Allowed,
    AwaitingConfirmation,
    Committed,
    Aborted,
}

impl GuardState {
    /// True for states in which the guard hands control back for good.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Allowed | Self::Committed | Self::Aborted)
    }
}

/// Hooks into the surrounding save workflow.
pub trait SaveWorkflow {
    /// True when this call resumes a save suspended for confirmation.
    fn is_post_back(&self) -> bool;

    /// The answer recorded for the confirmation prompt.
    fn answer(&self) -> Answer;

    /// Shows `message` and suspends the save until the operator answers.
    fn request_confirmation(&mut self, message: &str);

    /// Turns off any save-completion animation or side effect.
    fn disable_save_animation(&mut self);

    /// Aborts the save.
    fn abort(&mut self);
}

/// Blocks saves that would overwrite newer serialized data.
pub struct SaveGuard {
    enabled: bool,
    aggregator: ConflictAggregator,
    live_store: Arc<dyn LiveRecordStore>,
}

impl SaveGuard {
    pub fn new(aggregator: ConflictAggregator, live_store: Arc<dyn LiveRecordStore>) -> Self {
        Self {
            enabled: true,
            aggregator,
            live_store,
        }
    }

    /// Builds a guard and its profiles from configuration.
    pub fn from_config(config: &GuardConfig, live_store: Arc<dyn LiveRecordStore>) -> CheckResult<Self> {
        let profiles = config.build_profiles()?;
        info!("Conflict check configured with {} profile(s)", profiles.len());
        Ok(Self {
            enabled: config.enabled,
            aggregator: ConflictAggregator::new(profiles),
            live_store,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// First pass: checks the pending save.
    pub fn check_before_save(&self, save: &PendingSave) -> Decision {
        if !self.enabled {
            debug!("Conflict check disabled, allowing save");
            return Decision::Allow;
        }

        match self.detect(save) {
            Ok(None) => Decision::Allow,
            Ok(Some(message)) => Decision::Block { message },
            Err(e) => {
                error!("Serialization conflict check failed: {e}");
                Decision::Block {
                    message: format_failure(&e),
                }
            }
        }
    }

    /// Resumed pass: applies the operator's answer without re-checking.
    pub fn check_after_confirmation(&self, save: &PendingSave, answer: Answer) -> Resolution {
        match answer {
            Answer::Yes => {
                warn!(
                    "Operator chose to overwrite serialized data for {} record(s)",
                    save.targets.len()
                );
                Resolution::Commit
            }
            Answer::No | Answer::Undefined => {
                info!("Save aborted after conflict prompt ({answer:?})");
                Resolution::Abort
            }
        }
    }

    /// Drives one call of the save workflow through the state machine and
    /// returns the state it ends in.
    pub fn process(&self, save: &PendingSave, workflow: &mut dyn SaveWorkflow) -> GuardState {
        if workflow.is_post_back() {
            let state = match self.check_after_confirmation(save, workflow.answer()) {
                Resolution::Commit => GuardState::Committed,
                Resolution::Abort => {
                    workflow.disable_save_animation();
                    workflow.abort();
                    GuardState::Aborted
                }
            };
            transition(GuardState::AwaitingConfirmation, state);
            return state;
        }

        transition(GuardState::Idle, GuardState::Checking);
        let state = match self.check_before_save(save) {
            Decision::Allow => GuardState::Allowed,
            Decision::Block { message } => {
                workflow.request_confirmation(&message);
                GuardState::AwaitingConfirmation
            }
        };
        transition(GuardState::Checking, state);
        state
    }

    /// Loads the live records and returns the block message, if any.
    fn detect(&self, save: &PendingSave) -> CheckResult<Option<String>> {
        let records = save
            .targets
            .iter()
            .map(|target| {
                self.live_store.get(target)?.ok_or_else(|| CheckError::RecordVanished {
                    id: target.id,
                    language: target.language.clone(),
                    version: target.version,
                })
            })
            .collect::<CheckResult<Vec<_>>>()?;

        let report = self.aggregator.aggregate(&records)?;
        Ok(format_report(&report))
    }
}

fn transition(from: GuardState, to: GuardState) {
    debug!("Save guard {from:?} -> {to:?}");
}
