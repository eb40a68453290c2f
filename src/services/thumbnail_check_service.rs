// src/services/thumbnail_check_service.rs
//
// Thumbnail Check Service - Orchestration Layer
//
// Drives the lifecycle of one "does a thumbnail exist" check against the
// external probe collaborator.
//
// CRITICAL RULES:
// - Validation gates the probe: no check starts while errors exist
// - At most one check in flight; a submit during `Checking` is refused
// - The probe call is the only suspension point; submit returns immediately
// - Probe failure and timeout terminate the attempt with a distinct,
//   user-visible result, never a panic
// - Settling goes through the pure state machine, so stale resolutions
//   are discarded by sequence number

use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::{debug, info, warn};
use tokio::task::JoinHandle;

use crate::application::dto::CheckerSnapshot;
use crate::domain::check::{CheckResult, CheckTicket, CheckerState};
use crate::domain::form::FormField;
use crate::error::AppResult;
use crate::events::{CheckCompleted, CheckFailed, CheckStarted, EventBus, ValidationFailed};
use crate::integrations::thumbnail::ThumbnailProbe;

#[derive(Debug, Clone)]
pub struct CheckServiceConfig {
    /// Upper bound on one probe call; elapsing counts as a failed attempt
    pub probe_timeout: Duration,
    pub success_message: String,
    pub failure_message: String,
    pub error_message: String,
}

impl Default for CheckServiceConfig {
    fn default() -> Self {
        Self {
            probe_timeout: Duration::from_secs(10),
            success_message: "Thumbnail is available!".to_string(),
            failure_message: "Thumbnail not found for this episode".to_string(),
            error_message: "Thumbnail check could not complete".to_string(),
        }
    }
}

/// What a submit call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation errors were stored; the probe was not invoked
    Rejected,

    /// A check is already in flight; nothing changed
    AlreadyChecking,

    /// The check was started
    Started,
}

pub struct ThumbnailCheckService {
    probe: Arc<dyn ThumbnailProbe>,
    event_bus: Arc<EventBus>,
    config: CheckServiceConfig,
    state: Arc<Mutex<CheckerState>>,
    task_handle: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl ThumbnailCheckService {
    pub fn new(
        probe: Arc<dyn ThumbnailProbe>,
        event_bus: Arc<EventBus>,
        config: CheckServiceConfig,
    ) -> Self {
        Self {
            probe,
            event_bus,
            config,
            state: Arc::new(Mutex::new(CheckerState::new())),
            task_handle: Arc::new(Mutex::new(None)),
        }
    }

    /// Edit transition for the URL field
    pub fn edit_url(&self, value: &str) {
        let mut state = self.state.lock().unwrap();
        *state = state.edit_field(FormField::Url, value);
    }

    /// Edit transition for the episode-id field
    pub fn edit_episode_id(&self, value: &str) {
        let mut state = self.state.lock().unwrap();
        *state = state.edit_field(FormField::EpisodeId, value);
    }

    /// Current state snapshot (cloned, detached from further transitions)
    pub fn state(&self) -> CheckerState {
        self.state.lock().unwrap().clone()
    }

    /// Serializable view of the current state for the presentation layer
    pub fn snapshot(&self) -> CheckerSnapshot {
        CheckerSnapshot::from(&*self.state.lock().unwrap())
    }

    /// Submit the current field values.
    ///
    /// Validates first; on clean input starts exactly one asynchronous probe
    /// call and returns without awaiting it. The outcome is applied to the
    /// state when the probe resolves, fails, or times out.
    pub fn submit(&self) -> SubmitOutcome {
        let ticket = {
            let mut state = self.state.lock().unwrap();
            if state.status.is_checking() {
                warn!("submit refused: a check is already in flight");
                return SubmitOutcome::AlreadyChecking;
            }
            let (next, ticket) = state.submit();
            *state = next;
            ticket
        };

        match ticket {
            None => {
                let fields: Vec<String> = {
                    let state = self.state.lock().unwrap();
                    state.errors.fields().iter().map(|f| f.to_string()).collect()
                };
                debug!("submit rejected by validation on fields: {:?}", fields);
                self.event_bus.emit(ValidationFailed::new(fields));
                SubmitOutcome::Rejected
            }
            Some(ticket) => {
                info!(
                    "check {} started for url={} episode_id={}",
                    ticket.seq, ticket.input.url, ticket.input.episode_id
                );
                self.event_bus.emit(CheckStarted::new(
                    ticket.seq,
                    ticket.input.url.clone(),
                    ticket.input.episode_id.clone(),
                ));
                self.spawn_check_task(ticket);
                SubmitOutcome::Started
            }
        }
    }

    /// Await the in-flight check, if any.
    /// Returns once the outcome has been applied to the state.
    pub async fn wait_for_outstanding(&self) -> AppResult<()> {
        let handle = { self.task_handle.lock().unwrap().take() };
        if let Some(handle) = handle {
            handle.await?;
        }
        Ok(())
    }

    /// Teardown: abort any outstanding check so a late resolution cannot
    /// touch state after the component is disposed.
    pub fn shutdown(&self) {
        let mut handle = self.task_handle.lock().unwrap();
        if let Some(task) = handle.take() {
            task.abort();
            debug!("outstanding check aborted on shutdown");
        }
    }

    fn spawn_check_task(&self, ticket: CheckTicket) {
        let probe = Arc::clone(&self.probe);
        let event_bus = Arc::clone(&self.event_bus);
        let state = Arc::clone(&self.state);
        let config = self.config.clone();

        let task = tokio::spawn(async move {
            let CheckTicket { seq, input } = ticket;

            let outcome = tokio::time::timeout(
                config.probe_timeout,
                probe.check_thumbnail(&input.url, &input.episode_id),
            )
            .await;

            let (result, completion) = match outcome {
                Ok(Ok(found)) => (
                    CheckResult::from_found(found, &config.success_message, &config.failure_message),
                    Ok(found),
                ),
                Ok(Err(err)) => {
                    warn!("check {} failed: {}", seq, err);
                    (
                        CheckResult::could_not_complete(&config.error_message),
                        Err(err.to_string()),
                    )
                }
                Err(_) => {
                    warn!("check {} timed out after {:?}", seq, config.probe_timeout);
                    (
                        CheckResult::could_not_complete(&config.error_message),
                        Err(format!("timed out after {:?}", config.probe_timeout)),
                    )
                }
            };

            {
                let mut guard = state.lock().unwrap();
                *guard = guard.settle(seq, result);
            }

            match completion {
                Ok(found) => {
                    info!("check {} completed: found={}", seq, found);
                    event_bus.emit(CheckCompleted::new(seq, found));
                }
                Err(reason) => event_bus.emit(CheckFailed::new(seq, reason)),
            }
        });

        let mut handle = self.task_handle.lock().unwrap();
        *handle = Some(task);
    }
}
