// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// VALIDATION EVENTS
// ============================================================================

/// Emitted when a submission is rejected by validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    /// Names of the invalid fields, e.g. "url", "episodeId"
    pub fields: Vec<String>,
}

impl ValidationFailed {
    pub fn new(fields: Vec<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            fields,
        }
    }
}

impl DomainEvent for ValidationFailed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ValidationFailed" }
}

// ============================================================================
// CHECK LIFECYCLE EVENTS
// ============================================================================

/// Emitted when a thumbnail check starts (input passed validation)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckStarted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub seq: u64,
    pub url: String,
    pub episode_id: String,
}

impl CheckStarted {
    pub fn new(seq: u64, url: String, episode_id: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            seq,
            url,
            episode_id,
        }
    }
}

impl DomainEvent for CheckStarted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CheckStarted" }
}

/// Emitted when the collaborator resolved and the outcome was stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckCompleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub seq: u64,
    /// The collaborator's "found" signal
    pub found: bool,
}

impl CheckCompleted {
    pub fn new(seq: u64, found: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            seq,
            found,
        }
    }
}

impl DomainEvent for CheckCompleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CheckCompleted" }
}

/// Emitted when a check attempt could not complete (collaborator error or
/// timeout). The attempt still terminates with a stored, user-visible result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub seq: u64,
    pub reason: String,
}

impl CheckFailed {
    pub fn new(seq: u64, reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            seq,
            reason,
        }
    }
}

impl DomainEvent for CheckFailed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CheckFailed" }
}
