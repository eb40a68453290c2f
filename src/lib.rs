// src/lib.rs
// ThumbCheck - Episode thumbnail availability checker core
//
// Architecture:
// - Domain-centric: validation and the check state machine are pure
// - Event-driven: the presentation layer observes transitions via events
// - Explicit: state changes only through discrete transition functions
// - The probe collaborator is the single asynchronous suspension point

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod application;
pub mod domain;
pub mod error;
pub mod events;
pub mod integrations;
pub mod services;

// ============================================================================
// PUBLIC API - Domain (validation + state machine)
// ============================================================================

pub use domain::{
    validate_form,
    CheckResult,
    CheckStatus,
    CheckTicket,
    CheckerState,
    FormField,
    FormInput,
    ValidationErrors,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    CheckCompleted,
    CheckFailed,
    CheckStarted,
    DomainEvent,
    EventBus,
    ValidationFailed,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{CheckServiceConfig, SubmitOutcome, ThumbnailCheckService};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{ProbeError, SimulatedThumbnailProbe, ThumbnailProbe};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, CheckResultDto, CheckerSnapshot};
