// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod check;
pub mod form;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Form Domain
pub use form::{validate_form, FormField, FormInput, ValidationErrors};

// Check Domain
pub use check::{CheckResult, CheckStatus, CheckTicket, CheckerState};
