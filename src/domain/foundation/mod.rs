//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary and state machine trait used by the
//! questionnaire and analysis modules.

mod errors;
mod state_machine;

pub use errors::DomainError;
pub use state_machine::StateMachine;
