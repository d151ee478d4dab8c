//! Domain layer - pure types and logic, no I/O.

pub mod analysis;
pub mod foundation;
pub mod questionnaire;
