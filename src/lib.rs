//! Ikigai Compass - terminal quiz with AI-generated life-purpose analysis.
//!
//! Walks a user through nine free-text questions, submits the completed
//! answer set to the Gemini API, enforces a strict response contract on the
//! reply, and renders the resulting Ikigai analysis. Transient and
//! badly-shaped replies are retried with exponential backoff.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
