//! Seva Setu: a stateless decision aid that maps a citizen's questionnaire
//! answers to per-scheme eligibility verdicts with bilingual justification.

pub mod config;
pub mod eligibility;
pub mod error;
pub mod telemetry;
