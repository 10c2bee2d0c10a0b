//! Startup Compass - Adaptive Assessment & Maturity Scoring Engine
//!
//! This crate implements the assessment core of a startup coaching product:
//! typed questionnaire validation, answer-state merging, a durable step
//! wizard, diff-based submission, and weighted per-category maturity scoring.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
