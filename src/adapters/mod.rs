//! Adapters - implementations of the ports.
//!
//! Only the deterministic in-memory backend lives in this crate; real
//! persistence is an external collaborator reached through the same ports.

pub mod memory;
