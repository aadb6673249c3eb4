//! Test infrastructure for the network mapping validator
//!
//! Provides:
//! - NIC and mapping fixtures modelled on a typical source VM
//! - A stub attachment definition provider with canned responses
//! - Assertion helpers for failure sequences

pub mod fixtures;
mod stub;
mod verification;

pub use fixtures::*;
pub use stub::StubProvider;
pub use verification::*;
