//! Master password gate and session cache.
//!
//! This module provides:
//! - Enrollment and verification against the on-disk master record (`gate`)
//! - The time-bounded in-memory unlock cache (`session`)

pub mod gate;
pub mod session;

pub use gate::{MasterCredentialRecord, MasterGate};
pub use session::{Clock, SessionCache, SystemClock, SESSION_TTL};
