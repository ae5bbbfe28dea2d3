//! In-memory cache of the last verified master password.
//!
//! After a successful setup or login the caller may remember the master
//! password here, so that further vault operations within the next five
//! minutes do not need to ask for it again.  Nothing in this module ever
//! touches the disk.
//!
//! Time comes from a `Clock` supplied at construction so tests can drive
//! the TTL deterministically.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use crate::crypto::MasterPassword;

/// How long a remembered unlock stays valid.
pub const SESSION_TTL: Duration = Duration::from_secs(5 * 60);

/// Source of "now" in milliseconds since the Unix epoch.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

struct SessionKey {
    master_password: MasterPassword,
    verified_at_epoch_millis: i64,
}

/// Holds at most one remembered unlock.
pub struct SessionCache<C: Clock = SystemClock> {
    clock: C,
    ttl_millis: i64,
    slot: Mutex<Option<SessionKey>>,
}

impl SessionCache<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for SessionCache<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SessionCache<C> {
    /// Cache driven by `clock`, using the standard five minute TTL.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            ttl_millis: i64::try_from(SESSION_TTL.as_millis()).unwrap_or(i64::MAX),
            slot: Mutex::new(None),
        }
    }

    /// Remember `password` as verified at `now` (epoch millis), replacing
    /// any previous entry.
    pub fn remember_at(&self, password: &MasterPassword, now: i64) {
        *self.lock_slot() = Some(SessionKey {
            master_password: password.clone(),
            verified_at_epoch_millis: now,
        });
        tracing::debug!("session unlock remembered");
    }

    /// Return the cached password iff `now - verified_at <= TTL`.
    pub fn try_reuse_at(&self, now: i64) -> Option<MasterPassword> {
        let slot = self.lock_slot();
        let key = slot.as_ref()?;
        let age = now.saturating_sub(key.verified_at_epoch_millis);
        if age <= self.ttl_millis {
            Some(key.master_password.clone())
        } else {
            tracing::debug!(age_ms = age, "session unlock expired");
            None
        }
    }

    /// `remember_at` using the cache's clock.
    pub fn remember(&self, password: &MasterPassword) {
        self.remember_at(password, self.clock.now_millis());
    }

    /// `try_reuse_at` using the cache's clock.
    pub fn try_reuse(&self) -> Option<MasterPassword> {
        self.try_reuse_at(self.clock.now_millis())
    }

    /// Drop the remembered unlock immediately.
    pub fn forget(&self) {
        if self.lock_slot().take().is_some() {
            tracing::debug!("session unlock forgotten");
        }
    }

    // A panic while holding the lock cannot leave the slot half-written,
    // so a poisoned mutex is still safe to use.
    fn lock_slot(&self) -> MutexGuard<'_, Option<SessionKey>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
