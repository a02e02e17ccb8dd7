//! Session state and the in-flight guard.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::AiError;

/// Whether a request is outstanding on the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingReply,
}

/// Guard that moves the session back to `Idle` on drop, ensuring the flag
/// is always released even if the future is cancelled or an early return
/// occurs.
pub(crate) struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    /// `Idle -> AwaitingReply`. Returns `Busy` if a request is already out.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Result<Self, AiError> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(AiError::Busy);
        }
        Ok(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

pub(crate) fn state_of(flag: &AtomicBool) -> SessionState {
    if flag.load(Ordering::Acquire) {
        SessionState::AwaitingReply
    } else {
        SessionState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_is_rejected_until_release() {
        let flag = AtomicBool::new(false);
        let guard = BusyGuard::acquire(&flag).unwrap();
        assert_eq!(state_of(&flag), SessionState::AwaitingReply);
        assert!(matches!(BusyGuard::acquire(&flag), Err(AiError::Busy)));

        drop(guard);
        assert_eq!(state_of(&flag), SessionState::Idle);
        assert!(BusyGuard::acquire(&flag).is_ok());
    }
}
