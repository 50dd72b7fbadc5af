//! Busy state of the generate page.
//!
//! The only transition allowed while a request is in flight is back to
//! [`SubmissionState::Idle`], and that one is performed by dropping the
//! [`BusyGuard`] that entered [`SubmissionState::Submitting`].

use leptos::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// Holder of the submission state.
pub trait BusyFlag {
    fn state(&self) -> SubmissionState;
    fn set_state(&self, state: SubmissionState);

    fn is_busy(&self) -> bool {
        self.state() == SubmissionState::Submitting
    }
}

impl BusyFlag for RwSignal<SubmissionState> {
    fn state(&self) -> SubmissionState {
        self.get_untracked()
    }

    fn set_state(&self, state: SubmissionState) {
        self.set(state);
    }
}

impl BusyFlag for Rc<Cell<SubmissionState>> {
    fn state(&self) -> SubmissionState {
        (**self).get()
    }

    fn set_state(&self, state: SubmissionState) {
        (**self).set(state);
    }
}

/// Holds the flag in `Submitting` for as long as it lives.
#[must_use = "dropping the guard immediately returns the flag to Idle"]
pub struct BusyGuard<'a, F: BusyFlag + ?Sized> {
    flag: &'a F,
}

impl<'a, F: BusyFlag + ?Sized> BusyGuard<'a, F> {
    /// `Idle -> Submitting`. Returns `None` if a submission is already running.
    pub fn try_acquire(flag: &'a F) -> Option<Self> {
        if flag.is_busy() {
            return None;
        }
        flag.set_state(SubmissionState::Submitting);
        Some(Self { flag })
    }
}

impl<F: BusyFlag + ?Sized> Drop for BusyGuard<'_, F> {
    fn drop(&mut self) {
        self.flag.set_state(SubmissionState::Idle);
    }
}
