use crate::interaction::SchedulerState;

use super::FrameRequestId;

/// Tracks the single outstanding frame request of the inertia loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) struct FrameScheduler {
    pending: Option<FrameRequestId>,
}

impl FrameScheduler {
    #[must_use]
    pub(super) fn state(self) -> SchedulerState {
        if self.pending.is_some() {
            SchedulerState::Running
        } else {
            SchedulerState::Idle
        }
    }

    #[must_use]
    pub(super) fn is_running(self) -> bool {
        self.pending.is_some()
    }

    pub(super) fn mark_requested(&mut self, id: FrameRequestId) {
        self.pending = Some(id);
    }

    /// Called from the frame callback before stepping.
    pub(super) fn mark_fired(&mut self) {
        self.pending = None;
    }

    /// Takes the pending request so the caller can cancel it.
    pub(super) fn take_pending(&mut self) -> Option<FrameRequestId> {
        self.pending.take()
    }
}
