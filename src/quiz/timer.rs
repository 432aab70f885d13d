//! One-shot countdown used for the quiz auto-advance.

/// A pending delayed action. Cancelling discards it; it never fires afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScheduledAdvance {
    remaining: Option<f32>,
}

impl ScheduledAdvance {
    /// Arm the countdown, replacing anything already pending.
    pub fn schedule(&mut self, delay_secs: f32) {
        self.remaining = Some(delay_secs.max(0.0));
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn remaining(&self) -> Option<f32> {
        self.remaining
    }

    /// Count down by `dt`. Returns true exactly once, on the tick the delay expires.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(remaining) = self.remaining.as_mut() else {
            return false;
        };
        *remaining -= dt.max(0.0);
        if *remaining <= 0.0 {
            self.remaining = None;
            true
        } else {
            false
        }
    }
}
