/// Single-slot pending flag for one event source.
///
/// Scroll and resize events can fire many times between two paints. The gate
/// lets only the first of them schedule an animation frame; the rest are
/// absorbed into that frame's recomputation. The frame callback calls
/// [`FrameGate::begin_frame`] before doing its work, so an event arriving
/// while the work runs schedules exactly one follow-up frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    pub fn begin_frame(&mut self) {
        self.pending = false;
    }

    /// Drops a scheduled frame that will never run (teardown).
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_of_events_schedules_one_frame() {
        let mut gate = FrameGate::new();
        let scheduled = (0..10).filter(|_| gate.request()).count();
        assert_eq!(scheduled, 1);
        assert!(gate.is_pending());
    }

    #[test]
    fn event_during_frame_schedules_exactly_one_follow_up() {
        let mut gate = FrameGate::new();
        assert!(gate.request());
        gate.begin_frame();
        assert!(gate.request());
        assert!(!gate.request());
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut gate = FrameGate::new();
        gate.cancel();
        assert!(gate.request());
        gate.cancel();
        gate.cancel();
        assert!(!gate.is_pending());
        assert!(gate.request());
    }
}
