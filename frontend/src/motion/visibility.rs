pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.5;

/// Browsers report the crossing reading slightly under the configured
/// threshold, e.g. 0.4999 for 0.5.
const RATIO_TOLERANCE: f64 = 0.01;

/// Fires once, the first time an element is visible enough.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneShotTrigger {
    threshold: f64,
    fired: bool,
}

impl OneShotTrigger {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            fired: false,
        }
    }

    /// Feeds one intersection reading; true only on the firing reading.
    pub fn observe(&mut self, is_intersecting: bool, visible_ratio: f64) -> bool {
        if self.fired || !is_intersecting || visible_ratio + RATIO_TOLERANCE < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for OneShotTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBILITY_THRESHOLD)
    }
}
