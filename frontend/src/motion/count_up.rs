pub type Easing = fn(f64) -> f64;

pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUpOptions {
    pub start: f64,
    pub end: f64,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
}

impl Default for CountUpOptions {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 100.0,
            duration_ms: 2000.0,
            delay_ms: 0.0,
            easing: ease_out_quad,
        }
    }
}

impl CountUpOptions {
    /// Animation progress in `[0, 1]` after `elapsed_ms` since the first frame.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        let running = elapsed_ms - self.delay_ms;
        if running < 0.0 {
            return 0.0;
        }
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (running / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, progress: f64) -> f64 {
        if progress >= 1.0 {
            return self.end;
        }
        let eased = (self.easing)(progress.clamp(0.0, 1.0));
        let value = (self.start + (self.end - self.start) * eased).round();
        value.clamp(self.start.min(self.end), self.start.max(self.end))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUpState {
    pub count: f64,
    pub is_animating: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StartOutcome {
    /// A run is already in flight.
    AlreadyRunning,
    /// Reduced motion: the value jumped straight to `end`.
    Jumped,
    /// Frames should be requested for this run generation.
    Scheduled(u64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// The frame belongs to a run that was reset or replaced.
    Stale,
    Running(f64),
    Finished(f64),
}

/// Count-up controller. Each run is tagged with a generation so that a frame
/// scheduled before `reset` cannot write into the next run.
#[derive(Debug, Clone)]
pub struct CountUp {
    options: CountUpOptions,
    state: CountUpState,
    generation: u64,
    started_at: Option<f64>,
}

impl CountUp {
    pub fn new(options: CountUpOptions) -> Self {
        Self {
            state: CountUpState {
                count: options.start,
                is_animating: false,
            },
            options,
            generation: 0,
            started_at: None,
        }
    }

    pub fn state(&self) -> CountUpState {
        self.state
    }

    pub fn options(&self) -> &CountUpOptions {
        &self.options
    }

    pub fn start(&mut self, reduced_motion: bool) -> StartOutcome {
        if self.state.is_animating {
            return StartOutcome::AlreadyRunning;
        }
        self.generation += 1;
        self.started_at = None;
        if reduced_motion {
            self.state = CountUpState {
                count: self.options.end,
                is_animating: false,
            };
            return StartOutcome::Jumped;
        }
        self.state.is_animating = true;
        StartOutcome::Scheduled(self.generation)
    }

    pub fn frame(&mut self, generation: u64, timestamp_ms: f64) -> FrameOutcome {
        if generation != self.generation || !self.state.is_animating {
            return FrameOutcome::Stale;
        }
        let started_at = *self.started_at.get_or_insert(timestamp_ms);
        let progress = self.options.progress(timestamp_ms - started_at);
        let value = self.options.value_at(progress);
        self.state.count = value;
        if progress >= 1.0 {
            self.state.is_animating = false;
            FrameOutcome::Finished(value)
        } else {
            FrameOutcome::Running(value)
        }
    }

    pub fn reset(&mut self) {
        self.generation += 1;
        self.started_at = None;
        self.state = CountUpState {
            count: self.options.start,
            is_animating: false,
        };
    }

    /// Swaps the options of an idle controller, keeping an in-flight run intact.
    pub fn set_options(&mut self, options: CountUpOptions) {
        if self.state.is_animating {
            return;
        }
        if self.state.count == self.options.start {
            self.state.count = options.start;
        }
        self.options = options;
    }
}
