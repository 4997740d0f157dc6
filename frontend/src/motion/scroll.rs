pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;
pub const MIN_OPACITY: f64 = 0.6;
pub const MIN_SCALE: f64 = 0.98;

/// One reading of the window's scroll position and size, in CSS pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ViewportSample {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeScale {
    pub opacity: f64,
    pub scale: f64,
}

impl FadeScale {
    pub const NEUTRAL: FadeScale = FadeScale {
        opacity: 1.0,
        scale: 1.0,
    };

    /// Hero fade: full strength at the top, bottoming out once the page has
    /// scrolled 80% of a viewport.
    pub fn at(scroll_y: f64, viewport_height: f64) -> Self {
        let fade_point = 0.8 * viewport_height;
        if fade_point <= 0.0 {
            return Self::NEUTRAL;
        }
        let ratio = scroll_y.max(0.0) / fade_point;
        Self {
            opacity: (1.0 - ratio).max(MIN_OPACITY),
            scale: (1.0 - 0.02 * ratio).max(MIN_SCALE),
        }
    }

    /// Reduced motion pins the hero to its neutral look.
    pub fn for_sample(sample: ViewportSample, reduced_motion: bool) -> Self {
        if reduced_motion {
            Self::NEUTRAL
        } else {
            Self::at(sample.scroll_y, sample.viewport_height)
        }
    }

    pub fn to_style(self) -> String {
        format!("opacity: {}; transform: scale({});", self.opacity, self.scale)
    }
}

impl Default for FadeScale {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// How far down the document the reader is, 0 to 100.
pub fn scroll_progress(sample: ViewportSample) -> f64 {
    let scrollable = (sample.document_height - sample.viewport_height).max(0.0);
    if scrollable <= 0.0 {
        return 0.0;
    }
    (100.0 * sample.scroll_y / scrollable).clamp(0.0, 100.0)
}

pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

pub fn parallax_style(offset: f64) -> String {
    format!("transform: translate3d(0, {}px, 0);", offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_reading_is_equal_to_the_last() {
        let sample = ViewportSample {
            scroll_y: 240.0,
            viewport_height: 900.0,
            document_height: 3_000.0,
        };
        let again = sample;
        assert_eq!(sample, again);
        assert_ne!(
            sample,
            ViewportSample {
                scroll_y: 241.0,
                ..sample
            }
        );
    }

    #[test]
    fn unscrollable_document_has_no_progress() {
        for scroll_y in [0.0, 10.0, 5_000.0] {
            let sample = ViewportSample {
                scroll_y,
                viewport_height: 900.0,
                document_height: 900.0,
            };
            assert_eq!(scroll_progress(sample), 0.0);
        }
        let short = ViewportSample {
            scroll_y: 30.0,
            viewport_height: 900.0,
            document_height: 400.0,
        };
        assert_eq!(scroll_progress(short), 0.0);
    }

    #[test]
    fn progress_is_linear_and_clamped() {
        let mut sample = ViewportSample {
            scroll_y: 550.0,
            viewport_height: 800.0,
            document_height: 1_900.0,
        };
        assert_eq!(scroll_progress(sample), 50.0);
        sample.scroll_y = 1_100.0;
        assert_eq!(scroll_progress(sample), 100.0);
        // overscroll bounce on touch devices
        sample.scroll_y = 1_300.0;
        assert_eq!(scroll_progress(sample), 100.0);
        sample.scroll_y = -40.0;
        assert_eq!(scroll_progress(sample), 0.0);
    }

    #[test]
    fn parallax_scales_scroll() {
        assert_eq!(parallax_offset(300.0, DEFAULT_PARALLAX_SPEED), 150.0);
        assert_eq!(parallax_offset(300.0, -0.2), -60.0);
        assert_eq!(parallax_style(12.5), "transform: translate3d(0, 12.5px, 0);");
    }

    #[test]
    fn fade_floors_at_minimums() {
        assert_eq!(FadeScale::at(0.0, 1_000.0), FadeScale::NEUTRAL);

        let halfway = FadeScale::at(400.0, 1_000.0);
        assert!((halfway.opacity - 0.6).abs() < 1e-9);
        assert!((halfway.scale - 0.99).abs() < 1e-9);

        let far = FadeScale::at(10_000.0, 1_000.0);
        assert_eq!(far.opacity, MIN_OPACITY);
        assert_eq!(far.scale, MIN_SCALE);
    }

    #[test]
    fn zero_height_viewport_stays_neutral() {
        assert_eq!(FadeScale::at(120.0, 0.0), FadeScale::NEUTRAL);
    }

    #[test]
    fn reduced_motion_pins_fade() {
        let sample = ViewportSample {
            scroll_y: 700.0,
            viewport_height: 800.0,
            document_height: 3_000.0,
        };
        assert_eq!(FadeScale::for_sample(sample, true), FadeScale::NEUTRAL);
        let animated = FadeScale::for_sample(sample, false);
        assert_eq!(animated.opacity, MIN_OPACITY);
        assert!(animated.scale < 1.0);
    }
}
