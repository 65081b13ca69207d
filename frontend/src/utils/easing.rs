/// Cubic ease-in-out. Accelerates through the first half, decelerates through the second.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    pub position: f64,
    pub finished: bool,
}

/// One smooth-scroll run. Start and distance are captured when the run is created,
/// the clock starts on the first frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimation {
    start: f64,
    target: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl ScrollAnimation {
    pub fn new(start: f64, target: f64, duration_ms: f64) -> Self {
        Self {
            start,
            target,
            duration_ms,
            started_at: None,
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn distance(&self) -> f64 {
        self.target - self.start
    }

    /// Progress in [0, 1] at `now_ms`. Stamps the start time on first use.
    pub fn progress(&mut self, now_ms: f64) -> f64 {
        let started_at = *self.started_at.get_or_insert(now_ms);
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - started_at) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn frame(&mut self, now_ms: f64) -> ScrollFrame {
        let progress = self.progress(now_ms);
        if progress >= 1.0 {
            return ScrollFrame {
                position: self.target,
                finished: true,
            };
        }
        ScrollFrame {
            position: self.start + self.distance() * ease_in_out_cubic(progress),
            finished: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn easing_hits_anchor_points() {
        assert!(approx(ease_in_out_cubic(0.0), 0.0));
        assert!(approx(ease_in_out_cubic(0.25), 0.0625));
        assert!(approx(ease_in_out_cubic(0.5), 0.5));
        assert!(approx(ease_in_out_cubic(0.75), 0.9375));
        assert!(approx(ease_in_out_cubic(1.0), 1.0));
    }

    #[test]
    fn easing_is_monotonic_and_clamped() {
        let mut last = ease_in_out_cubic(0.0);
        for step in 1..=100 {
            let value = ease_in_out_cubic(step as f64 / 100.0);
            assert!(value >= last);
            last = value;
        }
        assert_eq!(ease_in_out_cubic(-3.0), 0.0);
        assert_eq!(ease_in_out_cubic(7.0), 1.0);
    }

    #[test]
    fn animation_lands_exactly_on_target() {
        let mut animation = ScrollAnimation::new(0.0, 1920.0, 1000.0);
        let mut last = 0.0;
        let mut frames = 0;
        let mut now = 5_000.0;
        loop {
            let frame = animation.frame(now);
            assert!(frame.position >= last, "trajectory went backwards");
            last = frame.position;
            frames += 1;
            if frame.finished {
                break;
            }
            now += 16.0;
        }
        assert_eq!(last, 1920.0);
        assert!(frames > 60);
    }

    #[test]
    fn animation_scrolls_upwards_too() {
        let mut animation = ScrollAnimation::new(3000.0, 420.0, 800.0);
        assert_eq!(animation.frame(0.0).position, 3000.0);
        let mid = animation.frame(400.0);
        assert!(approx(mid.position, 3000.0 - 2580.0 * 0.5));
        let end = animation.frame(900.0);
        assert!(end.finished);
        assert_eq!(end.position, 420.0);
    }

    #[test]
    fn zero_duration_finishes_on_first_frame() {
        let mut animation = ScrollAnimation::new(10.0, 500.0, 0.0);
        let frame = animation.frame(123.0);
        assert!(frame.finished);
        assert_eq!(frame.position, 500.0);
    }
}
