use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    Up,
    // Pages load at the top, so the first movement is almost always downwards.
    #[default]
    Down,
}

impl ScrollDirection {
    /// +1 for down, -1 for up.
    pub fn sign(self) -> f64 {
        match self {
            ScrollDirection::Up => -1.0,
            ScrollDirection::Down => 1.0,
        }
    }
}

/// Classifies vertical movement from consecutive scroll offsets.
///
/// There is no hysteresis: a one pixel jitter flips the direction. A sample
/// equal to the previous one carries no signal and keeps the last direction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectionTracker {
    previous: Option<f64>,
    direction: ScrollDirection,
}

impl DirectionTracker {
    pub fn new(initial_offset: f64) -> Self {
        Self {
            previous: Some(initial_offset),
            direction: ScrollDirection::default(),
        }
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn sample(&mut self, offset: f64) -> ScrollDirection {
        if let Some(previous) = self.previous.replace(offset) {
            let delta = offset - previous;
            if delta > 0.0 {
                self.direction = ScrollDirection::Down;
            } else if delta < 0.0 {
                self.direction = ScrollDirection::Up;
            }
        }
        self.direction
    }
}

/// Vertical entrance offset for an element that has not revealed yet: it waits
/// below the fold when scrolling down and above it when scrolling up.
pub fn entrance_offset(direction: ScrollDirection, visible: bool, magnitude: f64) -> f64 {
    if visible {
        0.0
    } else {
        direction.sign() * magnitude
    }
}

/// Horizontal entrance offset for alternating two-column rows. Content and
/// artwork come in from opposite sides, and the sides swap with the scroll
/// direction and with the row parity.
pub fn side_offset(
    direction: ScrollDirection,
    visible: bool,
    is_content: bool,
    is_even: bool,
    magnitude: f64,
) -> f64 {
    if visible {
        return 0.0;
    }
    let mut side = if is_content { -1.0 } else { 1.0 };
    if !is_even {
        side = -side;
    }
    if direction == ScrollDirection::Up {
        side = -side;
    }
    side * magnitude
}

/// Tracks the window's scroll direction for as long as the component is mounted.
#[hook]
pub fn use_scroll_direction() -> ScrollDirection {
    let direction = use_state(ScrollDirection::default);

    {
        let direction = direction.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let initial = window.scroll_y().unwrap_or(0.0);
                    let mut tracker = DirectionTracker::new(initial);
                    let callback = Closure::<dyn FnMut()>::new({
                        let direction = direction.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    let before = tracker.direction();
                                    let next = tracker.sample(scroll_y);
                                    if next != before {
                                        direction.set(next);
                                    }
                                }
                            }
                        }
                    });
                    match window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        Ok(()) => Box::new(move || {
                            if let Some(win) = web_sys::window() {
                                let _ = win.remove_event_listener_with_callback(
                                    "scroll",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        }),
                        Err(e) => {
                            log::warn!("Could not listen for scroll events: {:?}", e);
                            Box::new(|| ())
                        }
                    }
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    *direction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_down() {
        assert_eq!(DirectionTracker::default().direction(), ScrollDirection::Down);
    }

    #[test]
    fn first_sample_without_history_keeps_default() {
        let mut tracker = DirectionTracker::default();
        assert_eq!(tracker.sample(500.0), ScrollDirection::Down);
        assert_eq!(tracker.sample(400.0), ScrollDirection::Up);
    }

    #[test]
    fn classifies_signed_delta() {
        let mut tracker = DirectionTracker::new(0.0);
        assert_eq!(tracker.sample(10.0), ScrollDirection::Down);
        assert_eq!(tracker.sample(9.0), ScrollDirection::Up);
        assert_eq!(tracker.sample(9.5), ScrollDirection::Down);
        assert_eq!(tracker.sample(0.0), ScrollDirection::Up);
    }

    #[test]
    fn equal_samples_hold_previous_direction() {
        let mut tracker = DirectionTracker::new(300.0);
        assert_eq!(tracker.sample(200.0), ScrollDirection::Up);
        assert_eq!(tracker.sample(200.0), ScrollDirection::Up);
        assert_eq!(tracker.sample(200.0), ScrollDirection::Up);
        assert_eq!(tracker.sample(250.0), ScrollDirection::Down);
        assert_eq!(tracker.sample(250.0), ScrollDirection::Down);
    }

    #[test]
    fn entrance_offset_follows_direction() {
        assert_eq!(entrance_offset(ScrollDirection::Down, false, 80.0), 80.0);
        assert_eq!(entrance_offset(ScrollDirection::Up, false, 80.0), -80.0);
        assert_eq!(entrance_offset(ScrollDirection::Up, true, 80.0), 0.0);
    }

    #[test]
    fn side_offset_alternates_rows() {
        use ScrollDirection::*;
        assert_eq!(side_offset(Down, false, true, true, 60.0), -60.0);
        assert_eq!(side_offset(Down, false, false, true, 60.0), 60.0);
        assert_eq!(side_offset(Down, false, true, false, 60.0), 60.0);
        assert_eq!(side_offset(Down, false, false, false, 60.0), -60.0);
        assert_eq!(side_offset(Up, false, true, true, 60.0), 60.0);
        assert_eq!(side_offset(Up, false, false, true, 60.0), -60.0);
        assert_eq!(side_offset(Up, false, true, false, 60.0), -60.0);
        assert_eq!(side_offset(Up, false, false, false, 60.0), 60.0);
        assert_eq!(side_offset(Up, true, false, false, 60.0), 0.0);
    }
}
