use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// What the browser reported for one element on one intersection callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub ratio: f64,
    pub intersecting: bool,
}

// Opens a hair before the exact threshold. Browsers report the ratio that
// triggered a crossing rounded, e.g. 0.14999 for a 0.15 threshold, and send
// nothing more until the next crossing, so an exact comparison can miss it.
const RATIO_TOLERANCE: f64 = 1e-3;

fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_finite() {
        threshold.clamp(0.0, 1.0)
    } else {
        config::DEFAULT_REVEAL_THRESHOLD
    }
}

/// Whether one intersection sample counts as "in view" at `threshold`.
/// Threshold 0 accepts any intersection.
pub fn meets_threshold(threshold: f64, sample: IntersectionSample) -> bool {
    if !sample.intersecting {
        return false;
    }
    threshold == 0.0 || sample.ratio + RATIO_TOLERANCE >= threshold
}

/// One-way visibility flag. Flips to true the first time the visible fraction
/// reaches the threshold and never flips back.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityLatch {
    threshold: f64,
    visible: bool,
}

impl VisibilityLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: clamp_threshold(threshold),
            visible: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn observe(&mut self, sample: IntersectionSample) -> bool {
        if !self.visible && meets_threshold(self.threshold, sample) {
            self.visible = true;
        }
        self.visible
    }
}

impl Default for VisibilityLatch {
    fn default() -> Self {
        Self::new(config::DEFAULT_REVEAL_THRESHOLD)
    }
}

/// Entrance animation flavours, each backed by a CSS class in the page stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    Up,
    Scale,
    Left,
    Right,
}

impl Reveal {
    pub fn class(self) -> &'static str {
        match self {
            Reveal::Up => "scroll-animate",
            Reveal::Scale => "scroll-animate-scale",
            Reveal::Left => "scroll-animate-left",
            Reveal::Right => "scroll-animate-right",
        }
    }
}

pub const MAX_STAGGER: usize = 6;

/// Classes for a revealable element. `stagger` is 1-based and capped at the
/// number of stagger steps the stylesheet defines.
pub fn reveal_classes(reveal: Reveal, visible: bool, stagger: Option<usize>) -> Classes {
    classes!(
        reveal.class(),
        stagger
            .filter(|step| *step > 0)
            .map(|step| format!("stagger-{}", step.min(MAX_STAGGER))),
        visible.then_some("animate-in")
    )
}

struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observation {
    fn start<F>(element: &Element, threshold: f64, mut on_sample: F) -> Option<Self>
    where
        F: FnMut(IntersectionSample, &IntersectionObserver) + 'static,
    {
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let sample = IntersectionSample {
                        ratio: entry.intersection_ratio(),
                        intersecting: entry.is_intersecting(),
                    };
                    on_sample(sample, &observer);
                }
            },
        );

        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };
        observer.observe(element);
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Attach the returned ref to an element; the flag turns true once the element
/// is at least `threshold` visible and stays true for the rest of the mount.
/// An unattached ref leaves the flag false.
#[hook]
pub fn use_scroll_animation(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |threshold| {
                let observation = if *visible {
                    None
                } else {
                    let mut latch = VisibilityLatch::new(*threshold);
                    node.cast::<Element>().and_then(|element| {
                        Observation::start(&element, latch.threshold(), move |sample, observer| {
                            if !latch.is_visible() && latch.observe(sample) {
                                visible.set(true);
                                // Single-shot: nothing left to watch for.
                                observer.disconnect();
                            }
                        })
                    })
                };
                move || drop(observation)
            },
            threshold,
        );
    }

    (node, *visible)
}

/// Two-way counterpart of [`use_scroll_animation`] for an element the caller
/// already holds a ref to: true while it is at least `threshold` visible.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |(node, threshold)| {
                let threshold = clamp_threshold(*threshold);
                let observation = node.cast::<Element>().and_then(|element| {
                    Observation::start(&element, threshold, move |sample, _| {
                        in_view.set(meets_threshold(threshold, sample));
                    })
                });
                move || drop(observation)
            },
            (node, threshold),
        );
    }

    *in_view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(ratio: f64) -> IntersectionSample {
        IntersectionSample {
            ratio,
            intersecting: ratio > 0.0,
        }
    }

    #[test]
    fn latch_stays_closed_below_threshold() {
        let mut latch = VisibilityLatch::new(0.15);
        assert!(!latch.observe(seen(0.0)));
        assert!(!latch.observe(seen(0.05)));
        assert!(!latch.observe(seen(0.1)));
        assert!(!latch.is_visible());
    }

    #[test]
    fn latch_is_monotonic_once_open() {
        let mut latch = VisibilityLatch::new(0.15);
        assert!(latch.observe(seen(0.2)));
        for ratio in [0.0, 0.01, 0.5, 0.0, 1.0, 0.0] {
            assert!(latch.observe(seen(ratio)));
        }
    }

    #[test]
    fn latch_tolerates_rounding_at_the_crossing() {
        let mut latch = VisibilityLatch::new(0.15);
        assert!(latch.observe(seen(0.1499)));
    }

    #[test]
    fn tolerance_covers_rounding_only() {
        let mut latch = VisibilityLatch::new(0.15);
        assert!(!latch.observe(seen(0.148)));
        assert!(!meets_threshold(0.15, seen(0.148)));
        assert!(meets_threshold(0.15, seen(0.15)));
    }

    #[test]
    fn in_view_follows_the_element_both_ways() {
        let samples = [0.0, 0.2, 0.6, 0.1, 0.0, 0.3];
        let in_view: Vec<bool> = samples
            .iter()
            .map(|ratio| meets_threshold(0.15, seen(*ratio)))
            .collect();
        assert_eq!(in_view, [false, true, true, false, false, true]);
    }

    #[test]
    fn zero_threshold_opens_on_any_intersection() {
        let mut latch = VisibilityLatch::new(0.0);
        assert!(!latch.observe(IntersectionSample {
            ratio: 0.0,
            intersecting: false,
        }));
        assert!(latch.observe(IntersectionSample {
            ratio: 0.0,
            intersecting: true,
        }));
    }

    #[test]
    fn non_intersecting_entries_never_open() {
        let mut latch = VisibilityLatch::new(0.1);
        assert!(!latch.observe(IntersectionSample {
            ratio: 0.9,
            intersecting: false,
        }));
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(VisibilityLatch::new(4.0).threshold(), 1.0);
        assert_eq!(VisibilityLatch::new(-1.0).threshold(), 0.0);
        assert_eq!(
            VisibilityLatch::new(f64::NAN).threshold(),
            config::DEFAULT_REVEAL_THRESHOLD
        );
    }

    #[test]
    fn reveal_classes_follow_state() {
        assert_eq!(
            reveal_classes(Reveal::Scale, false, None).to_string(),
            "scroll-animate-scale"
        );
        assert_eq!(
            reveal_classes(Reveal::Up, true, Some(2)).to_string(),
            "scroll-animate stagger-2 animate-in"
        );
        assert_eq!(
            reveal_classes(Reveal::Left, true, Some(11)).to_string(),
            "scroll-animate-left stagger-6 animate-in"
        );
        assert_eq!(
            reveal_classes(Reveal::Right, false, Some(0)).to_string(),
            "scroll-animate-right"
        );
    }
}
