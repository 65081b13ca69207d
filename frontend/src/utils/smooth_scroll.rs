use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions, Window};
use yew::prelude::*;

use crate::config;
use crate::utils::easing::ScrollAnimation;
use crate::utils::error::{self, ScrollError, ScrollResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScrollOptions {
    /// Pixels left free above the section for the fixed header.
    pub offset: f64,
    pub duration_ms: f64,
}

impl Default for SmoothScrollOptions {
    fn default() -> Self {
        Self {
            offset: config::get_header_offset(),
            duration_ms: config::get_scroll_duration_ms(),
        }
    }
}

/// Owner of the "current animation" for one scroller. Claiming a new token
/// invalidates every token handed out before it.
#[derive(Debug, Clone, Default)]
pub struct AnimationSlot {
    generation: Rc<Cell<u64>>,
}

// Identity, not value: clones share one slot, separate slots never compare equal.
impl PartialEq for AnimationSlot {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.generation, &other.generation)
    }
}

impl AnimationSlot {
    pub fn claim(&self) -> AnimationToken {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        AnimationToken {
            generation,
            slot: self.generation.clone(),
        }
    }

    pub fn cancel(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

#[derive(Debug, Clone)]
pub struct AnimationToken {
    generation: u64,
    slot: Rc<Cell<u64>>,
}

impl AnimationToken {
    pub fn is_live(&self) -> bool {
        self.slot.get() == self.generation
    }
}

/// Document-relative scroll offset that puts an element `offset` pixels below
/// the top of the viewport. `rect_top` is viewport-relative.
pub fn target_offset(rect_top: f64, page_y: f64, offset: f64) -> f64 {
    rect_top + page_y - offset
}

/// Eased scrolling to in-page sections. At most one section animation runs
/// per scroller; starting another one supersedes it. Clones share the running
/// animation, so one scroller handed to every component keeps the window
/// offset to a single writer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmoothScroller {
    options: SmoothScrollOptions,
    slot: AnimationSlot,
}

impl SmoothScroller {
    pub fn new(options: SmoothScrollOptions) -> Self {
        Self {
            options,
            slot: AnimationSlot::default(),
        }
    }

    pub fn scroll_to_section(&self, id: &str) -> ScrollResult<()> {
        let window = error::window()?;
        let document = window.document().ok_or(ScrollError::NoDocument)?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| ScrollError::SectionNotFound(id.to_string()))?;

        let start = window.page_y_offset()?;
        let target = target_offset(
            element.get_bounding_client_rect().top(),
            start,
            self.options.offset,
        );
        let animation = ScrollAnimation::new(start, target, self.options.duration_ms);
        log::debug!("Scrolling to #{} ({} -> {})", id, animation.start(), target);
        run_frames(window, animation, self.slot.claim())
    }

    /// Native smooth scroll to the origin. Stops any section animation first so
    /// the two don't fight over the offset.
    pub fn scroll_to_top(&self) -> ScrollResult<()> {
        self.slot.cancel();
        let window = error::window()?;
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }

    /// A cancelled loop exits on its next frame without touching the offset.
    pub fn cancel(&self) {
        self.slot.cancel();
    }
}

type FrameLoop = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn run_frames(window: Window, mut animation: ScrollAnimation, token: AnimationToken) -> ScrollResult<()> {
    let frame_loop: FrameLoop = Rc::new(RefCell::new(None));
    let next = frame_loop.clone();
    let win = window.clone();

    *frame_loop.borrow_mut() = Some(Closure::new(move |now: f64| {
        if !token.is_live() {
            // Dropping the closure breaks the Rc cycle and ends the loop.
            let _ = next.borrow_mut().take();
            return;
        }
        let frame = animation.frame(now);
        win.scroll_to_with_x_and_y(0.0, frame.position);
        if frame.finished {
            let _ = next.borrow_mut().take();
            return;
        }
        let scheduled = next
            .borrow()
            .as_ref()
            .map(|callback| win.request_animation_frame(callback.as_ref().unchecked_ref()));
        if let Some(Err(e)) = scheduled {
            log::warn!("Smooth scroll stopped, frame request failed: {:?}", e);
            let _ = next.borrow_mut().take();
        }
    }));

    let first = frame_loop
        .borrow()
        .as_ref()
        .map(|callback| window.request_animation_frame(callback.as_ref().unchecked_ref()));
    match first {
        Some(Err(e)) => {
            let _ = frame_loop.borrow_mut().take();
            Err(e.into())
        }
        _ => Ok(()),
    }
}

#[derive(Properties, PartialEq)]
pub struct SmoothScrollProviderProps {
    #[prop_or_default]
    pub options: SmoothScrollOptions,
    #[prop_or_default]
    pub children: Children,
}

/// Hands one [`SmoothScroller`] to every `use_smooth_scroll` below it. Any
/// animation still running when the provider unmounts is cancelled.
#[function_component(SmoothScrollProvider)]
pub fn smooth_scroll_provider(props: &SmoothScrollProviderProps) -> Html {
    let scroller = use_memo(|options| SmoothScroller::new(*options), props.options);

    {
        let scroller = scroller.clone();
        use_effect_with_deps(move |_| move || scroller.cancel(), props.options);
    }

    html! {
        <ContextProvider<SmoothScroller> context={(*scroller).clone()}>
            { for props.children.iter() }
        </ContextProvider<SmoothScroller>>
    }
}

#[derive(Clone, PartialEq)]
pub struct SmoothScrollHandle {
    pub scroll_to_section: Callback<String>,
    pub scroll_to_top: Callback<()>,
}

/// Section navigation for a component. Uses the scroller from the nearest
/// [`SmoothScrollProvider`], so a jump started here cancels one started
/// anywhere else on the page. Outside a provider the component gets its own
/// scroller, cancelled when it unmounts. Unknown sections are ignored.
#[hook]
pub fn use_smooth_scroll() -> SmoothScrollHandle {
    let shared = use_context::<SmoothScroller>();
    let local = use_memo(|_| SmoothScroller::default(), ());

    {
        let local = local.clone();
        use_effect_with_deps(move |_| move || local.cancel(), ());
    }

    let scroller = shared.unwrap_or_else(|| (*local).clone());

    let scroll_to_section = {
        let scroller = scroller.clone();
        Callback::from(move |id: String| {
            if let Err(e) = scroller.scroll_to_section(&id) {
                log::debug!("Smooth scroll skipped: {}", e);
            }
        })
    };
    let scroll_to_top = Callback::from(move |_| {
        if let Err(e) = scroller.scroll_to_top() {
            log::debug!("Scroll to top skipped: {}", e);
        }
    });

    SmoothScrollHandle {
        scroll_to_section,
        scroll_to_top,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_header_and_duration() {
        let options = SmoothScrollOptions::default();
        assert!(options.offset >= 0.0);
        assert!(options.duration_ms >= 0.0);
        if option_env!("LANDING_HEADER_OFFSET").is_none() {
            assert_eq!(options.offset, 80.0);
        }
        if option_env!("LANDING_SCROLL_DURATION_MS").is_none() {
            assert_eq!(options.duration_ms, 1000.0);
        }
    }

    #[test]
    fn target_leaves_room_for_header() {
        // Element 1200px below the viewport top while already scrolled 300px.
        assert_eq!(target_offset(1200.0, 300.0, 80.0), 1420.0);
        // Element above the viewport.
        assert_eq!(target_offset(-500.0, 2000.0, 80.0), 1420.0);
    }

    #[test]
    fn new_claim_supersedes_old_token() {
        let slot = AnimationSlot::default();
        let first = slot.claim();
        assert!(first.is_live());
        let second = slot.claim();
        assert!(!first.is_live());
        assert!(second.is_live());
    }

    #[test]
    fn cancel_kills_current_token() {
        let slot = AnimationSlot::default();
        let token = slot.claim();
        slot.cancel();
        assert!(!token.is_live());
        assert!(slot.claim().is_live());
    }

    #[test]
    fn clones_share_the_slot() {
        let scroller = SmoothScroller::default();
        let token = scroller.slot.claim();
        scroller.clone().cancel();
        assert!(!token.is_live());
    }

    #[test]
    fn consumers_of_one_scroller_supersede_each_other() {
        // Navbar and hero both hold the page scroller.
        let page = SmoothScroller::default();
        let navbar = page.clone();
        let hero = page.clone();
        assert_eq!(navbar, hero);

        let hero_run = hero.slot.claim();
        navbar.cancel();
        assert!(!hero_run.is_live());

        let hero_run = hero.slot.claim();
        let navbar_run = navbar.slot.claim();
        assert!(!hero_run.is_live());
        assert!(navbar_run.is_live());
    }

    #[test]
    fn separate_scrollers_are_distinct_contexts() {
        let first = SmoothScroller::default();
        let second = SmoothScroller::default();
        assert_ne!(first, second);

        let run = first.slot.claim();
        second.cancel();
        assert!(run.is_live());
    }

    #[test]
    fn superseded_runs_each_finish_on_their_own_trajectory() {
        // Two overlapping runs, as if a second nav click came mid-flight.
        let slot = AnimationSlot::default();
        let mut first = (ScrollAnimation::new(0.0, 1000.0, 1000.0), slot.claim());
        let mut offset = 0.0;
        let mut now = 0.0;
        while now < 300.0 {
            if first.1.is_live() {
                offset = first.0.frame(now).position;
            }
            now += 16.0;
        }
        let handoff = offset;
        let mut second = (ScrollAnimation::new(handoff, 250.0, 1000.0), slot.claim());
        let mut finished = false;
        while !finished {
            assert!(!first.1.is_live());
            let frame = second.0.frame(now);
            offset = frame.position;
            finished = frame.finished;
            now += 16.0;
        }
        assert_eq!(offset, 250.0);
        assert_eq!(second.0.start(), handoff);
        assert!(handoff > 0.0 && handoff < 1000.0);
    }
}
