use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;
use crate::utils::error::{self, ScrollResult};
use crate::utils::scroll_direction::ScrollDirection;

/// Layout box of one section, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds<'_> {
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// First section (in the given order) whose box contains `scroll_y + probe`.
pub fn active_section<'a>(scroll_y: f64, probe: f64, sections: &[SectionBounds<'a>]) -> Option<&'a str> {
    let y = scroll_y + probe;
    sections
        .iter()
        .find(|section| section.contains(y))
        .map(|section| section.id)
}

/// How the fixed navigation bar should look at a given scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavBarState {
    /// Past the top of the page: compact, blurred background.
    pub scrolled: bool,
    /// Slid out of view while the reader moves down the page.
    pub hidden: bool,
}

impl NavBarState {
    pub fn new(scrolled: bool, direction: ScrollDirection) -> Self {
        Self {
            scrolled,
            hidden: scrolled && direction == ScrollDirection::Down,
        }
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLLED_AFTER
}

fn measure(ids: &[&'static str]) -> ScrollResult<Vec<SectionBounds<'static>>> {
    let document = error::document()?;
    Ok(ids
        .iter()
        .filter_map(|&id| {
            let element = document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()?;
            Some(SectionBounds {
                id,
                top: element.offset_top() as f64,
                height: element.offset_height() as f64,
            })
        })
        .collect())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSpy {
    pub active: String,
    pub scrolled: bool,
}

/// Active section and the "scrolled past the top" flag, recomputed on every
/// window scroll.
/// Sections missing from the document are skipped; when no section contains
/// the probe line the previous one stays active.
#[hook]
pub fn use_scroll_spy(ids: &'static [&'static str]) -> ScrollSpy {
    let active = use_state(|| ids.first().copied().unwrap_or_default().to_string());
    let scrolled = use_state(|| false);

    {
        let active = active.clone();
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |ids| {
                let ids: &'static [&'static str] = *ids;
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let mut current_active = (*active).clone();
                    let mut current_scrolled = *scrolled;
                    let callback = Closure::<dyn FnMut()>::new(move || {
                        let Some(win) = web_sys::window() else {
                            return;
                        };
                        let Ok(scroll_y) = win.scroll_y() else {
                            return;
                        };
                        if is_scrolled(scroll_y) != current_scrolled {
                            current_scrolled = !current_scrolled;
                            scrolled.set(current_scrolled);
                        }
                        match measure(ids) {
                            Ok(sections) => {
                                if let Some(id) = active_section(scroll_y, config::SCROLL_SPY_PROBE, &sections) {
                                    if id != current_active {
                                        current_active = id.to_string();
                                        active.set(current_active.clone());
                                    }
                                }
                            }
                            Err(e) => log::debug!("Scroll spy skipped: {}", e),
                        }
                    });
                    match window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
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
            ids,
        );
    }

    ScrollSpy {
        active: (*active).clone(),
        scrolled: *scrolled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds<'static>> {
        vec![
            SectionBounds { id: "hero", top: 0.0, height: 900.0 },
            SectionBounds { id: "features", top: 900.0, height: 1200.0 },
            SectionBounds { id: "solutions", top: 2100.0, height: 1000.0 },
            SectionBounds { id: "pricing", top: 3100.0, height: 800.0 },
        ]
    }

    #[test]
    fn probe_line_picks_the_section() {
        let sections = page();
        assert_eq!(active_section(0.0, 100.0, &sections), Some("hero"));
        assert_eq!(active_section(799.0, 100.0, &sections), Some("hero"));
        assert_eq!(active_section(800.0, 100.0, &sections), Some("features"));
        assert_eq!(active_section(3000.0, 100.0, &sections), Some("pricing"));
    }

    #[test]
    fn nothing_below_the_last_section() {
        assert_eq!(active_section(5000.0, 100.0, &page()), None);
        assert_eq!(active_section(0.0, 100.0, &[]), None);
    }

    #[test]
    fn earlier_section_wins_on_overlap() {
        let sections = [
            SectionBounds { id: "hero", top: 0.0, height: 1000.0 },
            SectionBounds { id: "features", top: 500.0, height: 1000.0 },
        ];
        assert_eq!(active_section(600.0, 100.0, &sections), Some("hero"));
    }

    #[test]
    fn scrolled_after_twenty_pixels() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
    }

    #[test]
    fn navbar_hides_only_when_scrolled_and_moving_down() {
        let at = |y: f64, direction| NavBarState::new(is_scrolled(y), direction);
        assert_eq!(
            at(10.0, ScrollDirection::Down),
            NavBarState { scrolled: false, hidden: false }
        );
        assert_eq!(
            at(20.0, ScrollDirection::Down),
            NavBarState { scrolled: false, hidden: false }
        );
        assert_eq!(
            at(400.0, ScrollDirection::Down),
            NavBarState { scrolled: true, hidden: true }
        );
        assert_eq!(
            at(400.0, ScrollDirection::Up),
            NavBarState { scrolled: true, hidden: false }
        );
    }
}
