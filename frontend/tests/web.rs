#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use landing_frontend::utils::error::ScrollError;
use landing_frontend::utils::smooth_scroll::{SmoothScrollOptions, SmoothScroller};
use wasm_bindgen_test::*;
use web_sys::{Element, Window};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> Window {
    web_sys::window().unwrap()
}

/// Tall page with a marker section `top` pixels from the document origin.
struct Fixture {
    root: Element,
}

impl Fixture {
    fn new(id: &str, top: f64) -> Self {
        let document = window().document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_attribute("style", "position: relative; height: 6000px; margin: 0;")
            .unwrap();
        let section = document.create_element("div").unwrap();
        section.set_id(id);
        section
            .set_attribute(
                "style",
                &format!("position: absolute; top: {}px; height: 400px; width: 100%;", top),
            )
            .unwrap();
        root.append_child(&section).unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        window().scroll_to_with_x_and_y(0.0, 0.0);
        Self { root }
    }

    fn section_top(&self, id: &str) -> f64 {
        let document = window().document().unwrap();
        let element = document.get_element_by_id(id).unwrap();
        element.get_bounding_client_rect().top() + window().page_y_offset().unwrap()
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
        window().scroll_to_with_x_and_y(0.0, 0.0);
    }
}

fn scroller(duration_ms: f64) -> SmoothScroller {
    SmoothScroller::new(SmoothScrollOptions {
        offset: 80.0,
        duration_ms,
    })
}

#[wasm_bindgen_test]
fn missing_section_is_reported_and_nothing_moves() {
    let _fixture = Fixture::new("pricing", 2000.0);
    let before = window().page_y_offset().unwrap();

    let result = scroller(1000.0).scroll_to_section("nonexistent-id");

    assert_eq!(result, Err(ScrollError::SectionNotFound("nonexistent-id".into())));
    assert_eq!(window().page_y_offset().unwrap(), before);
}

#[wasm_bindgen_test]
async fn lands_header_offset_above_section() {
    let fixture = Fixture::new("pricing", 2000.0);
    let expected = fixture.section_top("pricing") - 80.0;

    scroller(300.0).scroll_to_section("pricing").unwrap();
    TimeoutFuture::new(800).await;

    let offset = window().page_y_offset().unwrap();
    assert!((offset - expected).abs() <= 1.0, "landed at {}, wanted {}", offset, expected);
}

#[wasm_bindgen_test]
async fn cancelled_animation_leaves_offset_alone() {
    let _fixture = Fixture::new("features", 1500.0);
    let scroller = scroller(300.0);

    scroller.scroll_to_section("features").unwrap();
    scroller.cancel();
    TimeoutFuture::new(500).await;

    assert_eq!(window().page_y_offset().unwrap(), 0.0);
}

#[wasm_bindgen_test]
async fn later_jump_wins() {
    let fixture = Fixture::new("solutions", 1200.0);
    let document = window().document().unwrap();
    let other = document.create_element("div").unwrap();
    other.set_id("testimonials");
    other
        .set_attribute("style", "position: absolute; top: 3000px; height: 400px; width: 100%;")
        .unwrap();
    fixture.root.append_child(&other).unwrap();
    let expected = fixture.section_top("testimonials") - 80.0;

    let scroller = scroller(300.0);
    scroller.scroll_to_section("solutions").unwrap();
    scroller.scroll_to_section("testimonials").unwrap();
    TimeoutFuture::new(800).await;

    let offset = window().page_y_offset().unwrap();
    assert!((offset - expected).abs() <= 1.0, "landed at {}, wanted {}", offset, expected);
}

#[wasm_bindgen_test]
async fn scroll_to_top_returns_to_origin() {
    let _fixture = Fixture::new("cta", 2500.0);
    window().scroll_to_with_x_and_y(0.0, 1800.0);
    assert!(window().page_y_offset().unwrap() > 0.0);

    scroller(1000.0).scroll_to_top().unwrap();
    TimeoutFuture::new(1500).await;

    assert_eq!(window().page_y_offset().unwrap(), 0.0);
}

#[wasm_bindgen_test]
async fn scroll_to_top_from_another_component_stops_a_running_jump() {
    let _fixture = Fixture::new("pricing", 3000.0);
    // What the page provider hands to the hero and to the navbar.
    let page = scroller(1000.0);
    let hero = page.clone();
    let navbar = page.clone();

    hero.scroll_to_section("pricing").unwrap();
    TimeoutFuture::new(200).await;
    assert!(window().page_y_offset().unwrap() > 0.0);

    navbar.scroll_to_top().unwrap();
    TimeoutFuture::new(1500).await;

    assert_eq!(window().page_y_offset().unwrap(), 0.0);
}
