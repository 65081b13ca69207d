//! Single-page marketing site for BeyondChats AI, rendered client side with Yew.
//!
//! The scroll behaviour (reveal latches, direction tracking, animated section
//! jumps and the navbar scroll-spy) lives in [`utils`] as plain state machines
//! with thin hooks on top, so it can be unit tested off the browser.

use yew::prelude::*;

pub mod components;
pub mod config;
pub mod content;
pub mod pages;
pub mod sections;
pub mod styles;
pub mod utils;

use pages::landing::Landing;

#[function_component(App)]
pub fn app() -> Html {
    html! { <Landing /> }
}
