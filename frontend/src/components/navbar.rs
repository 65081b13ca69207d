use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::FaIcon;
use crate::components::theme_toggle::ThemeToggle;
use crate::content::{Icon, SectionId, BRAND, BRAND_ACCENT, NAV_LINKS, SPY_SECTIONS};
use crate::utils::scroll_direction::use_scroll_direction;
use crate::utils::scroll_spy::{use_scroll_spy, NavBarState};
use crate::utils::smooth_scroll::use_smooth_scroll;

const NAV_CSS: &str = r#"
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        padding: 1.5rem 0;
        background: transparent;
        transition: transform 0.3s ease-in-out, padding 0.5s ease, background 0.5s ease;
    }
    .top-nav.scrolled {
        padding: 1rem 0;
        background: rgba(11, 15, 23, 0.95);
        backdrop-filter: blur(24px);
        border-bottom: 1px solid var(--border);
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.2);
    }
    .top-nav.nav-hidden {
        transform: translateY(-100px);
    }
    .nav-inner {
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        color: var(--foreground);
        text-decoration: none;
        font-weight: 700;
        font-size: 1.25rem;
        cursor: pointer;
    }
    .nav-logo .icon-tile {
        width: 2.5rem;
        height: 2.5rem;
        font-size: 1.1rem;
        background: linear-gradient(135deg, var(--primary), var(--accent));
    }
    .nav-links {
        display: flex;
        gap: 2rem;
    }
    .nav-link {
        color: var(--muted-foreground);
        text-decoration: none;
        cursor: pointer;
        transition: color 0.3s ease;
    }
    .nav-link:hover,
    .nav-link.active {
        color: var(--primary);
    }
    .nav-link.active {
        font-weight: 500;
    }
    .nav-actions {
        display: flex;
        gap: 0.5rem;
    }
    .nav-burger {
        display: none;
        background: none;
        border: none;
        color: var(--foreground);
        font-size: 1.4rem;
        padding: 0.5rem;
        cursor: pointer;
    }
    .mobile-menu {
        margin: 0.5rem 1rem 0;
        padding: 1.5rem;
        border-radius: 1rem;
        background: rgba(11, 15, 23, 0.95);
        border: 1px solid var(--border);
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .mobile-menu .nav-actions {
        flex-direction: column;
        padding-top: 1rem;
        border-top: 1px solid var(--border);
    }
    @media (max-width: 768px) {
        .nav-inner > .nav-links,
        .nav-inner > .nav-actions {
            display: none;
        }
        .nav-burger {
            display: block;
        }
    }
"#;

/// Fixed top navigation: smooth-scrolls to sections, highlights the section in
/// view and slides away while the reader scrolls down.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let scroll = use_smooth_scroll();
    let direction = use_scroll_direction();
    let spy = use_scroll_spy(SPY_SECTIONS);
    let state = NavBarState::new(spy.scrolled, direction);

    let on_logo = {
        let scroll_to_top = scroll.scroll_to_top.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_top.emit(());
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let links = |item_class: &'static str| -> Html {
        NAV_LINKS
            .iter()
            .map(|link| {
                let id = link.section.as_str();
                let active = SectionId::from_anchor(&spy.active) == Some(link.section);
                let onclick = {
                    let scroll_to_section = scroll.scroll_to_section.clone();
                    let menu_open = menu_open.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        scroll_to_section.emit(id.to_string());
                        menu_open.set(false);
                    })
                };
                html! {
                    <a
                        key={id}
                        href={format!("#{}", id)}
                        class={classes!(item_class, active.then_some("active"))}
                        {onclick}
                    >
                        {link.label}
                    </a>
                }
            })
            .collect()
    };

    let actions = html! {
        <div class="nav-actions">
            <ThemeToggle />
            <button class="btn btn-ghost">{"Log in"}</button>
            <button class="btn btn-hero">{"Get Started Free"}</button>
        </div>
    };

    html! {
        <nav class={classes!(
            "top-nav",
            state.scrolled.then_some("scrolled"),
            state.hidden.then_some("nav-hidden")
        )}>
            <style>{NAV_CSS}</style>
            <div class="container nav-inner">
                <a href="#" class="nav-logo" onclick={on_logo}>
                    <div class="icon-tile"><FaIcon icon={Icon::Bolt} /></div>
                    <span>{BRAND}<span class="gradient-text">{BRAND_ACCENT}</span></span>
                </a>
                <div class="nav-links">
                    { links("nav-link") }
                </div>
                { actions.clone() }
                <button class="nav-burger" aria-label="Toggle menu" onclick={toggle_menu}>
                    <FaIcon icon={if *menu_open { Icon::Close } else { Icon::Menu }} />
                </button>
            </div>
            if *menu_open {
                <div class="mobile-menu">
                    { links("nav-link") }
                    { actions }
                </div>
            }
        </nav>
    }
}
