use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::components::reveal::FaIcon;
use crate::content::{Icon, BRAND, BRAND_ACCENT, FOOTER_LINKS, SOCIAL_LINKS};
use crate::utils::visibility::{reveal_classes, use_scroll_animation, Reveal};

const FOOTER_CSS: &str = r#"
    .site-footer {
        border-top: 1px solid var(--border);
        padding: 5rem 0;
    }
    .footer-grid {
        display: grid;
        grid-template-columns: repeat(6, 1fr);
        gap: 3rem;
        margin-bottom: 4rem;
    }
    .footer-brand {
        grid-column: span 2;
    }
    .footer-brand p {
        color: var(--muted-foreground);
        max-width: 20rem;
    }
    .footer-socials {
        display: flex;
        gap: 1rem;
    }
    .footer-socials a {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 0.5rem;
        background: var(--muted);
        color: var(--muted-foreground);
        display: flex;
        align-items: center;
        justify-content: center;
        transition: all 0.3s ease;
    }
    .footer-socials a:hover {
        background: var(--primary);
        color: var(--primary-foreground);
    }
    .footer-group h4 {
        margin: 0 0 1rem;
    }
    .footer-group ul {
        list-style: none;
        padding: 0;
        margin: 0;
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
    }
    .footer-group a,
    .footer-bottom a {
        color: var(--muted-foreground);
        text-decoration: none;
        transition: color 0.3s ease;
    }
    .footer-group a:hover,
    .footer-bottom a:hover {
        color: var(--primary);
    }
    .newsletter {
        display: flex;
        gap: 0.5rem;
        margin: 1.5rem 0;
    }
    .newsletter input {
        flex: 1;
        padding: 0.75rem 1rem;
        border-radius: 0.75rem;
        border: 1px solid var(--border);
        background: var(--muted);
        color: var(--foreground);
    }
    .footer-bottom {
        padding-top: 2rem;
        border-top: 1px solid var(--border);
        display: flex;
        justify-content: space-between;
        align-items: center;
        gap: 1rem;
        font-size: 0.875rem;
        color: var(--muted-foreground);
    }
    .footer-legal {
        display: flex;
        gap: 1rem;
    }
    @media (max-width: 768px) {
        .footer-grid {
            grid-template-columns: repeat(2, 1fr);
        }
        .footer-bottom {
            flex-direction: column;
        }
    }
"#;

#[function_component(Footer)]
pub fn footer() -> Html {
    let (node, visible) = use_scroll_animation(0.1);
    let year = Date::new_0().get_full_year();

    html! {
        <footer ref={node} class={classes!("site-footer", reveal_classes(Reveal::Up, visible, None))}>
            <style>{FOOTER_CSS}</style>
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <a href="#" class="nav-logo">
                            <div class="icon-tile"><FaIcon icon={Icon::Bolt} /></div>
                            <span>{BRAND}<span class="gradient-text">{BRAND_ACCENT}</span></span>
                        </a>
                        <p>{"The future of AI-powered communication. Connect with your customers like never before."}</p>
                        // Newsletter signup is display-only for now.
                        <div class="newsletter">
                            <input type="email" placeholder="you@company.com" aria-label="Email address" />
                            <button type="button" class="btn btn-hero">{"Subscribe"}</button>
                        </div>
                        <div class="footer-socials">
                            { for SOCIAL_LINKS.iter().map(|(name, icon)| html! {
                                <a key={*name} href="#" aria-label={*name}>
                                    <i class={*icon} aria-hidden="true"></i>
                                </a>
                            }) }
                        </div>
                    </div>
                    { for FOOTER_LINKS.iter().map(|group| html! {
                        <div key={group.title} class="footer-group">
                            <h4>{group.title}</h4>
                            <ul>
                                { for group.links.iter().map(|link| html! {
                                    <li key={*link}><a href="#">{*link}</a></li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
                <div class="footer-bottom">
                    <p>{format!("© {} {}{}. All rights reserved.", year, BRAND, BRAND_ACCENT)}</p>
                    <div class="footer-legal">
                        <a href="#">{"Privacy Policy"}</a>
                        <span>{"•"}</span>
                        <a href="#">{"Terms of Service"}</a>
                        <span>{"•"}</span>
                        <a href="#">{"Cookies"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
