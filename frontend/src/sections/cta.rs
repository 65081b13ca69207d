use yew::prelude::*;

use crate::components::reveal::FaIcon;
use crate::content::{Icon, SectionId};
use crate::utils::smooth_scroll::use_smooth_scroll;
use crate::utils::visibility::{reveal_classes, use_scroll_animation, Reveal};

const CTA_CSS: &str = r#"
    .cta {
        padding: 8rem 0;
        position: relative;
        overflow: hidden;
    }
    .cta-glow {
        position: absolute;
        width: 37.5rem;
        height: 37.5rem;
        border-radius: 50%;
        filter: blur(200px);
        pointer-events: none;
    }
    .cta-glow.primary {
        top: 0;
        left: 25%;
        background: rgba(29, 155, 240, 0.1);
    }
    .cta-glow.accent {
        bottom: 0;
        right: 25%;
        background: rgba(77, 124, 230, 0.1);
    }
    .cta-card {
        position: relative;
        max-width: 64rem;
        margin: 0 auto;
        padding: 4rem;
        text-align: center;
        overflow: hidden;
    }
    .cta-card::before {
        content: '';
        position: absolute;
        inset: 0;
        border-radius: inherit;
        background: linear-gradient(90deg, var(--primary), var(--accent), var(--primary));
        opacity: 0.08;
        pointer-events: none;
    }
    .cta-pill {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.5rem 1rem;
        border-radius: 999px;
        margin-bottom: 2rem;
        font-size: 0.875rem;
        font-weight: 500;
        color: var(--primary);
        background: rgba(29, 155, 240, 0.1);
    }
    .cta-card p {
        font-size: 1.25rem;
        color: var(--muted-foreground);
        max-width: 42rem;
        margin: 0 auto 2.5rem;
    }
    .cta-card .btn i {
        transition: transform 0.3s ease;
    }
    .cta-card .btn:hover i {
        transform: translateX(4px);
    }
    @media (max-width: 768px) {
        .cta-card {
            padding: 2rem 1.5rem;
        }
        .cta-card .floating-tile {
            display: none;
        }
    }
"#;

#[function_component(Cta)]
pub fn cta() -> Html {
    let (node, visible) = use_scroll_animation(0.2);
    let scroll = use_smooth_scroll();

    let to_pricing = {
        let scroll_to_section = scroll.scroll_to_section.clone();
        Callback::from(move |_| scroll_to_section.emit(SectionId::Pricing.as_str().to_string()))
    };

    html! {
        <section class="cta">
            <style>{CTA_CSS}</style>
            <div class="cta-glow primary"></div>
            <div class="cta-glow accent"></div>
            <div class="container">
                <div ref={node} class={classes!("cta-card", "glass-card", reveal_classes(Reveal::Scale, visible, None))}>
                    <div class="cta-pill">
                        <FaIcon icon={Icon::Sparkles} />
                        <span>{"Try out for free"}</span>
                    </div>
                    <h2 class="section-title">
                        {"Ready to Transform Your"}<br/>
                        <span class="gradient-text">{"Video Meetings?"}</span>
                    </h2>
                    <p>
                        {"Join thousands of teams already using our AI-powered video call platform to collaborate smarter, faster, and across any language."}
                    </p>
                    <button class="btn btn-hero btn-xl" onclick={to_pricing}>
                        {"Try out for free"}
                        <FaIcon icon={Icon::ArrowRight} />
                    </button>
                    <div class="floating-tile animate-float" style="top: 2.5rem; left: 2.5rem; width: 5rem; height: 5rem; opacity: 0.3;"></div>
                    <div class="floating-tile animate-float" style="bottom: 2.5rem; right: 2.5rem; width: 4rem; height: 4rem; border-radius: 50%; opacity: 0.2; animation-delay: 2s;"></div>
                </div>
            </div>
        </section>
    }
}
