use yew::prelude::*;

use crate::components::motion::Entrance;
use crate::components::reveal::FaIcon;
use crate::config;
use crate::content::REASONS;
use crate::utils::visibility::{reveal_classes, use_scroll_animation, Reveal};

const WHY_CSS: &str = r#"
    .why-choose-us {
        padding: 8rem 0;
        position: relative;
        overflow: hidden;
    }
    .why-choose-us::before {
        content: '';
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom, rgba(26, 33, 48, 0.3), transparent, rgba(26, 33, 48, 0.3));
    }
    .why-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
        align-items: center;
    }
    .why-image {
        position: relative;
    }
    .why-image .glass-card {
        padding: 1.5rem;
    }
    .why-image img {
        width: 100%;
        height: auto;
        border-radius: 1rem;
        box-shadow: 0 0 60px var(--glow);
    }
    .why-reasons {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .reason-card {
        display: flex;
        align-items: flex-start;
        gap: 1rem;
        padding: 1.5rem;
    }
    .reason-card:hover {
        box-shadow: 0 0 30px rgba(29, 155, 240, 0.15);
    }
    .reason-card .icon-tile {
        width: 3rem;
        height: 3rem;
        background: linear-gradient(135deg, var(--primary), var(--accent));
        transition: transform 0.3s ease;
    }
    .reason-card:hover .icon-tile {
        transform: scale(1.1);
    }
    .reason-card h3 {
        font-size: 1.25rem;
        margin: 0 0 0.5rem;
        transition: color 0.3s ease;
    }
    .reason-card:hover h3 {
        color: var(--primary);
    }
    .reason-card p {
        margin: 0;
        color: var(--muted-foreground);
        line-height: 1.6;
    }
    @media (max-width: 1024px) {
        .why-grid {
            grid-template-columns: 1fr;
        }
    }
"#;

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    let (header_ref, header_visible) = use_scroll_animation(config::DEFAULT_REVEAL_THRESHOLD);
    let (content_ref, content_visible) = use_scroll_animation(0.1);
    let (image_ref, image_visible) = use_scroll_animation(0.15);

    let image = Entrance {
        x: -50.0,
        scale: 0.95,
        duration: 0.8,
        ..Entrance::default()
    };

    html! {
        <section class="why-choose-us">
            <style>{WHY_CSS}</style>
            <div class="container">
                <div ref={header_ref} class={classes!("section-header", reveal_classes(Reveal::Up, header_visible, None))}>
                    <span class="section-eyebrow">{"Why Choose Us"}</span>
                    <h2 class="section-title">
                        {"The Smart Choice for"}<br/>
                        <span class="gradient-text">{"Modern Businesses"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Join thousands of companies that trust us to power their AI communication infrastructure"}
                    </p>
                </div>

                <div class="why-grid">
                    <div ref={image_ref} class="why-image motion" style={image.style(image_visible)}>
                        <div class="glass-card">
                            <img src={config::asset("/Multi-ai-agent.avif")} alt="Multi AI Agent System" loading="lazy" />
                        </div>
                        <div class="floating-tile animate-float" style="top: -1.5rem; left: -1.5rem; width: 6rem; height: 6rem; opacity: 0.3;"></div>
                        <div class="floating-tile animate-float" style="bottom: -1.5rem; right: -1.5rem; width: 5rem; height: 5rem; border-radius: 50%; opacity: 0.25; animation-delay: 2s;"></div>
                    </div>

                    <div ref={content_ref} class="why-reasons">
                        { for REASONS.iter().enumerate().map(|(index, reason)| {
                            let entrance = Entrance {
                                x: 50.0,
                                delay: index as f64 * 0.1,
                                ..Entrance::default()
                            };
                            html! {
                                <div key={reason.title} class="reason-card glass-card motion" style={entrance.style(content_visible)}>
                                    <div class="icon-tile">
                                        <FaIcon icon={reason.icon} />
                                    </div>
                                    <div>
                                        <h3>{reason.title}</h3>
                                        <p>{reason.description}</p>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
