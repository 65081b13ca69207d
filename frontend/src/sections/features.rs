use yew::prelude::*;

use crate::components::reveal::FaIcon;
use crate::config;
use crate::content::FEATURES;
use crate::utils::visibility::{reveal_classes, use_scroll_animation, Reveal};

const FEATURES_CSS: &str = r#"
    .features {
        padding: 8rem 0;
        position: relative;
    }
    .features::before {
        content: '';
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom, transparent, rgba(26, 33, 48, 0.3), transparent);
    }
    .features-showcase {
        display: flex;
        justify-content: center;
        margin-bottom: 5rem;
    }
    .features-showcase .glass-card {
        padding: 1.5rem;
        max-width: 28rem;
    }
    .features-showcase img {
        width: 100%;
        border-radius: 1rem;
        box-shadow: 0 0 40px rgba(29, 155, 240, 0.2);
    }
    .features-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
    }
    .feature-card {
        padding: 2rem;
        border-radius: 1.5rem;
        background: rgba(255, 255, 255, 0.03);
        border: 1px solid var(--border);
        transition: border-color 0.3s ease, box-shadow 0.3s ease;
    }
    .feature-card:hover {
        border-color: rgba(29, 155, 240, 0.4);
        box-shadow: 0 0 30px rgba(29, 155, 240, 0.1);
    }
    .feature-card .icon-tile {
        margin-bottom: 1.5rem;
        transition: transform 0.3s ease;
    }
    .feature-card:hover .icon-tile {
        transform: scale(1.1);
    }
    .feature-card h3 {
        font-size: 1.5rem;
        margin: 0 0 1rem;
    }
    .feature-card p {
        color: var(--muted-foreground);
        line-height: 1.6;
        margin: 0;
    }
    @media (max-width: 1024px) {
        .features-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (max-width: 768px) {
        .features-grid {
            grid-template-columns: 1fr;
        }
    }
"#;

#[function_component(Features)]
pub fn features() -> Html {
    let (header_ref, header_visible) = use_scroll_animation(config::DEFAULT_REVEAL_THRESHOLD);
    let (grid_ref, grid_visible) = use_scroll_animation(0.05);

    html! {
        <section class="features">
            <style>{FEATURES_CSS}</style>
            <div class="container">
                <div ref={header_ref} class={classes!("section-header", reveal_classes(Reveal::Up, header_visible, None))}>
                    <span class="section-eyebrow">{"Features"}</span>
                    <h2 class="section-title">
                        {"Everything You Need to"}<br/>
                        <span class="gradient-text">{"Communicate Smarter"}</span>
                    </h2>
                    <p class="section-lead">
                        {"A complete suite of AI-powered tools designed for modern businesses that demand excellence in communication."}
                    </p>
                </div>

                <div class="features-showcase">
                    <div class={classes!("glass-card", reveal_classes(Reveal::Scale, grid_visible, None))}>
                        <img src={config::asset("/cute-ai-robot-wearing-headphones.png")} alt="AI Service Animation" loading="lazy" />
                    </div>
                </div>

                <div ref={grid_ref} class="features-grid">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <div key={feature.title} class={classes!("feature-card", reveal_classes(Reveal::Scale, grid_visible, Some(index + 1)))}>
                            <div class="icon-tile" style={format!("background: {};", feature.accent.gradient())}>
                                <FaIcon icon={feature.icon} />
                            </div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
