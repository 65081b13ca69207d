use yew::prelude::*;

use crate::components::reveal::FaIcon;
use crate::config;
use crate::content::{Icon, SectionId, HERO_STATS};
use crate::utils::smooth_scroll::use_smooth_scroll;
use crate::utils::visibility::{reveal_classes, use_scroll_animation, Reveal};

const HERO_CSS: &str = r#"
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
        padding-top: 5rem;
    }
    .hero-glow {
        position: absolute;
        width: 24rem;
        height: 24rem;
        border-radius: 50%;
        background: var(--glow);
        filter: blur(120px);
        animation: pulse-glow 4s ease-in-out infinite;
        pointer-events: none;
    }
    .hero-glow.one { top: 25%; left: 25%; }
    .hero-glow.two { bottom: 25%; right: 25%; animation-delay: 1.5s; }
    @keyframes pulse-glow {
        0%, 100% { opacity: 0.4; }
        50% { opacity: 0.8; }
    }
    .hero-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
    }
    .hero-badge {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.5rem 1rem;
        border-radius: 999px;
        margin-bottom: 2rem;
        font-size: 0.875rem;
        color: var(--muted-foreground);
    }
    .hero-badge i {
        color: var(--primary);
    }
    .hero-title {
        font-size: 4.5rem;
        font-weight: 700;
        line-height: 1.1;
        margin: 0 0 1.5rem;
    }
    .hero-subtitle {
        font-size: 1.5rem;
        color: var(--muted-foreground);
        margin: 0 0 2.5rem;
    }
    .hero-actions {
        display: flex;
        gap: 1rem;
        margin-bottom: 4rem;
    }
    .hero-stats {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
    }
    .hero-stat-value {
        font-size: 2.25rem;
        font-weight: 700;
    }
    .hero-stat-label {
        font-size: 0.75rem;
        color: var(--muted-foreground);
    }
    .hero-media {
        padding: 1rem;
    }
    .hero-media video {
        width: 100%;
        border-radius: 1rem;
        box-shadow: 0 0 60px var(--glow);
    }
    .media-fallback {
        aspect-ratio: 16 / 9;
        display: flex;
        align-items: center;
        justify-content: center;
        color: var(--muted-foreground);
    }
    @media (max-width: 1024px) {
        .hero-grid {
            grid-template-columns: 1fr;
            text-align: center;
        }
        .hero-actions {
            flex-direction: column;
            align-items: center;
        }
        .hero-stats {
            grid-template-columns: repeat(2, 1fr);
        }
        .hero-title {
            font-size: 2.5rem;
        }
        .hero-subtitle {
            font-size: 1.125rem;
        }
    }
"#;

#[function_component(Hero)]
pub fn hero() -> Html {
    let (badge_ref, badge_visible) = use_scroll_animation(config::DEFAULT_REVEAL_THRESHOLD);
    let (headline_ref, headline_visible) = use_scroll_animation(config::DEFAULT_REVEAL_THRESHOLD);
    let (sub_ref, sub_visible) = use_scroll_animation(config::DEFAULT_REVEAL_THRESHOLD);
    let (cta_ref, cta_visible) = use_scroll_animation(config::DEFAULT_REVEAL_THRESHOLD);
    let (stats_ref, stats_visible) = use_scroll_animation(config::DEFAULT_REVEAL_THRESHOLD);
    let scroll = use_smooth_scroll();

    let to_pricing = {
        let scroll_to_section = scroll.scroll_to_section.clone();
        Callback::from(move |_| scroll_to_section.emit(SectionId::Pricing.as_str().to_string()))
    };
    let to_how_it_works = {
        let scroll_to_section = scroll.scroll_to_section.clone();
        Callback::from(move |_| scroll_to_section.emit(SectionId::HowItWorks.as_str().to_string()))
    };

    html! {
        <section class="hero">
            <style>{HERO_CSS}</style>
            <div class="hero-glow one"></div>
            <div class="hero-glow two"></div>
            <div class="container">
                <div class="hero-grid">
                    <div>
                        <div ref={badge_ref} class={classes!("hero-badge", "glass-card", reveal_classes(Reveal::Up, badge_visible, None))}>
                            <FaIcon icon={Icon::Sparkles} />
                            <span>{"Powered by Advanced AI Technology"}</span>
                        </div>
                        <h1 ref={headline_ref} class={classes!("hero-title", reveal_classes(Reveal::Up, headline_visible, Some(1)))}>
                            {"AI-Powered"}<br/>
                            <span class="gradient-text">{"Video Call Agent"}</span>
                        </h1>
                        <p ref={sub_ref} class={classes!("hero-subtitle", reveal_classes(Reveal::Up, sub_visible, Some(2)))}>
                            {"Transform your meetings with AI-powered transcription, translation, and summaries. Crystal-clear 4K video meets enterprise intelligence."}
                        </p>
                        <div ref={cta_ref} class={classes!("hero-actions", reveal_classes(Reveal::Up, cta_visible, Some(3)))}>
                            <button class="btn btn-hero btn-xl" onclick={to_pricing}>
                                {"Try out for free"}
                                <FaIcon icon={Icon::ArrowRight} />
                            </button>
                            <button class="btn btn-glass btn-xl" onclick={to_how_it_works}>
                                <FaIcon icon={Icon::Play} />
                                {"Watch Demo"}
                            </button>
                        </div>
                        <div ref={stats_ref} class={classes!("hero-stats", reveal_classes(Reveal::Up, stats_visible, Some(4)))}>
                            { for HERO_STATS.iter().map(|stat| html! {
                                <div key={stat.label}>
                                    <div class="hero-stat-value gradient-text">{stat.value}</div>
                                    <div class="hero-stat-label">{stat.label}</div>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="hero-media glass-card">
                        <video autoplay=true loop=true muted=true playsinline=true>
                            <source src={config::asset("/ai-character-video.webm")} type="video/webm" />
                            <div class="media-fallback">
                                <p>{"AI Character Demo"}</p>
                            </div>
                        </video>
                    </div>
                </div>
            </div>
            <div class="floating-tile animate-float" style="top: 25%; left: 2.5rem; width: 5rem; height: 5rem; opacity: 0.3;"></div>
            <div class="floating-tile animate-float" style="bottom: 33%; right: 2.5rem; width: 4rem; height: 4rem; border-radius: 50%; opacity: 0.2; animation-delay: 2s;"></div>
            <div class="floating-tile animate-float" style="top: 50%; right: 25%; width: 3rem; height: 3rem; opacity: 0.25; animation-delay: 4s;"></div>
        </section>
    }
}
