use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlMediaElement;
use yew::prelude::*;

use crate::components::reveal::FaIcon;
use crate::config;
use crate::content::{media_kind, MediaKind, SectionId, Step, STEPS};
use crate::utils::smooth_scroll::use_smooth_scroll;
use crate::utils::visibility::{reveal_classes, use_in_view, use_scroll_animation, Reveal};

const HOW_CSS: &str = r#"
    .how-it-works {
        padding: 8rem 0;
        position: relative;
        overflow: hidden;
    }
    .steps {
        max-width: 56rem;
        margin: 0 auto;
        display: flex;
        flex-direction: column;
        gap: 2rem;
    }
    .step-card {
        position: relative;
        padding: 3rem;
    }
    .step-body {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 2rem;
        align-items: center;
    }
    .step-heading {
        display: flex;
        align-items: center;
        gap: 1rem;
        margin-bottom: 1.5rem;
    }
    .step-number {
        font-size: 2.25rem;
        font-weight: 700;
        color: rgba(29, 155, 240, 0.2);
    }
    .step-card h3 {
        font-size: 1.9rem;
        margin: 0 0 1rem;
    }
    .step-card p {
        color: var(--muted-foreground);
        font-size: 1.1rem;
        line-height: 1.6;
    }
    .step-media {
        height: 18rem;
        border-radius: 1rem;
        overflow: hidden;
        background: var(--muted);
    }
    .step-media video,
    .step-media img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .step-badge {
        position: absolute;
        top: 2rem;
        right: 2rem;
        width: 3rem;
        height: 3rem;
        font-size: 1.1rem;
        font-weight: 700;
    }
    .how-cta {
        text-align: center;
        margin-top: 6rem;
    }
    .how-cta p {
        color: var(--muted-foreground);
        font-size: 1.1rem;
        margin-bottom: 1.5rem;
    }
    .how-cta-actions {
        display: flex;
        justify-content: center;
        gap: 1rem;
    }
    @media (max-width: 768px) {
        .step-card {
            padding: 1.5rem;
        }
        .step-body {
            grid-template-columns: 1fr;
        }
        .step-badge {
            top: 1.5rem;
            right: 1.5rem;
        }
        .how-cta-actions {
            flex-direction: column;
            align-items: center;
        }
    }
"#;

/// Starts playback. Browsers reject `play()` when autoplay is blocked; that
/// only leaves the first frame showing.
fn play(video: &HtmlMediaElement) {
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("Step video did not start: {:?}", e);
            }
        }),
        Err(e) => log::debug!("Step video did not start: {:?}", e),
    }
}

#[derive(Properties, PartialEq)]
struct StepCardProps {
    index: usize,
}

#[function_component(StepCard)]
fn step_card(props: &StepCardProps) -> Html {
    let step: &Step = &STEPS[props.index];
    let (node, visible) = use_scroll_animation(config::SECTION_REVEAL_THRESHOLD);
    let video_ref = use_node_ref();
    let in_view = use_in_view(node.clone(), config::SECTION_REVEAL_THRESHOLD);

    // Footage runs only while the card is on screen.
    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |in_view| {
                if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                    if *in_view {
                        play(&video);
                    } else if !video.paused() {
                        if let Err(e) = video.pause() {
                            log::debug!("Step video did not pause: {:?}", e);
                        }
                    }
                }
                || ()
            },
            in_view,
        );
    }

    let media = config::asset(step.media);
    let preview = match media_kind(step.media) {
        MediaKind::Video => html! {
            <video ref={video_ref} src={media} loop=true muted=true playsinline=true preload="auto"></video>
        },
        MediaKind::Image => html! {
            <img src={media} alt={step.title} loading="lazy" />
        },
    };
    let accent = format!("background: {};", step.accent.gradient());

    html! {
        <div ref={node} class={classes!("step-card", "glass-card", reveal_classes(Reveal::Up, visible, None))}>
            <div class="step-body">
                <div>
                    <div class="step-heading">
                        <div class="icon-tile" style={accent.clone()}>
                            <FaIcon icon={step.icon} />
                        </div>
                        <div class="step-number">{step.number.to_string()}</div>
                    </div>
                    <h3>{step.title}</h3>
                    <p>{step.description}</p>
                </div>
                <div class="step-media">{preview}</div>
            </div>
            <div class="step-badge icon-tile" style={accent}>{step.number.to_string()}</div>
        </div>
    }
}

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let (header_ref, header_visible) = use_scroll_animation(config::DEFAULT_REVEAL_THRESHOLD);
    let (cta_ref, cta_visible) = use_scroll_animation(config::DEFAULT_REVEAL_THRESHOLD);
    let scroll = use_smooth_scroll();

    let jump = |section: SectionId| {
        let scroll_to_section = scroll.scroll_to_section.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section.emit(section.as_str().to_string());
        })
    };

    html! {
        <section class="how-it-works">
            <style>{HOW_CSS}</style>
            <div class="container">
                <div ref={header_ref} class={classes!("section-header", reveal_classes(Reveal::Up, header_visible, None))}>
                    <span class="section-eyebrow">{"How It Works"}</span>
                    <h2 class="section-title">
                        {"Four Simple Steps to"}<br/>
                        <span class="gradient-text">{"Smarter Meetings"}</span>
                    </h2>
                    <p class="section-lead">{"Experience the power of AI-enhanced video communication"}</p>
                </div>
                <div class="steps">
                    { for (0..STEPS.len()).map(|index| html! { <StepCard key={index} {index} /> }) }
                </div>
                <div ref={cta_ref} class={classes!("how-cta", reveal_classes(Reveal::Up, cta_visible, None))}>
                    <p>{"Ready to transform your video meetings?"}</p>
                    <div class="how-cta-actions">
                        <a href="#pricing" class="btn btn-hero" onclick={jump(SectionId::Pricing)}>{"Try out for free"}</a>
                        <a href="#solutions" class="btn btn-outline" onclick={jump(SectionId::Solutions)}>{"Learn More"}</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
