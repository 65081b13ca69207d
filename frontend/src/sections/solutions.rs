use yew::prelude::*;

use crate::components::motion::Entrance;
use crate::components::reveal::FaIcon;
use crate::config;
use crate::content::{Icon, SOLUTIONS};
use crate::utils::scroll_direction::{side_offset, use_scroll_direction};
use crate::utils::visibility::{reveal_classes, use_scroll_animation, Reveal};

const SOLUTIONS_CSS: &str = r#"
    .solutions {
        padding: 8rem 0;
    }
    .solution-list {
        display: flex;
        flex-direction: column;
        gap: 8rem;
    }
    .solution-row {
        display: flex;
        gap: 5rem;
        align-items: center;
    }
    .solution-row.reversed {
        flex-direction: row-reverse;
    }
    .solution-content {
        flex: 1;
        padding: 2.5rem;
        border: 1px solid var(--primary);
        border-radius: 1rem;
        background: rgba(29, 155, 240, 0.1);
    }
    .solution-content h3 {
        font-size: 2.75rem;
        margin: 0.5rem 0 1.5rem;
    }
    .solution-content p {
        font-size: 1.25rem;
        color: var(--muted-foreground);
        line-height: 1.6;
    }
    .solution-features {
        list-style: none;
        margin: 1.5rem 0;
        padding: 1.75rem;
        border: 1px solid var(--primary);
        border-radius: 1rem;
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
    }
    .solution-features li {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }
    .solution-features i {
        color: var(--primary);
    }
    .solution-art {
        flex: 1;
        aspect-ratio: 4 / 3;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 1rem;
        color: var(--muted-foreground);
    }
    .solution-art video {
        width: 100%;
        height: 100%;
        object-fit: contain;
        border-radius: 1rem;
    }
    .solution-art .icon-tile {
        width: 6rem;
        height: 6rem;
        font-size: 2.5rem;
        background: linear-gradient(135deg, var(--primary), var(--accent));
    }
    @media (max-width: 1024px) {
        .solution-row,
        .solution-row.reversed {
            flex-direction: column;
            gap: 3rem;
        }
    }
"#;

#[derive(Properties, PartialEq)]
struct SolutionRowProps {
    index: usize,
}

#[function_component(SolutionRow)]
fn solution_row(props: &SolutionRowProps) -> Html {
    let solution = &SOLUTIONS[props.index];
    let is_even = props.index % 2 == 0;
    let (node, visible) = use_scroll_animation(config::SECTION_REVEAL_THRESHOLD);
    let direction = use_scroll_direction();

    let content = Entrance {
        x: side_offset(direction, visible, true, is_even, 60.0),
        scale: 0.95,
        ..Entrance::default()
    };
    let artwork = Entrance {
        x: side_offset(direction, visible, false, is_even, 60.0),
        scale: 0.95,
        delay: 0.2,
        ..Entrance::default()
    };

    html! {
        <div ref={node} class={classes!("solution-row", (!is_even).then_some("reversed"))}>
            <div class="solution-content motion" style={content.style(visible)}>
                <span class="section-eyebrow">{solution.subtitle}</span>
                <h3>{solution.title}</h3>
                <p>{solution.description}</p>
                <ul class="solution-features">
                    { for solution.features.iter().enumerate().map(|(index, feature)| {
                        let item = Entrance {
                            x: -20.0,
                            duration: 0.4,
                            delay: 0.3 + index as f64 * 0.1,
                            ..Entrance::default()
                        };
                        html! {
                            <li key={*feature} class="motion" style={item.style(visible)}>
                                <FaIcon icon={Icon::CheckCircle} />
                                <span>{*feature}</span>
                            </li>
                        }
                    }) }
                </ul>
                <button class="btn btn-hero">
                    {"Learn More"}
                    <FaIcon icon={Icon::ArrowRight} />
                </button>
            </div>
            <div class="solution-art glass-card motion" style={artwork.style(visible)}>
                <video autoplay=true loop=true muted=true playsinline=true>
                    <source src={config::asset(solution.artwork.media())} type="video/mp4" />
                    <div class="icon-tile"><FaIcon icon={solution.artwork.icon()} /></div>
                    <p>{"Interactive Demo"}</p>
                </video>
            </div>
        </div>
    }
}

#[function_component(Solutions)]
pub fn solutions() -> Html {
    let (header_ref, header_visible) = use_scroll_animation(config::DEFAULT_REVEAL_THRESHOLD);

    html! {
        <section class="solutions">
            <style>{SOLUTIONS_CSS}</style>
            <div class="container">
                <div ref={header_ref} class={classes!("section-header", reveal_classes(Reveal::Up, header_visible, None))}>
                    <span class="section-eyebrow">{"Solutions"}</span>
                    <h2 class="section-title">
                        {"Powerful Tools for"}<br/>
                        <span class="gradient-text">{"Every Use Case"}</span>
                    </h2>
                </div>
                <div class="solution-list">
                    { for (0..SOLUTIONS.len()).map(|index| html! { <SolutionRow key={index} {index} /> }) }
                </div>
            </div>
        </section>
    }
}
