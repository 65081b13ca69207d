use yew::prelude::*;

use crate::components::reveal::FaIcon;
use crate::config;
use crate::content::{Icon, LOGOS, TESTIMONIALS};
use crate::utils::visibility::{reveal_classes, use_scroll_animation, Reveal};

const TESTIMONIALS_CSS: &str = r#"
    .testimonials {
        padding: 8rem 0;
        position: relative;
        overflow: hidden;
    }
    .testimonials-glow {
        position: absolute;
        top: 50%;
        left: 50%;
        width: 50rem;
        height: 50rem;
        transform: translate(-50%, -50%);
        border-radius: 50%;
        background: rgba(29, 155, 240, 0.03);
        filter: blur(150px);
        pointer-events: none;
    }
    .logos {
        margin-bottom: 5rem;
        text-align: center;
    }
    .logos p {
        color: var(--muted-foreground);
        margin-bottom: 2rem;
    }
    .logo-row {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        align-items: center;
        gap: 4rem;
    }
    .logo-row span {
        font-size: 1.5rem;
        font-weight: 700;
        color: rgba(148, 163, 184, 0.4);
        transition: color 0.3s ease;
    }
    .logo-row span:hover {
        color: rgba(29, 155, 240, 0.6);
    }
    .testimonial-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
        max-width: 72rem;
        margin: 0 auto;
    }
    .testimonial-card {
        padding: 2rem;
    }
    .testimonial-card:hover {
        box-shadow: 0 0 40px rgba(29, 155, 240, 0.1);
    }
    .stars {
        display: flex;
        gap: 0.25rem;
        margin-bottom: 1.5rem;
        color: var(--primary);
    }
    .testimonial-card blockquote {
        font-size: 1.125rem;
        line-height: 1.6;
        margin: 0 0 2rem;
    }
    .testimonial-author {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .avatar {
        width: 3rem;
        height: 3rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        font-weight: 600;
        color: var(--primary-foreground);
        background: linear-gradient(135deg, var(--primary), var(--accent));
    }
    .testimonial-author p {
        margin: 0;
    }
    .testimonial-author .author-name {
        font-weight: 600;
    }
    .testimonial-author .author-role {
        font-size: 0.875rem;
        color: var(--muted-foreground);
    }
    @media (max-width: 768px) {
        .testimonial-grid {
            grid-template-columns: 1fr;
        }
        .logo-row {
            gap: 2rem;
        }
    }
"#;

const STARS: usize = 5;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let (logos_ref, logos_visible) = use_scroll_animation(config::DEFAULT_REVEAL_THRESHOLD);
    let (header_ref, header_visible) = use_scroll_animation(config::DEFAULT_REVEAL_THRESHOLD);
    let (grid_ref, grid_visible) = use_scroll_animation(0.1);

    html! {
        <section class="testimonials">
            <style>{TESTIMONIALS_CSS}</style>
            <div class="testimonials-glow"></div>
            <div class="container">
                <div ref={logos_ref} class={classes!("logos", reveal_classes(Reveal::Up, logos_visible, None))}>
                    <p>{"Trusted by leading companies worldwide"}</p>
                    <div class="logo-row">
                        { for LOGOS.iter().map(|logo| html! { <span key={*logo}>{*logo}</span> }) }
                    </div>
                </div>

                <div ref={header_ref} class={classes!("section-header", reveal_classes(Reveal::Up, header_visible, None))}>
                    <span class="section-eyebrow">{"Testimonials"}</span>
                    <h2 class="section-title">
                        {"Loved by Teams"}<br/>
                        <span class="gradient-text">{"Everywhere"}</span>
                    </h2>
                </div>

                <div ref={grid_ref} class="testimonial-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                        <div
                            key={testimonial.author}
                            class={classes!("testimonial-card", "glass-card", reveal_classes(Reveal::Scale, grid_visible, Some(index + 1)))}
                        >
                            <div class="stars">
                                { for (0..STARS).map(|star| html! { <FaIcon key={star} icon={Icon::Star} /> }) }
                            </div>
                            <blockquote>{format!("\"{}\"", testimonial.quote)}</blockquote>
                            <div class="testimonial-author">
                                <div class="avatar">{testimonial.initials()}</div>
                                <div>
                                    <p class="author-name">{testimonial.author}</p>
                                    <p class="author-role">{format!("{}, {}", testimonial.role, testimonial.company)}</p>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
