use yew::prelude::*;

use crate::components::motion::Entrance;
use crate::components::reveal::FaIcon;
use crate::config;
use crate::content::{Icon, Plan, PLANS};
use crate::utils::scroll_direction::{entrance_offset, use_scroll_direction};
use crate::utils::visibility::use_scroll_animation;

const PRICING_CSS: &str = r#"
    .pricing {
        padding: 8rem 0;
        position: relative;
    }
    .pricing::before {
        content: '';
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom, transparent, rgba(26, 33, 48, 0.2), transparent);
    }
    .plan-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
        max-width: 72rem;
        margin: 0 auto;
    }
    .plan-card {
        position: relative;
        padding: 2rem;
        transform-style: preserve-3d;
    }
    .plan-card:hover {
        translate: 0 -0.5rem;
    }
    .plan-card.popular {
        border-color: rgba(29, 155, 240, 0.5);
        box-shadow: 0 0 60px rgba(29, 155, 240, 0.15);
    }
    .popular-badge {
        position: absolute;
        top: -1rem;
        left: 50%;
        translate: -50% 0;
        display: flex;
        align-items: center;
        gap: 0.25rem;
        padding: 0.375rem 1rem;
        border-radius: 999px;
        font-size: 0.875rem;
        font-weight: 600;
        white-space: nowrap;
        color: var(--primary-foreground);
        background: linear-gradient(90deg, var(--primary), var(--accent));
    }
    .plan-header {
        text-align: center;
        margin-bottom: 2rem;
    }
    .plan-header h3 {
        font-size: 1.5rem;
        margin: 0 0 0.5rem;
    }
    .plan-header p {
        color: var(--muted-foreground);
        font-size: 0.875rem;
        margin: 0 0 1.5rem;
    }
    .plan-price {
        display: flex;
        align-items: baseline;
        justify-content: center;
        gap: 0.25rem;
        color: var(--muted-foreground);
    }
    .plan-price .amount {
        font-size: 3rem;
        font-weight: 700;
    }
    .plan-features {
        list-style: none;
        padding: 0;
        margin: 0 0 2rem;
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .plan-features li {
        display: flex;
        align-items: flex-start;
        gap: 0.75rem;
    }
    .plan-features i {
        color: var(--primary);
        margin-top: 0.2rem;
    }
    .pricing-cta {
        margin-top: 5rem;
        text-align: center;
    }
    .pricing-cta p {
        color: var(--muted-foreground);
        margin-bottom: 1rem;
    }
    @media (max-width: 1024px) {
        .plan-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (max-width: 768px) {
        .plan-grid {
            grid-template-columns: 1fr;
        }
        .plan-card {
            padding: 1.5rem;
        }
    }
"#;

#[derive(Properties, PartialEq)]
struct PricingCardProps {
    index: usize,
}

#[function_component(PricingCard)]
fn pricing_card(props: &PricingCardProps) -> Html {
    let plan: &Plan = &PLANS[props.index];
    let (node, visible) = use_scroll_animation(config::SECTION_REVEAL_THRESHOLD);
    let direction = use_scroll_direction();

    // Cards stack in one after another.
    let stack_delay = props.index as f64 * 0.15;
    let card = Entrance {
        y: entrance_offset(direction, visible, 80.0),
        scale: 0.9,
        duration: 0.7,
        delay: stack_delay,
        ..Entrance::default()
    };
    let badge = Entrance {
        y: -10.0,
        duration: 0.3,
        delay: stack_delay + 0.3,
        ..Entrance::default()
    };
    let custom = plan.price.is_custom();

    html! {
        <div
            ref={node}
            class={classes!("plan-card", "glass-card", "motion", plan.popular.then_some("popular"))}
            style={card.style(visible)}
        >
            if plan.popular {
                <div class="popular-badge motion" style={badge.style(visible)}>
                    <FaIcon icon={Icon::Sparkles} />
                    {"Most Popular"}
                </div>
            }
            <div class="plan-header">
                <h3>{plan.name}</h3>
                <p>{plan.description}</p>
                <div class="plan-price">
                    if !custom {
                        <span>{"$"}</span>
                    }
                    <span class="amount gradient-text">{plan.price.amount()}</span>
                    if !custom {
                        <span>{"/month"}</span>
                    }
                </div>
            </div>
            <ul class="plan-features">
                { for plan.features.iter().enumerate().map(|(feature_index, feature)| {
                    let item = Entrance {
                        x: -20.0,
                        duration: 0.3,
                        delay: stack_delay + 0.4 + feature_index as f64 * 0.05,
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
            <button class={classes!("btn", "btn-block", if plan.popular { "btn-hero" } else { "btn-glass" })}>
                {plan.price.cta_label()}
            </button>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let (header_ref, header_visible) = use_scroll_animation(config::DEFAULT_REVEAL_THRESHOLD);
    let (cta_ref, cta_visible) = use_scroll_animation(config::DEFAULT_REVEAL_THRESHOLD);
    let direction = use_scroll_direction();

    let header = Entrance {
        y: entrance_offset(direction, header_visible, 40.0),
        ..Entrance::default()
    };
    let enterprise = Entrance {
        y: 30.0,
        ..Entrance::default()
    };

    html! {
        <section class="pricing">
            <style>{PRICING_CSS}</style>
            <div class="container">
                <div ref={header_ref} class="section-header motion" style={header.style(header_visible)}>
                    <span class="section-eyebrow">{"Pricing"}</span>
                    <h2 class="section-title">
                        {"Simple, Transparent"}<br/>
                        <span class="gradient-text">{"Pricing"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Choose the plan that fits your needs. All plans include our core features with no hidden fees."}
                    </p>
                </div>

                <div class="plan-grid">
                    { for (0..PLANS.len()).map(|index| html! { <PricingCard key={index} {index} /> }) }
                </div>

                <div ref={cta_ref} class="pricing-cta motion" style={enterprise.style(cta_visible)}>
                    <p>{"Need a custom solution? Let's talk about your specific requirements."}</p>
                    <button class="btn btn-outline">{"Schedule a Demo"}</button>
                </div>
            </div>
        </section>
    }
}
