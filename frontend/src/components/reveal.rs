use yew::prelude::*;

use crate::config;
use crate::content::{Icon, SectionId};
use crate::utils::visibility::{reveal_classes, use_scroll_animation, Reveal};

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub id: SectionId,
    pub reveal: Reveal,
    #[prop_or(config::SECTION_REVEAL_THRESHOLD)]
    pub threshold: f64,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor wrapper for a page section that animates in the first time it scrolls into view.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let (node, visible) = use_scroll_animation(props.threshold);

    html! {
        <div
            id={props.id.as_str()}
            ref={node}
            class={reveal_classes(props.reveal, visible, None)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaIconProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(FaIcon)]
pub fn fa_icon(props: &FaIconProps) -> Html {
    html! {
        <i class={classes!(props.icon.class(), props.class.clone())} aria-hidden="true"></i>
    }
}
