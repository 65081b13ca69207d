use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::FaIcon;
use crate::content::Icon;

const THEME_ATTR: &str = "data-theme";

/// Page colour scheme. Lives on the root element only, a reload starts dark again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn attr(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon for the scheme the button switches to.
    pub fn toggle_icon(self) -> Icon {
        match self {
            Theme::Dark => Icon::Sun,
            Theme::Light => Icon::Moon,
        }
    }
}

fn root_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

fn current_theme() -> Theme {
    let value = root_element().and_then(|root| root.get_attribute(THEME_ATTR));
    Theme::from_attr(value.as_deref())
}

fn apply_theme(theme: Theme) {
    let Some(root) = root_element() else {
        return;
    };
    if let Err(e) = root.set_attribute(THEME_ATTR, theme.attr()) {
        log::warn!("Could not switch theme: {:?}", e);
    }
}

/// Light/dark switch. Several toggles can be mounted at once; each reads the
/// scheme from the document so they never disagree.
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state(current_theme);

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = current_theme().toggled();
            apply_theme(next);
            theme.set(next);
        })
    };

    html! {
        <button class="btn btn-ghost theme-toggle" aria-label="Toggle theme" {onclick}>
            <FaIcon icon={theme.toggle_icon()} />
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_or_missing_attribute_means_dark() {
        assert_eq!(Theme::from_attr(None), Theme::Dark);
        assert_eq!(Theme::from_attr(Some("sepia")), Theme::Dark);
        assert_eq!(Theme::from_attr(Some("light")), Theme::Light);
    }

    #[test]
    fn toggling_round_trips_through_the_attribute() {
        let light = Theme::Dark.toggled();
        assert_eq!(light, Theme::Light);
        assert_eq!(Theme::from_attr(Some(light.attr())), Theme::Light);
        assert_eq!(light.toggled(), Theme::Dark);
    }

    #[test]
    fn icon_shows_the_other_scheme() {
        assert_eq!(Theme::Dark.toggle_icon(), Icon::Sun);
        assert_eq!(Theme::Light.toggle_icon(), Icon::Moon);
    }
}
