use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures at the DOM seam. Hooks log these and carry on, nothing reaches the page.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScrollError {
    #[error("window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("section `{0}` not found")]
    SectionNotFound(String),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for ScrollError {
    fn from(value: JsValue) -> Self {
        ScrollError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type ScrollResult<T> = Result<T, ScrollError>;

pub(crate) fn window() -> ScrollResult<web_sys::Window> {
    web_sys::window().ok_or(ScrollError::NoWindow)
}

pub(crate) fn document() -> ScrollResult<web_sys::Document> {
    window()?.document().ok_or(ScrollError::NoDocument)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_piece() {
        assert_eq!(
            ScrollError::SectionNotFound("pricing".into()).to_string(),
            "section `pricing` not found"
        );
        assert_eq!(ScrollError::NoWindow.to_string(), "window is not available");
    }
}
