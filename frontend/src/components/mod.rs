pub mod footer;
pub mod motion;
pub mod navbar;
pub mod reveal;
pub mod theme_toggle;
