pub mod easing;
pub mod error;
pub mod scroll_direction;
pub mod scroll_spy;
pub mod smooth_scroll;
pub mod visibility;
