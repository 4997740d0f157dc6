//! Yew hooks binding the `motion` controllers to timers, animation frames,
//! window events and intersection observers.

pub mod dom;
pub mod use_auto_scroll;
pub mod use_count_up;
pub mod use_scroll;
pub mod use_scrollspy;

pub use use_auto_scroll::{use_auto_scroll, UseAutoScrollHandle};
pub use use_count_up::{use_count_up, use_count_up_on_view, UseCountUpHandle};
pub use use_scroll::{use_parallax, use_scroll_fade, use_scroll_progress};
pub use use_scrollspy::use_scrollspy;
