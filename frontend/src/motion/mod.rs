//! Pure state machines behind the page's scroll and timer driven hooks.
//!
//! Nothing in here touches the DOM. The hooks in `crate::hooks` feed these
//! types with timestamps and viewport samples and render whatever they
//! derive, which keeps the arithmetic testable outside a browser.

pub mod carousel;
pub mod count_up;
pub mod frame;
pub mod scroll;
pub mod scrollspy;
pub mod visibility;
