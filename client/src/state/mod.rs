//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `filter` holds the page's search inputs and the pure function that turns
//! them into the visible shop list. `widgets` holds the small models behind
//! the hero widgets so their behavior is testable without a browser.

pub mod filter;
pub mod widgets;
