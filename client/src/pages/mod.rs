//! Route-level screens.
//!
//! The site has a single page, `home`. It owns the filter inputs and lays
//! out the widgets and the shop grid from `components`.

pub mod home;
