//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Widgets are self-contained: each owns its state and its timer, and none
//! reads the shop filter. `shop_card` renders a single catalog record.

pub mod clock_widget;
pub mod shop_card;
pub mod tips_widget;
pub mod weather_widget;
