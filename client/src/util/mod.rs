//! Browser-facing helpers.
//!
//! `ticker` wraps the one timing primitive the widgets need, so components
//! never touch `gloo_timers` directly and the loop itself runs under any
//! executor in tests.

pub mod ticker;
