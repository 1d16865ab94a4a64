//! Models behind the hero widgets: clock, simulated weather, rotating tips.
//!
//! DESIGN
//! ======
//! Each widget owns its state exclusively. The components in
//! `components::*_widget` only wire these models to signals and timers.

#[cfg(test)]
#[path = "widgets_test.rs"]
mod widgets_test;

use std::time::Duration;

use chrono::{Datelike, Local, Timelike};

/// Clock refresh period.
pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);

/// Tip rotation period.
pub const TIPS_PERIOD: Duration = Duration::from_secs(5);

/// Weather condition labels, indexed by `Forecast::index`.
pub const CONDITIONS: [&str; 4] = ["Sunny", "Cloudy", "Partly Cloudy", "Clear"];

/// Pet care tips shown in rotation.
pub const TIPS: [&str; 4] = [
    "Always bring a leash for your pup.",
    "Water bowls available at most pet-friendly cafes.",
    "Ask before ordering for any pet accommodations.",
    "Respect quiet hours and other patrons.",
];

// =============================================================================
// CLOCK
// =============================================================================

/// Time fields shown by the clock, each formatted `"2-digit"`.
pub const CLOCK_FIELDS: [&str; 3] = ["hour", "minute", "second"];
pub const CLOCK_FIELD_STYLE: &str = "2-digit";

/// Two-digit 12-hour time with meridiem, e.g. `"01:05:09 PM"`.
///
/// Used where no browser locale is available (server rendering, tests).
#[must_use]
pub fn format_clock(time: impl Timelike) -> String {
    let (pm, hour) = time.hour12();
    let meridiem = if pm { "PM" } else { "AM" };
    format!("{hour:02}:{:02}:{:02} {meridiem}", time.minute(), time.second())
}

/// Current local wall-clock time, formatted for the clock widget.
///
/// In the browser this goes through `Intl.DateTimeFormat` with the user's
/// default locale, so 24-hour locales get a 24-hour clock.
#[must_use]
pub fn clock_now() -> String {
    #[cfg(feature = "hydrate")]
    {
        if let Some(label) = locale_clock_label() {
            return label;
        }
    }
    format_clock(Local::now())
}

#[cfg(feature = "hydrate")]
fn locale_clock_label() -> Option<String> {
    let options = js_sys::Object::new();
    for field in CLOCK_FIELDS {
        js_sys::Reflect::set(&options, &field.into(), &CLOCK_FIELD_STYLE.into()).ok()?;
    }
    // An empty locale list selects the browser default.
    let formatter = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &options);
    formatter
        .format()
        .call1(&wasm_bindgen::JsValue::UNDEFINED, &js_sys::Date::new_0())
        .ok()?
        .as_string()
}

/// Current local calendar year.
#[must_use]
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Footer copyright text.
#[must_use]
pub fn copyright_line(year: i32) -> String {
    format!("© {year} CoffeePaws")
}

// =============================================================================
// WEATHER
// =============================================================================

/// Simulated weather reading. Chosen once per widget mount, then frozen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Forecast {
    index: usize,
}

impl Forecast {
    /// Forecast for a condition index; out-of-range indices wrap.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self { index: index % CONDITIONS.len() }
    }

    /// Map a uniform sample in `[0, 1)` to a forecast.
    /// Samples outside that range clamp to the nearest end.
    #[must_use]
    pub fn pick(unit: f64) -> Self {
        let last = CONDITIONS.len() - 1;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let index = if unit.is_nan() || unit <= 0.0 {
            0
        } else {
            ((unit * CONDITIONS.len() as f64).floor() as usize).min(last)
        };
        Self { index }
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn condition(self) -> &'static str {
        CONDITIONS[self.index]
    }

    /// Temperature in °F: 68 plus two degrees per condition index.
    #[must_use]
    pub fn temperature_f(self) -> u32 {
        // index < 4, so this never truncates.
        #[allow(clippy::cast_possible_truncation)]
        let step = self.index as u32;
        68 + 2 * step
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        let condition = self.condition();
        if condition == "Sunny" {
            "☀️"
        } else if condition.contains("Cloud") {
            "☁️"
        } else {
            "🌤️"
        }
    }
}

// =============================================================================
// TIPS
// =============================================================================

/// Cyclic position in `TIPS`. A fresh rotation always starts at the first tip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TipRotation {
    index: usize,
}

impl TipRotation {
    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current(self) -> &'static str {
        TIPS[self.index]
    }

    /// Step to the next tip, wrapping after the last.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % TIPS.len();
    }
}
