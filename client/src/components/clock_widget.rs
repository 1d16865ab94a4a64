//! Local time readout refreshed every second.

use leptos::prelude::*;

use crate::state::widgets::{CLOCK_PERIOD, clock_now};
use crate::util::ticker::spawn_ticker;

/// Wall-clock widget. Its ticker lives exactly as long as the component.
#[component]
pub fn ClockWidget() -> impl IntoView {
    let now = RwSignal::new(clock_now());

    // Server-rendered text carries the server's clock; resync on mount.
    #[cfg(feature = "hydrate")]
    Effect::new(move || now.set(clock_now()));

    let ticker = spawn_ticker(CLOCK_PERIOD, move || now.set(clock_now()));
    on_cleanup(move || ticker.cancel());

    view! {
        <div class="widget widget--clock">
            <div class="widget__label">"Local Time"</div>
            <div class="widget__value">{move || now.get()}</div>
        </div>
    }
}
