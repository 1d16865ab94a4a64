//! Rotating pet care tips.

use leptos::prelude::*;

use crate::state::widgets::{TIPS_PERIOD, TipRotation};
use crate::util::ticker::spawn_ticker;

/// Shows one tip at a time, advancing every five seconds.
/// Remounting restarts from the first tip.
#[component]
pub fn TipsWidget() -> impl IntoView {
    let rotation = RwSignal::new(TipRotation::default());

    let ticker = spawn_ticker(TIPS_PERIOD, move || rotation.update(TipRotation::advance));
    on_cleanup(move || ticker.cancel());

    view! {
        <div class="widget widget--tips">
            <div class="widget__title">"Pet Care Tip"</div>
            <div class="widget__text">{move || rotation.get().current()}</div>
        </div>
    }
}
