//! Simulated weather readout.
//!
//! DESIGN
//! ======
//! The forecast is decorative. It is drawn once when the widget mounts in
//! the browser and never changes afterwards; there is no weather feed.

use leptos::prelude::*;

use crate::state::widgets::Forecast;

#[component]
pub fn WeatherWidget() -> impl IntoView {
    let forecast = RwSignal::new(Forecast::default());

    #[cfg(feature = "hydrate")]
    Effect::new(move || forecast.set(Forecast::pick(js_sys::Math::random())));

    view! {
        <div class="widget widget--weather">
            <div class="widget__label">{move || format!("{} Weather", forecast.get().emoji())}</div>
            <div class="widget__value widget__value--large">
                {move || format!("{}°F", forecast.get().temperature_f())}
            </div>
            <div class="widget__caption">{move || forecast.get().condition()}</div>
        </div>
    }
}
