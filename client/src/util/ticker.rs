//! Repeating timers owned by a single widget.
//!
//! DESIGN
//! ======
//! A ticker is an async loop that sleeps one period and then fires its
//! callback. The owning component holds a `TickerHandle` and cancels it from
//! `on_cleanup`. Cancellation is a shared flag checked after every sleep, so
//! once `cancel()` returns the callback never runs again, even if a sleep is
//! still pending.
//!
//! Each sleep is measured to the next boundary of the schedule fixed at
//! spawn time, so late wakeups do not accumulate into drift.
//!
//! TRADE-OFFS
//! ==========
//! Timers only exist in the browser. Server rendering gets an inert handle so
//! components can use the same code path under both features.

#[cfg(test)]
#[path = "ticker_test.rs"]
mod ticker_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Liveness flag shared between a component and its ticker loop.
#[derive(Clone, Debug)]
pub struct TickerHandle {
    alive: Arc<AtomicBool>,
}

impl TickerHandle {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Stop the ticker. Idempotent.
    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

impl Default for TickerHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive `on_tick` once per `sleep()` until `handle` is cancelled.
pub async fn run_ticker<S, Fut, F>(handle: TickerHandle, mut sleep: S, mut on_tick: F)
where
    S: FnMut() -> Fut,
    Fut: Future<Output = ()>,
    F: FnMut(),
{
    while handle.is_active() {
        sleep().await;
        if !handle.is_active() {
            break;
        }
        on_tick();
    }
}

/// Time from `elapsed` (since the ticker started) to the next multiple of
/// `period`. A wakeup exactly on a boundary waits a full period.
#[must_use]
pub fn next_delay(elapsed: Duration, period: Duration) -> Duration {
    let period_ns = period.as_nanos();
    if period_ns == 0 {
        return period;
    }
    let remaining = period_ns - elapsed.as_nanos() % period_ns;
    Duration::from_nanos(u64::try_from(remaining).unwrap_or(u64::MAX))
}

/// Start a ticker that calls `on_tick` every `period`.
///
/// Callers must cancel the returned handle on teardown:
///
/// ```ignore
/// let ticker = spawn_ticker(CLOCK_PERIOD, move || now.set(clock_now()));
/// on_cleanup(move || ticker.cancel());
/// ```
pub fn spawn_ticker(period: Duration, on_tick: impl FnMut() + 'static) -> TickerHandle {
    let handle = TickerHandle::new();

    #[cfg(feature = "hydrate")]
    {
        log::debug!("ticker started: period_ms={}", period.as_millis());
        let started_ms = js_sys::Date::now();
        leptos::task::spawn_local(run_ticker(
            handle.clone(),
            move || {
                let elapsed_ms = (js_sys::Date::now() - started_ms).max(0.0);
                let elapsed = Duration::from_secs_f64(elapsed_ms / 1000.0);
                gloo_timers::future::sleep(next_delay(elapsed, period))
            },
            on_tick,
        ));
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (period, on_tick);
    }

    handle
}
