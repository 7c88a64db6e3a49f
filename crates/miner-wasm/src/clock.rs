//! Monotonic clock for browsers and web workers.

use miner_core::Clock;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Performance;

/// Clock backed by `performance.now()` on the JS global scope.
///
/// Works in both windows and workers. Falls back to `Date.now()` only when
/// the host exposes no `performance` object.
pub struct PerformanceClock {
    performance: Option<Performance>,
}

impl PerformanceClock {
    pub fn new() -> Self {
        let performance = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("performance"))
            .ok()
            .and_then(|value| value.dyn_into::<Performance>().ok());

        PerformanceClock { performance }
    }
}

impl Default for PerformanceClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for PerformanceClock {
    /// Milliseconds on the host's clock.
    type Mark = f64;

    fn now(&self) -> f64 {
        match &self.performance {
            Some(performance) => performance.now(),
            None => js_sys::Date::now(),
        }
    }

    fn seconds_since(&self, start: f64) -> f64 {
        ((self.now() - start) / 1000.0).max(0.0)
    }
}
