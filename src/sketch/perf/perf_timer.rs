//! Render timing: `Date.now()` in the browser, `Instant` natively

#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[inline]
fn now() -> Stamp {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::Instant::now()
    }
}

#[inline]
fn millis_since(start: Stamp) -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() - start
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Run `f`, returning its result and wall time in milliseconds
pub(crate) fn timed<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let start = now();
    let out = f();
    (out, millis_since(start))
}
