//! Uniform random selection for the startup image.

/// A sample from the unit interval `[0, 1)`.
///
/// Browsers provide `Math.random()`; natively the `rand` thread RNG stands
/// in so the same selection code is testable off-target.
#[cfg(target_arch = "wasm32")]
fn random_unit() -> f64 {
    js_sys::Math::random()
}

#[cfg(not(target_arch = "wasm32"))]
fn random_unit() -> f64 {
    rand::random::<f64>()
}

/// Returns a uniformly distributed integer in `[ceil(min), floor(max))`.
///
/// With `min = 0` and `max = len`, every index is equally likely. The range
/// must be non-empty after rounding; callers guard the empty-catalog case
/// before drawing.
pub fn uniform_random_int(min: f64, max: f64) -> i64 {
    let lo = min.ceil();
    let hi = max.floor();
    (random_unit() * (hi - lo) + lo).floor() as i64
}
