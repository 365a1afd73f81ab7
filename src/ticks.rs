//! "Nice" axis tick generation.
//!
//! Ticks are round values (multiples of 1, 2 or 5 times a power of ten) that
//! fall inside the requested interval. Sub-unit steps are carried as a negative
//! reciprocal (`-10` for a step of `0.1`) so that every tick is computed by a
//! single division of an integer, which keeps values like `0.3` exact.

/// Tick count used by axes that do not ask for a specific one
pub const DEFAULT_TICK_COUNT: i32 = 5;

/// Returns roughly `count` nice ticks spanning `[start, stop]`.
///
/// The output follows the caller's direction: ascending when `start <= stop`,
/// descending otherwise. Degenerate inputs produce an empty vector rather
/// than an error.
///
/// # Examples
/// ```
/// use chartpick::generate_ticks;
///
/// assert_eq!(generate_ticks(0.0, 1000.0, 5), vec![0.0, 200.0, 400.0, 600.0, 800.0, 1000.0]);
/// assert_eq!(generate_ticks(7.0, 7.0, 3), vec![7.0]);
/// assert!(generate_ticks(0.0, 1.0, 0).is_empty());
/// ```
pub fn generate_ticks(start: f64, stop: f64, count: i32) -> Vec<f64> {
    if start == stop && count > 0 {
        return vec![start];
    }

    let reverse = stop < start;
    let (start, stop) = if reverse { (stop, start) } else { (start, stop) };

    let step = tick_increment(start, stop, count);
    if step == 0.0 || !step.is_finite() {
        return Vec::new();
    }

    let mut ticks = if step > 0.0 {
        let lo = (start / step).ceil();
        let hi = (stop / step).floor();
        let n = tick_count(hi - lo);
        (0..n).map(|i| (lo + i as f64) * step).collect::<Vec<_>>()
    } else {
        let lo = (start * step).floor();
        let hi = (stop * step).ceil();
        let n = tick_count(lo - hi);
        (0..n).map(|i| (lo - i as f64) / step).collect::<Vec<_>>()
    };

    if reverse {
        ticks.reverse();
    }

    ticks
}

/// [`generate_ticks`] with [`DEFAULT_TICK_COUNT`].
pub fn generate_default_ticks(start: f64, stop: f64) -> Vec<f64> {
    generate_ticks(start, stop, DEFAULT_TICK_COUNT)
}

/// Nice step between ticks for `[start, stop]` divided into about `count` parts.
///
/// Steps of one or more are returned as-is (`2.0`, `50.0`, ...). Steps below one
/// are returned as the negated reciprocal: a step of `0.2` is reported as `-5.0`.
/// A non-positive `count` is clamped to zero, which makes the step non-finite.
pub fn tick_increment(start: f64, stop: f64, count: i32) -> f64 {
    let raw = (stop - start) / f64::from(count.max(0));
    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);

    let multiplier = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        multiplier * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / multiplier
    }
}

/// Number of ticks between two step indices `span` apart, inclusive.
#[inline]
fn tick_count(span: f64) -> usize {
    let n = (span + 1.0).ceil();
    if n > 0.0 { n as usize } else { 0 }
}
