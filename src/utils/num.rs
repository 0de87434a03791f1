//! Numeric conversions for the plotting coordinate space.
//!
//! Timings and sample indices are integers; plotters works in `f64`. Keep the
//! lossy casts here so call sites stay searchable.

#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64(v: i64) -> f64 {
    v as f64
}

#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64(v: usize) -> f64 {
    v as f64
}

/// Axis range covering `lo..=hi` with some headroom; never empty.
#[must_use]
pub fn padded_range(lo: i64, hi: i64) -> (f64, f64) {
    let (lo, hi) = (i64_to_f64(lo.min(0)), i64_to_f64(hi));
    if hi <= lo {
        return (lo, lo + 1.0);
    }
    (lo, hi + (hi - lo) * 0.05)
}
