//! Unit conversion utilities.
//!
//! All geometry in a [`Deck`](crate::Deck) is stored in EMU (English Metric
//! Units), the native unit of DrawingML. Layout templates are written in
//! inches and points and converted here.

pub const EMUS_PER_INCH: i64 = 914_400;

/// Convert inches to EMU, rounding to the nearest unit.
#[inline]
pub fn inches(value: f64) -> i64 {
    (value * EMUS_PER_INCH as f64).round() as i64
}

/// Convert a point size to the hundredths-of-a-point used by `sz` and `spcPts`.
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round().max(0.0) as u32
}
