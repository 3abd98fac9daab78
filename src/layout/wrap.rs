//! Infinite-strip wrapping.

/// Offset of slot `index` on a strip scrolled to `position`, wrapped into
/// `(-total_width / 2, total_width / 2]`.
///
/// `slide_unit` is the slot spacing and `total_width` the length of one
/// full revolution (`count * slide_unit`). A non-positive `total_width`
/// yields `0.0`.
#[must_use]
pub fn wrapped_offset(
    index: usize,
    position: f64,
    slide_unit: f32,
    total_width: f32,
) -> f32 {
    if total_width.is_nan() || total_width <= 0.0 {
        return 0.0;
    }
    let total = f64::from(total_width);
    let base =
        (index as f64 * f64::from(slide_unit) - position).rem_euclid(total);
    let offset = if base > total * 0.5 { base - total } else { base };
    offset as f32
}
