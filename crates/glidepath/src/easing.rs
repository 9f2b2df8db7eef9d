//! Easing curves for pointer motion.

/// Symmetric quadratic ease-in-out.
///
/// `t` is clamped to `[0, 1]`. The curve accelerates through the first half
/// (`2t²`) and decelerates through the second (`-1 + (4 - 2t)t`).
pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}
