//! Time-based pointer glide.

use std::time::Duration;

use crate::easing::ease_in_out_quad;
use crate::geometry::Point;

/// A single glide from `from` to `to`, started at `started_at`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub from: Point,
    pub to: Point,
    pub started_at: Duration,
    pub duration: Duration,
}

impl Motion {
    /// Linear progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Eased position at `now` and whether the glide has finished.
    pub fn sample(&self, now: Duration) -> (Point, bool) {
        let t = self.progress(now);
        if t >= 1.0 {
            return (self.to, true);
        }
        (self.from.lerp(self.to, ease_in_out_quad(t)), false)
    }
}
