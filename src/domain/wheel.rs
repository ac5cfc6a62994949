//! Wheel - Segment Geometry and Spin Easing
//!
//! Angles are in degrees, measured clockwise from the pointer at the top of
//! the wheel. A positive rotation turns the wheel clockwise.

use std::time::Duration;

const FULL_TURN: f32 = 360.0;

/// Angular width of one segment
pub fn segment_angle(segments: usize) -> f32 {
    if segments == 0 {
        return FULL_TURN;
    }
    FULL_TURN / segments as f32
}

/// Start and end angle of a segment in wheel coordinates
pub fn segment_span(index: usize, segments: usize) -> (f32, f32) {
    let width = segment_angle(segments);
    let start = index as f32 * width;
    (start, start + width)
}

/// Rotation (normalized to `[0, 360)`) that centers `index` under the pointer
pub fn resting_rotation(index: usize, segments: usize) -> f32 {
    let center = (index as f32 + 0.5) * segment_angle(segments);
    (FULL_TURN - center).rem_euclid(FULL_TURN)
}

/// Final rotation for a spin from `current` that lands on `index`
///
/// Always turns forward by at least `revolutions` full turns.
pub fn target_rotation(current: f32, index: usize, segments: usize, revolutions: u32) -> f32 {
    let target = resting_rotation(index, segments);
    let adjustment = (target - current.rem_euclid(FULL_TURN)).rem_euclid(FULL_TURN);
    current + revolutions as f32 * FULL_TURN + adjustment
}

/// Segment currently under the pointer for a given wheel rotation
pub fn segment_at_pointer(rotation: f32, segments: usize) -> usize {
    if segments == 0 {
        return 0;
    }
    let angle = (-rotation).rem_euclid(FULL_TURN);
    let index = (angle / segment_angle(segments)) as usize;
    index.min(segments - 1)
}

/// Cubic ease-out: fast start, smooth stop
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// One spin from a start rotation to a target rotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinAnimation {
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
}

impl SpinAnimation {
    /// Plan a spin from `current` onto segment `index`
    pub fn plan(
        current: f32,
        index: usize,
        segments: usize,
        revolutions: u32,
        duration: Duration,
    ) -> Self {
        Self {
            from: current,
            to: target_rotation(current, index, segments, revolutions),
            duration,
        }
    }

    /// Rotation after `elapsed`, and whether the spin has finished
    pub fn sample(&self, elapsed: Duration) -> (f32, bool) {
        if self.duration.is_zero() || elapsed >= self.duration {
            return (self.to, true);
        }
        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = ease_out_cubic(progress);
        (self.from + (self.to - self.from) * eased, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_lands_on_every_segment() {
        for segments in 1..=8 {
            for index in 0..segments {
                for current in [0.0_f32, 47.5, 359.0, 1234.0] {
                    let to = target_rotation(current, index, segments, 5);
                    assert_eq!(segment_at_pointer(to, segments), index);
                    assert!(to - current >= 5.0 * FULL_TURN);
                    assert!(to - current < 6.0 * FULL_TURN);
                }
            }
        }
    }

    #[test]
    fn test_segment_span() {
        assert_eq!(segment_span(2, 4), (180.0, 270.0));
        assert_eq!(segment_angle(3), 120.0);
    }

    #[test]
    fn test_ease_out_cubic_bounds() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn test_sample_finishes_at_target() {
        let spin = SpinAnimation::plan(10.0, 1, 4, 3, Duration::from_millis(1000));
        let (mid, done) = spin.sample(Duration::from_millis(500));
        assert!(!done);
        assert!(mid > spin.from && mid < spin.to);

        let (end, done) = spin.sample(Duration::from_millis(1500));
        assert!(done);
        assert_eq!(end, spin.to);
    }

    #[test]
    fn test_zero_duration_is_immediately_done() {
        let spin = SpinAnimation::plan(0.0, 0, 2, 1, Duration::ZERO);
        assert_eq!(spin.sample(Duration::ZERO), (spin.to, true));
    }
}
