//! Closed-form fall kinematics.

use crate::constants::{FALL_DISTANCE_DIVISOR, FALL_DURATION_FLOOR, FLOOR_MARGIN};

/// Tween duration for a fall from `current_y` to `target_y` (both gsap-style
/// `y` offsets). Duration grows with the square root of the distance so long
/// falls take only moderately longer, with a floor so near-zero falls remain
/// visible. Falling is only downward; being at or past the target yields the
/// floor duration, never zero.
pub fn fall_duration(current_y: f32, target_y: f32) -> f32 {
    let distance = (target_y - current_y).max(0.0);
    (distance / FALL_DISTANCE_DIVISOR).sqrt().max(FALL_DURATION_FLOOR)
}

/// Terminal `y` offset that puts the element just above the viewport bottom.
/// Computed from the element's original (pre-animation) resting position so
/// repeated falls, e.g. after a drag, land on the same line.
pub fn resting_y(viewport_height: f32, initial_top: f32, element_height: f32) -> f32 {
    viewport_height - initial_top - element_height - FLOOR_MARGIN
}
