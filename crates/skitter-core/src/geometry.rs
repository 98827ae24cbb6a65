//! Pure geometry for the escape behavior.

use glam::Vec2;

/// Axis-aligned element rectangle in viewport coordinates (CSS px).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Offset that moves an element away from a nearby pointer.
///
/// Returns `None` when the pointer is at or beyond `radius` from the target
/// center (the boundary itself does not react). Inside the boundary the
/// offset points from the pointer through the center, with magnitude
/// `(radius - distance) + padding` so a closer pointer produces a stronger
/// push. Stateless and deterministic.
pub fn escape_offset(pointer: Vec2, center: Vec2, radius: f32, padding: f32) -> Option<Vec2> {
    let delta = pointer - center;
    let distance = delta.length();
    if distance >= radius {
        return None;
    }
    let angle = delta.y.atan2(delta.x);
    let magnitude = (radius - distance) + padding;
    Some(Vec2::new(
        -angle.cos() * magnitude,
        -angle.sin() * magnitude,
    ))
}

/// Clamp an element's top-left corner so the whole element stays on screen.
/// Matches the reference clamp order: the upper bound applies first, then the
/// lower bound, so an element larger than the viewport pins to the origin.
pub fn clamp_to_viewport(position: Vec2, size: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        position.x.min(viewport.x - size.x).max(0.0),
        position.y.min(viewport.y - size.y).max(0.0),
    )
}
