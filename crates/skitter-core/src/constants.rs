// Shared tuning constants for the pointer-reactive behaviors.

// Escape behavior
pub const DEFAULT_PROXIMITY_RADIUS: f32 = 100.0; // px, reaction boundary around the element center
pub const ESCAPE_PADDING: f32 = 50.0; // extra push past the reaction boundary
pub const DEFAULT_ESCAPE_DURATION: f32 = 0.3; // seconds per escape step
pub const DEFAULT_ACTIVATION_DELAY: f32 = 0.0; // hover seconds before escaping starts

// Fall kinematics
pub const FALL_DURATION_FLOOR: f32 = 0.3; // near-zero falls stay visible
pub const FALL_DISTANCE_DIVISOR: f32 = 500.0; // duration = sqrt(distance / divisor)
pub const FLOOR_MARGIN: f32 = 10.0; // gap between a landed element and the viewport bottom

// Trigger thresholds
pub const DEFAULT_REQUIRED_CLICKS: u32 = 1;
pub const DEFAULT_REQUIRED_DISTANCE: f64 = 500.0; // px of cumulative pointer travel
