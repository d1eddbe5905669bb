// Interaction tuning shared by the tilt and wobble engines.

// Tilt
pub const TILT_DIVISOR: f64 = 25.0; // pointer px per degree of rotation
pub const PERSPECTIVE_PX: f64 = 1000.0;
pub const TILT_TRANSITION_MS: u32 = 200;

// Wobble
pub const WOBBLE_DIVISOR: f64 = 20.0; // pointer px per px of translation
pub const WOBBLE_INNER_SCALE: f64 = 1.03; // content overshoot while hovering
pub const WOBBLE_TRANSITION_MS: u32 = 100;

// Rects at or below this extent are treated as not laid out
pub const MIN_RECT_EXTENT: f64 = 1e-6;
