//! CSS transform values produced by the engines.
//!
//! Every value here is a pure function of a pointer sample and a rect; none of
//! them carry history. The rendering layer's own CSS transition provides the
//! smoothing between successive values.

use crate::geometry::Rect;
use glam::DVec2;

/// Format a number the way a JS template literal would (`2`, `1.2`, `-0.5`).
///
/// Negative zero and non-finite values collapse to `0` so a transform string
/// is always valid CSS.
pub fn css_number(v: f64) -> String {
    if !v.is_finite() || v == 0.0 {
        return "0".to_string();
    }
    format!("{}", v)
}

/// Rotation derived from a single pointer sample over a tilt container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltVector {
    /// Degrees around the X axis, driven by vertical pointer offset.
    pub rotate_x: f64,
    /// Degrees around the Y axis, driven by horizontal pointer offset.
    pub rotate_y: f64,
}

impl TiltVector {
    pub const ZERO: TiltVector = TiltVector {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Evaluated as `client - left - width / 2`, left to right, so the
    /// printed degrees match the browser-side formula bit for bit.
    #[inline]
    pub fn from_pointer(rect: &Rect, pointer: DVec2, divisor: f64) -> Self {
        Self {
            rotate_x: (pointer.y - rect.top - rect.height / 2.0) / divisor,
            rotate_y: (pointer.x - rect.left - rect.width / 2.0) / divisor,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "rotateY({}deg) rotateX({}deg)",
            css_number(self.rotate_y),
            css_number(self.rotate_x)
        )
    }
}

/// Per-item displacement along the simulated depth axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DepthOffset {
    pub depth: f64,
}

impl DepthOffset {
    pub const fn new(depth: f64) -> Self {
        Self { depth }
    }

    #[inline]
    pub fn translate_z(&self, active: bool) -> f64 {
        if active {
            self.depth
        } else {
            0.0
        }
    }

    pub fn to_css(&self, active: bool) -> String {
        format!("translateZ({}px)", css_number(self.translate_z(active)))
    }
}

/// Planar translate plus uniform XY scale, applied to one wobble layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerTransform {
    pub translate: DVec2,
    pub scale: f64,
}

impl Default for LayerTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl LayerTransform {
    pub const IDENTITY: LayerTransform = LayerTransform {
        translate: DVec2::ZERO,
        scale: 1.0,
    };

    pub fn to_css(&self) -> String {
        let s = css_number(self.scale);
        format!(
            "translate3d({}px, {}px, 0) scale3d({}, {}, 1)",
            css_number(self.translate.x),
            css_number(self.translate.y),
            s,
            s
        )
    }
}
