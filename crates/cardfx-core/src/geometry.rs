use crate::constants::MIN_RECT_EXTENT;
use glam::DVec2;

/// Bounding rectangle in CSS pixels, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Strict containment; points on the border are outside.
    #[inline]
    pub fn contains(&self, point: DVec2) -> bool {
        point.x > self.left
            && point.x < self.left + self.width
            && point.y > self.top
            && point.y < self.top + self.height
    }

    /// False for rects that have not been laid out yet (zero size, hidden,
    /// detached) or that carry non-finite values.
    #[inline]
    pub fn is_measurable(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > MIN_RECT_EXTENT
            && self.height > MIN_RECT_EXTENT
    }
}

#[inline]
pub fn offset_from_center(rect: &Rect, pointer: DVec2) -> DVec2 {
    pointer - rect.center()
}

/// Returns the rect only if it can be used for transform math.
#[inline]
pub fn measured(rect: Option<Rect>) -> Option<Rect> {
    rect.filter(Rect::is_measurable)
}
