//! Wobble engine: two layers translating in opposite directions around the
//! pointer, with the inner layer slightly scaled up.

use crate::config::WobbleConfig;
use crate::geometry::{measured, offset_from_center, Rect};
use crate::transform::LayerTransform;
use glam::DVec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WobbleState {
    /// Pointer displacement from the surface center, already divided.
    pub offset: DVec2,
    pub hovering: bool,
}

pub struct WobbleSurfaceState {
    state: WobbleState,
    config: WobbleConfig,
}

impl WobbleSurfaceState {
    pub fn new(config: WobbleConfig) -> Self {
        Self {
            state: WobbleState::default(),
            config,
        }
    }

    #[inline]
    pub fn state(&self) -> WobbleState {
        self.state
    }

    #[inline]
    pub fn config(&self) -> &WobbleConfig {
        &self.config
    }

    pub fn pointer_enter(&mut self) {
        self.state.hovering = true;
    }

    /// Store the new offset. Returns false, leaving state untouched, when the
    /// surface rect is missing or degenerate.
    pub fn pointer_move(&mut self, rect: Option<Rect>, pointer: DVec2) -> bool {
        let Some(rect) = measured(rect) else {
            return false;
        };
        self.state.offset = offset_from_center(&rect, pointer) / self.config.divisor;
        true
    }

    pub fn pointer_leave(&mut self) {
        self.state = WobbleState::default();
    }

    /// Outer shell drifts toward the pointer.
    pub fn outer_transform(&self) -> LayerTransform {
        if !self.state.hovering {
            return LayerTransform::IDENTITY;
        }
        LayerTransform {
            translate: self.state.offset,
            scale: 1.0,
        }
    }

    /// Inner content moves the other way and overshoots slightly.
    pub fn inner_transform(&self) -> LayerTransform {
        if !self.state.hovering {
            return LayerTransform::IDENTITY;
        }
        LayerTransform {
            translate: -self.state.offset,
            scale: self.config.inner_scale,
        }
    }
}

impl Default for WobbleSurfaceState {
    fn default() -> Self {
        Self::new(WobbleConfig::default())
    }
}
