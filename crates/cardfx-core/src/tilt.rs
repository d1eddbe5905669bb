//! Tilt engine state: the container's activity flag and per-item depth.

use crate::activity::{ActivityChannel, ActivitySignal, Subscription};
use crate::config::TiltConfig;
use crate::geometry::{measured, Rect};
use crate::transform::{DepthOffset, TiltVector};
use glam::DVec2;

/// State owned by one tilt container.
///
/// Only the activity flag is stored. Rotation is recomputed from every pointer
/// sample and handed back for a direct visual write, so pointer-move never
/// notifies items.
pub struct TiltContainerState {
    channel: ActivityChannel,
    config: TiltConfig,
}

impl TiltContainerState {
    pub fn new(config: TiltConfig) -> Self {
        Self {
            channel: ActivityChannel::new(),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.channel.get()
    }

    pub fn signal(&self) -> ActivitySignal {
        self.channel.signal()
    }

    /// Returns true if the flag changed.
    pub fn pointer_enter(&mut self) -> bool {
        self.channel.publish(true)
    }

    /// Rotation for the pointer sample, or `None` when the container has not
    /// been laid out.
    pub fn pointer_move(&self, rect: Option<Rect>, pointer: DVec2) -> Option<TiltVector> {
        let rect = measured(rect)?;
        Some(TiltVector::from_pointer(&rect, pointer, self.config.divisor))
    }

    /// Clears the flag and returns the rotation to write back. Always
    /// `TiltVector::ZERO`, even when no move was ever seen.
    pub fn pointer_leave(&mut self) -> TiltVector {
        self.channel.publish(false);
        TiltVector::ZERO
    }
}

impl Default for TiltContainerState {
    fn default() -> Self {
        Self::new(TiltConfig::default())
    }
}

/// An element at a fixed depth under a tilt container.
///
/// Built without a signal when there is no enclosing container; it then stays
/// inactive for its whole life.
#[derive(Clone, Default)]
pub struct DepthItem {
    pub offset: DepthOffset,
    signal: Option<ActivitySignal>,
}

impl DepthItem {
    pub fn new(depth: f64, signal: Option<ActivitySignal>) -> Self {
        Self {
            offset: DepthOffset::new(depth),
            signal,
        }
    }

    #[inline]
    pub fn has_container(&self) -> bool {
        self.signal.as_ref().map_or(false, ActivitySignal::is_connected)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.signal.as_ref().map_or(false, ActivitySignal::get)
    }

    #[inline]
    pub fn translate_z(&self) -> f64 {
        self.offset.translate_z(self.is_active())
    }

    pub fn transform_css(&self) -> String {
        self.offset.to_css(self.is_active())
    }

    /// Call `f` with this item's transform on every activity change.
    /// Returns `None` when the item has no container to listen to.
    pub fn watch(&self, mut f: impl FnMut(String) + 'static) -> Option<Subscription> {
        let signal = self.signal.as_ref()?;
        let offset = self.offset;
        Some(signal.subscribe(move |active| f(offset.to_css(active))))
    }
}
