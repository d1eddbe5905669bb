/// Hydration markers, class hooks and fixed inline styles.
///
/// Markup opts into the engines with data attributes; the class strings below
/// are merged with whatever classes the markup already carries.
// Selectors
pub const TILT_CONTAINER_SELECTOR: &str = "[data-tilt-container]";
pub const TILT_BODY_SELECTOR: &str = "[data-tilt-body]";
pub const TILT_ITEM_SELECTOR: &str = "[data-tilt-item]";
pub const WOBBLE_SELECTOR: &str = "[data-wobble]";

// Attributes
pub const ATTR_CONTAINER_CLASS: &str = "data-container-class";
pub const ATTR_TILT_DIVISOR: &str = "data-tilt-divisor";
pub const ATTR_DEPTH: &str = "data-depth";
pub const ATTR_WOBBLE_CLASS: &str = "data-wobble-class";
pub const ATTR_WOBBLE_DIVISOR: &str = "data-wobble-divisor";
pub const ATTR_LOG_LEVEL: &str = "data-cardfx-log"; // read from <html>
pub const ATTR_MOUNTED: &str = "data-cardfx-mounted";

// Default class hooks
pub const PERSPECTIVE_WRAPPER_CLASS: &str = "py-8 flex items-center justify-center";
pub const TILT_CONTAINER_CLASS: &str = "flex items-center justify-center relative";
pub const TILT_BODY_CLASS: &str = "h-auto w-full";
pub const TILT_ITEM_CLASS: &str = "w-fit";
pub const WOBBLE_OUTER_CLASS: &str = "mx-auto w-full relative rounded-2xl overflow-hidden";
pub const WOBBLE_SHADOW_CLASS: &str = "relative h-full sm:rounded-2xl overflow-hidden";
pub const WOBBLE_INNER_CLASS: &str = "h-full px-6 py-8";

// Inline styles
pub const PRESERVE_3D: &str = "preserve-3d";
pub const WOBBLE_SHADOW: &str =
    "0 10px 32px rgba(34, 42, 53, 0.12), 0 1px 1px rgba(0, 0, 0, 0.05)";

pub const DEFAULT_LOG_LEVEL: &str = "info";
