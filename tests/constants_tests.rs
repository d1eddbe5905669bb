// Host-side tests for hydration constants and engine tuning.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use cardfx_core::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn engine_divisors_are_positive() {
    assert!(TILT_DIVISOR > 0.0);
    assert!(WOBBLE_DIVISOR > 0.0);
    assert!(MIN_RECT_EXTENT > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn wobble_inner_layer_scales_up_slightly() {
    assert!(WOBBLE_INNER_SCALE > 1.0);
    assert!(WOBBLE_INNER_SCALE < 1.1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn wobble_settles_faster_than_tilt() {
    assert!(WOBBLE_TRANSITION_MS < TILT_TRANSITION_MS);
}

#[test]
fn selectors_match_their_attributes() {
    for sel in [
        TILT_CONTAINER_SELECTOR,
        TILT_BODY_SELECTOR,
        TILT_ITEM_SELECTOR,
        WOBBLE_SELECTOR,
    ] {
        assert!(sel.starts_with("[data-") && sel.ends_with(']'), "{sel}");
    }
    assert!(ATTR_DEPTH.starts_with("data-"));
    assert!(ATTR_MOUNTED.starts_with("data-"));
}

#[test]
fn default_log_level_parses() {
    assert_eq!(parse_log_level(DEFAULT_LOG_LEVEL), Ok(log::Level::Info));
}
