use crate::constants::*;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    #[error("divisor must be positive and finite, got {0}")]
    NonPositiveDivisor(f64),
    #[error("invalid log level `{0}`")]
    InvalidLogLevel(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    pub divisor: f64,
    pub perspective_px: f64,
    pub transition_ms: u32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            divisor: TILT_DIVISOR,
            perspective_px: PERSPECTIVE_PX,
            transition_ms: TILT_TRANSITION_MS,
        }
    }
}

impl TiltConfig {
    pub fn perspective_css(&self) -> String {
        format!("{}px", self.perspective_px)
    }

    /// Transition applied to both the rotating container and its items.
    pub fn transition_css(&self) -> String {
        format!("transform {}ms linear", self.transition_ms)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WobbleConfig {
    pub divisor: f64,
    pub inner_scale: f64,
    pub transition_ms: u32,
}

impl Default for WobbleConfig {
    fn default() -> Self {
        Self {
            divisor: WOBBLE_DIVISOR,
            inner_scale: WOBBLE_INNER_SCALE,
            transition_ms: WOBBLE_TRANSITION_MS,
        }
    }
}

impl WobbleConfig {
    pub fn transition_css(&self) -> String {
        format!("transform {}ms ease-out", self.transition_ms)
    }
}

fn parse_number(raw: &str) -> Result<f64, ConfigError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ConfigError::InvalidNumber(trimmed.to_string())),
    }
}

/// Parse an item depth in px. Negative depths are allowed (items sink back).
pub fn parse_depth(raw: &str) -> Result<f64, ConfigError> {
    parse_number(raw)
}

pub fn parse_divisor(raw: &str) -> Result<f64, ConfigError> {
    let v = parse_number(raw)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(ConfigError::NonPositiveDivisor(v))
    }
}

pub fn parse_log_level(raw: &str) -> Result<log::Level, ConfigError> {
    let trimmed = raw.trim();
    log::Level::from_str(trimmed).map_err(|_| ConfigError::InvalidLogLevel(trimmed.to_string()))
}

/// Parse an optional attribute value. Missing values give `default`; bad
/// ones are logged and give `default` too.
pub fn resolve_attr<T: Copy + Display>(
    name: &str,
    raw: Option<&str>,
    parse: impl Fn(&str) -> Result<T, ConfigError>,
    default: T,
) -> T {
    match raw.map(parse) {
        Some(Ok(v)) => v,
        Some(Err(e)) => {
            log::warn!("[config] {}: {}; using {}", name, e, default);
            default
        }
        None => default,
    }
}
