//! Per-element configuration, parsed once at controller construction.
//!
//! This is a best-effort visual layer: unparsable numeric values fall back to
//! their documented defaults and never abort bootstrap. The one hard error is
//! an element declaring more than one activation marker, since combined mode
//! semantics are undefined and rejected up front.

use crate::constants::{
    DEFAULT_ACTIVATION_DELAY, DEFAULT_ESCAPE_DURATION, DEFAULT_PROXIMITY_RADIUS,
    DEFAULT_REQUIRED_CLICKS, DEFAULT_REQUIRED_DISTANCE,
};
use std::str::FromStr;
use thiserror::Error;

/// Marker class found on a managed element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    /// `drop-animation`
    Drop,
    /// `escape-animation`
    Escape,
    /// `mousemove-drop-animation`
    MouseMoveDrop,
}

/// How a controller decides to fire. Fixed per instance at construction;
/// modes are mutually exclusive per element.
#[derive(Clone, Debug, PartialEq)]
pub enum ActivationMode {
    /// Fall after N clicks on the element itself.
    SelfClick { required_clicks: u32 },
    /// Fall once the page-wide click total reaches N.
    PageClick { required_clicks: u32 },
    /// Fall once page-wide pointer travel reaches the threshold (px).
    PageDistance { required_distance: f64 },
    /// Flee the pointer whenever it comes within `radius` px of the element
    /// center, once the element has been activated by hover (optionally
    /// after `activation_delay` seconds). Never terminal.
    Proximity {
        radius: f32,
        activation_delay: f32,
        escape_duration: f32,
    },
}

impl ActivationMode {
    /// Whether this mode ends in a terminal fall.
    pub fn is_fall_capable(&self) -> bool {
        !matches!(self, ActivationMode::Proximity { .. })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ElementConfig {
    pub mode: ActivationMode,
    pub draggable: bool,
    /// Background color applied by the fall tween, when configured.
    pub drop_color: Option<String>,
}

/// Raw attribute values as read off the element, before parsing.
#[derive(Clone, Debug, Default)]
pub struct RawOptions {
    pub drop_clicks: Option<String>,
    pub drop_global: bool,
    pub drop_draggable: bool,
    pub drop_color: Option<String>,
    pub escape_distance: Option<String>,
    pub escape_speed: Option<String>,
    pub escape_delay: Option<String>,
    pub mousemove_distance: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("element declares {0} activation markers; modes are mutually exclusive")]
    ConflictingModes(usize),
    #[error("element declares no activation marker")]
    NoMarker,
}

impl ElementConfig {
    /// Build the immutable config for one element. Exactly one marker must be
    /// present; everything else defaults when missing or unparsable.
    pub fn from_markers(markers: &[Marker], raw: &RawOptions) -> Result<Self, ConfigError> {
        let marker = match markers {
            [] => return Err(ConfigError::NoMarker),
            [one] => *one,
            many => return Err(ConfigError::ConflictingModes(many.len())),
        };

        let config = match marker {
            Marker::Drop => {
                let required_clicks =
                    parse_or(raw.drop_clicks.as_deref(), DEFAULT_REQUIRED_CLICKS);
                let mode = if raw.drop_global {
                    ActivationMode::PageClick { required_clicks }
                } else {
                    ActivationMode::SelfClick { required_clicks }
                };
                Self {
                    mode,
                    draggable: raw.drop_draggable,
                    drop_color: raw.drop_color.clone(),
                }
            }
            Marker::MouseMoveDrop => Self {
                mode: ActivationMode::PageDistance {
                    required_distance: parse_finite_or(
                        raw.mousemove_distance.as_deref(),
                        DEFAULT_REQUIRED_DISTANCE,
                    ),
                },
                draggable: raw.drop_draggable,
                drop_color: raw.drop_color.clone(),
            },
            Marker::Escape => Self {
                mode: ActivationMode::Proximity {
                    radius: parse_finite_or(
                        raw.escape_distance.as_deref(),
                        DEFAULT_PROXIMITY_RADIUS,
                    ),
                    activation_delay: parse_finite_or(
                        raw.escape_delay.as_deref(),
                        DEFAULT_ACTIVATION_DELAY,
                    ),
                    escape_duration: parse_finite_or(
                        raw.escape_speed.as_deref(),
                        DEFAULT_ESCAPE_DURATION,
                    ),
                },
                // Escape elements move themselves; dragging is not supported.
                draggable: false,
                drop_color: None,
            },
        };
        Ok(config)
    }
}

fn parse_or<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

/// Like `parse_or` but also rejects NaN/infinite values.
fn parse_finite_or<T>(raw: Option<&str>, default: T) -> T
where
    T: FromStr + Finite,
{
    raw.and_then(|s| s.trim().parse::<T>().ok())
        .filter(Finite::is_finite)
        .unwrap_or(default)
}

pub trait Finite {
    fn is_finite(&self) -> bool;
}

impl Finite for f32 {
    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}

impl Finite for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}
