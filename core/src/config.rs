use std::fmt;

use serde::{Deserialize, Serialize};

use crate::anchor::AnchorPolicy;
use crate::script::DEFAULT_TERMINAL_LINES;

pub const CHAR_DELAY_MS_DEFAULT: u32 = 30;
pub const LINE_PAUSE_MS_DEFAULT: u32 = 200;
pub const TERMINAL_HIDE_DELAY_MS_DEFAULT: u32 = 1000;
pub const TERMINAL_REMOVE_DELAY_MS_DEFAULT: u32 = 500;

pub const GLITCH_TICK_MS_DEFAULT: u32 = 50;
pub const GLITCH_STEPS_PER_CHAR_DEFAULT: u32 = 3;
pub const GLITCH_STAGGER_MS_DEFAULT: u32 = 200;

pub const ACTIVE_LINGER_MS_DEFAULT: u32 = 300;

pub const LAYOUT_MARGIN_DEFAULT: f64 = 50.0;
pub const LAYOUT_ZONE_INSET_DEFAULT: f64 = 50.0;
pub const ENTRANCE_STAGGER_MS_DEFAULT: u32 = 150;

pub const RIPPLE_LIFETIME_MS_DEFAULT: u32 = 600;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub lines: Vec<String>,
    pub char_delay_ms: u32,
    pub line_pause_ms: u32,
    pub hide_delay_ms: u32,
    pub remove_delay_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            lines: DEFAULT_TERMINAL_LINES.iter().map(|line| line.to_string()).collect(),
            char_delay_ms: CHAR_DELAY_MS_DEFAULT,
            line_pause_ms: LINE_PAUSE_MS_DEFAULT,
            hide_delay_ms: TERMINAL_HIDE_DELAY_MS_DEFAULT,
            remove_delay_ms: TERMINAL_REMOVE_DELAY_MS_DEFAULT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlitchConfig {
    pub tick_ms: u32,
    /// Ticks needed to lock in one more character of the original text.
    pub steps_per_char: u32,
    pub stagger_ms: u32,
}

impl Default for GlitchConfig {
    fn default() -> Self {
        Self {
            tick_ms: GLITCH_TICK_MS_DEFAULT,
            steps_per_char: GLITCH_STEPS_PER_CHAR_DEFAULT,
            stagger_ms: GLITCH_STAGGER_MS_DEFAULT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    pub active_linger_ms: u32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            active_linger_ms: ACTIVE_LINGER_MS_DEFAULT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub margin: f64,
    /// Extra distance between the margin and a fixed zone's outer edge.
    pub zone_inset: f64,
    /// Top of the fixed zones as fractions of the viewport height, in panel order.
    pub zone_tops: [f64; 4],
    pub entrance_stagger_ms: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: LAYOUT_MARGIN_DEFAULT,
            zone_inset: LAYOUT_ZONE_INSET_DEFAULT,
            zone_tops: [0.15, 0.25, 0.55, 0.65],
            entrance_stagger_ms: ENTRANCE_STAGGER_MS_DEFAULT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RippleConfig {
    pub lifetime_ms: u32,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            lifetime_ms: RIPPLE_LIFETIME_MS_DEFAULT,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub anchor_policy: AnchorPolicy,
}

/// Every tunable of the page effects. Any subset can be overridden from JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub typewriter: TypewriterConfig,
    pub glitch: GlitchConfig,
    pub drag: DragConfig,
    pub layout: LayoutConfig,
    pub ripple: RippleConfig,
    pub scroll: ScrollConfig,
}

impl EffectsConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_json::from_str(trimmed).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.typewriter.char_delay_ms == 0 {
            return Err(ConfigError::ZeroInterval {
                field: "typewriter.char_delay_ms",
            });
        }
        if self.glitch.tick_ms == 0 {
            return Err(ConfigError::ZeroInterval {
                field: "glitch.tick_ms",
            });
        }
        if self.glitch.steps_per_char == 0 {
            return Err(ConfigError::ZeroInterval {
                field: "glitch.steps_per_char",
            });
        }
        if !(self.layout.margin >= 0.0) {
            return Err(ConfigError::NegativeLength {
                field: "layout.margin",
                value: self.layout.margin,
            });
        }
        if !(self.layout.zone_inset >= 0.0) {
            return Err(ConfigError::NegativeLength {
                field: "layout.zone_inset",
                value: self.layout.zone_inset,
            });
        }
        for (index, fraction) in self.layout.zone_tops.iter().enumerate() {
            if !(0.0..=1.0).contains(fraction) {
                return Err(ConfigError::FractionOutOfRange {
                    index,
                    value: *fraction,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    ZeroInterval { field: &'static str },
    NegativeLength { field: &'static str, value: f64 },
    FractionOutOfRange { index: usize, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(message) => write!(f, "invalid effects config: {message}"),
            ConfigError::ZeroInterval { field } => write!(f, "{field} must be greater than zero"),
            ConfigError::NegativeLength { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
            ConfigError::FractionOutOfRange { index, value } => {
                write!(f, "layout.zone_tops[{index}] must be within 0..=1, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
