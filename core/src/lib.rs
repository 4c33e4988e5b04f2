pub mod anchor;
pub mod boot;
pub mod config;
pub mod drag;
pub mod layout;
pub mod random;
pub mod ripple;
pub mod scramble;
pub mod script;

pub use anchor::{anchor_target_id, route_anchor_click, AnchorAction, AnchorPolicy};
pub use boot::BootPhase;
pub use config::{ConfigError, EffectsConfig};
pub use drag::{DragRouter, DragUpdate, PanelDrag, PanelId, Point};
pub use layout::{
    entrance_delay_ms, layout_panels, needs_relayout, place_panel, PanelRect, PanelSize, SafeBounds,
    Viewport,
};
pub use random::RandomSource;
pub use ripple::RippleGeometry;
pub use scramble::{GlitchFrame, GlitchSession, GLITCH_ALPHABET};
pub use script::{TypeStep, TypewriterPlan, DEFAULT_TERMINAL_LINES};
