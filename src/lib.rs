pub mod app;
mod app_config;
pub mod boot_runtime;
mod dom;
pub mod glitch;
pub mod layout;
pub mod panels;
pub mod ripple;
pub mod scroll;
pub mod terminal;

pub use app::{start, start_when_ready, EffectsApp};
