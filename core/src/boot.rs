use std::fmt;

/// Lifecycle of the page effects, in the order they are reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BootPhase {
    ColdStart,
    Typing,
    Effects,
    Ready,
}

impl BootPhase {
    pub fn label(self) -> &'static str {
        match self {
            BootPhase::ColdStart => "cold-start",
            BootPhase::Typing => "typing",
            BootPhase::Effects => "effects",
            BootPhase::Ready => "ready",
        }
    }
}

impl fmt::Display for BootPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
