use crate::config::TypewriterConfig;

pub const DEFAULT_TERMINAL_LINES: [&str; 6] = [
    "> Initializing Dark Glass Design System...",
    "> Loading cosmic aesthetics...",
    "> Applying glassmorphism effects...",
    "> Activating backdrop filters...",
    "> Configuring interactive elements...",
    "> System ready. Welcome to the future.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeStep {
    /// Open a new line region for the line at this index.
    StartLine(usize),
    /// Wait `delay_ms`, then append `ch` to the current line.
    Char { ch: char, delay_ms: u32 },
    Pause(u32),
    Cursor,
}

/// The full reveal schedule for a terminal script.
///
/// Each line is typed one character per tick; the tick that would type past
/// the end of the line is spent before the inter-line pause, so an `n`-char
/// line takes `(n + 1) * char_delay + line_pause`.
#[derive(Clone, Debug)]
pub struct TypewriterPlan {
    lines: Vec<String>,
    char_delay_ms: u32,
    line_pause_ms: u32,
}

impl TypewriterPlan {
    pub fn new(lines: Vec<String>, char_delay_ms: u32, line_pause_ms: u32) -> Self {
        Self {
            lines,
            char_delay_ms,
            line_pause_ms,
        }
    }

    pub fn from_config(config: &TypewriterConfig) -> Self {
        Self::new(config.lines.clone(), config.char_delay_ms, config.line_pause_ms)
    }

    pub fn steps(&self) -> Vec<TypeStep> {
        let mut steps = Vec::new();
        for (index, line) in self.lines.iter().enumerate() {
            steps.push(TypeStep::StartLine(index));
            for ch in line.chars() {
                steps.push(TypeStep::Char {
                    ch,
                    delay_ms: self.char_delay_ms,
                });
            }
            steps.push(TypeStep::Pause(self.char_delay_ms + self.line_pause_ms));
        }
        steps.push(TypeStep::Cursor);
        steps
    }

    pub fn total_duration_ms(&self) -> u64 {
        self.steps()
            .iter()
            .map(|step| match step {
                TypeStep::Char { delay_ms, .. } => u64::from(*delay_ms),
                TypeStep::Pause(ms) => u64::from(*ms),
                TypeStep::StartLine(_) | TypeStep::Cursor => 0,
            })
            .sum()
    }
}
