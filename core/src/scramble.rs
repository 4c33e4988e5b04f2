use crate::random::RandomSource;

pub const GLITCH_ALPHABET: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GlitchFrame {
    Scrambled(String),
    /// The session is over; the element shows the original text again.
    Resolved(String),
}

impl GlitchFrame {
    pub fn text(&self) -> &str {
        match self {
            GlitchFrame::Scrambled(text) | GlitchFrame::Resolved(text) => text,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, GlitchFrame::Resolved(_))
    }
}

/// One scramble run over a fixed original text.
///
/// Progress is kept as whole ticks; `progress = ticks / steps_per_char`, so
/// the resolved prefix grows by one character every `steps_per_char` ticks.
#[derive(Clone, Debug)]
pub struct GlitchSession {
    original: Vec<char>,
    alphabet: Vec<char>,
    steps_per_char: usize,
    ticks: usize,
    finished: bool,
}

impl GlitchSession {
    pub fn new(original: &str, steps_per_char: u32) -> Self {
        Self {
            original: original.chars().collect(),
            alphabet: GLITCH_ALPHABET.chars().collect(),
            steps_per_char: steps_per_char.max(1) as usize,
            ticks: 0,
            finished: false,
        }
    }

    pub fn original(&self) -> String {
        self.original.iter().collect()
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }

    /// Number of leading characters locked to the original.
    pub fn resolved_len(&self) -> usize {
        self.ticks / self.steps_per_char
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Ticks a full run takes: `ceil(steps_per_char * len)`, at least one.
    pub fn total_ticks(&self) -> usize {
        (self.original.len() * self.steps_per_char).max(1)
    }

    pub fn render(&self, rng: &mut impl RandomSource) -> String {
        let resolved = self.resolved_len();
        self.original
            .iter()
            .enumerate()
            .map(|(index, &ch)| {
                if ch == ' ' || index < resolved {
                    ch
                } else {
                    self.alphabet[rng.next_index(self.alphabet.len())]
                }
            })
            .collect()
    }

    /// Renders the current frame, then advances progress by one step.
    pub fn tick(&mut self, rng: &mut impl RandomSource) -> GlitchFrame {
        if self.finished {
            return GlitchFrame::Resolved(self.original());
        }
        let frame = self.render(rng);
        self.ticks += 1;
        if self.ticks >= self.total_ticks() {
            self.finished = true;
            return GlitchFrame::Resolved(self.original());
        }
        GlitchFrame::Scrambled(frame)
    }
}
