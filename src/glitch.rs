use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::{Interval, Timeout};
use web_sys::HtmlElement;

use glassfx_core::config::GlitchConfig;
use glassfx_core::GlitchSession;

use crate::dom::{self, MathRandom};

pub(crate) const SCRAMBLE_SELECTOR: &str = ".scramble-text";

/// Scramble effect bound to one element. Owns the running tick timer so a
/// restart can cancel the previous run before starting over.
pub struct GlitchText {
    element: HtmlElement,
    original: String,
    config: GlitchConfig,
    interval: Rc<RefCell<Option<Interval>>>,
    runs: Cell<u32>,
}

impl GlitchText {
    pub fn new(element: HtmlElement, config: GlitchConfig) -> Rc<Self> {
        let original = element.text_content().unwrap_or_default();
        Rc::new(Self {
            element,
            original,
            config,
            interval: Rc::new(RefCell::new(None)),
            runs: Cell::new(0),
        })
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn is_running(&self) -> bool {
        self.interval.borrow().is_some()
    }

    /// How many scramble runs have been started on this element.
    pub fn runs(&self) -> u32 {
        self.runs.get()
    }

    pub fn scramble(&self) {
        self.cancel();
        self.runs.set(self.runs.get().saturating_add(1));
        let mut session = GlitchSession::new(&self.original, self.config.steps_per_char);
        let element = self.element.clone();
        let handle = self.interval.clone();
        let interval = Interval::new(self.config.tick_ms, move || {
            let frame = session.tick(&mut MathRandom);
            element.set_text_content(Some(frame.text()));
            if frame.is_resolved() {
                handle.borrow_mut().take();
            }
        });
        *self.interval.borrow_mut() = Some(interval);
    }

    /// Stops a run in progress and puts the original text back.
    pub fn cancel(&self) {
        if self.interval.borrow_mut().take().is_some() {
            self.element.set_text_content(Some(&self.original));
        }
    }
}

/// Every `.scramble-text` element: one staggered run at start, another on hover.
pub struct GlitchEffects {
    texts: Vec<Rc<GlitchText>>,
    _listeners: Vec<EventListener>,
    _staggers: Vec<Timeout>,
}

impl GlitchEffects {
    pub fn install(config: GlitchConfig) -> Self {
        let mut texts = Vec::new();
        let mut listeners = Vec::new();
        let mut staggers = Vec::new();
        for (index, element) in dom::query_all(SCRAMBLE_SELECTOR).into_iter().enumerate() {
            let text = GlitchText::new(element.clone(), config);

            let delayed = text.clone();
            let delay = (index as u32).saturating_mul(config.stagger_ms);
            staggers.push(Timeout::new(delay, move || delayed.scramble()));

            let hovered = text.clone();
            listeners.push(EventListener::new(&element, "mouseenter", move |_event| {
                hovered.scramble();
            }));
            texts.push(text);
        }
        Self {
            texts,
            _listeners: listeners,
            _staggers: staggers,
        }
    }

    pub fn texts(&self) -> &[Rc<GlitchText>] {
        &self.texts
    }
}
