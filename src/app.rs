use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;

use glassfx_core::{BootPhase, EffectsConfig};

use crate::app_config;
use crate::boot_runtime::set_boot_phase;
use crate::dom::{self, MathRandom};
use crate::glitch::{GlitchEffects, GlitchText};
use crate::layout::{panels_out_of_view, randomize_panel_positions};
use crate::panels::{DragController, PANEL_SELECTOR};
use crate::ripple::install_ripples;
use crate::scroll::install_smooth_scroll;
use crate::terminal::run_terminal_sequence;

thread_local! {
    static APP: RefCell<Option<Rc<EffectsApp>>> = RefCell::new(None);
}

/// Wires every effect into the page and keeps the listeners alive.
pub struct EffectsApp {
    config: EffectsConfig,
    listeners: RefCell<Vec<EventListener>>,
    glitch: RefCell<Option<GlitchEffects>>,
    drag: RefCell<Option<Rc<DragController>>>,
    entrances: RefCell<Vec<Timeout>>,
}

impl EffectsApp {
    pub fn new(config: EffectsConfig) -> Rc<Self> {
        Rc::new(Self {
            config,
            listeners: RefCell::new(Vec::new()),
            glitch: RefCell::new(None),
            drag: RefCell::new(None),
            entrances: RefCell::new(Vec::new()),
        })
    }

    pub fn drag_controller(&self) -> Option<Rc<DragController>> {
        self.drag.borrow().clone()
    }

    pub fn glitch_texts(&self) -> Vec<Rc<GlitchText>> {
        self.glitch
            .borrow()
            .as_ref()
            .map(|glitch| glitch.texts().to_vec())
            .unwrap_or_default()
    }

    /// Ripples, smooth scroll and the resize watcher do not wait for the intro.
    pub fn install_immediate(self: &Rc<Self>) {
        let mut listeners = install_ripples(self.config.ripple);
        listeners.extend(install_smooth_scroll(self.config.scroll));
        if let Some(window) = dom::window() {
            let app = Rc::downgrade(self);
            listeners.push(EventListener::new(&window, "resize", move |_event| {
                if let Some(app) = app.upgrade() {
                    app.on_resize();
                }
            }));
        }
        self.listeners.borrow_mut().extend(listeners);
    }

    /// Types the terminal intro, then brings up glitch text and the panels.
    pub async fn run(self: Rc<Self>) {
        set_boot_phase(BootPhase::Typing);
        if !run_terminal_sequence(&self.config.typewriter).await {
            gloo::console::log!("glassfx: no terminal markup, skipping intro");
        }

        set_boot_phase(BootPhase::Effects);
        let glitch = GlitchEffects::install(self.config.glitch);
        gloo::console::log!("glassfx: glitch elements", glitch.texts().len() as u32);
        *self.glitch.borrow_mut() = Some(glitch);

        let panels = dom::query_all(PANEL_SELECTOR);
        *self.drag.borrow_mut() = Some(DragController::install(panels, self.config.drag));
        self.relayout();

        set_boot_phase(BootPhase::Ready);
    }

    pub fn relayout(&self) {
        let Some(drag) = self.drag_controller() else {
            return;
        };
        let Some(viewport) = dom::viewport() else {
            return;
        };
        drag.reset_offsets();
        let (_, entrances) = randomize_panel_positions(
            drag.panels(),
            viewport,
            &self.config.layout,
            &mut MathRandom,
        );
        *self.entrances.borrow_mut() = entrances;
    }

    fn on_resize(&self) {
        let Some(drag) = self.drag_controller() else {
            return;
        };
        let Some(viewport) = dom::viewport() else {
            return;
        };
        if panels_out_of_view(drag.panels(), viewport) {
            self.relayout();
        }
    }
}

/// Starts the page effects with the config found in the page.
pub fn start() {
    if APP.with(|slot| slot.borrow().is_some()) {
        return;
    }
    let app = EffectsApp::new(app_config::load_effects_config());
    APP.with(|slot| {
        *slot.borrow_mut() = Some(app.clone());
    });
    app.install_immediate();
    spawn_local(app.run());
}

/// Runs [`start`] now, or once the document has finished parsing.
pub fn start_when_ready() {
    let Some(document) = dom::document() else {
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_event| start()).forget();
    } else {
        start();
    }
}
