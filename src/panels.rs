use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::timers::callback::Timeout;
use web_sys::{Event, HtmlElement};

use glassfx_core::config::DragConfig;
use glassfx_core::{DragRouter, DragUpdate, PanelId, Point};

use crate::dom;

pub(crate) const PANEL_SELECTOR: &str = ".draggable-panel";
pub(crate) const DRAGGING_CLASS: &str = "dragging";
pub(crate) const ACTIVE_CLASS: &str = "active";

const PRESS_EVENTS: [&str; 2] = ["mousedown", "touchstart"];
const MOVE_EVENTS: [&str; 2] = ["mousemove", "touchmove"];
const RELEASE_EVENTS: [&str; 3] = ["mouseup", "touchend", "touchcancel"];

/// Drags `.draggable-panel` elements around with mouse or touch input.
///
/// Presses are heard per panel. Moves and releases are heard once on the
/// document and go through a [`DragRouter`], which forwards them to the one
/// panel being dragged, so a gesture keeps tracking after the pointer leaves
/// the panel.
pub struct DragController {
    panels: Vec<HtmlElement>,
    router: RefCell<DragRouter>,
    linger: RefCell<Vec<Option<Timeout>>>,
    config: DragConfig,
    listeners: RefCell<Vec<EventListener>>,
}

impl DragController {
    pub fn install(panels: Vec<HtmlElement>, config: DragConfig) -> Rc<Self> {
        let count = panels.len();
        let controller = Rc::new(Self {
            panels,
            router: RefCell::new(DragRouter::new(count)),
            linger: RefCell::new((0..count).map(|_| None).collect()),
            config,
            listeners: RefCell::new(Vec::new()),
        });
        controller.install_listeners();
        controller
    }

    pub fn panels(&self) -> &[HtmlElement] {
        &self.panels
    }

    pub fn offset(&self, index: usize) -> Option<Point> {
        self.router
            .borrow()
            .panel(PanelId(index))
            .map(|panel| panel.offset())
    }

    pub fn is_dragging(&self) -> bool {
        self.router.borrow().active().is_some()
    }

    /// Forgets every drag offset; the next gesture starts from the panel's
    /// freshly assigned position.
    pub fn reset_offsets(&self) {
        self.router.borrow_mut().reset_offsets();
        for slot in self.linger.borrow_mut().iter_mut() {
            slot.take();
        }
        for panel in &self.panels {
            dom::remove_class(panel, DRAGGING_CLASS);
            dom::remove_class(panel, ACTIVE_CLASS);
        }
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();

        for (index, panel) in self.panels.iter().enumerate() {
            for event_type in PRESS_EVENTS {
                let controller = Rc::downgrade(self);
                let target = panel.clone();
                listeners.push(EventListener::new(panel, event_type, move |event: &Event| {
                    if let Some(controller) = controller.upgrade() {
                        controller.on_press(PanelId(index), &target, event);
                    }
                }));
            }
        }

        let Some(document) = dom::document() else {
            *self.listeners.borrow_mut() = listeners;
            return;
        };
        for event_type in MOVE_EVENTS {
            let controller = Rc::downgrade(self);
            listeners.push(EventListener::new_with_options(
                &document,
                event_type,
                EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: false,
                },
                move |event: &Event| {
                    if let Some(controller) = controller.upgrade() {
                        controller.on_move(event);
                    }
                },
            ));
        }
        for event_type in RELEASE_EVENTS {
            let controller = Rc::downgrade(self);
            listeners.push(EventListener::new(&document, event_type, move |_event: &Event| {
                if let Some(controller) = controller.upgrade() {
                    controller.on_release();
                }
            }));
        }

        *self.listeners.borrow_mut() = listeners;
    }

    pub(crate) fn on_press(self: &Rc<Self>, id: PanelId, panel: &HtmlElement, event: &Event) {
        let Some(pointer) = dom::pointer_position(event) else {
            return;
        };
        let previous = self.router.borrow().active();
        if previous.is_some_and(|previous| previous != id) {
            self.on_release();
        }
        let inside = dom::event_within(event, panel);
        let update = self.router.borrow_mut().press(id, pointer, inside);
        if let Some(DragUpdate::Started(id)) = update {
            if let Some(slot) = self.linger.borrow_mut().get_mut(id.0) {
                slot.take();
            }
            dom::add_class(panel, DRAGGING_CLASS);
            dom::add_class(panel, ACTIVE_CLASS);
        }
    }

    pub(crate) fn on_move(&self, event: &Event) {
        if !self.is_dragging() {
            return;
        }
        let Some(pointer) = dom::pointer_position(event) else {
            return;
        };
        let update = self.router.borrow_mut().pointer_move(pointer);
        let Some(DragUpdate::Moved { panel, offset }) = update else {
            return;
        };
        event.prevent_default();
        if let Some(element) = self.panels.get(panel.0) {
            dom::set_style(
                element,
                "transform",
                &format!("translate({}px, {}px)", offset.x, offset.y),
            );
        }
    }

    pub(crate) fn on_release(self: &Rc<Self>) {
        let update = self.router.borrow_mut().release();
        let Some(DragUpdate::Released(id)) = update else {
            return;
        };
        let Some(element) = self.panels.get(id.0).cloned() else {
            return;
        };
        dom::remove_class(&element, DRAGGING_CLASS);
        let controller: Weak<Self> = Rc::downgrade(self);
        let timeout = Timeout::new(self.config.active_linger_ms, move || {
            let Some(controller) = controller.upgrade() else {
                return;
            };
            controller.router.borrow_mut().clear_active(id);
            dom::remove_class(&element, ACTIVE_CLASS);
        });
        if let Some(slot) = self.linger.borrow_mut().get_mut(id.0) {
            *slot = Some(timeout);
        }
    }
}
