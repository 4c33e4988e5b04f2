use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, MouseEvent, TouchEvent, Window};

use glassfx_core::{PanelRect, Point, RandomSource, Viewport};

pub(crate) fn window() -> Option<Window> {
    web_sys::window()
}

pub(crate) fn document() -> Option<Document> {
    window()?.document()
}

pub(crate) fn viewport() -> Option<Viewport> {
    let window = window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width, height))
}

/// Every element matching `selector`; an empty list when nothing matches.
pub(crate) fn query_all(selector: &str) -> Vec<HtmlElement> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub(crate) fn query_one(selector: &str) -> Option<HtmlElement> {
    document()?
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

pub(crate) fn by_id(id: &str) -> Option<HtmlElement> {
    document()?
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

pub(crate) fn create(tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let document = document().ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let element = document.create_element(tag)?.dyn_into::<HtmlElement>()?;
    element.set_class_name(class);
    Ok(element)
}

pub(crate) fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub(crate) fn set_px(element: &HtmlElement, property: &str, value: f64) {
    set_style(element, property, &format!("{value}px"));
}

pub(crate) fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub(crate) fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

pub(crate) fn rect_of(element: &Element) -> PanelRect {
    let rect = element.get_bounding_client_rect();
    PanelRect {
        left: rect.left(),
        top: rect.top(),
        right: rect.right(),
        bottom: rect.bottom(),
    }
}

/// Whether the event target is `element` itself or one of its descendants.
pub(crate) fn event_within(event: &web_sys::Event, element: &Element) -> bool {
    let Some(target) = event.target() else {
        return false;
    };
    let Ok(node) = target.dyn_into::<web_sys::Node>() else {
        return false;
    };
    element.contains(Some(&node))
}

/// Client coordinates of a mouse event, or of the first touch point.
pub(crate) fn pointer_position(event: &web_sys::Event) -> Option<Point> {
    // Desktop browsers may not define `TouchEvent`, so go by the event type.
    if event.type_().starts_with("touch") {
        let touch = event.unchecked_ref::<TouchEvent>();
        let first = touch.touches().get(0)?;
        return Some(Point::new(first.client_x() as f64, first.client_y() as f64));
    }
    let mouse = event.dyn_ref::<MouseEvent>()?;
    Some(Point::new(mouse.client_x() as f64, mouse.client_y() as f64))
}

/// `Math.random` backed sampler for the browser.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct MathRandom;

impl RandomSource for MathRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}
