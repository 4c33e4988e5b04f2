use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, HtmlElement, MouseEvent};

use glassfx_core::config::RippleConfig;
use glassfx_core::RippleGeometry;

use crate::dom;

pub(crate) const BUTTON_SELECTOR: &str = ".glass-button";
pub(crate) const RIPPLE_CLASS: &str = "ripple";

/// Appends a ripple to `button` for a click at client coordinates and removes
/// it once `lifetime_ms` has passed.
pub fn spawn_ripple(
    button: &HtmlElement,
    client_x: f64,
    client_y: f64,
    config: &RippleConfig,
) -> Result<HtmlElement, JsValue> {
    let geometry = RippleGeometry::from_click(dom::rect_of(button), client_x, client_y);
    let ripple = dom::create("span", RIPPLE_CLASS)?;
    dom::set_px(&ripple, "width", geometry.size);
    dom::set_px(&ripple, "height", geometry.size);
    dom::set_px(&ripple, "left", geometry.left);
    dom::set_px(&ripple, "top", geometry.top);
    button.append_child(&ripple)?;

    let expired = ripple.clone();
    Timeout::new(config.lifetime_ms, move || expired.remove()).forget();
    Ok(ripple)
}

pub(crate) fn install_ripples(config: RippleConfig) -> Vec<EventListener> {
    dom::query_all(BUTTON_SELECTOR)
        .into_iter()
        .map(|button| {
            let target = button.clone();
            EventListener::new(&button, "click", move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let client_x = f64::from(event.client_x());
                let client_y = f64::from(event.client_y());
                if let Err(err) = spawn_ripple(&target, client_x, client_y, &config) {
                    gloo::console::warn!("glassfx: ripple failed", err);
                }
            })
        })
        .collect()
}
