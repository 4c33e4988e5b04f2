use gloo::timers::callback::Timeout;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use glassfx_core::config::TypewriterConfig;
use glassfx_core::{TypeStep, TypewriterPlan};

use crate::dom;

pub(crate) const TERMINAL_SELECTOR: &str = ".terminal-loading";
pub(crate) const LINES_ID: &str = "terminal-lines";
pub(crate) const LINE_CLASS: &str = "terminal-line";
pub(crate) const CURSOR_CLASS: &str = "terminal-cursor";
pub(crate) const HIDDEN_CLASS: &str = "hidden";

/// Types the terminal script into `#terminal-lines`.
///
/// Resolves once the last line's pause has elapsed and the cursor is shown,
/// so callers can chain on real completion. Returns `false` without touching
/// the page when the terminal markup is missing.
pub async fn run_terminal_sequence(config: &TypewriterConfig) -> bool {
    let Some(terminal) = dom::query_one(TERMINAL_SELECTOR) else {
        return false;
    };
    let Some(container) = dom::by_id(LINES_ID) else {
        return false;
    };

    let plan = TypewriterPlan::from_config(config);
    let mut line: Option<HtmlElement> = None;
    for step in plan.steps() {
        match step {
            TypeStep::StartLine(index) => {
                line = match append_to(&container, "div", LINE_CLASS) {
                    Ok(line) => Some(line),
                    Err(err) => {
                        gloo::console::warn!("glassfx: terminal line failed", index as u32, err);
                        None
                    }
                };
            }
            TypeStep::Char { ch, delay_ms } => {
                TimeoutFuture::new(delay_ms).await;
                if let Some(line) = line.as_ref() {
                    let mut text = line.text_content().unwrap_or_default();
                    text.push(ch);
                    line.set_text_content(Some(&text));
                }
            }
            TypeStep::Pause(ms) => TimeoutFuture::new(ms).await,
            TypeStep::Cursor => {
                if let Err(err) = append_to(&container, "span", CURSOR_CLASS) {
                    gloo::console::warn!("glassfx: terminal cursor failed", err);
                }
            }
        }
    }

    schedule_hide(terminal, config.hide_delay_ms, config.remove_delay_ms);
    true
}

fn append_to(container: &HtmlElement, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let element = dom::create(tag, class)?;
    container.append_child(&element)?;
    Ok(element)
}

fn schedule_hide(terminal: HtmlElement, hide_delay_ms: u32, remove_delay_ms: u32) {
    Timeout::new(hide_delay_ms, move || {
        dom::add_class(&terminal, HIDDEN_CLASS);
        Timeout::new(remove_delay_ms, move || {
            dom::set_style(&terminal, "display", "none");
        })
        .forget();
    })
    .forget();
}
