use gloo::events::EventListener;
use web_sys::{Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use glassfx_core::config::ScrollConfig;
use glassfx_core::{anchor_target_id, route_anchor_click};

use crate::dom;

pub(crate) const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Smooth-scrolls in-page anchors to their target, top edge first.
pub fn install_smooth_scroll(config: ScrollConfig) -> Vec<EventListener> {
    dom::query_all(ANCHOR_SELECTOR)
        .into_iter()
        .map(|anchor| {
            let link = anchor.clone();
            EventListener::new_with_options(
                &anchor,
                "click",
                gloo::events::EventListenerOptions::enable_prevent_default(),
                move |event: &Event| {
                    let href = link.get_attribute("href").unwrap_or_default();
                    let target = anchor_target_id(&href).and_then(dom::by_id);
                    let action = route_anchor_click(config.anchor_policy, target.is_some());
                    if action.prevent_default {
                        event.prevent_default();
                    }
                    if !action.scroll {
                        return;
                    }
                    if let Some(target) = target {
                        let options = ScrollIntoViewOptions::new();
                        options.set_behavior(ScrollBehavior::Smooth);
                        options.set_block(ScrollLogicalPosition::Start);
                        target.scroll_into_view_with_scroll_into_view_options(&options);
                    }
                },
            )
        })
        .collect()
}
