use gloo::timers::callback::Timeout;
use web_sys::HtmlElement;

use glassfx_core::config::LayoutConfig;
use glassfx_core::{
    entrance_delay_ms, layout_panels, needs_relayout, PanelSize, Point, RandomSource, Viewport,
};

use crate::dom;

pub(crate) fn panel_size(panel: &HtmlElement) -> PanelSize {
    PanelSize::new(f64::from(panel.offset_width()), f64::from(panel.offset_height()))
}

/// Places every panel for `viewport` and starts the staggered entrance.
///
/// The returned timers run the entrance; dropping them cancels any that have
/// not fired yet.
pub fn randomize_panel_positions(
    panels: &[HtmlElement],
    viewport: Viewport,
    config: &LayoutConfig,
    rng: &mut impl RandomSource,
) -> (Vec<Point>, Vec<Timeout>) {
    let sizes: Vec<PanelSize> = panels.iter().map(panel_size).collect();
    let placements = layout_panels(&sizes, viewport, config, rng);
    let mut entrances = Vec::with_capacity(panels.len());
    for (index, (panel, placement)) in panels.iter().zip(placements.iter()).enumerate() {
        dom::set_px(panel, "left", placement.x);
        dom::set_px(panel, "top", placement.y);
        let panel = panel.clone();
        entrances.push(Timeout::new(entrance_delay_ms(index, config), move || {
            dom::set_style(&panel, "opacity", "1");
            dom::set_style(&panel, "transform", "scale(1)");
        }));
    }
    (placements, entrances)
}

/// Whether a resize pushed any panel past the right or bottom edge.
pub fn panels_out_of_view(panels: &[HtmlElement], viewport: Viewport) -> bool {
    let rects: Vec<_> = panels.iter().map(|panel| dom::rect_of(panel)).collect();
    needs_relayout(&rects, viewport)
}
