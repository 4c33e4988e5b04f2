use crate::config::LayoutConfig;
use crate::drag::Point;
use crate::random::RandomSource;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelSize {
    pub width: f64,
    pub height: f64,
}

impl PanelSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// On-screen box of a panel as reported by the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Where a panel's top-left corner may go so that it stays on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SafeBounds {
    pub left: f64,
    pub top: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl SafeBounds {
    pub fn new(viewport: Viewport, size: PanelSize, margin: f64) -> Self {
        Self {
            left: margin,
            top: margin,
            max_x: (viewport.width - size.width - margin).max(0.0),
            max_y: (viewport.height - size.height - margin).max(0.0),
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.left + self.max_x
            && point.y >= self.top
            && point.y <= self.top + self.max_y
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    Left,
    Right,
}

/// Fixed zone for the first four panels, alternating left and right.
pub fn fixed_zone(index: usize) -> Option<Zone> {
    match index {
        0 | 2 => Some(Zone::Left),
        1 | 3 => Some(Zone::Right),
        _ => None,
    }
}

pub fn place_panel(
    index: usize,
    viewport: Viewport,
    size: PanelSize,
    config: &LayoutConfig,
    rng: &mut impl RandomSource,
) -> Point {
    let margin = config.margin;
    let inset = margin + config.zone_inset;
    match fixed_zone(index) {
        Some(Zone::Left) => Point::new(inset, viewport.height * config.zone_tops[index]),
        Some(Zone::Right) => Point::new(
            viewport.width - size.width - inset,
            viewport.height * config.zone_tops[index],
        ),
        None => {
            let bounds = SafeBounds::new(viewport, size, margin);
            Point::new(
                rng.next_unit() * bounds.max_x + bounds.left,
                rng.next_unit() * bounds.max_y + bounds.top,
            )
        }
    }
}

pub fn layout_panels(
    sizes: &[PanelSize],
    viewport: Viewport,
    config: &LayoutConfig,
    rng: &mut impl RandomSource,
) -> Vec<Point> {
    sizes
        .iter()
        .enumerate()
        .map(|(index, size)| place_panel(index, viewport, *size, config, rng))
        .collect()
}

pub fn entrance_delay_ms(index: usize, config: &LayoutConfig) -> u32 {
    (index as u32).saturating_mul(config.entrance_stagger_ms)
}

/// True when any panel pokes past the right or bottom edge of the viewport.
pub fn needs_relayout(rects: &[PanelRect], viewport: Viewport) -> bool {
    rects
        .iter()
        .any(|rect| rect.right > viewport.width || rect.bottom > viewport.height)
}
