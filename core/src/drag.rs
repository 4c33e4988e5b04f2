use std::ops::{Add, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PanelId(pub usize);

/// Drag state of a single panel: idle until pressed, dragging until released.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanelDrag {
    offset: Point,
    initial: Point,
    dragging: bool,
    active: bool,
}

impl PanelDrag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Records the grab point. Only a press that landed on the panel starts a
    /// drag; a stray press still re-anchors `initial` against the current offset.
    pub fn press(&mut self, pointer: Point, inside: bool) -> bool {
        self.initial = pointer - self.offset;
        if inside {
            self.dragging = true;
            self.active = true;
        }
        self.dragging
    }

    /// Returns the translation to apply, or `None` when not dragging.
    pub fn drag_to(&mut self, pointer: Point) -> Option<Point> {
        if !self.dragging {
            return None;
        }
        self.offset = pointer - self.initial;
        Some(self.offset)
    }

    pub fn release(&mut self) {
        self.initial = self.offset;
        self.dragging = false;
    }

    /// Called once the post-drop highlight has expired.
    pub fn clear_active(&mut self) {
        if !self.dragging {
            self.active = false;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragUpdate {
    Started(PanelId),
    Moved { panel: PanelId, offset: Point },
    Released(PanelId),
}

/// Page-level input router: pointer moves and releases only ever reach the
/// panel whose drag session is open.
#[derive(Clone, Debug, Default)]
pub struct DragRouter {
    panels: Vec<PanelDrag>,
    active: Option<PanelId>,
}

impl DragRouter {
    pub fn new(panel_count: usize) -> Self {
        Self {
            panels: vec![PanelDrag::new(); panel_count],
            active: None,
        }
    }

    pub fn panel(&self, id: PanelId) -> Option<&PanelDrag> {
        self.panels.get(id.0)
    }

    pub fn active(&self) -> Option<PanelId> {
        self.active
    }

    pub fn press(&mut self, id: PanelId, pointer: Point, inside: bool) -> Option<DragUpdate> {
        // A second press while another session is open closes that one first.
        if let Some(previous) = self.active.filter(|previous| *previous != id) {
            if let Some(panel) = self.panels.get_mut(previous.0) {
                panel.release();
            }
            self.active = None;
        }
        let panel = self.panels.get_mut(id.0)?;
        if panel.press(pointer, inside) {
            self.active = Some(id);
            return Some(DragUpdate::Started(id));
        }
        None
    }

    pub fn pointer_move(&mut self, pointer: Point) -> Option<DragUpdate> {
        let id = self.active?;
        let offset = self.panels.get_mut(id.0)?.drag_to(pointer)?;
        Some(DragUpdate::Moved { panel: id, offset })
    }

    pub fn release(&mut self) -> Option<DragUpdate> {
        let id = self.active.take()?;
        self.panels.get_mut(id.0)?.release();
        Some(DragUpdate::Released(id))
    }

    pub fn clear_active(&mut self, id: PanelId) {
        if let Some(panel) = self.panels.get_mut(id.0) {
            panel.clear_active();
        }
    }

    /// Drops every accumulated offset, used when panels are laid out again.
    pub fn reset_offsets(&mut self) {
        self.active = None;
        for panel in &mut self.panels {
            panel.reset();
        }
    }
}
