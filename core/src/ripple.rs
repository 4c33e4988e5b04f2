use crate::layout::PanelRect;

/// Size and placement of a ripple, relative to the clicked button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// Centers a square of the button's larger side on the click point.
    pub fn from_click(button: PanelRect, client_x: f64, client_y: f64) -> Self {
        let width = button.right - button.left;
        let height = button.bottom - button.top;
        let size = width.max(height);
        Self {
            size,
            left: client_x - button.left - size / 2.0,
            top: client_y - button.top - size / 2.0,
        }
    }
}
