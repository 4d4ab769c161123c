use crate::core::actions::zoom_viewport::ZoomDirection;

/// A zoom request at a cursor position, in grid pixel coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomEvent {
    pub cursor_x: f64,
    pub cursor_y: f64,
    pub direction: ZoomDirection,
}

/// Input produced by the external event source.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Zoom(ZoomEvent),
    Quit,
}
