use iced::{Point, Rectangle, Size};

/// Fixed placement of the side panel and its arrow toggle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PanelLayout {
    pub(crate) width: f32,
    pub(crate) padding: f32,
    pub(crate) toggle_size: f32,
    pub(crate) toggle_margin: f32,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            width: 616.0,
            padding: 48.0,
            toggle_size: 52.0,
            toggle_margin: 16.0,
        }
    }
}

/// Bounds of the open panel, anchored to the left edge at full height.
pub(crate) fn panel_bounds(
    window_size: Size,
    layout: PanelLayout,
) -> Rectangle {
    Rectangle::new(
        Point::ORIGIN,
        Size::new(layout.width, window_size.height.max(0.0)),
    )
}

/// Bounds of the arrow toggle, which rides on the panel's right edge.
pub(crate) fn toggle_bounds(is_open: bool, layout: PanelLayout) -> Rectangle {
    let offset = if is_open { layout.width } else { 0.0 };

    Rectangle::new(
        Point::new(offset + layout.toggle_margin, layout.toggle_margin),
        Size::new(layout.toggle_size, layout.toggle_size),
    )
}
