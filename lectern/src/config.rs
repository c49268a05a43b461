use iced::Size;

use crate::geometry::PanelLayout;

/// Startup configuration of the application window and panel.
#[derive(Debug, Clone)]
pub(crate) struct AppConfig {
    pub(crate) title: &'static str,
    /// Default `env_logger` filter, overridden by `RUST_LOG`.
    pub(crate) log_filter: &'static str,
    pub(crate) window_size: Size,
    pub(crate) min_window_size: Size,
    pub(crate) panel: PanelLayout,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Lectern",
            log_filter: "info",
            window_size: Size::new(1440.0, 900.0),
            min_window_size: Size::new(800.0, 600.0),
            panel: PanelLayout::default(),
        }
    }
}
