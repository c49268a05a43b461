use iced::{Color, Theme};

/// Colors used by the panel chrome (not by the article, which follows the
/// projected style variables).
#[derive(Debug, Clone)]
pub(crate) struct PanelPalette {
    pub(crate) background: Color,
    pub(crate) foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) border: Color,
    pub(crate) separator: Color,
    pub(crate) hover: Color,
    pub(crate) accent: Color,
    pub(crate) accent_hover: Color,
    pub(crate) on_accent: Color,
    pub(crate) shadow: Color,
}

impl Default for PanelPalette {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            foreground: Color::BLACK,
            dim_foreground: Color::from_rgb8(0x5F, 0x5F, 0x5F),
            border: Color::from_rgb8(0x00, 0x00, 0x00),
            separator: Color::from_rgb8(0xC4, 0xC4, 0xC4),
            hover: Color::from_rgb8(0xF2, 0xF2, 0xF2),
            accent: Color::from_rgb8(0xFF, 0xC8, 0x02),
            accent_hover: Color::from_rgb8(0xFF, 0xD8, 0x4D),
            on_accent: Color::BLACK,
            shadow: Color::from_rgba8(0x00, 0x00, 0x00, 0.15),
        }
    }
}

/// Application theme: the iced base theme plus the panel palette.
#[derive(Debug, Clone, Default)]
pub(crate) struct AppTheme {
    palette: PanelPalette,
}

impl AppTheme {
    pub(crate) fn palette(&self) -> &PanelPalette {
        &self.palette
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::Light
    }
}

/// Borrowed theme handed to view functions.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }

    pub(crate) fn palette(&self) -> &'a PanelPalette {
        self.theme.palette()
    }
}
