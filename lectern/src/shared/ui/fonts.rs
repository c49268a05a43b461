use iced::Font;
use iced::font::Weight;

#[derive(Debug, Clone)]
pub(crate) struct UiFonts {
    pub(crate) size: f32,
    pub(crate) label_size: f32,
}

impl Default for UiFonts {
    fn default() -> Self {
        Self {
            size: 14.0,
            label_size: 12.0,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct HeadingFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

impl Default for HeadingFonts {
    fn default() -> Self {
        Self {
            font_type: Font {
                weight: Weight::ExtraBold,
                ..Font::default()
            },
            size: 31.0,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct FontsConfig {
    pub(crate) ui: UiFonts,
    pub(crate) heading: HeadingFonts,
}
