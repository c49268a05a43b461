use iced::font::Family;
use iced::{Color, Font};

use super::errors::StyleValueError;
use crate::style::{
    BG_COLOR_VAR, CONTAINER_WIDTH_VAR, FONT_COLOR_VAR, FONT_FAMILY_VAR,
    FONT_SIZE_VAR, StyleScope, StyleValues,
};
use crate::widgets::article_params::model::DEFAULT_ARTICLE_SETTINGS;

/// Concrete rendering parameters resolved from the style scope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ArticleStyle {
    pub(crate) font: Font,
    pub(crate) font_size: f32,
    pub(crate) text_color: Color,
    pub(crate) background: Color,
    pub(crate) max_width: f32,
}

impl Default for ArticleStyle {
    fn default() -> Self {
        Self::resolve(&StyleScope::default())
    }
}

impl ArticleStyle {
    /// Read the five style variables, falling back to the default option
    /// for any variable that is unset or malformed.
    pub(crate) fn resolve(scope: &StyleScope) -> Self {
        let fallback = StyleValues::from(&DEFAULT_ARTICLE_SETTINGS);

        Self {
            font: resolve_var(
                scope,
                FONT_FAMILY_VAR,
                fallback.font_family,
                parse_font_family,
            ),
            font_size: resolve_var(
                scope,
                FONT_SIZE_VAR,
                fallback.font_size,
                parse_px,
            ),
            text_color: resolve_var(
                scope,
                FONT_COLOR_VAR,
                fallback.font_color,
                parse_hex_color,
            ),
            background: resolve_var(
                scope,
                BG_COLOR_VAR,
                fallback.bg_color,
                parse_hex_color,
            ),
            max_width: resolve_var(
                scope,
                CONTAINER_WIDTH_VAR,
                fallback.container_width,
                parse_px,
            ),
        }
    }
}

fn resolve_var<T: Default>(
    scope: &StyleScope,
    name: &str,
    fallback: &'static str,
    parse: fn(&'static str) -> Result<T, StyleValueError>,
) -> T {
    let Some(value) = scope.get(name) else {
        log::debug!("style variable {name} is unset, using {fallback}");
        return parse(fallback).unwrap_or_default();
    };

    match parse(value) {
        Ok(parsed) => parsed,
        Err(err) => {
            log::warn!("style variable {name}: {err}");
            parse(fallback).unwrap_or_default()
        },
    }
}

/// Parse a CSS-like length such as `18px`.
pub(crate) fn parse_px(value: &'static str) -> Result<f32, StyleValueError> {
    value
        .trim()
        .strip_suffix("px")
        .and_then(|number| number.trim().parse::<f32>().ok())
        .filter(|number| number.is_finite() && *number >= 0.0)
        .ok_or_else(|| StyleValueError::InvalidPixels(value.to_string()))
}

/// Parse a `#RRGGBB` color.
pub(crate) fn parse_hex_color(
    value: &'static str,
) -> Result<Color, StyleValueError> {
    let invalid = || StyleValueError::InvalidColor(value.to_string());
    let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };

    Ok(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Map the first entry of a font family list to a font.
///
/// Quoted names become named fonts; the generic keywords map to the
/// matching font family.
pub(crate) fn parse_font_family(
    value: &'static str,
) -> Result<Font, StyleValueError> {
    let first = value
        .split(',')
        .next()
        .map(|name| {
            name.trim().trim_matches(|c: char| c == '\'' || c == '"')
        })
        .unwrap_or_default();

    let family = match first {
        "" => return Err(StyleValueError::EmptyFontFamily),
        "monospace" => Family::Monospace,
        "serif" => Family::Serif,
        "sans-serif" => Family::SansSerif,
        name => Family::Name(name),
    };

    Ok(Font {
        family,
        ..Font::default()
    })
}
