use std::fmt;

use serde::Serialize;

/// Fixed selectable choice: a display title plus the style value it sets.
///
/// Two options are equal when their `value`s are equal, so selection widgets
/// keep matching the current choice across renders.
#[derive(Debug, Clone, Copy, Eq, Serialize)]
pub(crate) struct ParamOption {
    pub(crate) title: &'static str,
    pub(crate) value: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) class_name: Option<&'static str>,
}

impl ParamOption {
    pub(crate) const fn new(title: &'static str, value: &'static str) -> Self {
        Self {
            title,
            value,
            class_name: None,
        }
    }

    pub(crate) const fn with_class(mut self, class_name: &'static str) -> Self {
        self.class_name = Some(class_name);
        self
    }
}

impl PartialEq for ParamOption {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Display for ParamOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title)
    }
}

pub(crate) const FONT_FAMILY_OPTIONS: [ParamOption; 6] = [
    ParamOption::new("Open Sans", "'Open Sans'").with_class("open-sans"),
    ParamOption::new("Ubuntu", "'Ubuntu'").with_class("ubuntu"),
    ParamOption::new("Cormorant Garamond", "'Cormorant Garamond', serif")
        .with_class("cormorant-garamond"),
    ParamOption::new("Days One", "'Days One'").with_class("days-one"),
    ParamOption::new("Merriweather", "'Merriweather', serif")
        .with_class("merriweather"),
    ParamOption::new("Roboto Mono", "'Roboto Mono', monospace")
        .with_class("roboto-mono"),
];

pub(crate) const FONT_SIZE_OPTIONS: [ParamOption; 3] = [
    ParamOption::new("18px", "18px").with_class("font-size-18"),
    ParamOption::new("25px", "25px").with_class("font-size-25"),
    ParamOption::new("38px", "38px").with_class("font-size-38"),
];

pub(crate) const FONT_COLORS: [ParamOption; 9] = [
    ParamOption::new("Black", "#000000").with_class("font-black"),
    ParamOption::new("White", "#FFFFFF").with_class("font-white"),
    ParamOption::new("Gray", "#C4C4C4").with_class("font-gray"),
    ParamOption::new("Pink", "#FEAFE8").with_class("font-pink"),
    ParamOption::new("Fuchsia", "#FD24AF").with_class("font-fuchsia"),
    ParamOption::new("Yellow", "#FFC802").with_class("font-yellow"),
    ParamOption::new("Green", "#80D994").with_class("font-green"),
    ParamOption::new("Blue", "#6FC1FD").with_class("font-blue"),
    ParamOption::new("Purple", "#5F00FF").with_class("font-purple"),
];

pub(crate) const BACKGROUND_COLORS: [ParamOption; 9] = [
    ParamOption::new("White", "#FFFFFF").with_class("bg-white"),
    ParamOption::new("Black", "#000000").with_class("bg-black"),
    ParamOption::new("Gray", "#C4C4C4").with_class("bg-gray"),
    ParamOption::new("Pink", "#FEAFE8").with_class("bg-pink"),
    ParamOption::new("Fuchsia", "#FD24AF").with_class("bg-fuchsia"),
    ParamOption::new("Yellow", "#FFC802").with_class("bg-yellow"),
    ParamOption::new("Green", "#80D994").with_class("bg-green"),
    ParamOption::new("Blue", "#6FC1FD").with_class("bg-blue"),
    ParamOption::new("Purple", "#5F00FF").with_class("bg-purple"),
];

pub(crate) const CONTENT_WIDTH_OPTIONS: [ParamOption; 2] = [
    ParamOption::new("Wide", "1394px").with_class("width-wide"),
    ParamOption::new("Narrow", "948px").with_class("width-narrow"),
];

/// Display parameters applied to the article as one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct ArticleSettings {
    pub(crate) font_family_option: ParamOption,
    pub(crate) font_size_option: ParamOption,
    pub(crate) font_color: ParamOption,
    pub(crate) background_color: ParamOption,
    pub(crate) content_width: ParamOption,
}

/// Settings in effect at startup and restored by the panel's Reset action.
pub(crate) const DEFAULT_ARTICLE_SETTINGS: ArticleSettings = ArticleSettings {
    font_family_option: FONT_FAMILY_OPTIONS[0],
    font_size_option: FONT_SIZE_OPTIONS[0],
    font_color: FONT_COLORS[0],
    background_color: BACKGROUND_COLORS[0],
    content_width: CONTENT_WIDTH_OPTIONS[0],
};

impl Default for ArticleSettings {
    fn default() -> Self {
        DEFAULT_ARTICLE_SETTINGS
    }
}

impl ArticleSettings {
    /// Return the option currently held by `field`.
    pub(crate) fn field(&self, field: SettingsField) -> ParamOption {
        match field {
            SettingsField::FontFamily => self.font_family_option,
            SettingsField::FontSize => self.font_size_option,
            SettingsField::FontColor => self.font_color,
            SettingsField::BackgroundColor => self.background_color,
            SettingsField::ContentWidth => self.content_width,
        }
    }

    /// Return a copy with only `field` replaced by `option`.
    pub(crate) fn with_field(
        mut self,
        field: SettingsField,
        option: ParamOption,
    ) -> Self {
        let slot = match field {
            SettingsField::FontFamily => &mut self.font_family_option,
            SettingsField::FontSize => &mut self.font_size_option,
            SettingsField::FontColor => &mut self.font_color,
            SettingsField::BackgroundColor => &mut self.background_color,
            SettingsField::ContentWidth => &mut self.content_width,
        };
        *slot = option;
        self
    }
}

/// Addressable fields of [`ArticleSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SettingsField {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl SettingsField {
    #[cfg(test)]
    pub(crate) const ALL: [SettingsField; 5] = [
        SettingsField::FontFamily,
        SettingsField::FontSize,
        SettingsField::FontColor,
        SettingsField::BackgroundColor,
        SettingsField::ContentWidth,
    ];

    /// Form label for the field.
    pub(crate) fn title(self) -> &'static str {
        match self {
            SettingsField::FontFamily => "Font",
            SettingsField::FontSize => "Font size",
            SettingsField::FontColor => "Font color",
            SettingsField::BackgroundColor => "Background color",
            SettingsField::ContentWidth => "Content width",
        }
    }

    /// Enumeration the field's value must be drawn from.
    pub(crate) fn options(self) -> &'static [ParamOption] {
        match self {
            SettingsField::FontFamily => &FONT_FAMILY_OPTIONS,
            SettingsField::FontSize => &FONT_SIZE_OPTIONS,
            SettingsField::FontColor => &FONT_COLORS,
            SettingsField::BackgroundColor => &BACKGROUND_COLORS,
            SettingsField::ContentWidth => &CONTENT_WIDTH_OPTIONS,
        }
    }
}

/// Read-only data needed to render the panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArticleParamsViewModel<'a> {
    pub(crate) is_open: bool,
    pub(crate) draft: &'a ArticleSettings,
}

#[cfg(test)]
mod tests {
    use super::{
        ArticleSettings, DEFAULT_ARTICLE_SETTINGS, FONT_COLORS,
        FONT_FAMILY_OPTIONS, ParamOption, SettingsField,
    };

    #[test]
    fn given_options_with_same_value_when_compared_then_equal() {
        let left = ParamOption::new("Open Sans", "'Open Sans'");
        let right =
            ParamOption::new("Open Sans (copy)", "'Open Sans'").with_class("x");

        assert_eq!(left, right);
    }

    #[test]
    fn given_options_with_different_values_when_compared_then_not_equal() {
        assert_ne!(FONT_COLORS[0], FONT_COLORS[1]);
    }

    #[test]
    fn given_option_when_displayed_then_shows_title() {
        assert_eq!(FONT_FAMILY_OPTIONS[5].to_string(), "Roboto Mono");
    }

    #[test]
    fn given_default_settings_when_checked_then_every_field_is_enumerated() {
        for field in SettingsField::ALL {
            let value = DEFAULT_ARTICLE_SETTINGS.field(field);
            assert!(
                field.options().contains(&value),
                "{field:?} default is not in its enumeration"
            );
        }
    }

    #[test]
    fn given_default_settings_when_built_then_uses_first_option_per_field() {
        let settings = ArticleSettings::default();

        for field in SettingsField::ALL {
            assert_eq!(settings.field(field), field.options()[0]);
        }
    }

    #[test]
    fn given_settings_when_one_field_replaced_then_other_fields_untouched() {
        let original = DEFAULT_ARTICLE_SETTINGS;

        for field in SettingsField::ALL {
            let replacement = *field.options().last().unwrap();
            let updated = original.with_field(field, replacement);

            assert_eq!(updated.field(field), replacement);
            for other in SettingsField::ALL.into_iter().filter(|f| *f != field)
            {
                assert_eq!(updated.field(other), original.field(other));
            }
        }
    }

    #[test]
    fn given_settings_when_serialized_then_contains_option_values() {
        let json = serde_json::to_string(&DEFAULT_ARTICLE_SETTINGS).unwrap();

        assert!(json.contains("\"font_family_option\""));
        assert!(json.contains("'Open Sans'"));
        assert!(json.contains("\"class_name\":\"open-sans\""));
    }
}
