use std::collections::BTreeMap;

use crate::widgets::article_params::model::ArticleSettings;

pub(crate) const FONT_FAMILY_VAR: &str = "--font-family";
pub(crate) const FONT_SIZE_VAR: &str = "--font-size";
pub(crate) const FONT_COLOR_VAR: &str = "--font-color";
pub(crate) const BG_COLOR_VAR: &str = "--bg-color";
pub(crate) const CONTAINER_WIDTH_VAR: &str = "--container-width";

/// The five style variable values derived from one settings value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StyleValues {
    pub(crate) font_family: &'static str,
    pub(crate) font_size: &'static str,
    pub(crate) font_color: &'static str,
    pub(crate) bg_color: &'static str,
    pub(crate) container_width: &'static str,
}

impl StyleValues {
    /// Variable name and value pairs, one per style variable.
    pub(crate) fn entries(&self) -> [(&'static str, &'static str); 5] {
        [
            (FONT_FAMILY_VAR, self.font_family),
            (FONT_SIZE_VAR, self.font_size),
            (FONT_COLOR_VAR, self.font_color),
            (BG_COLOR_VAR, self.bg_color),
            (CONTAINER_WIDTH_VAR, self.container_width),
        ]
    }
}

impl From<&ArticleSettings> for StyleValues {
    fn from(settings: &ArticleSettings) -> Self {
        Self {
            font_family: settings.font_family_option.value,
            font_size: settings.font_size_option.value,
            font_color: settings.font_color.value,
            bg_color: settings.background_color.value,
            container_width: settings.content_width.value,
        }
    }
}

/// Destination of projected style variables.
pub(crate) trait StyleSink {
    fn set_values(&mut self, values: StyleValues);
}

/// Write all five style variables for `settings` into `sink`.
pub(crate) fn project<S: StyleSink>(settings: &ArticleSettings, sink: &mut S) {
    sink.set_values(StyleValues::from(settings));
}

/// Shared named-variable scope read by the article renderer.
///
/// Setting a variable overwrites any previous value; variables are never
/// removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct StyleScope {
    vars: BTreeMap<&'static str, &'static str>,
}

impl StyleScope {
    pub(crate) fn get(&self, name: &str) -> Option<&'static str> {
        self.vars.get(name).copied()
    }
}

impl StyleSink for StyleScope {
    fn set_values(&mut self, values: StyleValues) {
        for (name, value) in values.entries() {
            self.vars.insert(name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        BG_COLOR_VAR, CONTAINER_WIDTH_VAR, FONT_COLOR_VAR, FONT_FAMILY_VAR,
        FONT_SIZE_VAR, StyleScope, project,
    };
    use crate::widgets::article_params::model::{
        ArticleSettings, BACKGROUND_COLORS, CONTENT_WIDTH_OPTIONS,
        DEFAULT_ARTICLE_SETTINGS, FONT_COLORS, FONT_FAMILY_OPTIONS,
        FONT_SIZE_OPTIONS,
    };

    fn all_settings() -> Vec<ArticleSettings> {
        let mut all = Vec::new();
        for font_family_option in FONT_FAMILY_OPTIONS {
            for font_size_option in FONT_SIZE_OPTIONS {
                for font_color in FONT_COLORS {
                    for background_color in BACKGROUND_COLORS {
                        for content_width in CONTENT_WIDTH_OPTIONS {
                            all.push(ArticleSettings {
                                font_family_option,
                                font_size_option,
                                font_color,
                                background_color,
                                content_width,
                            });
                        }
                    }
                }
            }
        }
        all
    }

    #[test]
    fn given_any_settings_when_projected_then_scope_holds_five_values() {
        let all = all_settings();
        assert_eq!(all.len(), 6 * 3 * 9 * 9 * 2);

        for settings in all {
            let mut scope = StyleScope::default();
            project(&settings, &mut scope);

            assert_eq!(scope.vars.len(), 5);
            assert_eq!(
                scope.get(FONT_FAMILY_VAR),
                Some(settings.font_family_option.value)
            );
            assert_eq!(
                scope.get(FONT_SIZE_VAR),
                Some(settings.font_size_option.value)
            );
            assert_eq!(
                scope.get(FONT_COLOR_VAR),
                Some(settings.font_color.value)
            );
            assert_eq!(
                scope.get(BG_COLOR_VAR),
                Some(settings.background_color.value)
            );
            assert_eq!(
                scope.get(CONTAINER_WIDTH_VAR),
                Some(settings.content_width.value)
            );
        }
    }

    #[test]
    fn given_reused_scope_when_reprojected_then_matches_fresh_scope() {
        let target = ArticleSettings {
            font_family_option: FONT_FAMILY_OPTIONS[5],
            font_size_option: FONT_SIZE_OPTIONS[2],
            font_color: FONT_COLORS[8],
            background_color: BACKGROUND_COLORS[1],
            content_width: CONTENT_WIDTH_OPTIONS[1],
        };

        let mut fresh = StyleScope::default();
        project(&target, &mut fresh);

        let mut reused = StyleScope::default();
        project(&DEFAULT_ARTICLE_SETTINGS, &mut reused);
        project(&target, &mut reused);
        project(&target, &mut reused);

        assert_eq!(fresh, reused);
    }

    #[test]
    fn given_defaults_when_projected_then_font_family_is_open_sans() {
        let mut scope = StyleScope::default();

        project(&DEFAULT_ARTICLE_SETTINGS, &mut scope);

        assert_eq!(scope.get(FONT_FAMILY_VAR), Some("'Open Sans'"));
        assert_eq!(scope.get(FONT_SIZE_VAR), Some("18px"));
        assert_eq!(scope.get(CONTAINER_WIDTH_VAR), Some("1394px"));
    }

    #[test]
    fn given_empty_scope_when_variable_read_then_none() {
        let scope = StyleScope::default();

        assert_eq!(scope.get(BG_COLOR_VAR), None);
    }
}
