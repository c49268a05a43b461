pub(crate) mod errors;
pub(crate) mod model;
pub(crate) mod style;
pub(crate) mod view;

use model::{ARTICLE_JSON, ArticleContent};
use style::ArticleStyle;

use crate::style::StyleScope;

/// Read-only data needed to render the article.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArticleViewModel<'a> {
    pub(crate) content: &'a ArticleContent,
    pub(crate) style: &'a ArticleStyle,
}

/// Article widget: the embedded article text plus the style resolved from
/// the shared style scope.
#[derive(Debug, Default)]
pub(crate) struct ArticleWidget {
    content: ArticleContent,
    style: ArticleStyle,
}

impl ArticleWidget {
    /// Load the embedded article, rendering an empty one if it is malformed.
    pub(crate) fn load(scope: &StyleScope) -> Self {
        let content = match ArticleContent::from_json(ARTICLE_JSON) {
            Ok(content) => content,
            Err(err) => {
                log::error!("failed to load article content: {err}");
                ArticleContent::default()
            },
        };

        Self {
            content,
            style: ArticleStyle::resolve(scope),
        }
    }

    /// Re-read the style variables after the scope changed.
    pub(crate) fn restyle(&mut self, scope: &StyleScope) {
        self.style = ArticleStyle::resolve(scope);
    }

    pub(crate) fn vm(&self) -> ArticleViewModel<'_> {
        ArticleViewModel {
            content: &self.content,
            style: &self.style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ArticleWidget;
    use crate::style::{StyleScope, project};
    use crate::widgets::article_params::model::{
        DEFAULT_ARTICLE_SETTINGS, FONT_SIZE_OPTIONS, SettingsField,
    };

    #[test]
    fn given_loaded_widget_when_scope_changes_then_restyle_picks_it_up() {
        let mut scope = StyleScope::default();
        project(&DEFAULT_ARTICLE_SETTINGS, &mut scope);
        let mut widget = ArticleWidget::load(&scope);
        assert_eq!(widget.vm().style.font_size, 18.0);

        let larger = DEFAULT_ARTICLE_SETTINGS
            .with_field(SettingsField::FontSize, FONT_SIZE_OPTIONS[2]);
        project(&larger, &mut scope);
        widget.restyle(&scope);

        assert_eq!(widget.vm().style.font_size, 38.0);
        assert!(!widget.vm().content.title.is_empty());
    }
}
