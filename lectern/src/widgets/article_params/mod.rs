pub(crate) mod command;
pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod state;
pub(crate) mod view;

pub(crate) use command::ArticleParamsCommand;
pub(crate) use event::{ArticleParamsEffect, ArticleParamsEvent};
use iced::{Size, Subscription};
use lectern_ui_dismiss::PointerEvent;
use model::{ArticleParamsViewModel, ArticleSettings};
pub(crate) use reducer::ArticleParamsCtx;
use state::ArticleParamsState;

use crate::geometry::PanelLayout;

/// Article parameters widget: a togglable side panel holding a draft of the
/// display settings, committed on Apply and restored to defaults on Reset.
pub(crate) struct ArticleParamsWidget {
    state: ArticleParamsState,
}

impl ArticleParamsWidget {
    /// Create a closed panel with default settings and layout.
    pub(crate) fn new() -> Self {
        Self {
            state: ArticleParamsState::default(),
        }
    }

    /// Create a closed panel whose draft starts from `initial`.
    pub(crate) fn with_settings(
        initial: ArticleSettings,
        layout: PanelLayout,
        window_size: Size,
    ) -> Self {
        Self {
            state: ArticleParamsState::new(initial, layout, window_size),
        }
    }

    /// Reduce a command into state updates and an optional effect.
    pub(crate) fn reduce(
        &mut self,
        command: ArticleParamsCommand,
        ctx: &ArticleParamsCtx<'_>,
    ) -> Option<ArticleParamsEffect> {
        reducer::reduce(&mut self.state, command, ctx)
    }

    /// Return a read-only view model for the panel.
    pub(crate) fn vm(&self) -> ArticleParamsViewModel<'_> {
        ArticleParamsViewModel {
            is_open: self.state.is_open(),
            draft: self.state.draft(),
        }
    }

    /// Outside-click listener, active only while the panel is open.
    pub(crate) fn subscription(&self) -> Subscription<PointerEvent> {
        self.state.dismiss().subscription()
    }

    pub(crate) fn layout(&self) -> PanelLayout {
        self.state.layout()
    }

    /// Return read-only access to state for tests.
    #[cfg(test)]
    pub(crate) fn state(&self) -> &ArticleParamsState {
        &self.state
    }
}

impl Default for ArticleParamsWidget {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{ArticleParamsCommand, ArticleParamsCtx, ArticleParamsWidget};
    use crate::widgets::article_params::event::ArticleParamsEffect;
    use crate::widgets::article_params::model::{
        DEFAULT_ARTICLE_SETTINGS, FONT_SIZE_OPTIONS, SettingsField,
    };

    #[test]
    fn given_widget_without_arguments_when_opened_then_usable() {
        let mut widget = ArticleParamsWidget::new();
        let ctx = ArticleParamsCtx {
            committed: &DEFAULT_ARTICLE_SETTINGS,
        };

        widget.reduce(ArticleParamsCommand::Toggle, &ctx);
        widget.reduce(
            ArticleParamsCommand::SetField {
                field: SettingsField::FontSize,
                option: FONT_SIZE_OPTIONS[1],
            },
            &ctx,
        );
        let effect = widget.reduce(ArticleParamsCommand::Apply, &ctx);

        assert!(widget.vm().is_open);
        assert!(widget.state().dismiss().is_armed());
        assert!(matches!(
            effect,
            Some(ArticleParamsEffect::Commit(settings))
                if settings.font_size_option == FONT_SIZE_OPTIONS[1]
        ));
    }

    #[test]
    fn given_closed_widget_when_vm_requested_then_reports_closed_draft() {
        let widget = ArticleParamsWidget::default();
        let vm = widget.vm();

        assert!(!vm.is_open);
        assert_eq!(vm.draft, &DEFAULT_ARTICLE_SETTINGS);
    }
}
