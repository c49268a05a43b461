use iced::widget::Stack;
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::article::view::article_view::{self, ArticleViewProps};
use crate::widgets::article_params::view::params_form::{
    self, ParamsFormProps,
};

/// Render the root view: the article with the parameters panel on top.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props = ThemeProps::new(&app.theme);
    let article_vm = app.widgets.article.vm();

    let article = article_view::view(ArticleViewProps {
        content: article_vm.content,
        style: article_vm.style,
    });

    let panel = params_form::view(ParamsFormProps {
        vm: app.widgets.article_params.vm(),
        theme: theme_props,
        fonts: &app.fonts,
        layout: app.widgets.article_params.layout(),
    })
    .map(AppEvent::ArticleParamsUi);

    Stack::with_children([article, panel])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
