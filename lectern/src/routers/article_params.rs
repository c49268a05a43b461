use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::article_params::{
    ArticleParamsCommand, ArticleParamsCtx, ArticleParamsEffect,
    ArticleParamsEvent,
};

/// Route a panel UI event through the widget reducer and apply its effect.
pub(crate) fn route_event(
    app: &mut App,
    event: ArticleParamsEvent,
) -> Task<AppEvent> {
    let command = map_event_to_command(event);
    route_command(app, command)
}

/// Reduce a panel command against the committed settings.
///
/// Effects are applied before returning so the style scope is up to date
/// for the next view.
pub(crate) fn route_command(
    app: &mut App,
    command: ArticleParamsCommand,
) -> Task<AppEvent> {
    let ctx = ArticleParamsCtx {
        committed: app.store.current(),
    };

    match app.widgets.article_params.reduce(command, &ctx) {
        Some(effect) => route_effect(app, effect),
        None => Task::none(),
    }
}

/// Route a panel effect to the settings store.
pub(crate) fn route_effect(
    app: &mut App,
    effect: ArticleParamsEffect,
) -> Task<AppEvent> {
    match effect {
        ArticleParamsEffect::Commit(settings) => {
            app.store.commit(settings);
            app.widgets.article.restyle(app.store.sink());
            Task::none()
        },
    }
}

fn map_event_to_command(event: ArticleParamsEvent) -> ArticleParamsCommand {
    match event {
        ArticleParamsEvent::TogglePressed => ArticleParamsCommand::Toggle,
        ArticleParamsEvent::FieldChanged { field, option } => {
            ArticleParamsCommand::SetField { field, option }
        },
        ArticleParamsEvent::Submit => ArticleParamsCommand::Apply,
        ArticleParamsEvent::Reset => ArticleParamsCommand::Reset,
        ArticleParamsEvent::Pointer(event) => {
            ArticleParamsCommand::Pointer(event)
        },
    }
}
