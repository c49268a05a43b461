use iced::{Subscription, window};

use crate::app::{App, AppEvent};
use crate::widgets::article_params::ArticleParamsEvent;

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));

    // Empty while the panel is closed.
    let pointer_subs =
        app.widgets.article_params.subscription().map(|event| {
            AppEvent::ArticleParamsUi(ArticleParamsEvent::Pointer(event))
        });

    Subscription::batch([win_subs, pointer_subs])
}
