use iced::{Task, window};

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Article params widget
        AppEvent::ArticleParamsUi(event) => {
            routers::article_params::route_event(app, event)
        },
        // Direct operations
        AppEvent::Window(window::Event::Opened { size, .. })
        | AppEvent::Window(window::Event::Resized(size)) => {
            routers::window::handle_resize(app, size)
        },
        AppEvent::Window(_) => Task::none(),
    }
}
