use iced::{Size, Task};

use crate::app::{App, AppEvent};
use crate::widgets::article_params::ArticleParamsCommand;

/// Handle window size changes and propagate them to the panel geometry.
pub(crate) fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    crate::routers::article_params::route_command(
        app,
        ArticleParamsCommand::Resize(size),
    )
}
