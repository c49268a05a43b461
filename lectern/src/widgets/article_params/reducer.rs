use lectern_ui_dismiss::{ListenerChange, PointerOutcome};

use super::command::ArticleParamsCommand;
use super::event::ArticleParamsEffect;
use super::model::{ArticleSettings, DEFAULT_ARTICLE_SETTINGS};
use super::state::ArticleParamsState;

/// Values owned by the app shell that the reducer reads.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArticleParamsCtx<'a> {
    /// Settings currently committed to the store.
    pub(crate) committed: &'a ArticleSettings,
}

/// Reduce a command into state updates and an optional effect.
pub(crate) fn reduce(
    state: &mut ArticleParamsState,
    command: ArticleParamsCommand,
    ctx: &ArticleParamsCtx<'_>,
) -> Option<ArticleParamsEffect> {
    match command {
        ArticleParamsCommand::Toggle => {
            let change = state.toggle(ctx.committed);
            log_panel_change(state, change);
            None
        },
        ArticleParamsCommand::SetField { field, option } => {
            if !state.set_field(field, option) {
                log::debug!("ignored {field:?} change while panel is closed");
            }
            None
        },
        ArticleParamsCommand::Apply => {
            if !state.is_open() {
                log::debug!("ignored apply while panel is closed");
                return None;
            }
            Some(ArticleParamsEffect::Commit(*state.draft()))
        },
        ArticleParamsCommand::Reset => {
            if !state.is_open() {
                log::debug!("ignored reset while panel is closed");
                return None;
            }
            state.reset_draft();
            Some(ArticleParamsEffect::Commit(DEFAULT_ARTICLE_SETTINGS))
        },
        ArticleParamsCommand::Pointer(event) => {
            if state.handle_pointer(event) == PointerOutcome::Outside {
                let change = state.close();
                log::debug!("article params panel dismissed by outside click");
                log_panel_change(state, change);
            }
            None
        },
        ArticleParamsCommand::Resize(size) => {
            state.resize(size);
            None
        },
    }
}

fn log_panel_change(
    state: &ArticleParamsState,
    change: Option<ListenerChange>,
) {
    if let Some(change) = change {
        log::debug!("article params panel is now {:?}", state.status());
        log::trace!("outside-click listener: {change:?}");
    }
}
