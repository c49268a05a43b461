use lectern_ui_dismiss::PointerEvent;

use super::model::{ArticleSettings, ParamOption, SettingsField};

/// UI events emitted by the article parameters panel.
#[derive(Debug, Clone)]
pub(crate) enum ArticleParamsEvent {
    /// The arrow toggle was pressed.
    TogglePressed,
    /// A form widget picked a new option for one field.
    FieldChanged {
        field: SettingsField,
        option: ParamOption,
    },
    /// The form's submit button (Apply) was pressed.
    Submit,
    /// The form's reset button was pressed.
    Reset,
    /// Global pointer input observed while the panel is open.
    Pointer(PointerEvent),
}

/// Effect events produced by the reducer, routed to the app shell.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ArticleParamsEffect {
    /// Replace the committed settings with the given value.
    Commit(ArticleSettings),
}
