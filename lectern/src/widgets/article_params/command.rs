use iced::Size;
use lectern_ui_dismiss::PointerEvent;

use super::model::{ParamOption, SettingsField};

/// Internal commands dispatched to the article parameters reducer.
#[derive(Debug, Clone)]
pub(crate) enum ArticleParamsCommand {
    /// Open the panel when closed, close it when open.
    Toggle,
    /// Replace one field of the draft.
    SetField {
        field: SettingsField,
        option: ParamOption,
    },
    /// Commit the draft.
    Apply,
    /// Restore defaults in the draft and commit them.
    Reset,
    /// Feed pointer input to the outside-click detector.
    Pointer(PointerEvent),
    /// The window was resized.
    Resize(Size),
}
