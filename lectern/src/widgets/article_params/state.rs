use iced::Size;
use lectern_ui_dismiss::{
    ListenerChange, OutsideClick, PointerEvent, PointerOutcome,
};

use super::model::{
    ArticleSettings, DEFAULT_ARTICLE_SETTINGS, ParamOption, SettingsField,
};
use crate::geometry::{PanelLayout, panel_bounds, toggle_bounds};

/// Open/closed state of the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PanelStatus {
    #[default]
    Closed,
    Open,
}

/// Draft settings and panel lifecycle for the article parameters widget.
#[derive(Debug)]
pub(crate) struct ArticleParamsState {
    status: PanelStatus,
    draft: ArticleSettings,
    dismiss: OutsideClick,
    layout: PanelLayout,
    window_size: Size,
}

impl ArticleParamsState {
    /// Create a closed panel whose draft starts from `initial`.
    pub(crate) fn new(
        initial: ArticleSettings,
        layout: PanelLayout,
        window_size: Size,
    ) -> Self {
        let dismiss = OutsideClick::new(panel_bounds(window_size, layout))
            .exempt(toggle_bounds(false, layout));

        Self {
            status: PanelStatus::Closed,
            draft: initial,
            dismiss,
            layout,
            window_size,
        }
    }

    pub(crate) fn status(&self) -> PanelStatus {
        self.status
    }

    pub(crate) fn is_open(&self) -> bool {
        self.status == PanelStatus::Open
    }

    /// Return the uncommitted settings edited by the form.
    pub(crate) fn draft(&self) -> &ArticleSettings {
        &self.draft
    }

    /// Return the outside-click detector guarding the panel.
    pub(crate) fn dismiss(&self) -> &OutsideClick {
        &self.dismiss
    }

    pub(crate) fn layout(&self) -> PanelLayout {
        self.layout
    }

    /// Open the panel and snapshot the committed settings into the draft.
    ///
    /// Returns `None` when the panel was already open; the draft is then
    /// left alone.
    pub(crate) fn open(
        &mut self,
        committed: &ArticleSettings,
    ) -> Option<ListenerChange> {
        if self.is_open() {
            return None;
        }

        self.status = PanelStatus::Open;
        self.draft = *committed;
        Some(self.sync_dismiss())
    }

    /// Close the panel, keeping the draft until the next open replaces it.
    pub(crate) fn close(&mut self) -> Option<ListenerChange> {
        if !self.is_open() {
            return None;
        }

        self.status = PanelStatus::Closed;
        Some(self.sync_dismiss())
    }

    /// Flip the panel between open and closed.
    pub(crate) fn toggle(
        &mut self,
        committed: &ArticleSettings,
    ) -> Option<ListenerChange> {
        match self.status {
            PanelStatus::Closed => self.open(committed),
            PanelStatus::Open => self.close(),
        }
    }

    /// Replace one draft field. Ignored while closed.
    pub(crate) fn set_field(
        &mut self,
        field: SettingsField,
        option: ParamOption,
    ) -> bool {
        if !self.is_open() {
            return false;
        }

        self.draft = self.draft.with_field(field, option);
        true
    }

    /// Replace the whole draft with the default settings.
    pub(crate) fn reset_draft(&mut self) {
        self.draft = DEFAULT_ARTICLE_SETTINGS;
    }

    /// Classify a pointer event against the panel region.
    pub(crate) fn handle_pointer(
        &mut self,
        event: PointerEvent,
    ) -> PointerOutcome {
        self.dismiss.handle(event)
    }

    /// Recompute the dismissal regions for a new window size.
    pub(crate) fn resize(&mut self, window_size: Size) {
        self.window_size = window_size;
        self.dismiss
            .set_root(panel_bounds(self.window_size, self.layout));
    }

    fn sync_dismiss(&mut self) -> ListenerChange {
        let is_open = self.is_open();
        self.dismiss
            .set_exempt([toggle_bounds(is_open, self.layout)]);
        self.dismiss.sync(is_open)
    }
}

impl Default for ArticleParamsState {
    fn default() -> Self {
        Self::new(DEFAULT_ARTICLE_SETTINGS, PanelLayout::default(), Size::ZERO)
    }
}
