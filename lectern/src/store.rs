use crate::style::{StyleSink, project};
use crate::widgets::article_params::model::ArticleSettings;

/// Single source of truth for the committed article settings.
///
/// Every value the store holds has been projected into its sink, starting
/// with the initial one.
#[derive(Debug)]
pub(crate) struct SettingsStore<S: StyleSink> {
    current: ArticleSettings,
    sink: S,
    revision: u64,
}

impl<S: StyleSink> SettingsStore<S> {
    pub(crate) fn new(initial: ArticleSettings, mut sink: S) -> Self {
        project(&initial, &mut sink);
        Self {
            current: initial,
            sink,
            revision: 0,
        }
    }

    pub(crate) fn current(&self) -> &ArticleSettings {
        &self.current
    }

    /// Replace the committed value wholesale and re-project it.
    pub(crate) fn commit(&mut self, next: ArticleSettings) {
        self.current = next;
        self.revision += 1;
        project(&self.current, &mut self.sink);

        if log::log_enabled!(log::Level::Debug) {
            match serde_json::to_string(&self.current) {
                Ok(json) => {
                    log::debug!("settings revision {}: {json}", self.revision())
                },
                Err(err) => {
                    log::warn!("failed to serialize committed settings: {err}")
                },
            }
        }
    }

    pub(crate) fn sink(&self) -> &S {
        &self.sink
    }

    /// Number of commits since construction.
    pub(crate) fn revision(&self) -> u64 {
        self.revision
    }
}
