#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Subscription, Task, Theme};

use crate::config::AppConfig;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::AppTheme;
use crate::store::SettingsStore;
use crate::style::StyleScope;
use crate::widgets::article::ArticleWidget;
use crate::widgets::article_params::model::DEFAULT_ARTICLE_SETTINGS;
use crate::widgets::article_params::{
    ArticleParamsEvent, ArticleParamsWidget,
};

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Article params widget
    ArticleParamsUi(ArticleParamsEvent),
    // Direct operations
    Window(iced::window::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) article_params: ArticleParamsWidget,
    pub(crate) article: ArticleWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) config: AppConfig,
    pub(crate) theme: AppTheme,
    pub(crate) fonts: FontsConfig,
    pub(crate) store: SettingsStore<StyleScope>,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let config = AppConfig::default();
        let store =
            SettingsStore::new(DEFAULT_ARTICLE_SETTINGS, StyleScope::default());

        let widgets = Widgets {
            article_params: ArticleParamsWidget::with_settings(
                *store.current(),
                config.panel,
                config.window_size,
            ),
            article: ArticleWidget::load(store.sink()),
        };

        let app = App {
            config,
            theme: AppTheme::default(),
            fonts: FontsConfig::default(),
            store,
            widgets,
        };

        (app, Task::none())
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from(self.config.title)
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
