// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the upload state machine, the prediction
//! client, localization and persisted preferences, and translates messages
//! into side effects like file reads, the prediction request or config
//! persistence.

mod message;
pub mod paths;
pub mod state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::client::PredictionClient;
use crate::config::{self, Config, Overrides, Settings};
use crate::domain::upload::FileValidator;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use state::UploadState;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    settings: Settings,
    validator: FileValidator,
    client: PredictionClient,
    upload: UploadState,
    theme_mode: ThemeMode,
    /// Whether preference changes are written back to `settings.toml`.
    persist_preferences: bool,
    /// i18n key of a startup notice (e.g. unreadable config).
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.upload.phase())
            .field("endpoint", &self.client.endpoint())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const WINDOW_DEFAULT_WIDTH: u32 = 760;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            validator: FileValidator::new(settings.max_file_size),
            client: PredictionClient::new(&settings.api_url),
            settings,
            upload: UploadState::new(),
            theme_mode: ThemeMode::System,
            persist_preferences: false,
            notice: None,
        }
    }
}

impl App {
    /// Loads configuration, resolves runtime settings and optionally starts
    /// loading the image named on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let overrides = Overrides {
            api_url: flags.api_url.clone(),
            max_file_size: flags.max_file_size,
        };
        let settings = config::resolve_from_env(&config, &overrides);
        let i18n = I18n::new(flags.lang.clone(), &config);

        info!(
            api_url = %settings.api_url,
            max_file_size = settings.max_file_size,
            locale = %i18n.current_locale(),
            "starting"
        );

        let app = App {
            i18n,
            validator: FileValidator::new(settings.max_file_size),
            client: PredictionClient::new(&settings.api_url),
            theme_mode: config.general.theme_mode,
            config,
            settings,
            upload: UploadState::new(),
            persist_preferences: true,
            notice: config_warning,
        };

        let task = match flags.file_path {
            Some(path) => update::load_image(PathBuf::from(path), app.validator),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.upload.selected() {
            Some(image) => format!("{} - {app_name}", image.file_name()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            upload: &mut self.upload,
            client: &self.client,
            validator: self.validator,
            theme_mode: &mut self.theme_mode,
            config: &mut self.config,
            persist_preferences: self.persist_preferences,
            notice: &mut self.notice,
        };
        update::handle_message(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            upload: &self.upload,
            theme_mode: self.theme_mode,
            max_file_size: self.settings.max_file_size,
            notice: self.notice.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::state::Phase;
    use super::*;
    use crate::client::PredictionError;
    use crate::domain::prediction::{Classification, PredictionResult};
    use crate::domain::upload::{FileProbe, SelectedImage, ValidationError};
    use crate::error::Error;

    fn sample_image(name: &str) -> SelectedImage {
        let probe = FileProbe {
            path: PathBuf::from(name),
            file_name: name.to_string(),
            mime: "image/jpeg".to_string(),
            size: 3,
        };
        SelectedImage::from_parts(probe, vec![0xFF, 0xD8, 0xFF])
    }

    fn english_app() -> App {
        App {
            i18n: I18n::new(Some("en-US".to_string()), &Config::default()),
            ..App::default()
        }
    }

    #[test]
    fn default_app_is_idle() {
        let app = App::default();
        assert_eq!(app.upload.phase(), Phase::Idle);
        assert_eq!(app.settings, Settings::default());
        assert_eq!(app.validator.max_file_size(), 10_485_760);
        assert_eq!(app.client.endpoint(), "http://localhost:5000/api/predict");
    }

    #[test]
    fn title_shows_app_name_then_file() {
        let mut app = english_app();
        assert_eq!(app.title(), "AI Image Detector");

        let _ = app.update(Message::ImageLoaded(Ok(sample_image("cat.jpg"))));
        assert_eq!(app.title(), "cat.jpg - AI Image Detector");
    }

    #[test]
    fn image_loaded_ok_moves_to_preview() {
        let mut app = App::default();
        let _ = app.update(Message::ImageLoaded(Ok(sample_image("cat.jpg"))));

        assert_eq!(app.upload.phase(), Phase::Preview);
        assert!(app.upload.preview().is_some());
    }

    #[test]
    fn image_loaded_err_keeps_previous_selection() {
        let mut app = App::default();
        let _ = app.update(Message::ImageLoaded(Ok(sample_image("cat.jpg"))));
        let _ = app.update(Message::ImageLoaded(Err(Error::Validation(
            ValidationError::TooLarge {
                size: 20_000_000,
                limit: 10_485_760,
            },
        ))));

        assert_eq!(app.upload.selected().unwrap().file_name(), "cat.jpg");
        assert!(matches!(app.upload.error(), Some(Error::Validation(_))));
    }

    #[test]
    fn analyze_without_selection_reports_error() {
        let mut app = App::default();
        let _ = app.update(Message::Analyze);

        assert_eq!(app.upload.error(), Some(&Error::NoImageSelected));
        assert!(!app.upload.is_loading());
    }

    #[test]
    fn analyze_enters_loading_once() {
        let mut app = App::default();
        let _ = app.update(Message::ImageLoaded(Ok(sample_image("cat.jpg"))));

        let _ = app.update(Message::Analyze);
        assert_eq!(app.upload.phase(), Phase::Loading);

        let _ = app.update(Message::Analyze);
        assert_eq!(app.upload.phase(), Phase::Loading);
        assert!(app.upload.error().is_none());
    }

    #[test]
    fn prediction_completion_shows_result_then_reset_clears() {
        let mut app = App::default();
        let _ = app.update(Message::ImageLoaded(Ok(sample_image("cat.jpg"))));
        let (request, _) = app.upload.begin_submit().unwrap();

        let result = PredictionResult::new(Classification::Real, 0.6421).unwrap();
        let _ = app.update(Message::PredictionCompleted {
            request,
            outcome: Ok(result),
        });
        assert_eq!(app.upload.phase(), Phase::Result);
        assert_eq!(app.upload.result().unwrap().confidence_percent(), "64.21%");

        let _ = app.update(Message::Reset);
        assert_eq!(app.upload.phase(), Phase::Idle);
        assert!(app.upload.selected().is_none());
        assert!(app.upload.result().is_none());
        assert!(app.upload.error().is_none());
    }

    #[test]
    fn prediction_failure_is_shown_and_selection_kept() {
        let mut app = App::default();
        let _ = app.update(Message::ImageLoaded(Ok(sample_image("cat.jpg"))));
        let (request, _) = app.upload.begin_submit().unwrap();

        let _ = app.update(Message::PredictionCompleted {
            request,
            outcome: Err(PredictionError::Server {
                status: 500,
                message: Some("Model unavailable".into()),
            }),
        });

        assert_eq!(app.upload.phase(), Phase::Preview);
        assert!(matches!(app.upload.error(), Some(Error::Prediction(_))));
    }

    #[test]
    fn late_completion_after_reset_is_ignored() {
        let mut app = App::default();
        let _ = app.update(Message::ImageLoaded(Ok(sample_image("cat.jpg"))));
        let (request, _) = app.upload.begin_submit().unwrap();
        let _ = app.update(Message::Reset);

        let result = PredictionResult::new(Classification::Synthetic, 0.99).unwrap();
        let _ = app.update(Message::PredictionCompleted {
            request,
            outcome: Ok(result),
        });

        assert_eq!(app.upload.phase(), Phase::Idle);
        assert!(app.upload.result().is_none());
    }

    #[test]
    fn late_failure_for_replaced_image_leaves_no_error() {
        let mut app = App::default();
        let _ = app.update(Message::ImageLoaded(Ok(sample_image("cat.jpg"))));
        let (request, _) = app.upload.begin_submit().unwrap();
        let _ = app.update(Message::ImageLoaded(Ok(sample_image("dog.jpg"))));

        let _ = app.update(Message::PredictionCompleted {
            request,
            outcome: Err(PredictionError::Transport("timed out".into())),
        });

        assert_eq!(app.upload.phase(), Phase::Preview);
        assert!(app.upload.error().is_none());
        assert_eq!(app.upload.selected().unwrap().file_name(), "dog.jpg");
    }

    #[test]
    fn drag_hover_toggles_highlight() {
        let mut app = App::default();
        let _ = app.update(Message::FileHovered);
        assert!(app.upload.is_drag_active());

        let _ = app.update(Message::FilesHoveredLeft);
        assert!(!app.upload.is_drag_active());

        let _ = app.update(Message::FileHovered);
        let _ = app.update(Message::FileDropped(PathBuf::from("/tmp/cat.jpg")));
        assert!(!app.upload.is_drag_active());
    }

    #[test]
    fn toggle_theme_flips_mode_and_config() {
        let mut app = App {
            theme_mode: ThemeMode::Light,
            ..App::default()
        };

        let _ = app.update(Message::ToggleTheme);
        assert_eq!(app.theme_mode, ThemeMode::Dark);
        assert_eq!(app.config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(app.theme(), Theme::Dark);

        let _ = app.update(Message::ToggleTheme);
        assert_eq!(app.theme_mode, ThemeMode::Light);
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn dismiss_notice_clears_it() {
        let mut app = App {
            notice: Some("notification-config-load-error".into()),
            ..App::default()
        };
        let _ = app.update(Message::DismissNotice);
        assert!(app.notice.is_none());
    }

    #[test]
    fn file_dialog_cancel_changes_nothing() {
        let mut app = App::default();
        let _ = app.update(Message::FileDialogResult(None));
        assert_eq!(app.upload.phase(), Phase::Idle);
        assert!(app.upload.error().is_none());
    }
}
