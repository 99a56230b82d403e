// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! A single scrollable column: header, intro, upload area, analyze button,
//! error banner and result card. Which parts appear follows the upload
//! [`Phase`].

use super::state::{Phase, UploadState};
use super::Message;
use crate::domain::prediction::PredictionResult;
use crate::domain::upload::{format_size_limit, ValidationError};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::{classification_color, ThemeMode};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, scrollable, text, Column, Container, Image, Row};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub upload: &'a UploadState,
    pub theme_mode: ThemeMode,
    pub max_file_size: u64,
    /// i18n key of the startup notice, if any.
    pub notice: Option<&'a str>,
}

/// Total portions the confidence bar is split into.
const BAR_RESOLUTION: u16 = 1000;

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(view_header(ctx.i18n, ctx.theme_mode));

    if let Some(key) = ctx.notice {
        content = content.push(view_notice(ctx.i18n, key));
    }

    content = content
        .push(view_intro(ctx.i18n))
        .push(view_upload_section(&ctx));

    if let Some(error) = ctx.upload.error() {
        content = content.push(
            Container::new(text(error_message(ctx.i18n, error)).size(typography::BODY))
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(styles::container::error_banner),
        );
    }

    if let Some(result) = ctx.upload.result() {
        content = content.push(view_result(ctx.i18n, result));
    }

    let page = Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    scrollable(page).height(Length::Fill).into()
}

/// Text shown in the error banner.
///
/// Server-supplied messages are shown verbatim; everything else is localized.
pub fn error_message(i18n: &I18n, error: &Error) -> String {
    match error {
        Error::Prediction(err) => err
            .server_message()
            .map(str::to_string)
            .unwrap_or_else(|| i18n.tr(err.i18n_key())),
        Error::Validation(err @ ValidationError::TooLarge { limit, .. }) => {
            let limit = format_size_limit(*limit);
            i18n.tr_with_args(err.i18n_key(), &[("limit", limit.as_str())])
        }
        other => i18n.tr(other.i18n_key()),
    }
}

/// Splits the confidence bar into (filled, empty) portions.
pub fn confidence_portions(confidence: f64) -> (u16, u16) {
    let filled = (confidence.clamp(0.0, 1.0) * f64::from(BAR_RESOLUTION)).round() as u16;
    (filled, BAR_RESOLUTION - filled)
}

fn view_header(i18n: &I18n, theme_mode: ThemeMode) -> Element<'_, Message> {
    let title = Container::new(text(i18n.tr("window-title")).size(typography::TITLE_LG))
        .width(Length::Fill);

    let toggle = button(text(i18n.tr(theme_mode.toggle_label_key())).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary)
        .on_press(Message::ToggleTheme);

    Row::new()
        .push(title)
        .push(toggle)
        .align_y(Vertical::Center)
        .into()
}

fn view_notice<'a>(i18n: &'a I18n, key: &'a str) -> Element<'a, Message> {
    let row = Row::new()
        .push(Container::new(text(i18n.tr(key)).size(typography::BODY)).width(Length::Fill))
        .push(
            button(text("×").size(typography::BODY))
                .style(styles::button::secondary)
                .on_press(Message::DismissNotice),
        )
        .spacing(spacing::SM)
        .align_y(Vertical::Center);

    Container::new(row)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::error_banner)
        .into()
}

fn view_intro(i18n: &I18n) -> Element<'_, Message> {
    Column::new()
        .push(text(i18n.tr("intro-title")).size(typography::DISPLAY))
        .push(text(i18n.tr("intro-subtitle")).size(typography::BODY_LG))
        .spacing(spacing::XS)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn view_upload_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let upload = ctx.upload;

    let area: Element<'a, Message> = match (upload.selected(), upload.preview()) {
        (Some(selected), Some(preview)) => {
            let mut column = Column::new()
                .push(Image::new(preview.clone()).height(Length::Fixed(sizing::PREVIEW_MAX_HEIGHT)))
                .push(text(selected.file_name().to_string()).size(typography::BODY))
                .spacing(spacing::SM)
                .align_x(Horizontal::Center);

            if !upload.is_loading() {
                column = column.push(
                    button(text(i18n.tr("upload-change-button")))
                        .padding([spacing::XS, spacing::MD])
                        .style(styles::button::secondary)
                        .on_press(Message::Reset),
                );
            }
            column.into()
        }
        _ => {
            let hint_key = if upload.is_drag_active() {
                "upload-drop-active"
            } else {
                "upload-drop-hint"
            };
            let limit = format_size_limit(ctx.max_file_size);

            Column::new()
                .push(text("📁").size(sizing::ICON_XL))
                .push(text(i18n.tr(hint_key)).size(typography::BODY_LG))
                .push(text(i18n.tr("upload-or")).size(typography::BODY))
                .push(
                    button(text(i18n.tr("upload-browse-button")))
                        .padding([spacing::XS, spacing::LG])
                        .style(styles::button::primary)
                        .on_press(Message::OpenFileDialog),
                )
                .push(
                    text(i18n.tr_with_args("upload-max-size", &[("limit", limit.as_str())]))
                        .size(typography::CAPTION),
                )
                .spacing(spacing::SM)
                .align_x(Horizontal::Center)
                .into()
        }
    };

    let drop_zone = Container::new(area)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Shrink)
        .align_x(Horizontal::Center)
        .style(styles::container::upload_area(upload.is_drag_active()));

    let drop_zone = if upload.selected().is_none() {
        drop_zone
            .height(Length::Fixed(sizing::UPLOAD_AREA_HEIGHT))
            .align_y(Vertical::Center)
    } else {
        drop_zone
    };

    let mut section = Column::new()
        .push(text(i18n.tr("upload-title")).size(typography::TITLE_MD))
        .push(text(i18n.tr("upload-description")).size(typography::CAPTION))
        .push(drop_zone)
        .spacing(spacing::SM)
        .width(Length::Fill);

    if matches!(upload.phase(), Phase::Preview | Phase::Loading) {
        section = section.push(view_analyze_button(i18n, upload.is_loading()));
    }

    Container::new(section)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn view_analyze_button(i18n: &I18n, loading: bool) -> Element<'_, Message> {
    let label = if loading {
        i18n.tr("analyze-button-loading")
    } else {
        i18n.tr("analyze-button")
    };

    let analyze = button(
        Container::new(text(label).size(typography::BODY_LG))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::primary)
    .on_press_maybe((!loading).then_some(Message::Analyze));

    analyze.into()
}

fn view_result<'a>(i18n: &'a I18n, result: &PredictionResult) -> Element<'a, Message> {
    let classification = result.prediction();
    let accent = classification_color(classification);

    let verdict = Row::new()
        .push(text(classification.icon()).size(sizing::ICON_XL))
        .push(
            Column::new()
                .push(text(i18n.tr("result-classification")).size(typography::CAPTION))
                .push(
                    text(i18n.tr(classification.label_key()))
                        .size(typography::TITLE_MD)
                        .style(move |_theme| text::Style {
                            color: Some(accent),
                        }),
                )
                .spacing(spacing::XXS),
        )
        .spacing(spacing::MD)
        .align_y(Vertical::Center);

    let confidence = Row::new()
        .push(text(i18n.tr("result-confidence")).size(typography::BODY))
        .push(text(result.confidence_percent()).size(typography::BODY_LG))
        .spacing(spacing::XS)
        .align_y(Vertical::Center);

    let card = Column::new()
        .push(text(i18n.tr("result-title")).size(typography::TITLE_MD))
        .push(verdict)
        .push(confidence)
        .push(view_confidence_bar(result))
        .push(text(i18n.tr(classification.description_key())).size(typography::BODY))
        .push(
            button(text(i18n.tr("result-reset-button")))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::Reset),
        )
        .spacing(spacing::MD)
        .width(Length::Fill);

    Container::new(card)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::result_card(classification))
        .into()
}

fn view_confidence_bar<'a>(result: &PredictionResult) -> Element<'a, Message> {
    let classification = result.prediction();
    let (filled, empty) = confidence_portions(result.confidence());

    let segment = |portion: u16| {
        Container::new(Row::new())
            .width(Length::FillPortion(portion))
            .height(Length::Fixed(sizing::CONFIDENCE_BAR_HEIGHT))
    };

    let mut bar = Row::new().width(Length::Fill);
    if filled > 0 {
        bar = bar.push(segment(filled).style(styles::container::confidence_fill(classification)));
    }
    if empty > 0 {
        bar = bar.push(segment(empty).style(styles::container::confidence_track));
    }

    bar.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::PredictionError;
    use crate::config::Config;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn server_message_is_shown_verbatim() {
        let error = Error::Prediction(PredictionError::Server {
            status: 400,
            message: Some("No image provided".into()),
        });
        assert_eq!(error_message(&english(), &error), "No image provided");
    }

    #[test]
    fn prediction_failure_without_message_uses_fallback() {
        let error = Error::Prediction(PredictionError::Transport("refused".into()));
        assert_eq!(
            error_message(&english(), &error),
            "Failed to analyze image. Please try again."
        );
    }

    #[test]
    fn size_error_names_the_configured_limit() {
        let error = Error::Validation(ValidationError::TooLarge {
            size: 6 * 1024 * 1024,
            limit: 5 * 1024 * 1024,
        });
        assert_eq!(
            error_message(&english(), &error),
            "File size exceeds 5MB limit"
        );
    }

    #[test]
    fn type_and_selection_errors_are_localized() {
        let i18n = english();
        let not_image = Error::Validation(ValidationError::NotAnImage {
            mime: "text/plain".into(),
        });
        assert_eq!(
            error_message(&i18n, &not_image),
            "Please select a valid image file"
        );
        assert_eq!(
            error_message(&i18n, &Error::NoImageSelected),
            "Please select an image first"
        );
    }

    #[test]
    fn confidence_bar_portions() {
        assert_eq!(confidence_portions(0.0), (0, 1000));
        assert_eq!(confidence_portions(1.0), (1000, 0));
        assert_eq!(confidence_portions(0.875), (875, 125));
    }
}
