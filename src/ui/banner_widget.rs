// SPDX-License-Identifier: MPL-2.0
//! Banner widget for rendering built banner views with iced.
//!
//! Banners appear as cards with a theme-colored border. The text area is the
//! primary action target; the paging and dismiss controls sit on the right.

use crate::banner::{BannerPosition, BannerView, DefaultViewBuilder, ViewEvent, ViewHandle};
use crate::error::Result;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Banner widget configuration.
pub struct BannerWidget;

impl BannerWidget {
    /// Renders a single banner.
    pub fn view(banner: &BannerView) -> Element<'_, ViewEvent> {
        let theme = banner.theme;
        let accent_color = theme.accent();
        let surface_color = theme.background();
        let text_color = theme.text();
        let id = banner.message_id;

        let mut text_column = Column::new().spacing(spacing::XXS);
        if let Some(title) = &banner.title {
            text_column = text_column.push(
                Text::new(title.as_str())
                    .size(typography::TITLE_SM)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(text_color),
                    }),
            );
        }
        text_column = text_column.push(
            Text::new(banner.body.as_str())
                .size(typography::BODY)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(text_color),
                }),
        );

        let body = button(text_column)
            .on_press(ViewEvent::ActionTapped(id))
            .padding(0.0)
            .width(Length::Fill)
            .style(move |_theme: &Theme, status| control_button_style(status, text_color));

        // Layout: [title/body] [‹] [›] [×]
        let mut content = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(body);

        for control in &banner.controls {
            content = content.push(
                button(Text::new(control.label()).size(typography::CAPTION))
                    .on_press(control.event(id))
                    .padding(spacing::XXS)
                    .width(Length::Fixed(sizing::CONTROL_SIZE))
                    .style(move |_theme: &Theme, status| {
                        control_button_style(status, text_color)
                    }),
            );
        }

        Container::new(content)
            .width(Length::Fixed(sizing::BANNER_WIDTH))
            .padding(spacing::SM)
            .style(move |_theme: &Theme| {
                banner_container_style(accent_color, surface_color, text_color)
            })
            .into()
    }

    /// Renders the overlay holding every banner behind `handles`.
    ///
    /// Banners stack vertically at the top or bottom edge, centered
    /// horizontally, in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::StaleViewHandle`](crate::error::UsageError::StaleViewHandle)
    /// if any handle has already been torn down.
    pub fn view_overlay<'a>(
        builder: &'a DefaultViewBuilder,
        handles: impl IntoIterator<Item = ViewHandle>,
        position: BannerPosition,
    ) -> Result<Element<'a, ViewEvent>> {
        let banners = handles
            .into_iter()
            .map(|handle| builder.view(handle).map(Self::view))
            .collect::<Result<Vec<Element<'a, ViewEvent>>>>()?;

        if banners.is_empty() {
            // Return an empty container that takes no space
            return Ok(Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into());
        }

        let banner_column = Column::with_children(banners)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center);

        Ok(Container::new(banner_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(vertical_alignment(position))
            .padding(spacing::MD)
            .into())
    }
}

fn vertical_alignment(position: BannerPosition) -> alignment::Vertical {
    match position {
        BannerPosition::Top => alignment::Vertical::Top,
        BannerPosition::Bottom => alignment::Vertical::Bottom,
    }
}

/// Style function for the banner container.
fn banner_container_style(accent: Color, surface: Color, text_color: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(surface)),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Style function for the body and control buttons.
fn control_button_style(status: button::Status, text_color: Color) -> button::Style {
    let highlight = |alpha: f32| button::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        })),
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => highlight(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => highlight(opacity::OVERLAY_MEDIUM),
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..text_color
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::{BannerTheme, BuildContext, Message, ViewBuilder};
    use crate::error::{Error, UsageError};

    #[test]
    fn banner_container_style_uses_theme_colors() {
        let theme = BannerTheme::Success;
        let style = banner_container_style(theme.accent(), theme.background(), theme.text());

        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert_eq!(
            style.background,
            Some(iced::Background::Color(palette::SUCCESS_100))
        );
    }

    #[test]
    fn idle_control_has_no_background() {
        let style = control_button_style(button::Status::Active, palette::GRAY_900);
        assert!(style.background.is_none());

        let hovered = control_button_style(button::Status::Hovered, palette::GRAY_900);
        assert!(hovered.background.is_some());
    }

    #[test]
    fn position_maps_to_vertical_alignment() {
        assert_eq!(vertical_alignment(BannerPosition::Top), alignment::Vertical::Top);
        assert_eq!(
            vertical_alignment(BannerPosition::Bottom),
            alignment::Vertical::Bottom
        );
    }

    #[test]
    fn overlay_renders_built_views() {
        let mut builder = DefaultViewBuilder::new();
        let message = Message::builder("Saved").title("Done").build().unwrap();
        let handle = builder.build(&message, &BuildContext::default()).unwrap();

        assert!(BannerWidget::view_overlay(&builder, [handle], BannerPosition::Top).is_ok());
        assert!(BannerWidget::view_overlay(&builder, [], BannerPosition::Bottom).is_ok());
    }

    #[test]
    fn overlay_reports_torn_down_handle() {
        let mut builder = DefaultViewBuilder::new();
        let live = builder
            .build(&Message::new("still here").unwrap(), &BuildContext::default())
            .unwrap();
        let gone = builder
            .build(&Message::new("dismissed").unwrap(), &BuildContext::default())
            .unwrap();
        builder.teardown(gone);

        let result = BannerWidget::view_overlay(&builder, [live, gone], BannerPosition::Top);
        match result {
            Err(err) => assert_eq!(err, Error::Usage(UsageError::StaleViewHandle(gone))),
            Ok(_) => panic!("expected a stale handle error"),
        }
    }
}
