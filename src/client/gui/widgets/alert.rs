// Error banner widget for the GUI
use iced::widget::{Container, Row, Text};
use iced::{Element, Font, Length};

use crate::client::models::messages::Message;

const BANNER_BG: iced::Color = iced::Color::from_rgb(0.85, 0.2, 0.2);

/// Single error banner. Only one message is shown at a time; the next
/// submit either clears it or replaces it.
pub fn view(msg: &str) -> Element<'_, Message> {
    Container::new(
        Row::new()
            .spacing(12)
            .push(
                Text::new("❌")
                    .font(Font::with_name("Segoe UI Emoji"))
                    .size(18)
                    .style(iced::Color::WHITE),
            )
            .push(Text::new(msg).size(16).style(iced::Color::WHITE)),
    )
    .padding([12, 16])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(|_: &iced::Theme| {
        iced::widget::container::Appearance {
            background: Some(iced::Background::Color(BANNER_BG)),
            text_color: Some(iced::Color::WHITE),
            border: iced::Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            shadow: iced::Shadow {
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 12.0,
                color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            },
        }
    })))
    .into()
}
