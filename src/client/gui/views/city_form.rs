use iced::widget::{Button, Column, Container, Row, Scrollable, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::widgets::alert;
use crate::client::models::app_state::CityFactsState;
use crate::client::models::messages::Message;

// Consistent color palette across the whole window
const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18); // Deep navy
const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36); // Muted indigo for the form card
const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26); // Input background
const FACTS_BG: Color = Color::from_rgb(0.10, 0.11, 0.24); // Facts panel background
const ACCENT_COLOR: Color = Color::from_rgb(0.0, 0.7, 0.3); // Green accent
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

// Custom container styles
fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 16.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
    }
}

fn input_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.3, 0.3, 0.4),
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

fn facts_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(FACTS_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.3, 0.3, 0.4),
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

pub fn view(state: &CityFactsState) -> Element<Message> {
    let loading = state.loading;
    // The submit control stays enabled on an empty field: pressing it is
    // what produces the validation message. Only loading disables it.
    let submit_enabled = !loading;

    // Error banner above the card, one message at a time
    let error_banner: Element<Message> = if let Some(msg) = &state.error_message {
        Container::new(alert::view(msg))
            .width(Length::Fixed(480.0))
            .padding([0, 0, 16, 0])
            .into()
    } else {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    };

    // Main title
    let title = Text::new("CityFacts")
        .size(42)
        .font(BOLD_FONT)
        .style(TEXT_PRIMARY)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    let subtitle = Text::new("Interesting facts about any city")
        .size(16)
        .style(TEXT_SECONDARY)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    // City input with label
    let city_field = Column::new()
        .spacing(8)
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("🏙️").font(EMOJI_FONT).size(16).style(TEXT_SECONDARY))
                .push(Text::new("City").size(14).style(TEXT_SECONDARY)),
        )
        .push(
            Container::new(
                TextInput::new("Enter a city name", &state.city_name)
                    .on_input(Message::CityNameChanged)
                    .on_submit(if submit_enabled { Message::Submit } else { Message::NoOp })
                    .width(Length::Fill)
                    .padding(12)
                    .size(14),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        );

    // Submit button doubles as the busy indicator while loading
    let submit_button = if submit_enabled {
        Button::new(
            Container::new(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Text::new("🔍").font(EMOJI_FONT).size(16))
                    .push(
                        Text::new("Get Facts")
                            .font(BOLD_FONT)
                            .size(16)
                            .style(TEXT_PRIMARY),
                    ),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .on_press(Message::Submit)
        .style(iced::theme::Button::Primary)
        .width(Length::Fill)
        .padding(16)
    } else {
        Button::new(
            Container::new(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Text::new("⏳").font(EMOJI_FONT).size(16))
                    .push(Text::new("Fetching facts...").size(16).style(TEXT_SECONDARY)),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .style(iced::theme::Button::Secondary)
        .width(Length::Fill)
        .padding(16)
    };

    let card_content = Column::new()
        .width(Length::Fixed(480.0))
        .spacing(24)
        .padding(32)
        .align_items(Alignment::Center)
        .push(
            Column::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(title)
                .push(subtitle),
        )
        .push(city_field)
        .push(submit_button);

    let card = Container::new(card_content)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    // Facts panel: one paragraph per line, in order, blanks preserved;
    // placeholder prompt until the first successful fetch
    let facts_body: Element<Message> = if !state.facts.is_empty() {
        let mut paragraphs = Column::new().spacing(8).push(
            Text::new(format!("About {}", state.city))
                .font(BOLD_FONT)
                .size(20)
                .style(ACCENT_COLOR),
        );
        for line in state.facts.split('\n') {
            paragraphs = paragraphs.push(Text::new(line).size(14).style(TEXT_PRIMARY));
        }
        Scrollable::new(paragraphs.width(Length::Fill)).height(Length::Fill).into()
    } else {
        Container::new(
            Text::new("Search for a city to see interesting facts about it.")
                .size(14)
                .style(TEXT_SECONDARY),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
    };

    let facts_panel = Container::new(facts_body)
        .style(iced::theme::Container::Custom(Box::new(facts_appearance)))
        .width(Length::Fixed(480.0))
        .height(Length::Fill)
        .padding(16);

    let main_content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .spacing(16)
        .padding(24)
        .align_items(Alignment::Center)
        .push(error_banner)
        .push(card)
        .push(facts_panel);

    Container::new(main_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
