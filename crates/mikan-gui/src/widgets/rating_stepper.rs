use iced::widget::{button, container, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::style;
use crate::theme::{self, ColorScheme};

/// A 0-10 rating stepper: `[ - ] [ input ] [ + ] / 10`
///
/// The center is a text buffer so intermediate typing states (clearing
/// "8" to type "10") don't emit premature value changes; values commit
/// on Enter. A flank button without a message renders disabled at the
/// clamp boundary.
pub fn rating_stepper<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
    on_decrement: Option<Message>,
    on_increment: Option<Message>,
) -> Element<'a, Message> {
    let btn_size = style::INPUT_HEIGHT;

    let icon_minus = container(
        lucide_icons::iced::icon_minus()
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant),
    )
    .center(Length::Fill);

    let mut minus_btn = button(icon_minus)
        .width(Length::Fixed(btn_size))
        .height(Length::Fixed(btn_size))
        .padding(0)
        .style(theme::stepper_button(cs));

    if let Some(msg) = on_decrement {
        minus_btn = minus_btn.on_press(msg);
    }

    let center_input = text_input("8", value)
        .on_input(on_input)
        .on_submit(on_submit)
        .size(style::INPUT_FONT_SIZE)
        .padding(style::INPUT_PADDING)
        .width(Length::Fill)
        .style(theme::text_input_style(cs));

    let icon_plus = container(
        lucide_icons::iced::icon_plus()
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant),
    )
    .center(Length::Fill);

    let mut plus_btn = button(icon_plus)
        .width(Length::Fixed(btn_size))
        .height(Length::Fixed(btn_size))
        .padding(0)
        .style(theme::stepper_button(cs));

    if let Some(msg) = on_increment {
        plus_btn = plus_btn.on_press(msg);
    }

    row![
        row![minus_btn, center_input, plus_btn]
            .spacing(style::SPACE_XS)
            .width(Length::Fixed(style::INPUT_STEPPER_WIDTH))
            .align_y(Alignment::Center),
        text("/ 10")
            .size(style::TEXT_XS)
            .color(cs.outline)
            .line_height(style::LINE_HEIGHT_LOOSE),
    ]
    .spacing(style::SPACE_SM)
    .align_y(Alignment::Center)
    .into()
}
