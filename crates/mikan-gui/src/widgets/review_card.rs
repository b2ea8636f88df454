use iced::widget::{column, container, row, text};
use iced::{Alignment, Element, Length};

use mikan_core::models::AnimeReview;

use crate::format;
use crate::style;
use crate::theme::{self, ColorScheme};

/// A read-only card for one review: author, rating, body, date.
pub fn review_card<'a, Message: 'a>(
    cs: &ColorScheme,
    review: &'a AnimeReview,
) -> Element<'a, Message> {
    let author = if review.author.is_empty() {
        "anonymous"
    } else {
        review.author.as_str()
    };

    let mut header = row![text(author)
        .size(style::TEXT_SM)
        .font(style::FONT_HEADING)
        .line_height(style::LINE_HEIGHT_NORMAL)]
    .spacing(style::SPACE_SM)
    .align_y(Alignment::Center);

    // -1 is the "not yet set" sentinel; skip the badge entirely.
    if review.rating >= 0 {
        header = header.push(
            text(format!("\u{2605} {}", review.rating))
                .size(style::TEXT_XS)
                .color(cs.primary)
                .line_height(style::LINE_HEIGHT_LOOSE),
        );
    }

    header = header.push(iced::widget::Space::new().width(Length::Fill));

    let date = format::review_date(review.created_at);
    if !date.is_empty() {
        header = header.push(
            text(date)
                .size(style::TEXT_XS)
                .color(cs.outline)
                .line_height(style::LINE_HEIGHT_LOOSE),
        );
    }

    container(
        column![
            header,
            text(review.review.as_str())
                .size(style::TEXT_SM)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_NORMAL),
        ]
        .spacing(style::SPACE_XS),
    )
    .style(theme::card(cs))
    .padding(style::SPACE_LG)
    .width(Length::Fill)
    .into()
}
