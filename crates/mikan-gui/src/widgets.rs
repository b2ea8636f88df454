pub mod form_row;
pub mod rating_stepper;
pub mod review_card;

pub use form_row::form_row;
pub use rating_stepper::rating_stepper;
pub use review_card::review_card;

use iced::widget::scrollable;
use iced::Element;

use crate::theme::{self, ColorScheme};

/// A scrollable with consistent direction and style across the application.
pub fn styled_scrollable<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    cs: &ColorScheme,
) -> scrollable::Scrollable<'a, Message> {
    scrollable(content)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(6)
                .scroller_width(4)
                .margin(2),
        ))
        .style(theme::overlay_scrollbar(cs))
}
