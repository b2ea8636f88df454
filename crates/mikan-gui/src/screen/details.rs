use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};

use mikan_api::FetchStatus;
use mikan_core::models::{Anime, AnimeReviews};

use crate::format;
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets::{self, form_row, rating_stepper, review_card};

/// Rating preselected in the review form.
const DEFAULT_RATING: i64 = 8;

const RATING_MIN: i64 = 0;
const RATING_MAX: i64 = 10;

// ── State ─────────────────────────────────────────────────────────

/// Anime detail screen.
///
/// Holds only local UI state; the anime record, favorite/watched flags,
/// reviews, and load status arrive fresh on every render pass.
pub struct Details {
    synopsis_expanded: bool,
    draft: String,
    rating_input: String,
}

// ── Messages ──────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Message {
    ToggleSynopsis,
    FavoritePressed,
    WatchedPressed,
    DraftChanged(String),
    RatingInputChanged(String),
    RatingDecrement,
    RatingIncrement,
    RatingCommitted,
    SubmitReview,
    Retry,
}

// ── Implementation ────────────────────────────────────────────────

impl Details {
    pub fn new() -> Self {
        Self {
            synopsis_expanded: false,
            draft: String::new(),
            rating_input: DEFAULT_RATING.to_string(),
        }
    }

    /// The rating the form would submit right now.
    ///
    /// Unparseable buffer contents fall back to the preselected rating.
    pub fn rating(&self) -> i64 {
        self.rating_input
            .trim()
            .parse::<i64>()
            .map(|r| r.clamp(RATING_MIN, RATING_MAX))
            .unwrap_or(DEFAULT_RATING)
    }

    /// Characters left before the draft hits the limit, clamped at zero.
    pub fn remaining(&self, max_length: usize) -> usize {
        max_length.saturating_sub(self.draft.chars().count())
    }

    /// Whether the draft exceeds the limit (submission is disabled).
    pub fn over_limit(&self, max_length: usize) -> bool {
        self.draft.chars().count() > max_length
    }

    /// Handle a message, returning an Action for the app router.
    ///
    /// `anime` is absent until the initial fetch succeeds; interactions
    /// that need the record are no-ops until then.
    pub fn update(
        &mut self,
        msg: Message,
        anime: Option<&Anime>,
        is_favorited: bool,
        is_watched: bool,
        max_length: usize,
    ) -> Action {
        match msg {
            Message::ToggleSynopsis => {
                self.synopsis_expanded = !self.synopsis_expanded;
                Action::None
            }
            Message::FavoritePressed => match anime {
                Some(anime) if is_favorited => Action::RemoveFavorite(anime.id.clone()),
                Some(anime) => Action::AddFavorite(anime.clone()),
                None => Action::None,
            },
            Message::WatchedPressed => match anime {
                Some(anime) if is_watched => Action::RemoveWatched(anime.id.clone()),
                Some(anime) => Action::AddWatched(anime.clone()),
                None => Action::None,
            },
            Message::DraftChanged(draft) => {
                self.draft = draft;
                Action::None
            }
            Message::RatingInputChanged(val) => {
                self.rating_input = val;
                Action::None
            }
            Message::RatingDecrement => {
                self.rating_input = (self.rating() - 1).max(RATING_MIN).to_string();
                Action::None
            }
            Message::RatingIncrement => {
                self.rating_input = (self.rating() + 1).min(RATING_MAX).to_string();
                Action::None
            }
            Message::RatingCommitted => {
                // Normalize whatever was typed back to the clamped value.
                self.rating_input = self.rating().to_string();
                Action::None
            }
            Message::SubmitReview => {
                if self.over_limit(max_length) {
                    return Action::None;
                }
                let rating = self.rating();
                Action::SubmitReview {
                    text: std::mem::take(&mut self.draft),
                    rating,
                }
            }
            Message::Retry => Action::Reload,
        }
    }

    // ── View ──────────────────────────────────────────────────────

    pub fn view<'a>(
        &'a self,
        cs: &'a ColorScheme,
        anime: Option<&'a Anime>,
        is_favorited: bool,
        is_watched: bool,
        status: FetchStatus,
        reviews: &'a AnimeReviews,
        max_length: usize,
    ) -> Element<'a, Message> {
        let anime = match (status, anime) {
            (FetchStatus::Error, _) => return self.view_error(cs),
            (FetchStatus::Success, Some(anime)) => anime,
            _ => return self.view_loading(cs),
        };

        let content = column![
            self.view_cover(cs),
            self.view_heading(cs, anime, is_favorited, is_watched),
            self.view_synopsis(cs, anime),
            self.view_review_form(cs, max_length),
            self.view_review_list(cs, reviews),
        ]
        .spacing(style::SPACE_LG)
        .padding([style::SPACE_XL, style::SPACE_XL])
        .max_width(720.0);

        widgets::styled_scrollable(
            container(content).width(Length::Fill).center_x(Length::Fill),
            cs,
        )
        .height(Length::Fill)
        .into()
    }

    fn view_loading(&self, cs: &ColorScheme) -> Element<'_, Message> {
        container(
            text("Loading...")
                .size(style::TEXT_SM)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE),
        )
        .padding(style::SPACE_3XL)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .into()
    }

    fn view_error(&self, cs: &ColorScheme) -> Element<'_, Message> {
        container(
            column![
                text("Could not load this anime.")
                    .size(style::TEXT_SM)
                    .color(cs.error)
                    .line_height(style::LINE_HEIGHT_NORMAL),
                button(text("Retry").size(style::TEXT_SM))
                    .padding([style::SPACE_SM, style::SPACE_XL])
                    .on_press(Message::Retry)
                    .style(theme::ghost_button(cs)),
            ]
            .spacing(style::SPACE_MD)
            .align_x(Alignment::Center),
        )
        .padding(style::SPACE_3XL)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .into()
    }

    /// Cover placeholder. Image fetching belongs to an external layer.
    fn view_cover(&self, cs: &ColorScheme) -> Element<'_, Message> {
        container(
            text("\u{1F3AC}")
                .size(style::TEXT_3XL)
                .color(cs.outline)
                .center(),
        )
        .width(Length::Fixed(style::HERO_COVER_WIDTH))
        .height(Length::Fixed(style::HERO_COVER_HEIGHT))
        .center_x(Length::Fixed(style::HERO_COVER_WIDTH))
        .center_y(Length::Fixed(style::HERO_COVER_HEIGHT))
        .style(theme::cover_placeholder(cs, style::RADIUS_LG))
        .into()
    }

    fn view_heading<'a>(
        &'a self,
        cs: &'a ColorScheme,
        anime: &'a Anime,
        is_favorited: bool,
        is_watched: bool,
    ) -> Element<'a, Message> {
        let mut title_col = column![text(anime.title.as_str())
            .size(style::TEXT_XL)
            .font(style::FONT_HEADING)
            .line_height(style::LINE_HEIGHT_TIGHT)]
        .spacing(style::SPACE_XS);

        let season = format::season(&anime.start_season);
        if !season.is_empty() {
            title_col = title_col.push(
                text(season)
                    .size(style::TEXT_SM)
                    .color(cs.outline)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            );
        }

        let eps = format::episodes(anime.num_episodes.as_deref());
        if !eps.is_empty() {
            title_col = title_col.push(
                text(eps)
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            );
        }

        let favorite_btn = button(
            lucide_icons::iced::icon_heart()
                .size(style::DETAIL_ICON_SIZE)
                .color(if is_favorited {
                    cs.primary
                } else {
                    cs.on_surface_variant
                })
                .center(),
        )
        .padding(style::SPACE_SM)
        .on_press(Message::FavoritePressed)
        .style(theme::icon_button(cs));

        let watched_btn = button(
            lucide_icons::iced::icon_eye()
                .size(style::DETAIL_ICON_SIZE)
                .color(if is_watched {
                    cs.tertiary
                } else {
                    cs.on_surface_variant
                })
                .center(),
        )
        .padding(style::SPACE_SM)
        .on_press(Message::WatchedPressed)
        .style(theme::icon_button(cs));

        row![
            title_col.width(Length::FillPortion(3)),
            row![favorite_btn, watched_btn]
                .spacing(style::SPACE_SM)
                .align_y(Alignment::Center),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Start)
        .into()
    }

    fn view_synopsis<'a>(&'a self, cs: &'a ColorScheme, anime: &'a Anime) -> Element<'a, Message> {
        let truncated = format::synopsis_is_truncated(&anime.synopsis);

        let body: Element<'a, Message> = if self.synopsis_expanded || !truncated {
            text(anime.synopsis.as_str())
                .size(style::TEXT_SM)
                .line_height(style::LINE_HEIGHT_NORMAL)
                .into()
        } else {
            text(format::collapsed_synopsis(&anime.synopsis))
                .size(style::TEXT_SM)
                .line_height(style::LINE_HEIGHT_NORMAL)
                .into()
        };

        let mut section = column![body].spacing(style::SPACE_XS);

        if truncated {
            let label = if self.synopsis_expanded {
                "Read less"
            } else {
                "Read more"
            };
            section = section.push(
                row![
                    iced::widget::Space::new().width(Length::Fill),
                    button(text(label).size(style::TEXT_SM))
                        .padding([style::SPACE_XS, style::SPACE_SM])
                        .on_press(Message::ToggleSynopsis)
                        .style(theme::ghost_button(cs)),
                ]
                .width(Length::Fill),
            );
        }

        section.into()
    }

    fn view_review_form<'a>(
        &'a self,
        cs: &'a ColorScheme,
        max_length: usize,
    ) -> Element<'a, Message> {
        let over = self.over_limit(max_length);

        let remaining = text(format!("{} characters remaining", self.remaining(max_length)))
            .size(style::TEXT_XS)
            .color(if over { cs.error } else { cs.outline })
            .line_height(style::LINE_HEIGHT_LOOSE);

        let rating = self.rating();
        let stepper = rating_stepper(
            cs,
            &self.rating_input,
            Message::RatingInputChanged,
            Message::RatingCommitted,
            (rating > 0).then_some(Message::RatingDecrement),
            (rating < 10).then_some(Message::RatingIncrement),
        );

        let mut submit = button(text("Submit review").size(style::TEXT_SM))
            .padding([style::SPACE_SM, style::SPACE_XL])
            .style(theme::primary_button(cs));
        if !over {
            submit = submit.on_press(Message::SubmitReview);
        }

        container(
            column![
                text("Reviews")
                    .size(style::TEXT_LG)
                    .font(style::FONT_HEADING)
                    .line_height(style::LINE_HEIGHT_TIGHT),
                text_input("Write a review...", &self.draft)
                    .on_input(Message::DraftChanged)
                    .size(style::TEXT_SM)
                    .padding(style::INPUT_PADDING)
                    .width(Length::Fill)
                    .style(theme::text_input_style(cs)),
                remaining,
                form_row(cs, "Rating", stepper),
                submit,
            ]
            .spacing(style::SPACE_SM),
        )
        .style(theme::card(cs))
        .padding(style::SPACE_LG)
        .width(Length::Fill)
        .into()
    }

    fn view_review_list<'a>(
        &'a self,
        cs: &'a ColorScheme,
        reviews: &'a AnimeReviews,
    ) -> Element<'a, Message> {
        if reviews.reviews.is_empty() {
            return text("No reviews yet.")
                .size(style::TEXT_SM)
                .color(cs.outline)
                .line_height(style::LINE_HEIGHT_LOOSE)
                .into();
        }

        // Caller-supplied order, no sort imposed here.
        let items: Vec<Element<'a, Message>> = reviews
            .reviews
            .iter()
            .map(|review| review_card(cs, review))
            .collect();

        column(items).spacing(style::SPACE_SM).into()
    }
}

impl Default for Details {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_LEN: usize = 500;

    fn naruto() -> Anime {
        Anime {
            id: "20".into(),
            title: "Naruto".into(),
            synopsis: "A ".repeat(100),
            ..Anime::default()
        }
    }

    fn update(
        details: &mut Details,
        msg: Message,
        is_favorited: bool,
        is_watched: bool,
    ) -> Action {
        let anime = naruto();
        details.update(msg, Some(&anime), is_favorited, is_watched, MAX_LEN)
    }

    #[test]
    fn test_favorite_dispatch() {
        let mut details = Details::new();

        // Not favorited yet: the tap adds, never removes.
        let action = update(&mut details, Message::FavoritePressed, false, false);
        match action {
            Action::AddFavorite(anime) => assert_eq!(anime.id, "20"),
            other => panic!("expected AddFavorite, got {other:?}"),
        }

        // Already favorited: the tap removes by id.
        let action = update(&mut details, Message::FavoritePressed, true, false);
        match action {
            Action::RemoveFavorite(id) => assert_eq!(id, "20"),
            other => panic!("expected RemoveFavorite, got {other:?}"),
        }
    }

    #[test]
    fn test_watched_dispatch() {
        let mut details = Details::new();

        let action = update(&mut details, Message::WatchedPressed, false, false);
        assert!(matches!(action, Action::AddWatched(_)));

        let action = update(&mut details, Message::WatchedPressed, false, true);
        match action {
            Action::RemoveWatched(id) => assert_eq!(id, "20"),
            other => panic!("expected RemoveWatched, got {other:?}"),
        }
    }

    #[test]
    fn test_interactions_before_load_are_noops() {
        let mut details = Details::new();
        let action = details.update(Message::FavoritePressed, None, false, false, MAX_LEN);
        assert!(matches!(action, Action::None));
    }

    #[test]
    fn test_synopsis_double_toggle_is_idempotent() {
        let mut details = Details::new();
        assert!(!details.synopsis_expanded);

        update(&mut details, Message::ToggleSynopsis, false, false);
        assert!(details.synopsis_expanded);

        update(&mut details, Message::ToggleSynopsis, false, false);
        assert!(!details.synopsis_expanded);
    }

    #[test]
    fn test_submit_carries_draft_and_default_rating() {
        let mut details = Details::new();
        update(
            &mut details,
            Message::DraftChanged("Believe it.".into()),
            false,
            false,
        );

        // Untouched rating control submits the preselected 8.
        let action = update(&mut details, Message::SubmitReview, false, false);
        match action {
            Action::SubmitReview { text, rating } => {
                assert_eq!(text, "Believe it.");
                assert_eq!(rating, 8);
            }
            other => panic!("expected SubmitReview, got {other:?}"),
        }

        // Draft clears after submission.
        assert_eq!(details.draft, "");
        assert_eq!(details.remaining(MAX_LEN), MAX_LEN);
    }

    #[test]
    fn test_rating_stepper_clamps() {
        let mut details = Details::new();
        assert_eq!(details.rating(), 8);

        update(&mut details, Message::RatingIncrement, false, false);
        update(&mut details, Message::RatingIncrement, false, false);
        update(&mut details, Message::RatingIncrement, false, false);
        assert_eq!(details.rating(), 10);

        for _ in 0..15 {
            update(&mut details, Message::RatingDecrement, false, false);
        }
        assert_eq!(details.rating(), 0);

        // Typed garbage normalizes back on commit.
        update(
            &mut details,
            Message::RatingInputChanged("eleven".into()),
            false,
            false,
        );
        update(&mut details, Message::RatingCommitted, false, false);
        assert_eq!(details.rating_input, "8");

        update(
            &mut details,
            Message::RatingInputChanged("42".into()),
            false,
            false,
        );
        assert_eq!(details.rating(), 10);
    }

    #[test]
    fn test_over_limit_blocks_submission() {
        let mut details = Details::new();
        let long = "x".repeat(MAX_LEN + 1);
        update(&mut details, Message::DraftChanged(long.clone()), false, false);

        assert!(details.over_limit(MAX_LEN));
        assert_eq!(details.remaining(MAX_LEN), 0);

        let action = update(&mut details, Message::SubmitReview, false, false);
        assert!(matches!(action, Action::None));
        // Blocked submission keeps the draft for editing.
        assert_eq!(details.draft, long);
    }

    #[test]
    fn test_remaining_counts_chars() {
        let mut details = Details::new();
        update(
            &mut details,
            Message::DraftChanged("five!".into()),
            false,
            false,
        );
        assert_eq!(details.remaining(MAX_LEN), MAX_LEN - 5);
    }
}
