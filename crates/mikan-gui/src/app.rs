use iced::widget::{column, container, text};
use iced::{Element, Length, Task, Theme};

use mikan_api::traits::{MetadataProvider, ReviewStore, UserStateProvider};
use mikan_api::{FetchStatus, SessionService};
use mikan_core::config::AppConfig;
use mikan_core::models::{Anime, AnimeReviews, User};

use crate::screen::{details, Action};
use crate::style;
use crate::theme::{self, ColorScheme};

/// Application state: a slim controller around the detail screen.
///
/// Owns the provider handle and the fetched snapshots; the screen is a
/// pure function of these inputs plus its own local UI state.
pub struct Mikan {
    session: SessionService,
    anime_id: String,
    config: AppConfig,
    // Fetched snapshots
    anime: Option<Anime>,
    user: Option<User>,
    reviews: AnimeReviews,
    status: FetchStatus,
    // Screen
    details: details::Details,
    // Theme + chrome
    scheme: ColorScheme,
    status_message: String,
}

/// All messages the application can handle.
#[derive(Debug, Clone)]
pub enum Message {
    AnimeLoaded(Result<Anime, String>),
    UserLoaded(Result<User, String>),
    ReviewsLoaded(Result<AnimeReviews, String>),
    UserStateUpdated(Result<User, String>),
    ReviewPosted(Result<AnimeReviews, String>),
    Details(details::Message),
}

impl Mikan {
    pub fn new(session: SessionService, anime_id: String) -> (Self, Task<Message>) {
        let config = AppConfig::load().unwrap_or_default();
        let mode = theme::resolve_mode(config.appearance.mode);
        let scheme = theme::scheme(mode);

        let app = Self {
            session,
            anime_id,
            config,
            anime: None,
            user: None,
            reviews: AnimeReviews::default(),
            status: FetchStatus::Loading,
            details: details::Details::new(),
            scheme,
            status_message: "Loading...".into(),
        };
        let task = app.load_tasks();
        (app, task)
    }

    pub fn title(&self) -> String {
        match &self.anime {
            Some(anime) if self.status.is_success() => format!("{} - Mikan", anime.title),
            _ => String::from("Mikan"),
        }
    }

    /// Fire the three initial fetches: detail record, user, reviews.
    fn load_tasks(&self) -> Task<Message> {
        let anime_task = {
            let session = self.session.clone();
            let id = self.anime_id.clone();
            Task::perform(
                async move { session.get_anime(&id).await.map_err(|e| e.to_string()) },
                Message::AnimeLoaded,
            )
        };
        let user_task = {
            let session = self.session.clone();
            Task::perform(
                async move { session.current_user().await.map_err(|e| e.to_string()) },
                Message::UserLoaded,
            )
        };
        let reviews_task = {
            let session = self.session.clone();
            let id = self.anime_id.clone();
            Task::perform(
                async move { session.get_reviews(&id).await.map_err(|e| e.to_string()) },
                Message::ReviewsLoaded,
            )
        };
        Task::batch([anime_task, user_task, reviews_task])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AnimeLoaded(result) => {
                match result {
                    Ok(anime) => {
                        // Screen-entry chrome: set once when the data
                        // arrives, never from view.
                        self.status_message = format!("Viewing {}", anime.title);
                        self.anime = Some(anime);
                        self.status = FetchStatus::Success;
                    }
                    Err(e) => {
                        tracing::warn!("Detail fetch failed: {e}");
                        self.status = FetchStatus::Error;
                        self.status_message = format!("Error: {e}");
                    }
                }
                Task::none()
            }
            Message::UserLoaded(result) | Message::UserStateUpdated(result) => {
                match result {
                    Ok(user) => self.user = Some(user),
                    Err(e) => {
                        tracing::warn!("User state fetch failed: {e}");
                        self.status_message = format!("Error: {e}");
                    }
                }
                Task::none()
            }
            Message::ReviewsLoaded(result) => {
                match result {
                    Ok(reviews) => self.reviews = reviews,
                    Err(e) => tracing::warn!("Review fetch failed: {e}"),
                }
                Task::none()
            }
            Message::ReviewPosted(result) => {
                match result {
                    Ok(reviews) => {
                        self.reviews = reviews;
                        self.status_message = "Review posted".into();
                    }
                    Err(e) => {
                        tracing::warn!("Review post failed: {e}");
                        self.status_message = format!("Error: {e}");
                    }
                }
                Task::none()
            }
            Message::Details(msg) => {
                let (is_favorited, is_watched) = self.membership();
                let action = self.details.update(
                    msg,
                    self.anime.as_ref(),
                    is_favorited,
                    is_watched,
                    self.config.review.max_length,
                );
                self.handle_action(action)
            }
        }
    }

    /// Interpret an Action returned by the screen.
    fn handle_action(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::None => Task::none(),
            Action::AddFavorite(anime) => {
                self.status_message = format!("Added {} to favorites", anime.title);
                let session = self.session.clone();
                Task::perform(
                    async move { session.add_favorite(anime).await.map_err(|e| e.to_string()) },
                    Message::UserStateUpdated,
                )
            }
            Action::RemoveFavorite(id) => {
                self.status_message = "Removed from favorites".into();
                let session = self.session.clone();
                Task::perform(
                    async move {
                        session
                            .remove_favorite(&id)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    Message::UserStateUpdated,
                )
            }
            Action::AddWatched(anime) => {
                self.status_message = format!("Marked {} as watched", anime.title);
                let session = self.session.clone();
                Task::perform(
                    async move { session.add_watched(anime).await.map_err(|e| e.to_string()) },
                    Message::UserStateUpdated,
                )
            }
            Action::RemoveWatched(id) => {
                self.status_message = "Unmarked as watched".into();
                let session = self.session.clone();
                Task::perform(
                    async move {
                        session.remove_watched(&id).await.map_err(|e| e.to_string())
                    },
                    Message::UserStateUpdated,
                )
            }
            Action::SubmitReview { text, rating } => {
                let session = self.session.clone();
                let id = self.anime_id.clone();
                Task::perform(
                    async move {
                        session
                            .add_review(&id, text, rating)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    Message::ReviewPosted,
                )
            }
            Action::Reload => {
                self.status = FetchStatus::Loading;
                self.status_message = "Loading...".into();
                self.load_tasks()
            }
        }
    }

    /// Current favorite/watched flags for the displayed anime.
    fn membership(&self) -> (bool, bool) {
        match (&self.user, &self.anime) {
            (Some(user), Some(anime)) => {
                (user.is_favorited(&anime.id), user.is_watched(&anime.id))
            }
            _ => (false, false),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let cs = &self.scheme;
        let (is_favorited, is_watched) = self.membership();

        let screen = self
            .details
            .view(
                cs,
                self.anime.as_ref(),
                is_favorited,
                is_watched,
                self.status,
                &self.reviews,
                self.config.review.max_length,
            )
            .map(Message::Details);

        let status_bar = container(
            text(&self.status_message)
                .size(style::TEXT_XS)
                .line_height(style::LINE_HEIGHT_LOOSE),
        )
        .style(theme::status_bar(cs))
        .width(Length::Fill)
        .height(Length::Fixed(style::STATUS_BAR_HEIGHT))
        .padding([4.0, style::SPACE_MD]);

        column![
            container(screen).height(Length::Fill),
            status_bar,
        ]
        .into()
    }

    pub fn theme(&self) -> Theme {
        theme::build_theme(&self.scheme)
    }
}
