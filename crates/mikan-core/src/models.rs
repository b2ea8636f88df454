pub mod anime;
pub mod review;
pub mod user;

pub use anime::{Anime, AnimePicture, AnimePoster, AnimePosterNode, AnimePosterResponse, AnimeSeason};
pub use review::{AnimeReview, AnimeReviews};
pub use user::User;
