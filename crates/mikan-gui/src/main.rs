mod app;
mod format;
mod screen;
mod style;
mod theme;
mod widgets;

use std::path::PathBuf;

use clap::Parser;

use mikan_api::SessionService;

#[derive(Parser)]
#[command(name = "mikan", about = "Anime detail viewer")]
struct Args {
    /// Catalog JSON file to browse (defaults to the built-in catalog).
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Anime id to open (defaults to the first catalog entry).
    #[arg(long)]
    anime: Option<String>,
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter("mikan=debug")
        .init();

    let args = Args::parse();

    let session = match &args.catalog {
        Some(path) => match SessionService::from_catalog_file(path) {
            Ok(session) => session,
            Err(e) => {
                tracing::error!("Cannot load catalog {}: {e}", path.display());
                SessionService::embedded()
            }
        },
        None => SessionService::embedded(),
    };

    let anime_id = args
        .anime
        .or_else(|| session.first_anime_id())
        .unwrap_or_default();

    iced::application(
        move || app::Mikan::new(session.clone(), anime_id.clone()),
        app::Mikan::update,
        app::Mikan::view,
    )
    .title(app::Mikan::title)
    .theme(app::Mikan::theme)
    .font(lucide_icons::LUCIDE_FONT_BYTES)
    .run()
}
