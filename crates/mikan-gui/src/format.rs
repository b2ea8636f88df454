//! Display formatting helpers for anime metadata values.

use mikan_core::models::AnimeSeason;

/// Character cutoff approximating four rendered lines of body text.
pub const SYNOPSIS_COLLAPSE_CHARS: usize = 160;

/// Whether a synopsis is long enough to need the collapsed rendering.
pub fn synopsis_is_truncated(synopsis: &str) -> bool {
    synopsis.chars().count() > SYNOPSIS_COLLAPSE_CHARS
}

/// Collapsed synopsis: cut at the character cutoff on a whitespace
/// boundary, with a trailing ellipsis. Short text passes through.
pub fn collapsed_synopsis(synopsis: &str) -> String {
    if !synopsis_is_truncated(synopsis) {
        return synopsis.to_string();
    }
    let cut: String = synopsis.chars().take(SYNOPSIS_COLLAPSE_CHARS).collect();
    let cut = match cut.rfind(char::is_whitespace) {
        Some(i) => &cut[..i],
        None => cut.as_str(),
    };
    format!("{}\u{2026}", cut.trim_end())
}

/// Premiere season line, e.g. "Fall 2002". Empty parts are skipped.
pub fn season(season: &AnimeSeason) -> String {
    let name = {
        let mut c = season.season.chars();
        match c.next() {
            Some(first) => first.to_uppercase().to_string() + c.as_str(),
            None => String::new(),
        }
    };

    match (name.is_empty(), season.year.is_empty()) {
        (false, false) => format!("{name} {}", season.year),
        (false, true) => name,
        (true, false) => season.year.clone(),
        (true, true) => String::new(),
    }
}

/// Episode count line. `None` means the count is not announced yet.
pub fn episodes(num_episodes: Option<&str>) -> String {
    match num_episodes {
        Some(n) if !n.is_empty() => format!("{n} eps"),
        _ => String::new(),
    }
}

/// Review date from a unix-epoch integer, e.g. "Jan 15, 2024".
///
/// The -1 sentinel (and anything unrepresentable) renders as nothing.
pub fn review_date(epoch: i64) -> String {
    if epoch < 0 {
        return String::new();
    }
    match chrono::DateTime::<chrono::Utc>::from_timestamp(epoch, 0) {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_display() {
        let s = AnimeSeason {
            year: "2002".into(),
            season: "fall".into(),
        };
        assert_eq!(season(&s), "Fall 2002");

        assert_eq!(season(&AnimeSeason::default()), "");
        assert_eq!(
            season(&AnimeSeason {
                year: "2026".into(),
                season: "".into(),
            }),
            "2026"
        );
    }

    #[test]
    fn test_episodes_display() {
        assert_eq!(episodes(Some("220")), "220 eps");
        assert_eq!(episodes(Some("")), "");
        assert_eq!(episodes(None), "");
    }

    #[test]
    fn test_review_date() {
        // 2024-01-15 10:00:00 UTC
        assert_eq!(review_date(1705312800), "Jan 15, 2024");
        // Sentinel for "not yet set"
        assert_eq!(review_date(-1), "");
    }

    #[test]
    fn test_short_synopsis_passes_through() {
        let s = "A quiet season.";
        assert!(!synopsis_is_truncated(s));
        assert_eq!(collapsed_synopsis(s), s);
    }

    #[test]
    fn test_long_synopsis_collapses() {
        let s = "A ".repeat(100);
        assert!(synopsis_is_truncated(&s));

        let collapsed = collapsed_synopsis(&s);
        assert!(collapsed.ends_with('\u{2026}'));
        assert!(collapsed.chars().count() <= SYNOPSIS_COLLAPSE_CHARS + 1);
    }

    #[test]
    fn test_collapse_cuts_on_word_boundary() {
        let s = "word ".repeat(100);
        let collapsed = collapsed_synopsis(&s);
        // No mid-word cut: everything before the ellipsis is whole words.
        let body = collapsed.trim_end_matches('\u{2026}');
        assert!(body.split_whitespace().all(|w| w == "word"));
    }
}
