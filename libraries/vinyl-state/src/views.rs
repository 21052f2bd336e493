//! Derived album views.
//!
//! Pure functions recomputed on every read; nothing here is cached or stored.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
use vinyl_core::Album;

/// Name ordering used as the ranking tie-breaker.
///
/// Collates like a root-locale comparison, one level at a time:
/// base letters with accents and case folded away ("Émile" sorts before
/// "Fado"), then accents (unaccented first), then case (lowercase first).
/// The raw strings decide only between names equal on every level.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| accented_letters(a).cmp(&accented_letters(b)))
        .then_with(|| case_pattern(a).cmp(&case_pattern(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn accented_letters(name: &str) -> String {
    name.nfd().flat_map(char::to_lowercase).collect()
}

/// `true` per uppercase letter, so lowercase sorts first.
fn case_pattern(name: &str) -> Vec<bool> {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
        .collect()
}

/// Full ranking order: score descending, then name ascending.
pub fn compare_ranked(a: &Album, b: &Album) -> Ordering {
    b.vote_score()
        .cmp(&a.vote_score())
        .then_with(|| compare_names(&a.name, &b.name))
}

/// `items` sorted by descending vote score, ties broken by name.
///
/// The sort is stable, so albums that compare equal keep server order.
pub fn rank_albums(items: &[Album]) -> Vec<Album> {
    let mut ranked = items.to_vec();
    ranked.sort_by(compare_ranked);
    ranked
}

/// Albums whose name or artist contains `query`, case-insensitively.
///
/// An empty query keeps everything.
pub fn filter_albums(albums: &[Album], query: &str) -> Vec<Album> {
    if query.is_empty() {
        return albums.to_vec();
    }

    let needle = query.to_lowercase();
    albums
        .iter()
        .filter(|album| album.matches_lowercase(&needle))
        .cloned()
        .collect()
}

/// `filter_albums(rank_albums(items), query)`.
pub fn visible_albums(items: &[Album], query: &str) -> Vec<Album> {
    filter_albums(&rank_albums(items), query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(albums: &[Album]) -> Vec<i64> {
        albums.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_rank_by_score_then_name() {
        let items = vec![
            Album::new(1, "Zebra", "A").with_votes(3, 0),
            Album::new(2, "apple", "B").with_votes(5, 2),
            Album::new(3, "Mango", "C").with_votes(10, 0),
            Album::new(4, "Banana", "D").with_votes(4, 1),
        ];

        // 3 scores 10; 2, 4 and 1 all score 3
        assert_eq!(ids(&rank_albums(&items)), vec![3, 2, 4, 1]);
    }

    #[test]
    fn test_rank_does_not_touch_input() {
        let items = vec![
            Album::new(1, "A", "X").with_votes(3, 0),
            Album::new(2, "B", "Y").with_votes(7, 0),
        ];
        let ranked = rank_albums(&items);

        assert_eq!(ids(&items), vec![1, 2]);
        assert_eq!(ids(&ranked), vec![2, 1]);
    }

    #[test]
    fn test_case_variants_sort_together() {
        assert_eq!(compare_names("abbey road", "Blue"), Ordering::Less);
        assert_eq!(compare_names("abbey", "Abbey"), Ordering::Less);
        assert_eq!(compare_names("Abbey", "abbey"), Ordering::Greater);
        assert_eq!(compare_names("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_accents_fold_into_base_letter() {
        assert_eq!(compare_names("Émile", "Fado"), Ordering::Less);
        assert_eq!(compare_names("Fado", "Zed"), Ordering::Less);
        assert_eq!(compare_names("Ångström", "Bach"), Ordering::Less);
        // Unaccented wins only when the base letters tie
        assert_eq!(compare_names("Emile", "Émile"), Ordering::Less);
        assert_eq!(compare_names("émile", "Emile"), Ordering::Greater);
        // Precomposed and decomposed spellings land together
        assert_eq!(base_letters("Caf\u{e9}"), base_letters("Cafe\u{301}"));
        assert_eq!(accented_letters("Caf\u{e9}"), accented_letters("Cafe\u{301}"));
    }

    #[test]
    fn test_rank_accented_ties() {
        let items = vec![
            Album::new(1, "Zed", "A").with_votes(1, 0),
            Album::new(2, "Émile", "B").with_votes(1, 0),
            Album::new(3, "Fado", "C").with_votes(1, 0),
        ];

        assert_eq!(ids(&rank_albums(&items)), vec![2, 3, 1]);
    }

    #[test]
    fn test_extreme_vote_counts_do_not_overflow() {
        let items = vec![
            Album::new(1, "Low", "A").with_votes(i64::MIN, i64::MAX),
            Album::new(2, "High", "B").with_votes(i64::MAX, i64::MIN),
            Album::new(3, "Zero", "C"),
        ];

        assert_eq!(ids(&rank_albums(&items)), vec![2, 3, 1]);
    }

    #[test]
    fn test_filter_matches_name_or_artist() {
        let items = vec![
            Album::new(1, "Blue Train", "John Coltrane"),
            Album::new(2, "Kind of Blue", "Miles Davis"),
            Album::new(3, "Head Hunters", "Herbie Hancock"),
        ];

        assert_eq!(ids(&filter_albums(&items, "BLUE")), vec![1, 2]);
        assert_eq!(ids(&filter_albums(&items, "hancock")), vec![3]);
        assert!(filter_albums(&items, "zeppelin").is_empty());
        assert_eq!(ids(&filter_albums(&items, "")), vec![1, 2, 3]);
    }

    #[test]
    fn test_visible_albums_are_ranked() {
        let items = vec![
            Album::new(1, "Blue Train", "John Coltrane").with_votes(1, 0),
            Album::new(2, "Kind of Blue", "Miles Davis").with_votes(9, 0),
            Album::new(3, "Head Hunters", "Herbie Hancock").with_votes(20, 0),
        ];

        assert_eq!(ids(&visible_albums(&items, "blue")), vec![2, 1]);
    }
}
