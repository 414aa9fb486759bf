//! Playlist filtering by configured regex rules.

use crate::youtube_api::Playlist;
use regex::Regex;

/// Which playlist snippet field a filter rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaylistField {
    Title,
    Description,
}

impl PlaylistField {
    /// Raw string value of this field on a playlist, when present.
    fn value<'a>(&self, playlist: &'a Playlist) -> Option<&'a str> {
        match self {
            PlaylistField::Title => Some(playlist.snippet.title.as_str()),
            PlaylistField::Description => playlist.snippet.description.as_deref(),
        }
    }
}

/// One compiled filter rule: keep playlists whose field matches the pattern.
#[derive(Debug, Clone)]
pub struct FilterRule {
    pub field: PlaylistField,
    pub pattern: Regex,
}

impl FilterRule {
    /// Whether the playlist's field value matches this rule's pattern.
    ///
    /// A playlist lacking the field does not match.
    fn matches(&self, playlist: &Playlist) -> bool {
        self.field
            .value(playlist)
            .is_some_and(|value| self.pattern.is_match(value))
    }
}

/// Keeps the playlists selected by the configured rules.
///
/// An empty rule set is the identity: every playlist passes, in order. With
/// rules present, a playlist is kept when **any** rule matches it.
pub fn filter_playlists(playlists: Vec<Playlist>, rules: &[FilterRule]) -> Vec<Playlist> {
    if rules.is_empty() {
        return playlists;
    }

    playlists
        .into_iter()
        .filter(|playlist| rules.iter().any(|rule| rule.matches(playlist)))
        .collect()
}

/// Drops playlists with no videos in them.
///
/// Empty playlists would become empty seasons, which the host renders as
/// broken entries, so they are removed before filtering.
pub fn drop_empty_playlists(playlists: Vec<Playlist>) -> Vec<Playlist> {
    playlists
        .into_iter()
        .filter(|playlist| playlist.content_details.item_count > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube_api::{PlaylistContentDetails, PlaylistSnippet};
    use pretty_assertions::assert_eq;

    fn playlist(id: &str, title: &str, description: Option<&str>, items: u32) -> Playlist {
        Playlist {
            id: id.to_string(),
            snippet: PlaylistSnippet {
                title: title.to_string(),
                description: description.map(str::to_string),
                published_at: None,
                thumbnails: None,
            },
            content_details: PlaylistContentDetails { item_count: items },
        }
    }

    fn rule(field: PlaylistField, pattern: &str) -> FilterRule {
        FilterRule {
            field,
            pattern: Regex::new(pattern).unwrap(),
        }
    }

    fn ids(playlists: &[Playlist]) -> Vec<&str> {
        playlists.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn no_rules_is_the_identity() {
        assert!(filter_playlists(Vec::new(), &[]).is_empty());

        let input = vec![playlist("a", "Foo", None, 1), playlist("b", "Bar", None, 1)];
        let output = filter_playlists(input, &[]);
        assert_eq!(ids(&output), vec!["a", "b"]);
    }

    #[test]
    fn title_rule_keeps_exact_matches_only() {
        let input = vec![
            playlist("a", "Foo", None, 1),
            playlist("b", "Bar", None, 1),
            playlist("c", "Foobar", None, 1),
        ];
        let output = filter_playlists(input, &[rule(PlaylistField::Title, "^Foo$")]);
        assert_eq!(ids(&output), vec!["a"]);
    }

    #[test]
    fn rules_combine_with_or() {
        let input = vec![
            playlist("a", "Foo", Some("nothing"), 1),
            playlist("b", "Bar", Some("keep me"), 1),
            playlist("c", "Baz", None, 1),
        ];
        let rules = [
            rule(PlaylistField::Title, "^Foo$"),
            rule(PlaylistField::Description, "keep"),
        ];
        let output = filter_playlists(input, &rules);
        assert_eq!(ids(&output), vec!["a", "b"]);
    }

    #[test]
    fn missing_field_does_not_match() {
        let input = vec![playlist("a", "Foo", None, 1)];
        let output = filter_playlists(input, &[rule(PlaylistField::Description, ".*")]);
        assert!(output.is_empty());
    }

    #[test]
    fn patterns_are_case_sensitive() {
        let input = vec![playlist("a", "foo", None, 1)];
        let output = filter_playlists(input, &[rule(PlaylistField::Title, "^Foo$")]);
        assert!(output.is_empty());
    }

    #[test]
    fn empty_playlists_are_dropped() {
        let input = vec![
            playlist("a", "Full", None, 3),
            playlist("b", "Empty", None, 0),
        ];
        let output = drop_empty_playlists(input);
        assert_eq!(ids(&output), vec!["a"]);
    }
}
