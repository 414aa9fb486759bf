//! The canonical catalog schema consumed by the host application.
//!
//! The host renders a fixed show → seasons → episodes hierarchy; everything the
//! upstream API returns is reshaped into these documents. Field names follow
//! the host's wire format, so the structs serialize directly into what the
//! host expects.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Overview shown for a show whose channel has no description.
pub const DEFAULT_SHOW_OVERVIEW: &str = "no description found";

/// Overview shown for a season whose playlist has no description.
pub const DEFAULT_SEASON_OVERVIEW: &str = "no description provided";

/// Fixed catalog type tag for documents produced by this provider.
pub const SHOW_ITEM_TYPE: &str = "tvshow";

/// Network label stamped on every document.
pub const SHOW_NETWORK: &str = "YouTube Media";

/// Aggregate rating block.
///
/// The upstream API has no rating concept, so every document carries this
/// structure zero-initialized; it exists only to satisfy the host schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub hated: u32,
    pub loved: u32,
    pub votes: u32,
    pub percentage: u32,
    pub watching: u32,
}

/// Opaque playback locator for an episode.
///
/// Resolving the locator into an actual media stream is the playback
/// collaborator's job; this provider only plumbs the video id through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackSource {
    pub url: String,
}

/// Playback locators keyed by quality level.
///
/// Only the default quality is ever populated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackSources {
    pub default: PlaybackSource,
}

impl PlaybackSources {
    /// Builds the locator set for a video id.
    pub fn for_video(video_id: &str) -> Self {
        Self {
            default: PlaybackSource {
                url: format!("yt://{video_id}"),
            },
        }
    }
}

/// Per-episode watched marker, unset at assembly time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchedState {
    pub watched: bool,
}

/// One episode of a season; maps 1:1 to an upstream playlist item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// The video id of the underlying upstream item.
    pub id: String,
    pub title: String,
    pub overview: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    /// Unix seconds of the upstream publish date; absent when the upstream
    /// record carries no date.
    pub first_aired: Option<i64>,
    /// 1-based position within the season.
    pub episode: u32,
    /// 1-based number of the season this episode belongs to.
    pub season: u32,
    pub sources: PlaybackSources,
    pub watched: WatchedState,
}

/// One season of a show; maps 1:1 to an upstream playlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    /// The playlist id of the underlying upstream playlist.
    pub id: String,
    pub title: String,
    /// 0-based position within the show's season list.
    pub order: u32,
    pub overview: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    /// Empty in summary documents; populated by the detail operation.
    pub episodes: Vec<Episode>,
}

/// The canonical show document.
///
/// Summary documents (list views) carry seasons without episodes; detail
/// documents carry the full hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowDocument {
    pub id: String,
    pub title: String,
    /// Calendar year of the source's publish date, when known.
    pub year: Option<i16>,
    #[serde(rename = "type")]
    pub item_type: String,
    pub overview: String,
    /// Placeholder; the upstream API has no genre taxonomy.
    pub genres: Vec<String>,
    pub country: String,
    pub network: String,
    pub status: String,
    /// Nominal episode runtime in minutes.
    pub runtime: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop: Option<String>,
    pub slug: String,
    pub rating: Rating,
    pub num_seasons: u32,
    /// Publish timestamp of the source record, used by the host to order
    /// refreshes.
    pub last_updated: Option<Timestamp>,
    pub seasons: Vec<Season>,
}

/// Filters the host passes to a catalog fetch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FetchFilters {
    /// Page index into the catalog; 0 and absent both mean the first page.
    pub page: Option<usize>,
    /// Page size override; the configured size applies when absent.
    pub limit: Option<u32>,
    /// Accepted for host compatibility; the upstream playlist listing has no
    /// server-side ordering, so this is currently ignored.
    pub sort_order: Option<String>,
    /// Accepted for host compatibility; the upstream API has no genre
    /// taxonomy, so this is currently ignored.
    pub genre: Option<String>,
}

/// One page of catalog results.
#[derive(Debug, Clone, Serialize)]
pub struct FetchPage {
    pub results: Vec<ShowDocument>,
    pub has_more: bool,
}

impl FetchPage {
    /// The empty page returned when the upstream is unavailable.
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            has_more: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rating_defaults_to_all_zeroes() {
        let rating = Rating::default();
        assert_eq!(
            serde_json::to_value(&rating).unwrap(),
            serde_json::json!({
                "hated": 0,
                "loved": 0,
                "votes": 0,
                "percentage": 0,
                "watching": 0,
            })
        );
    }

    #[test]
    fn playback_sources_carry_the_video_id() {
        let sources = PlaybackSources::for_video("dQw4w9WgXcQ");
        assert_eq!(sources.default.url, "yt://dQw4w9WgXcQ");
    }

    #[test]
    fn show_document_serializes_type_under_host_key() {
        let doc = ShowDocument {
            id: "UCx".into(),
            title: "A show".into(),
            year: Some(2015),
            item_type: SHOW_ITEM_TYPE.into(),
            overview: DEFAULT_SHOW_OVERVIEW.into(),
            genres: Vec::new(),
            country: String::new(),
            network: SHOW_NETWORK.into(),
            status: "finished".into(),
            runtime: 30,
            poster: None,
            backdrop: None,
            slug: "UCx".into(),
            rating: Rating::default(),
            num_seasons: 0,
            last_updated: None,
            seasons: Vec::new(),
        };
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["type"], "tvshow");
        assert_eq!(value["num_seasons"], 0);
        // absent poster is omitted, not serialized as null
        assert!(value.get("poster").is_none());
    }

    #[test]
    fn fetch_filters_default_to_first_page() {
        let filters = FetchFilters::default();
        assert_eq!(filters.page, None);
        assert_eq!(filters.limit, None);
    }
}
