//! Reshaping upstream API records into canonical catalog documents.
//!
//! This is the heart of the provider: a fixed-depth tree transform from
//! channel → playlists → playlist items into show → seasons → episodes.
//! Positional data (season order, episode numbers) is always derived from the
//! filtered, ordered input lists, never from upstream ids, and partial
//! upstream records degrade to documented defaults instead of failing the
//! batch.

use crate::catalog::{
    DEFAULT_SEASON_OVERVIEW, DEFAULT_SHOW_OVERVIEW, Episode, PlaybackSources, Rating, SHOW_ITEM_TYPE,
    SHOW_NETWORK, Season, ShowDocument, WatchedState,
};
use crate::youtube_api::{Channel, Playlist, PlaylistItem, ThumbnailSet, types::best_thumbnail};
use jiff::Timestamp;
use jiff::tz::TimeZone;

/// Calendar year of a publish timestamp, when one is known.
fn year_of(published_at: Option<Timestamp>) -> Option<i16> {
    published_at.map(|ts| ts.to_zoned(TimeZone::UTC).year())
}

/// Converts the items of one playlist into that season's ordered episode list.
///
/// The item at 0-based position `i` becomes episode `i + 1` of season
/// `season_index + 1`. Output order matches input order exactly, regardless of
/// the items' publish dates.
pub fn map_episodes(season_index: usize, items: &[PlaylistItem]) -> Vec<Episode> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| Episode {
            id: item.snippet.resource_id.video_id.clone(),
            title: item.snippet.title.clone(),
            overview: item.snippet.description.clone().unwrap_or_default(),
            poster: best_thumbnail(item.snippet.thumbnails.as_ref()).map(str::to_string),
            first_aired: item.snippet.published_at.map(|ts| ts.as_second()),
            episode: i as u32 + 1,
            season: season_index as u32 + 1,
            sources: PlaybackSources::for_video(&item.snippet.resource_id.video_id),
            watched: WatchedState::default(),
        })
        .collect()
}

/// Builds the season record for the playlist at the given 0-based position.
pub fn season_from_playlist(order: usize, playlist: &Playlist, episodes: Vec<Episode>) -> Season {
    Season {
        id: playlist.id.clone(),
        title: playlist.snippet.title.clone(),
        order: order as u32,
        overview: playlist
            .snippet
            .description
            .clone()
            .unwrap_or_else(|| DEFAULT_SEASON_OVERVIEW.to_string()),
        poster: best_thumbnail(playlist.snippet.thumbnails.as_ref()).map(str::to_string),
        episodes,
    }
}

/// Shared document construction for both presentation modes.
///
/// The caller resolves which upstream record the identity fields come from
/// (the channel, or a playlist falling back to its channel).
fn base_document(
    id: &str,
    title: &str,
    description: Option<&str>,
    published_at: Option<Timestamp>,
    thumbnails: Option<&ThumbnailSet>,
    seasons: Vec<Season>,
) -> ShowDocument {
    let img = best_thumbnail(thumbnails).map(str::to_string);

    ShowDocument {
        id: id.to_string(),
        title: title.to_string(),
        year: year_of(published_at),
        item_type: SHOW_ITEM_TYPE.to_string(),
        overview: description
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_SHOW_OVERVIEW.to_string()),
        genres: Vec::new(),
        country: String::new(),
        network: SHOW_NETWORK.to_string(),
        status: "finished".to_string(),
        runtime: 30,
        backdrop: img.clone(),
        poster: img,
        slug: id.to_string(),
        rating: Rating::default(),
        num_seasons: seasons.len() as u32,
        last_updated: published_at,
        seasons,
    }
}

/// Assembles the summary document for a channel: every playlist becomes a
/// season, but no episodes are populated yet.
///
/// Used by list views; zero playlists yield a valid document with zero
/// seasons.
pub fn assemble_summary(channel: &Channel, playlists: &[Playlist]) -> ShowDocument {
    let seasons = playlists
        .iter()
        .enumerate()
        .map(|(order, playlist)| season_from_playlist(order, playlist, Vec::new()))
        .collect();

    channel_document(channel, seasons)
}

/// Assembles the full document for a channel with every season's episodes
/// mapped.
pub fn assemble_detail(channel: &Channel, playlists: &[(Playlist, Vec<PlaylistItem>)]) -> ShowDocument {
    let seasons = playlists
        .iter()
        .enumerate()
        .map(|(order, (playlist, items))| {
            season_from_playlist(order, playlist, map_episodes(order, items))
        })
        .collect();

    channel_document(channel, seasons)
}

fn channel_document(channel: &Channel, seasons: Vec<Season>) -> ShowDocument {
    base_document(
        &channel.id,
        &channel.snippet.title,
        channel.snippet.description.as_deref(),
        channel.snippet.published_at,
        channel.snippet.thumbnails.as_ref(),
        seasons,
    )
}

/// Assembles the summary document for one playlist presented as its own show.
///
/// The playlist's snippet provides the identity fields; anything it lacks
/// falls back to the channel record, so a date-less playlist still inherits
/// the channel's year. The playlist is its show's only season.
pub fn playlist_as_show_summary(channel: &Channel, playlist: &Playlist) -> ShowDocument {
    base_document(
        &playlist.id,
        &playlist.snippet.title,
        playlist
            .snippet
            .description
            .as_deref()
            .or(channel.snippet.description.as_deref()),
        playlist
            .snippet
            .published_at
            .or(channel.snippet.published_at),
        playlist
            .snippet
            .thumbnails
            .as_ref()
            .or(channel.snippet.thumbnails.as_ref()),
        vec![season_from_playlist(0, playlist, Vec::new())],
    )
}

/// Merges freshly assembled seasons into a previously fetched document.
///
/// Everything the caller already had is preserved; only the season hierarchy
/// and its derived count are replaced.
pub fn merge_detail(mut previous: ShowDocument, seasons: Vec<Season>) -> ShowDocument {
    previous.num_seasons = seasons.len() as u32;
    previous.seasons = seasons;
    previous
}

/// Builds the single detail season for a show that *is* a playlist, reusing
/// the identity fields of the previously fetched summary document.
pub fn season_from_previous(previous: &ShowDocument, episodes: Vec<Episode>) -> Season {
    Season {
        id: previous.id.clone(),
        title: previous.title.clone(),
        order: 0,
        overview: previous.overview.clone(),
        poster: previous.poster.clone(),
        episodes,
    }
}
