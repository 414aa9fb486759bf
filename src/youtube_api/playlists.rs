//! YouTube Playlists API types.

use crate::youtube_api::types::{PageInfo, ThumbnailSet};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `playlists.list` API call.
///
/// Contains a list of [`Playlist`] resources owned by the requested channel,
/// along with pagination information in [`PageInfo`].
///
/// See: <https://developers.google.com/youtube/v3/docs/playlists/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#playlistListResponse`.
    pub kind: String,
    /// A list of playlists that match the request criteria.
    #[serde(default)]
    pub items: VecDeque<Playlist>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
    /// Token that can be used as the value of the pageToken parameter to retrieve the next page in the result set.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A `playlist` resource represents a YouTube playlist.
///
/// A playlist is an ordered collection of videos; in this provider every
/// surviving playlist becomes one season of the catalog's show document.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlists#resource>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// The ID that YouTube uses to uniquely identify the playlist.
    pub id: String,
    /// Contains basic details about the playlist.
    pub snippet: PlaylistSnippet,
    /// Contains information about the playlist content.
    #[serde(rename = "contentDetails")]
    pub content_details: PlaylistContentDetails,
}

/// The snippet object contains basic details about the playlist.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlists#snippet>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSnippet {
    /// The playlist's title.
    pub title: String,
    /// The playlist's description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The date and time that the playlist was created.
    #[serde(rename = "publishedAt")]
    pub published_at: Option<Timestamp>,
    /// The playlist's thumbnail images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<ThumbnailSet>,
}

/// The contentDetails object contains information about the playlist content.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlists#contentDetails>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistContentDetails {
    /// The number of videos in the playlist.
    #[serde(rename = "itemCount")]
    pub item_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn playlist_list_response_deserializes() {
        let json = r#"{
            "kind": "youtube#playlistListResponse",
            "pageInfo": { "totalResults": 2, "resultsPerPage": 50 },
            "nextPageToken": "CAUQAA",
            "items": [
                {
                    "id": "PL1",
                    "snippet": {
                        "title": "Season One",
                        "description": "The first run.",
                        "publishedAt": "2015-06-01T12:00:00Z",
                        "thumbnails": {
                            "medium": { "url": "https://i.ytimg.com/pl1.jpg", "width": 320, "height": 180 }
                        }
                    },
                    "contentDetails": { "itemCount": 12 }
                },
                {
                    "id": "PL2",
                    "snippet": { "title": "Empty shelf" },
                    "contentDetails": { "itemCount": 0 }
                }
            ]
        }"#;
        let response: PlaylistListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.next_page_token.as_deref(), Some("CAUQAA"));
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].content_details.item_count, 12);
        assert_eq!(response.items[1].snippet.description, None);
    }
}
