//! YouTube PlaylistItems API types.

use crate::youtube_api::types::{PageInfo, ThumbnailSet};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `playlistItems.list` API call.
///
/// Contains a list of [`PlaylistItem`] resources within one playlist, along
/// with pagination information in [`PageInfo`].
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistItemListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#playlistItemListResponse`.
    pub kind: String,
    /// A list of playlist items that match the request criteria.
    #[serde(default)]
    pub items: VecDeque<PlaylistItem>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
    /// Token that can be used as the value of the pageToken parameter to retrieve the next page in the result set.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A `playlistItem` resource identifies one video within a playlist.
///
/// Playlist items map 1:1 to catalog episodes; their order within the playlist
/// determines the episode numbering.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems#resource>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    /// Contains basic details about the playlist item.
    pub snippet: PlaylistItemSnippet,
}

/// The snippet object contains basic details about the playlist item.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems#snippet>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItemSnippet {
    /// The item's title.
    pub title: String,
    /// The item's description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The date and time that the item was added to the playlist.
    #[serde(rename = "publishedAt")]
    pub published_at: Option<Timestamp>,
    /// The item's thumbnail images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<ThumbnailSet>,
    /// The id object identifying the resource the playlist item refers to.
    #[serde(rename = "resourceId")]
    pub resource_id: ResourceId,
}

/// Identifies the resource a playlist item points at.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems#snippet.resourceId>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceId {
    /// The ID that YouTube uses to uniquely identify the referenced video.
    #[serde(rename = "videoId")]
    pub video_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn playlist_item_list_response_deserializes() {
        let json = r#"{
            "kind": "youtube#playlistItemListResponse",
            "pageInfo": { "totalResults": 1, "resultsPerPage": 50 },
            "items": [{
                "snippet": {
                    "title": "Episode title",
                    "description": "Episode overview.",
                    "publishedAt": "2016-01-15T18:30:00Z",
                    "thumbnails": {
                        "maxres": { "url": "https://i.ytimg.com/vi/abc/maxresdefault.jpg", "width": 1280, "height": 720 }
                    },
                    "resourceId": { "kind": "youtube#video", "videoId": "abc123xyz00" }
                }
            }]
        }"#;
        let response: PlaylistItemListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items.len(), 1);
        let item = &response.items[0];
        assert_eq!(item.snippet.resource_id.video_id, "abc123xyz00");
        assert_eq!(
            item.snippet.thumbnails.as_ref().unwrap().best(),
            Some("https://i.ytimg.com/vi/abc/maxresdefault.jpg")
        );
    }

    #[test]
    fn item_without_published_at_survives() {
        let json = r#"{
            "snippet": {
                "title": "private video",
                "resourceId": { "videoId": "gone" }
            }
        }"#;
        let item: PlaylistItem = serde_json::from_str(json).unwrap();
        assert!(item.snippet.published_at.is_none());
    }
}
