//! YouTube Channels API types.

use crate::youtube_api::types::{PageInfo, ThumbnailSet};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `channels.list` API call.
///
/// Contains a list of [`Channel`] resources that match the request criteria,
/// along with pagination information in [`PageInfo`].
///
/// See: <https://developers.google.com/youtube/v3/docs/channels/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#channelListResponse`.
    pub kind: String,
    /// A list of channels that match the request criteria.
    ///
    /// The field is omitted entirely when nothing matched.
    #[serde(default)]
    pub items: VecDeque<Channel>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
    /// Token that can be used as the value of the pageToken parameter to retrieve the next page in the result set.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A `channel` resource contains information about a YouTube channel.
///
/// Each channel represents a user or organization account on YouTube and
/// contains basic details, branding settings, statistics, and other metadata.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#resource>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    /// The ID that YouTube uses to uniquely identify the channel.
    pub id: String,
    /// Contains basic details about the channel.
    pub snippet: ChannelSnippet,
}

/// The snippet object contains basic details about the channel.
///
/// This is a subset of the full snippet data available from the YouTube API,
/// containing only the fields currently needed by this implementation. Every
/// field other than the title can be missing on sparsely-maintained channels,
/// so the types stay optional and the catalog layer substitutes defaults.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#snippet>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelSnippet {
    /// The channel's title.
    pub title: String,
    /// The channel's description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The date and time that the channel was created.
    ///
    /// The value is specified in ISO 8601 format.
    #[serde(rename = "publishedAt")]
    pub published_at: Option<Timestamp>,
    /// The channel's thumbnail images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<ThumbnailSet>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn channel_list_response_deserializes() {
        let json = r#"{
            "kind": "youtube#channelListResponse",
            "etag": "abc",
            "pageInfo": { "totalResults": 1, "resultsPerPage": 5 },
            "items": [{
                "kind": "youtube#channel",
                "id": "UC_x5XG1OV2P6uZZ5FSM9Ttw",
                "snippet": {
                    "title": "Google for Developers",
                    "description": "Subscribe for the latest.",
                    "publishedAt": "2007-08-23T00:34:43Z",
                    "thumbnails": {
                        "default": { "url": "https://yt3.ggpht.com/x=s88", "width": 88, "height": 88 }
                    }
                }
            }]
        }"#;
        let response: ChannelListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items.len(), 1);
        let channel = &response.items[0];
        assert_eq!(channel.id, "UC_x5XG1OV2P6uZZ5FSM9Ttw");
        assert_eq!(channel.snippet.title, "Google for Developers");
        assert_eq!(
            channel.snippet.published_at.unwrap().to_string(),
            "2007-08-23T00:34:43Z"
        );
    }

    #[test]
    fn empty_match_omits_items() {
        let json = r#"{
            "kind": "youtube#channelListResponse",
            "pageInfo": { "totalResults": 0, "resultsPerPage": 5 }
        }"#;
        let response: ChannelListResponse = serde_json::from_str(json).unwrap();
        assert!(response.items.is_empty());
    }

    #[test]
    fn sparse_snippet_tolerated() {
        let json = r#"{ "title": "bare channel" }"#;
        let snippet: ChannelSnippet = serde_json::from_str(json).unwrap();
        assert_eq!(snippet.title, "bare channel");
        assert!(snippet.published_at.is_none());
        assert!(snippet.thumbnails.is_none());
    }
}
