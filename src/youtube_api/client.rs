//! Core YouTube API client functionality.

use crate::error::ProviderError;
use crate::youtube_api::{
    channels::{Channel, ChannelListResponse},
    playlist_items::{PlaylistItem, PlaylistItemListResponse},
    playlists::PlaylistListResponse,
    types::PagedStream,
};
use tokio_stream::Stream;
use tracing::instrument;

/// Client for the subset of the YouTube Data API v3 this provider consumes.
///
/// All requests are read-only `list` calls authenticated with a static API key
/// passed as the `key` query parameter; no OAuth flow is involved. The base URL
/// is configurable so tests and self-hosted API mirrors can point the client
/// elsewhere.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    /// Static API key appended to every request.
    api_key: String,
    /// Base URL of the API, without a trailing slash.
    base_url: String,
    /// HTTP client for API requests
    client: reqwest::Client,
}

impl YouTubeClient {
    /// Creates a new YouTube API client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Data API key sent with every request
    /// * `base_url` - API base URL, e.g. `https://www.googleapis.com/youtube/v3`
    /// * `client` - Shared HTTP client for making API requests
    pub fn new(api_key: String, base_url: String, client: reqwest::Client) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Makes a `GET` request to the given API resource with common error handling.
    ///
    /// Consolidates the shared logic across all API requests: URL construction
    /// from the configured base, the `key` authentication parameter, and status
    /// code validation. Non-success statuses are turned into
    /// [`ProviderError::Status`] carrying the response body.
    async fn make_request(
        &self,
        resource: &str,
        query_params: &[(&str, &str)],
    ) -> Result<reqwest::Response, ProviderError> {
        let url = format!("{}/{}", self.base_url, resource);

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(query_params)
            .send()
            .await
            .map_err(|source| ProviderError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ProviderError::Status { url, status, body });
        }

        Ok(response)
    }

    /// Looks up the configured channel via the `channels.list` API.
    ///
    /// Canonical channel IDs (the `UC…` form) are queried by `id`; anything
    /// else is treated as a legacy username and queried by `forUsername`.
    /// The first match wins; more than one match is an upstream anomaly and
    /// is logged but otherwise ignored.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/channels/list>
    #[instrument(skip(self))]
    pub async fn list_channel(&self, channel: &str) -> Result<Channel, ProviderError> {
        let id_param = if looks_like_channel_id(channel) {
            "id"
        } else {
            "forUsername"
        };
        let query_params = [("part", "snippet"), (id_param, channel)];

        let response = self.make_request("channels", &query_params).await?;
        let url = response.url().to_string();
        let channels: ChannelListResponse =
            response
                .json()
                .await
                .map_err(|source| ProviderError::Decode { url, source })?;

        if channels.items.len() > 1 {
            tracing::warn!(
                channel,
                matches = channels.items.len(),
                "channel lookup matched more than one channel, using the first"
            );
        }

        channels
            .items
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::MissingChannel {
                channel: channel.to_string(),
            })
    }

    /// Fetches one page of a channel's playlists via the `playlists.list` API.
    ///
    /// Pagination is left to the caller on purpose: the provider tracks the
    /// continuation token of every observed page so the host can re-request a
    /// specific page later.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/playlists/list>
    #[instrument(skip(self))]
    pub async fn list_playlists(
        &self,
        channel_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> Result<PlaylistListResponse, ProviderError> {
        let max_results_string = max_results.to_string();
        let mut query_params = vec![
            ("part", "snippet,contentDetails"),
            ("channelId", channel_id),
            ("maxResults", max_results_string.as_str()),
        ];
        if let Some(token) = page_token {
            query_params.push(("pageToken", token));
        }

        let response = self.make_request("playlists", &query_params).await?;
        let url = response.url().to_string();
        let playlists: PlaylistListResponse =
            response
                .json()
                .await
                .map_err(|source| ProviderError::Decode { url, source })?;

        tracing::debug!(
            channel_id,
            total_results = playlists.page_info.total_results,
            returned_items = playlists.items.len(),
            has_next_page = playlists.next_page_token.is_some(),
            "fetched playlists"
        );

        Ok(playlists)
    }

    /// Returns a paginated stream of all items in the given playlist.
    ///
    /// The stream yields items in playlist order and automatically fetches
    /// subsequent pages as needed, so seasons longer than one API page are
    /// mapped completely.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/playlistItems/list>
    #[instrument(skip(self))]
    pub fn playlist_items(
        &self,
        playlist_id: String,
        max_results: u32,
    ) -> impl Stream<Item = Result<PlaylistItem, ProviderError>> + use<'_> {
        PagedStream::new(move |page_token| {
            let playlist_id = playlist_id.clone();
            async move {
                let response = self
                    .playlist_items_page(&playlist_id, max_results, page_token.as_deref())
                    .await?;
                Ok((response.items, response.next_page_token))
            }
        })
    }

    /// Internal method to call the `playlistItems.list` API for one page.
    ///
    /// Used by [`Self::playlist_items`] to handle pagination.
    async fn playlist_items_page(
        &self,
        playlist_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> Result<PlaylistItemListResponse, ProviderError> {
        let max_results_string = max_results.to_string();
        let mut query_params = vec![
            ("part", "snippet"),
            ("playlistId", playlist_id),
            ("maxResults", max_results_string.as_str()),
        ];
        if let Some(token) = page_token {
            query_params.push(("pageToken", token));
        }

        let response = self.make_request("playlistItems", &query_params).await?;
        let url = response.url().to_string();
        let items: PlaylistItemListResponse =
            response
                .json()
                .await
                .map_err(|source| ProviderError::Decode { url, source })?;

        tracing::debug!(
            playlist_id,
            returned_items = items.items.len(),
            has_next_page = items.next_page_token.is_some(),
            "fetched playlist items"
        );

        Ok(items)
    }
}

/// Whether the configured channel identifier is a canonical channel ID rather
/// than a legacy username. Channel IDs are 24 characters starting with `UC`.
fn looks_like_channel_id(channel: &str) -> bool {
    channel.len() == 24 && channel.starts_with("UC")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_id_detection() {
        assert!(looks_like_channel_id("UC_x5XG1OV2P6uZZ5FSM9Ttw"));
        assert!(!looks_like_channel_id("GoogleDevelopers"));
        // right prefix, wrong length
        assert!(!looks_like_channel_id("UCshort"));
    }
}
