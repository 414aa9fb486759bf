//! YouTube Data API v3 client library.
//!
//! This module provides the read-only subset of the YouTube Data API v3 this
//! provider consumes: channel lookup, playlist listing, and playlist item
//! listing, all authenticated with a static API key.
//!
//! The three resources form a fixed-depth hierarchy that the catalog layer
//! reshapes into shows:
//!
//! - [`channels::Channel`]: the content owner; becomes the show itself (or the
//!   umbrella for per-playlist shows, depending on the presentation mode).
//! - [`playlists::Playlist`]: an ordered collection of videos; becomes one
//!   season.
//! - [`playlist_items::PlaylistItem`]: one video within a playlist; becomes
//!   one episode.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use youtube_catalog_provider::youtube_api::YouTubeClient;
//! use tokio_stream::StreamExt;
//!
//! # async fn example() -> Result<(), youtube_catalog_provider::ProviderError> {
//! let client = YouTubeClient::new(
//!     "api-key".into(),
//!     "https://www.googleapis.com/youtube/v3".into(),
//!     reqwest::Client::new(),
//! );
//!
//! let channel = client.list_channel("GoogleDevelopers").await?;
//! let playlists = client.list_playlists(&channel.id, 50, None).await?;
//! for playlist in &playlists.items {
//!     let mut items = std::pin::pin!(client.playlist_items(playlist.id.clone(), 50));
//!     while let Some(item) = items.next().await {
//!         println!("{}", item?.snippet.title);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod channels;
pub mod client;
pub mod playlist_items;
pub mod playlists;
pub mod types;

// Re-export main types for convenience
pub use client::YouTubeClient;
pub use types::{PageInfo, PagedStream, Thumbnail, ThumbnailSet};

pub use channels::{Channel, ChannelSnippet};
pub use playlist_items::{PlaylistItem, PlaylistItemSnippet, ResourceId};
pub use playlists::{Playlist, PlaylistContentDetails, PlaylistSnippet};
