//! The host-facing provider: catalog fetch and detail operations.

use crate::assemble;
use crate::catalog::{FetchFilters, FetchPage, ShowDocument};
use crate::config::{PresentationMode, ProviderConfig};
use crate::error::ProviderError;
use crate::filter::{FilterRule, drop_empty_playlists, filter_playlists};
use crate::pages::PageTokenTable;
use crate::youtube_api::{Channel, Playlist, PlaylistItem, YouTubeClient};
use async_trait::async_trait;
use std::sync::Mutex;
use tokio::sync::OnceCell;
use tokio_stream::StreamExt;
use tracing::instrument;

/// The two operations a catalog source must support for the host application.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetches one page of summary documents for list views.
    ///
    /// Transient upstream failures resolve to an empty page rather than an
    /// error, so the host keeps rendering; requesting a page whose
    /// continuation token has not been observed yet is a caller contract
    /// violation and is rejected.
    async fn fetch(&self, filters: FetchFilters) -> Result<FetchPage, ProviderError>;

    /// Merges full episode data into a previously fetched summary document.
    ///
    /// Fields the caller already holds are preserved; only the season
    /// hierarchy and its derived count are replaced.
    async fn detail(
        &self,
        id: &str,
        previous: ShowDocument,
    ) -> Result<ShowDocument, ProviderError>;
}

/// Catalog provider backed by one YouTube channel.
///
/// The channel record is fetched once per provider lifetime: the first
/// operation triggers the lookup and every caller, concurrent or sequential,
/// observes the same resolved value. Continuation tokens of observed playlist
/// pages accumulate in an append-only table so the host can page forward.
#[derive(Debug)]
pub struct YouTubeProvider {
    config: ProviderConfig,
    rules: Vec<FilterRule>,
    yt: YouTubeClient,
    channel: OnceCell<Channel>,
    page_tokens: Mutex<PageTokenTable>,
}

impl YouTubeProvider {
    /// Builds a provider from validated configuration.
    ///
    /// Filter patterns are compiled here; a malformed pattern, empty channel,
    /// or out-of-range page size fails construction with
    /// [`ProviderError::Config`].
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let rules = config.compile_filters()?;
        let yt = YouTubeClient::new(
            config.api_key.clone(),
            config.base_url.clone(),
            reqwest::Client::new(),
        );

        tracing::debug!(
            channel = config.channel,
            mode = ?config.mode,
            filter_rules = rules.len(),
            "constructed provider"
        );

        Ok(Self {
            config,
            rules,
            yt,
            channel: OnceCell::new(),
            page_tokens: Mutex::new(PageTokenTable::new()),
        })
    }

    /// The memoized channel record.
    async fn channel(&self) -> Result<&Channel, ProviderError> {
        self.channel
            .get_or_try_init(|| self.yt.list_channel(&self.config.channel))
            .await
    }

    /// Fetches, filters, and records one page of the channel's playlists.
    ///
    /// Returns the surviving playlists plus whether the upstream reported a
    /// further page. The continuation token check happens before any network
    /// traffic, so an out-of-order page request fails fast.
    async fn playlists_page(
        &self,
        filters: &FetchFilters,
    ) -> Result<(Vec<Playlist>, bool), ProviderError> {
        let page = filters.page.unwrap_or(0);
        let token = {
            let table = self.page_tokens.lock().expect("page token table poisoned");
            table.token_for(page)?.map(str::to_string)
        };

        let channel = self.channel().await?;
        let max_results = filters
            .limit
            .unwrap_or(self.config.max_results)
            .clamp(1, 50);

        let response = self
            .yt
            .list_playlists(&channel.id, max_results, token.as_deref())
            .await?;
        let has_more = response.next_page_token.is_some();

        {
            let mut table = self.page_tokens.lock().expect("page token table poisoned");
            table.record(response.next_page_token);
        }

        let playlists = filter_playlists(drop_empty_playlists(response.items.into()), &self.rules);
        Ok((playlists, has_more))
    }

    /// Drains every item of one playlist across however many pages it spans.
    async fn season_items(&self, playlist_id: String) -> Result<Vec<PlaylistItem>, ProviderError> {
        let stream = self.yt.playlist_items(playlist_id, self.config.max_results);
        let mut stream = std::pin::pin!(stream);

        let mut items = Vec::new();
        while let Some(item) = stream.next().await {
            items.push(item?);
        }
        Ok(items)
    }

    async fn fetch_inner(&self, filters: &FetchFilters) -> Result<FetchPage, ProviderError> {
        let (playlists, has_more) = self.playlists_page(filters).await?;
        let channel = self.channel().await?;

        Ok(match self.config.mode {
            PresentationMode::Seasons => FetchPage {
                results: vec![assemble::assemble_summary(channel, &playlists)],
                // one document describes the whole channel, there is nothing
                // further to page to
                has_more: false,
            },
            PresentationMode::Shows => FetchPage {
                results: playlists
                    .iter()
                    .map(|playlist| assemble::playlist_as_show_summary(channel, playlist))
                    .collect(),
                has_more,
            },
        })
    }
}

#[async_trait]
impl CatalogProvider for YouTubeProvider {
    #[instrument(skip(self))]
    async fn fetch(&self, filters: FetchFilters) -> Result<FetchPage, ProviderError> {
        match self.fetch_inner(&filters).await {
            Ok(page) => {
                tracing::debug!(
                    results = page.results.len(),
                    has_more = page.has_more,
                    "fetched catalog page"
                );
                Ok(page)
            }
            Err(err) if err.is_upstream() => {
                tracing::warn!(error = %err, "upstream failure, returning empty catalog page");
                Ok(FetchPage::empty())
            }
            Err(err) => Err(err),
        }
    }

    #[instrument(skip(self, previous))]
    async fn detail(
        &self,
        id: &str,
        previous: ShowDocument,
    ) -> Result<ShowDocument, ProviderError> {
        match self.config.mode {
            PresentationMode::Shows => {
                // the document *is* one playlist; its items become the single
                // season's episodes
                let items = self.season_items(id.to_string()).await?;
                let season =
                    assemble::season_from_previous(&previous, assemble::map_episodes(0, &items));
                Ok(assemble::merge_detail(previous, vec![season]))
            }
            PresentationMode::Seasons => {
                let (playlists, _) = self.playlists_page(&FetchFilters::default()).await?;
                let channel = self.channel().await?;

                // every season's items fetch concurrently; one failed branch
                // fails the whole operation
                let fetches = playlists
                    .iter()
                    .map(|playlist| self.season_items(playlist.id.clone()));
                let all_items = futures::future::try_join_all(fetches).await?;

                let pairs: Vec<(Playlist, Vec<PlaylistItem>)> =
                    playlists.into_iter().zip(all_items).collect();
                let fresh = assemble::assemble_detail(channel, &pairs);
                Ok(assemble::merge_detail(previous, fresh.seasons))
            }
        }
    }
}
