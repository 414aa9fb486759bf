//! Shared types and streaming infrastructure for the YouTube API client.

use crate::error::ProviderError;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context as TaskContext, Poll};
use tokio_stream::Stream;

type OneFuturePage<'a, F, T> =
    Pin<Box<dyn Future<Output = Result<(F, (VecDeque<T>, Option<String>)), ProviderError>> + 'a + Send>>;

/// A paginated stream that automatically fetches subsequent pages from a YouTube API list endpoint.
///
/// This stream yields items one by one, automatically fetching the next page when the current
/// page is exhausted. Only supports forward pagination (no previous page support).
pub struct PagedStream<'a, T, F> {
    /// Current batch of items from the most recent API response
    current_items: VecDeque<T>,
    /// Future representing the currently pending API request, if any
    pending_request: Option<OneFuturePage<'a, F, T>>,
    /// Whether we've reached the end of all available data
    is_done: bool,
}

impl<'a, T, F> PagedStream<'a, T, F> {
    /// Create a new PagedStream from the first page of results.
    pub fn new<Fut>(fetcher: F) -> Self
    where
        F: Fn(Option<String>) -> Fut,
        F: Send + 'a,
        Fut: Future<Output = Result<(VecDeque<T>, Option<String>), ProviderError>> + Send + 'a,
    {
        let first_page = async move {
            let results = fetcher(None).await?;
            Ok((fetcher, results))
        };
        Self {
            pending_request: Some(Box::pin(first_page)),
            current_items: VecDeque::new(),
            is_done: false,
        }
    }
}

impl<'a, T: Unpin, F> Unpin for PagedStream<'a, T, F> {}

impl<'a, T: Unpin, F, Fut> Stream for PagedStream<'a, T, F>
where
    F: Fn(Option<String>) -> Fut,
    F: Send + 'a,
    Fut: Future<Output = Result<(VecDeque<T>, Option<String>), ProviderError>> + Send + 'a,
{
    type Item = Result<T, ProviderError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut TaskContext<'_>) -> Poll<Option<Self::Item>> {
        loop {
            // If we have items in the current batch, return the next one
            if let Some(item) = self.current_items.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            // If we're done (no more pages), return None
            if self.is_done {
                return Poll::Ready(None);
            }

            // If we have a pending request, poll it
            if let Some(pending) = self.pending_request.as_mut() {
                match pending.as_mut().poll(cx) {
                    Poll::Ready(Ok((fetcher, (items, next_token)))) => {
                        // We got the next page
                        self.current_items.extend(items);

                        if let Some(next_token) = next_token {
                            // Set up the future for the next page
                            // (but don't poll it yet)
                            self.pending_request = Some(Box::pin(async move {
                                let results = fetcher(Some(next_token)).await?;
                                Ok((fetcher, results))
                            }));
                        } else {
                            // If no next token, we're done
                            self.is_done = true;
                            self.pending_request = None;
                        }

                        // Continue the loop to try yielding an item
                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        // Error fetching next page
                        self.pending_request = None;
                        self.is_done = true;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => {
                        // Still waiting for the response
                        return Poll::Pending;
                    }
                }
            } else {
                // No pending request and no next page token means we're done
                self.is_done = true;
                return Poll::Ready(None);
            }
        }
    }
}

/// Paging details for lists of resources.
///
/// Includes the total number of items available and the number of resources
/// returned in a single page response.
///
/// See: <https://developers.google.com/youtube/v3/docs/pageInfo>
#[derive(Debug, Serialize, Deserialize)]
pub struct PageInfo {
    /// The total number of results in the result set.
    #[serde(rename = "totalResults")]
    pub total_results: u32,
    /// The number of results included in the API response.
    #[serde(rename = "resultsPerPage")]
    pub results_per_page: u32,
}

/// A single thumbnail image.
///
/// See: <https://developers.google.com/youtube/v3/docs/thumbnails>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thumbnail {
    /// The image's URL.
    pub url: String,
    /// The image's width, in pixels.
    pub width: Option<u32>,
    /// The image's height, in pixels.
    pub height: Option<u32>,
}

/// The map of thumbnail images associated with a resource.
///
/// The API returns up to five named sizes per resource; any of them may be
/// absent depending on the source material.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThumbnailSet {
    /// The default thumbnail image (120x90 for videos, 88x88 for channels).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Thumbnail>,
    /// A higher resolution version of the thumbnail image (320x180 for videos).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<Thumbnail>,
    /// A high resolution version of the thumbnail image (480x360 for videos).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Thumbnail>,
    /// An even higher resolution version (640x480 for videos).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<Thumbnail>,
    /// The highest resolution version (1280x720 for videos).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxres: Option<Thumbnail>,
}

impl ThumbnailSet {
    /// Returns the URL of the best available resolution.
    ///
    /// Resolutions are tried in a fixed priority order, highest first; the
    /// first slot present wins. Returns `None` when no slot is populated.
    pub fn best(&self) -> Option<&str> {
        [
            &self.maxres,
            &self.high,
            &self.standard,
            &self.medium,
            &self.default,
        ]
        .into_iter()
        .find_map(|slot| slot.as_ref().map(|t| t.url.as_str()))
    }
}

/// Best-thumbnail selection over an optional set, as stored on upstream
/// snippets. Total: absent input selects nothing.
pub fn best_thumbnail(thumbnails: Option<&ThumbnailSet>) -> Option<&str> {
    thumbnails.and_then(ThumbnailSet::best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio_stream::StreamExt;

    fn thumb(url: &str) -> Option<Thumbnail> {
        Some(Thumbnail {
            url: url.to_string(),
            width: None,
            height: None,
        })
    }

    #[test]
    fn best_prefers_maxres_over_default() {
        let set = ThumbnailSet {
            default: thumb("B"),
            maxres: thumb("A"),
            ..ThumbnailSet::default()
        };
        assert_eq!(set.best(), Some("A"));
    }

    #[test]
    fn best_falls_back_to_default() {
        let set = ThumbnailSet {
            default: thumb("B"),
            ..ThumbnailSet::default()
        };
        assert_eq!(set.best(), Some("B"));
    }

    #[test]
    fn best_of_empty_set_is_none() {
        assert_eq!(ThumbnailSet::default().best(), None);
        assert_eq!(best_thumbnail(None), None);
    }

    #[test]
    fn best_respects_full_priority_order() {
        let set = ThumbnailSet {
            default: thumb("d"),
            medium: thumb("m"),
            high: thumb("h"),
            standard: thumb("s"),
            maxres: None,
        };
        assert_eq!(set.best(), Some("h"));
    }

    #[test]
    fn thumbnail_set_deserializes_from_api_shape() {
        let json = r#"{
            "default": { "url": "https://i.ytimg.com/vi/x/default.jpg", "width": 120, "height": 90 },
            "high": { "url": "https://i.ytimg.com/vi/x/hqdefault.jpg", "width": 480, "height": 360 }
        }"#;
        let set: ThumbnailSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.best(), Some("https://i.ytimg.com/vi/x/hqdefault.jpg"));
        assert_eq!(set.default.unwrap().width, Some(120));
    }

    #[tokio::test]
    async fn paged_stream_drains_all_pages_in_order() {
        let stream = PagedStream::new(|token: Option<String>| async move {
            match token.as_deref() {
                None => Ok::<_, ProviderError>((VecDeque::from([1, 2]), Some("next".to_string()))),
                Some("next") => Ok((VecDeque::from([3]), None)),
                Some(other) => panic!("unexpected token {other}"),
            }
        });
        let mut stream = std::pin::pin!(stream);

        let mut seen = Vec::new();
        while let Some(item) = stream.next().await {
            seen.push(item.unwrap());
        }
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn paged_stream_surfaces_page_errors_and_stops() {
        let stream = PagedStream::new(|token: Option<String>| async move {
            match token {
                None => Ok((VecDeque::from(["a"]), Some("boom".to_string()))),
                Some(_) => Err(ProviderError::MissingChannel {
                    channel: "gone".into(),
                }),
            }
        });
        let mut stream = std::pin::pin!(stream);

        assert_eq!(stream.next().await.unwrap().unwrap(), "a");
        assert!(stream.next().await.unwrap().is_err());
        assert!(stream.next().await.is_none());
    }
}
