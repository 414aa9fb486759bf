//! Catalog provider sourcing shows from a YouTube channel.
//!
//! A media-browsing host application renders catalogs as a fixed
//! show → seasons → episodes hierarchy. This crate adapts a YouTube channel
//! into that shape: the channel's playlists become seasons (or, in the
//! alternate presentation mode, standalone shows) and each playlist's videos
//! become episodes.
//!
//! The interesting part is the normalization pipeline in [`assemble`]:
//! paginated, partially-populated upstream records are reshaped into complete
//! canonical documents with deterministic thumbnail fallback, regex-based
//! playlist selection, and positional season/episode numbering. The
//! [`provider::YouTubeProvider`] wires that pipeline to the
//! [`youtube_api::YouTubeClient`] and exposes the two operations the host
//! calls: a paged [`provider::CatalogProvider::fetch`] for list views and a
//! [`provider::CatalogProvider::detail`] merge for single-show views.

pub mod assemble;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod pages;
pub mod provider;
pub mod youtube_api;

pub use catalog::{FetchFilters, FetchPage, ShowDocument};
pub use config::{PresentationMode, ProviderConfig};
pub use error::ProviderError;
pub use provider::{CatalogProvider, YouTubeProvider};
