//! Error taxonomy for the provider.

/// Errors surfaced by the provider and its YouTube API client.
///
/// Upstream failures (transport, non-success status, undecodable body) are
/// tolerated by [`crate::provider::CatalogProvider::fetch`], which logs them and
/// resolves to an empty page instead of propagating. Everything else is a caller
/// or configuration contract violation and is always surfaced.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The HTTP request to the YouTube API could not be sent or completed.
    #[error("upstream request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The YouTube API answered with a non-success status code.
    #[error("upstream request to {url} failed with status {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The YouTube API answered with a body that does not match the expected
    /// response shape.
    #[error("malformed upstream response from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The channel lookup matched no channel at all.
    #[error("no channel found for {channel:?}")]
    MissingChannel { channel: String },

    /// A page was requested whose continuation token has not been observed yet.
    ///
    /// Pages must be traversed in order; the token for page `n` only becomes
    /// known once page `n - 1` has been fetched.
    #[error("page {requested} requested out of order ({known_pages} pages known)")]
    OutOfOrderPage { requested: usize, known_pages: usize },

    /// The provider configuration is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ProviderError {
    /// Whether this error originates from the upstream API rather than from a
    /// caller or configuration contract violation.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            ProviderError::Transport { .. }
                | ProviderError::Status { .. }
                | ProviderError::Decode { .. }
                | ProviderError::MissingChannel { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_classification() {
        assert!(
            ProviderError::MissingChannel {
                channel: "nosuch".into(),
            }
            .is_upstream()
        );
        assert!(
            !ProviderError::OutOfOrderPage {
                requested: 3,
                known_pages: 1,
            }
            .is_upstream()
        );
        assert!(!ProviderError::Config("bad".into()).is_upstream());
    }

    #[test]
    fn out_of_order_message_names_page_and_table() {
        let err = ProviderError::OutOfOrderPage {
            requested: 4,
            known_pages: 2,
        };
        assert_eq!(
            err.to_string(),
            "page 4 requested out of order (2 pages known)"
        );
    }
}
