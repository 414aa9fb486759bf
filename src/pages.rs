//! Continuation-token bookkeeping for paged catalog fetches.

use crate::error::ProviderError;

/// Records the opaque continuation token of every playlist page observed so
/// far, so the host can re-request a specific page by index.
///
/// Index 0 is reserved for "no token" (the first page); the token recorded at
/// index `n` retrieves page `n`. The table is append-only and grows as pages
/// are traversed in order; it never shrinks. A token identical to the most
/// recently recorded one is not recorded again, which de-duplicates adjacent
/// pages that report the same end-of-list token.
#[derive(Debug)]
pub struct PageTokenTable {
    tokens: Vec<Option<String>>,
}

impl PageTokenTable {
    pub fn new() -> Self {
        Self {
            tokens: vec![None],
        }
    }

    /// Number of pages with a known token (including the tokenless first page).
    pub fn known_pages(&self) -> usize {
        self.tokens.len()
    }

    /// Records the continuation token reported by a freshly fetched page.
    ///
    /// `None` means the upstream reported no further page; that is recorded
    /// too only when it differs from the latest entry.
    pub fn record(&mut self, next_token: Option<String>) {
        let last = self
            .tokens
            .last()
            .expect("table always holds the first-page entry");
        if *last != next_token {
            self.tokens.push(next_token);
        }
    }

    /// The token needed to request the given page, or an error when that page
    /// has not been reached yet.
    ///
    /// Pages must be traversed in order: the token for page `n` is only known
    /// once page `n - 1` has been fetched and recorded.
    pub fn token_for(&self, page: usize) -> Result<Option<&str>, ProviderError> {
        match self.tokens.get(page) {
            Some(token) => Ok(token.as_deref()),
            None => Err(ProviderError::OutOfOrderPage {
                requested: page,
                known_pages: self.tokens.len(),
            }),
        }
    }
}

impl Default for PageTokenTable {
    fn default() -> Self {
        Self::new()
    }
}
