//! Bookkeeping for the enrich-all placeholder.
//!
//! Enrich-all does no work on records. Each trigger is issued a token and the
//! delayed completion carries that token back; completions whose token is no
//! longer outstanding are dropped.

/// Identity of one enrich-all run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnrichmentToken(u64);

/// Tokens of enrich-all runs that have started but not completed.
#[derive(Debug, Clone, Default)]
pub struct EnrichmentRuns {
    next_token: u64,
    outstanding: Vec<EnrichmentToken>,
}

impl EnrichmentRuns {
    /// Issues a fresh token and records it as outstanding.
    pub fn start(&mut self) -> EnrichmentToken {
        let token = EnrichmentToken(self.next_token);
        self.next_token = self.next_token.saturating_add(1);
        self.outstanding.push(token);
        token
    }

    /// Marks `token` as finished. Returns false if it was not outstanding.
    pub fn finish(&mut self, token: EnrichmentToken) -> bool {
        let before = self.outstanding.len();
        self.outstanding.retain(|candidate| *candidate != token);
        self.outstanding.len() != before
    }

    /// Returns true if any run has not completed yet.
    #[must_use]
    pub fn in_progress(&self) -> bool {
        !self.outstanding.is_empty()
    }
}
