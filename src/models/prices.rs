use log::{debug, info, warn};

use super::price::PriceCache;

/// Shared price state. Written only by the poller, read by everyone else.
#[derive(Debug, Default)]
pub struct Prices {
    cache: PriceCache,
    error: Option<String>,
    pending: usize,
    issued: u64,
    applied: u64,
    failed: u64,
    disposed: bool,
    app_name: &'static str,
}

impl Prices {
    pub fn new() -> Self {
        Prices {
            app_name: "PRICES",
            ..Default::default()
        }
    }

    pub fn cache(&self) -> &PriceCache {
        &self.cache
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn loading(&self) -> bool {
        self.pending > 0
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn exchange_rate(&self, from: &str, to: &str) -> Option<f64> {
        self.cache.exchange_rate(from, to)
    }

    pub fn available_currencies(&self) -> Vec<String> {
        self.cache.available_currencies()
    }

    /// Registers a new fetch and returns its generation.
    pub(crate) fn begin_fetch(&mut self) -> u64 {
        self.issued += 1;
        self.pending += 1;

        debug!("{}: fetch #{} started", self.app_name, self.issued);

        self.issued
    }

    /// Swaps in `cache` unless a newer fetch already landed. Returns whether it was applied.
    pub(crate) fn apply(&mut self, generation: u64, cache: PriceCache) -> bool {
        self.finish_fetch();

        if self.disposed {
            debug!("{}: dropping fetch #{} after dispose", self.app_name, generation);

            return false;
        }

        if generation <= self.applied {
            warn!(
                "{}: stale fetch #{} ignored, #{} already applied",
                self.app_name, generation, self.applied
            );

            return false;
        }

        self.applied = generation;
        self.cache = cache;

        if generation > self.failed {
            self.error = None;
        }

        info!(
            "{}: updated quotes {} (fetch #{})",
            self.app_name,
            self.cache.len(),
            generation
        );

        true
    }

    /// Records a failed fetch. The cache is never touched.
    pub(crate) fn fail(&mut self, generation: u64, message: String) -> bool {
        self.finish_fetch();

        if self.disposed || generation <= self.applied || generation <= self.failed {
            return false;
        }

        self.failed = generation;
        self.error = Some(message);

        true
    }

    pub(crate) fn dispose(&mut self) {
        self.disposed = true;
    }

    fn finish_fetch(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::price::PriceInfo;

    fn cache_of(pairs: &[(&str, f64)]) -> PriceCache {
        pairs
            .iter()
            .map(|(currency, price)| PriceInfo {
                currency: currency.to_string(),
                price: *price,
                date: "2023-08-29T07:10:40.000Z".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_apply_replaces_whole_cache() {
        let mut prices = Prices::new();

        let first = prices.begin_fetch();
        assert!(prices.apply(first, cache_of(&[("ETH", 1645.9), ("USD", 1.0)])));

        let second = prices.begin_fetch();
        assert!(prices.apply(second, cache_of(&[("ATOM", 7.18)])));

        assert_eq!(prices.available_currencies(), vec!["ATOM"]);
        assert!(prices.cache().get("ETH").is_none());
    }

    #[test]
    fn test_loading_tracks_outstanding_fetches() {
        let mut prices = Prices::new();
        assert!(!prices.loading());

        let a = prices.begin_fetch();
        let b = prices.begin_fetch();
        assert!(prices.loading());

        prices.fail(a, "boom".to_string());
        assert!(prices.loading());

        prices.apply(b, cache_of(&[("USD", 1.0)]));
        assert!(!prices.loading());
    }

    #[test]
    fn test_stale_success_does_not_clobber_newer() {
        let mut prices = Prices::new();

        let older = prices.begin_fetch();
        let newer = prices.begin_fetch();

        assert!(prices.apply(newer, cache_of(&[("USD", 1.0)])));
        assert!(!prices.apply(older, cache_of(&[("OLD", 9.0)])));

        assert_eq!(prices.available_currencies(), vec!["USD"]);
        assert!(!prices.loading());
    }

    #[test]
    fn test_stale_failure_keeps_clean_error() {
        let mut prices = Prices::new();

        let older = prices.begin_fetch();
        let newer = prices.begin_fetch();

        prices.apply(newer, cache_of(&[("USD", 1.0)]));

        assert!(!prices.fail(older, "timeout".to_string()));
        assert_eq!(prices.error(), None);
    }

    #[test]
    fn test_newest_failure_message_wins() {
        let mut prices = Prices::new();

        let older = prices.begin_fetch();
        let newer = prices.begin_fetch();

        assert!(prices.fail(newer, "newer".to_string()));
        assert!(!prices.fail(older, "older".to_string()));

        assert_eq!(prices.error(), Some("newer"));
        assert!(!prices.loading());
    }

    #[test]
    fn test_older_success_keeps_newer_failure_message() {
        let mut prices = Prices::new();

        let older = prices.begin_fetch();
        let newer = prices.begin_fetch();

        prices.fail(newer, "Failed to fetch prices: 502 Bad Gateway".to_string());
        assert!(prices.apply(older, cache_of(&[("USD", 1.0)])));

        assert_eq!(prices.cache().price("USD"), Some(1.0));
        assert_eq!(prices.error(), Some("Failed to fetch prices: 502 Bad Gateway"));
    }

    #[test]
    fn test_failure_keeps_cache_and_success_clears_error() {
        let mut prices = Prices::new();

        let first = prices.begin_fetch();
        prices.apply(first, cache_of(&[("USD", 1.0)]));

        let second = prices.begin_fetch();
        assert!(prices.fail(second, "invalid price response".to_string()));
        assert_eq!(prices.error(), Some("invalid price response"));
        assert_eq!(prices.cache().price("USD"), Some(1.0));

        let third = prices.begin_fetch();
        prices.apply(third, cache_of(&[("USD", 1.0)]));
        assert_eq!(prices.error(), None);
    }

    #[test]
    fn test_results_after_dispose_are_dropped() {
        let mut prices = Prices::new();

        let generation = prices.begin_fetch();
        prices.dispose();

        assert!(!prices.apply(generation, cache_of(&[("USD", 1.0)])));
        assert!(prices.cache().is_empty());
        assert!(!prices.loading());
        assert!(prices.is_disposed());
    }
}
