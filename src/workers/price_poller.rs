use log::{error, info, warn};
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::{
    sync::RwLock,
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};

use crate::{
    components::prices::{PriceFetchError, PriceFetcher},
    config::settings::AppConfig,
    models::prices::Prices,
};

/// Keeps `Prices` fresh by polling the price endpoint on a fixed interval.
///
/// Lifecycle is `new` → `start` → `stop` → `dispose`. Stopping only cancels the
/// schedule: a fetch already in flight still completes and is applied. After
/// `dispose` any late result is dropped.
pub struct PricePoller {
    prices: Arc<RwLock<Prices>>,
    fetcher: PriceFetcher,
    period: Duration,
    in_flight: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl PricePoller {
    pub fn new(fetcher: PriceFetcher, period: Duration) -> Self {
        PricePoller {
            prices: Arc::new(RwLock::new(Prices::new())),
            fetcher,
            period,
            in_flight: Arc::new(AtomicBool::new(false)),
            task: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, PriceFetchError> {
        let fetcher = PriceFetcher::new(&config.prices_url, config.http_timeout)?;

        Ok(Self::new(fetcher, config.poll_interval))
    }

    /// Shared read handle for consumers.
    pub fn prices(&self) -> Arc<RwLock<Prices>> {
        Arc::clone(&self.prices)
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Fetches immediately, then once per period. No-op if already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }

        let prices = Arc::clone(&self.prices);
        let fetcher = self.fetcher.clone();
        let in_flight = Arc::clone(&self.in_flight);
        let period = self.period;

        info!(
            "price poller started: {} every {:?}",
            fetcher.url(),
            period
        );

        self.task = Some(tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;

                if in_flight.swap(true, Ordering::AcqRel) {
                    warn!("price fetch still in flight, skipping tick");
                    continue;
                }

                let prices = Arc::clone(&prices);
                let fetcher = fetcher.clone();
                let in_flight = Arc::clone(&in_flight);

                // Detached so that aborting the schedule never aborts a fetch.
                tokio::spawn(async move {
                    refresh_prices(&prices, &fetcher).await;
                    in_flight.store(false, Ordering::Release);
                });
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            info!("price poller stopped");
        }
    }

    /// One fetch outside the schedule.
    pub async fn refresh(&self) {
        refresh_prices(&self.prices, &self.fetcher).await;
    }

    pub async fn dispose(mut self) {
        self.stop();
        self.prices.write().await.dispose();
    }
}

impl Drop for PricePoller {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn refresh_prices(prices: &RwLock<Prices>, fetcher: &PriceFetcher) {
    let generation = prices.write().await.begin_fetch();

    match fetcher.fetch().await {
        Ok(cache) => {
            prices.write().await.apply(generation, cache);
        }
        Err(e) => {
            error!("fetch prices error: {:?}", e);
            prices.write().await.fail(generation, e.to_string());
        }
    }
}
