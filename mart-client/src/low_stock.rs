//! Background low-stock poller
//!
//! Polls on a fixed interval while a token is present and raises a warning
//! for each product that has newly dropped to or below its threshold. An
//! unauthorized answer is dropped quietly; a signed-out operator should not
//! be nagged.

use crate::client::MartClient;
use crate::error::{ClientError, ClientResult};
use crate::notify::Notifier;
use crate::session::SessionHandle;
use async_trait::async_trait;
use shared::models::Product;
use std::collections::HashSet;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Where the watcher gets the current low-stock list from
#[async_trait]
pub trait LowStockSource: Send + Sync {
    async fn low_stock(&self) -> ClientResult<Vec<Product>>;
}

#[async_trait]
impl LowStockSource for MartClient {
    async fn low_stock(&self) -> ClientResult<Vec<Product>> {
        self.products().low_stock().await
    }
}

pub struct LowStockWatcher<S> {
    source: S,
    session: SessionHandle,
    notifier: Notifier,
    interval: Duration,
    /// Products reported low on the previous poll
    known: HashSet<String>,
}

impl<S: LowStockSource> LowStockWatcher<S> {
    pub fn new(source: S, session: SessionHandle, notifier: Notifier, interval: Duration) -> Self {
        Self {
            source,
            session,
            notifier,
            interval,
            known: HashSet::new(),
        }
    }

    /// One poll; returns the products that were newly reported
    pub async fn check(&mut self) -> Vec<Product> {
        if self.session.read().await.token.is_none() {
            tracing::trace!("no session, skipping low-stock check");
            self.known.clear();
            return Vec::new();
        }

        let products = match self.source.low_stock().await {
            Ok(products) => products,
            Err(ClientError::Unauthorized) => {
                tracing::debug!("low-stock check unauthorized, ignoring");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(error = %e, "low-stock check failed");
                return Vec::new();
            }
        };

        let fresh: Vec<Product> = products
            .iter()
            .filter(|p| !self.known.contains(&p.id))
            .cloned()
            .collect();
        self.known = products.into_iter().map(|p| p.id).collect();

        for product in &fresh {
            self.notifier.warning(format!(
                "Low stock: {} has only {} left",
                product.label(),
                product.stock
            ));
        }
        if !fresh.is_empty() {
            tracing::info!(count = fresh.len(), "new low-stock products");
        }
        fresh
    }

    /// Poll until `shutdown` fires; the first check runs immediately
    pub async fn run(mut self, shutdown: CancellationToken) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracing::info!(interval_secs = self.interval.as_secs(), "low-stock watcher started");

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    tracing::info!("low-stock watcher stopped");
                    break;
                }
                _ = ticker.tick() => {
                    self.check().await;
                }
            }
        }
    }
}
