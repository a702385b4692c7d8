// src/services/cache.rs
use async_trait::async_trait;
use log::{debug, info};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::models::FetchResult;
use crate::services::alphavantage::FetchError;

/// Anything that can resolve a ticker symbol to a `FetchResult`.
/// Implemented by the Alpha Vantage client; tests substitute stubs.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, symbol: &str) -> Result<FetchResult, FetchError>;
}

/// Process-wide memoization of fetch results, keyed by the exact symbol
/// string. No eviction and no TTL: an entry lives until process exit.
pub struct CachedFetcher {
    source: Arc<dyn Fetch>,
    entries: Mutex<HashMap<String, FetchResult>>,
}

impl CachedFetcher {
    pub fn new(source: Arc<dyn Fetch>) -> Self {
        CachedFetcher {
            source,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached result for `symbol`, fetching on a miss. Only
    /// successful fetches are stored; a failure is returned as-is and
    /// the next identical request retries.
    ///
    /// The lock is not held across the network call, so two simultaneous
    /// first requests for one symbol may both fetch. The fetch is
    /// idempotent and the duplicate work is harmless.
    pub async fn get_or_fetch(&self, symbol: &str) -> Result<FetchResult, FetchError> {
        if symbol.is_empty() {
            return Ok(FetchResult::Empty);
        }

        if let Some(hit) = self.entries.lock().await.get(symbol) {
            debug!("Cache hit for '{}'", symbol);
            return Ok(hit.clone());
        }

        let fresh = self.source.fetch(symbol).await?;
        info!("Caching fetch result for '{}'", symbol);
        self.entries
            .lock()
            .await
            .insert(symbol.to_string(), fresh.clone());
        Ok(fresh)
    }
}
