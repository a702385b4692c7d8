// src/services/alphavantage.rs
use async_trait::async_trait;
use csv::Reader;
use log::{info, warn};
use reqwest::Client;
use std::fmt;

use crate::models::{FetchResult, SearchMatch, TimeSeriesRow};
use crate::services::cache::Fetch;

const BASE_URL: &str = "https://www.alphavantage.co/query";

/// Why a fetch could not produce a usable `FetchResult`.
///
/// `Malformed` never escapes `fetch`: a daily series that does not parse
/// is the API's way of saying "unknown symbol" and triggers the
/// symbol-search fallback instead.
#[derive(Debug)]
pub enum FetchError {
    Network(reqwest::Error),
    Malformed(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetchError::Network(e) => write!(f, "network error: {}", e),
            FetchError::Malformed(msg) => write!(f, "malformed response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Alpha Vantage client for the daily time-series and symbol-search
/// endpoints, both consumed as CSV.
pub struct AlphaVantage {
    client: Client,
    api_key: String,
}

impl AlphaVantage {
    /// The key is not validated here; a missing or bad key surfaces as an
    /// authorization error from the remote service.
    pub fn new(api_key: String) -> Self {
        AlphaVantage {
            client: Client::new(),
            api_key,
        }
    }

    async fn query(&self, function: &str, param: &str, value: &str) -> Result<String, FetchError> {
        info!("Fetching {} for {}={}", function, param, value);
        let resp = self
            .client
            .get(BASE_URL)
            .query(&[
                ("function", function),
                (param, value),
                ("apikey", self.api_key.as_str()),
                ("outputsize", "full"),
                ("datatype", "csv"),
            ])
            .send()
            .await
            .map_err(FetchError::Network)?
            .error_for_status()
            .map_err(FetchError::Network)?;
        resp.text().await.map_err(FetchError::Network)
    }
}

#[async_trait]
impl Fetch for AlphaVantage {
    async fn fetch(&self, symbol: &str) -> Result<FetchResult, FetchError> {
        if symbol.is_empty() {
            return Ok(FetchResult::Empty);
        }

        let body = self.query("TIME_SERIES_DAILY", "symbol", symbol).await?;
        match parse_time_series(&body) {
            Ok(rows) => {
                info!("Parsed {} daily rows for {}", rows.len(), symbol);
                Ok(FetchResult::TimeSeries(rows))
            }
            Err(e) => {
                // Invalid symbols come back as a non-CSV body, not an
                // HTTP error. Fall back to the search endpoint.
                warn!(
                    "Daily series for '{}' did not parse ({}), trying symbol search",
                    symbol, e
                );
                let body = self.query("SYMBOL_SEARCH", "keywords", symbol).await?;
                let matches = parse_search_matches(&body).unwrap_or_default();
                info!("Symbol search for '{}' yielded {} matches", symbol, matches.len());
                Ok(FetchResult::SearchMatches(matches))
            }
        }
    }
}

/// Parse a daily time-series CSV body into date-ascending rows.
pub fn parse_time_series(body: &str) -> Result<Vec<TimeSeriesRow>, FetchError> {
    let mut rdr = Reader::from_reader(body.as_bytes());

    let headers = rdr
        .headers()
        .map_err(|e| FetchError::Malformed(e.to_string()))?;
    if !headers.iter().any(|h| h.trim() == "timestamp")
        || !headers.iter().any(|h| h.trim() == "close")
    {
        return Err(FetchError::Malformed(
            "no 'timestamp'/'close' columns".to_string(),
        ));
    }

    let mut rows = rdr
        .deserialize()
        .collect::<Result<Vec<TimeSeriesRow>, _>>()
        .map_err(|e| FetchError::Malformed(e.to_string()))?;

    // The endpoint returns newest-first.
    rows.sort_by_key(|r| r.date);
    Ok(rows)
}

/// Parse a symbol-search CSV body into matches, preserving row order.
pub fn parse_search_matches(body: &str) -> Result<Vec<SearchMatch>, FetchError> {
    let mut rdr = Reader::from_reader(body.as_bytes());

    let headers = rdr
        .headers()
        .map_err(|e| FetchError::Malformed(e.to_string()))?
        .clone();
    let idx_symbol = headers
        .iter()
        .position(|h| h.trim() == "symbol")
        .ok_or_else(|| FetchError::Malformed("no 'symbol' column".to_string()))?;
    let idx_name = headers
        .iter()
        .position(|h| h.trim() == "name")
        .ok_or_else(|| FetchError::Malformed("no 'name' column".to_string()))?;

    let mut matches = Vec::new();
    for record in rdr.records() {
        let row = record.map_err(|e| FetchError::Malformed(e.to_string()))?;
        let symbol = row
            .get(idx_symbol)
            .ok_or_else(|| FetchError::Malformed("missing 'symbol' field".to_string()))?;
        let name = row
            .get(idx_name)
            .ok_or_else(|| FetchError::Malformed("missing 'name' field".to_string()))?;
        matches.push(SearchMatch {
            symbol: symbol.trim().to_string(),
            name: name.trim().to_string(),
        });
    }
    Ok(matches)
}
