// src/handlers/dashboard.rs
use log::{error, info};
use serde::Deserialize;
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;

use crate::models::{DashboardView, FetchResult, SearchMatch, TimeSeriesRow};
use crate::services::cache::CachedFetcher;
use crate::services::chart;
use crate::services::timeframe::{filter_rows, range_for};

use super::error::ApiError;

/// Fixed fallback offered when no series is loaded; with data, the
/// choices come from the series' own min/max year instead.
const DEFAULT_YEARS: std::ops::Range<i32> = 2000..2020;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub symbol: String,
    pub year: i32,
    pub month: u32,
}

/// One full pipeline run: cache-or-fetch, filter, shape for display.
pub async fn get_dashboard(
    query: DashboardQuery,
    cache: Arc<CachedFetcher>,
) -> Result<Json, Rejection> {
    info!(
        "Dashboard request: symbol='{}' year={} month={}",
        query.symbol, query.year, query.month
    );

    let result = cache.get_or_fetch(&query.symbol).await.map_err(|e| {
        error!("Fetch for '{}' failed: {}", query.symbol, e);
        warp::reject::custom(ApiError::upstream(e.to_string()))
    })?;

    let view = build_view(&result, query.year, query.month).ok_or_else(|| {
        warp::reject::custom(ApiError::bad_request(format!(
            "no such month: {}-{}",
            query.year, query.month
        )))
    })?;

    Ok(warp::reply::json(&view))
}

/// Shape a fetch result into one of the three display states.
pub fn build_view(result: &FetchResult, year: i32, month: u32) -> Option<DashboardView> {
    match result {
        FetchResult::Empty => Some(DashboardView::Idle {
            years: DEFAULT_YEARS.collect(),
        }),
        FetchResult::SearchMatches(matches) => Some(DashboardView::NoMatch {
            notice: "Invalid ticker".to_string(),
            matches: format_matches(matches),
            years: DEFAULT_YEARS.collect(),
        }),
        FetchResult::TimeSeries(rows) => {
            let range = range_for(year, month)?;
            let window = filter_rows(rows, &range);
            Some(DashboardView::Chart {
                chart: chart::render(&window),
                years: year_choices(rows),
            })
        }
    }
}

/// One "SYMBOL -- NAME" line per match, input order preserved.
pub fn format_matches(matches: &[SearchMatch]) -> String {
    matches
        .iter()
        .map(|m| format!("{} -- {}", m.symbol, m.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Selectable years: the series' min..=max when data exists, otherwise
/// the fixed default range. Rows are already date-ascending.
fn year_choices(rows: &[TimeSeriesRow]) -> Vec<i32> {
    use chrono::Datelike;
    match (rows.first(), rows.last()) {
        (Some(first), Some(last)) => (first.date.year()..=last.date.year()).collect(),
        _ => DEFAULT_YEARS.collect(),
    }
}
