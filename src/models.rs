// src/models.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day as returned by the daily time-series endpoint.
/// Rows are keyed by date and held in ascending chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesRow {
    #[serde(rename = "timestamp")]
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// One candidate ticker from the symbol-search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatch {
    pub symbol: String,
    pub name: String,
}

/// What a fetch produced. The two remote response shapes are mutually
/// exclusive; `Empty` stands for a blank symbol, which never hits the
/// network.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult {
    TimeSeries(Vec<TimeSeriesRow>),
    SearchMatches(Vec<SearchMatch>),
    Empty,
}

/// First and last calendar day of a selected month, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// What the dashboard page displays for one interaction.
#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DashboardView {
    Idle {
        years: Vec<i32>,
    },
    NoMatch {
        notice: String,
        matches: String,
        years: Vec<i32>,
    },
    Chart {
        chart: serde_json::Value,
        years: Vec<i32>,
    },
}
