// src/services/chart.rs
use serde_json::{json, Value};

use crate::models::TimeSeriesRow;

/// Build a Vega-Lite spec for the month's daily closes: one line through
/// the rows in date order, a red marker per row, and a hover tooltip
/// showing the close to two decimals and the ISO date. Pure; the browser
/// does the actual drawing.
pub fn render(rows: &[TimeSeriesRow]) -> Value {
    let values: Vec<Value> = rows
        .iter()
        .map(|r| {
            json!({
                "date": r.date.format("%Y-%m-%d").to_string(),
                "close": r.close,
            })
        })
        .collect();

    json!({
        "$schema": "https://vega.github.io/schema/vega-lite/v5.json",
        "title": "Stock daily close data in a month",
        "width": "container",
        "height": 300,
        "data": { "values": values },
        "encoding": {
            "x": { "field": "date", "type": "temporal", "title": "Date" },
            "y": { "field": "close", "type": "quantitative", "title": "Close" },
            "tooltip": [
                { "field": "close", "type": "quantitative", "title": "Close", "format": ".2f" },
                { "field": "date", "type": "temporal", "title": "Date", "format": "%Y-%m-%d" }
            ]
        },
        "layer": [
            { "mark": { "type": "line" } },
            { "mark": { "type": "point", "filled": true, "color": "red", "size": 100 } }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(d: u32, close: f64) -> TimeSeriesRow {
        TimeSeriesRow {
            date: NaiveDate::from_ymd_opt(2022, 1, d).unwrap(),
            open: close,
            high: close,
            low: close,
            close,
            volume: 1,
        }
    }

    #[test]
    fn one_datum_per_row() {
        let spec = render(&[row(3, 182.01), row(4, 179.70)]);
        let values = spec["data"]["values"].as_array().unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0]["date"], "2022-01-03");
        assert_eq!(values[0]["close"], 182.01);
    }

    #[test]
    fn axes_and_tooltip_are_labeled() {
        let spec = render(&[row(3, 182.01)]);
        assert_eq!(spec["encoding"]["x"]["title"], "Date");
        assert_eq!(spec["encoding"]["y"]["title"], "Close");
        assert_eq!(spec["encoding"]["tooltip"][0]["format"], ".2f");
        assert_eq!(spec["layer"][1]["mark"]["color"], "red");
    }

    #[test]
    fn empty_rows_still_produce_a_spec() {
        let spec = render(&[]);
        assert!(spec["data"]["values"].as_array().unwrap().is_empty());
    }
}
