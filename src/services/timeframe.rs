// src/services/timeframe.rs
use chrono::NaiveDate;

use crate::models::{DateRange, TimeSeriesRow};

/// First and last calendar day of `(year, month)`, inclusive. `None` when
/// the pair does not name a real month; the HTTP boundary turns that into
/// a bad request.
pub fn range_for(year: i32, month: u32) -> Option<DateRange> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(DateRange {
        start,
        end: next_month.pred_opt()?,
    })
}

/// Rows whose date falls inside `range`, original order preserved. A
/// month with no trading days in the series yields an empty vec.
pub fn filter_rows(rows: &[TimeSeriesRow], range: &DateRange) -> Vec<TimeSeriesRow> {
    rows.iter()
        .filter(|r| range.start <= r.date && r.date <= range.end)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(date: NaiveDate) -> TimeSeriesRow {
        TimeSeriesRow {
            date,
            open: 1.0,
            high: 2.0,
            low: 0.5,
            close: 1.5,
            volume: 100,
        }
    }

    #[test]
    fn range_starts_on_the_first() {
        for month in 1..=12 {
            let range = range_for(2022, month).unwrap();
            assert_eq!(range.start, day(2022, month, 1));
        }
    }

    #[test]
    fn leap_february_ends_on_the_29th() {
        assert_eq!(range_for(2020, 2).unwrap().end, day(2020, 2, 29));
        assert_eq!(range_for(2021, 2).unwrap().end, day(2021, 2, 28));
    }

    #[test]
    fn december_rolls_into_the_next_year() {
        assert_eq!(range_for(2019, 12).unwrap().end, day(2019, 12, 31));
    }

    #[test]
    fn month_thirteen_is_rejected() {
        assert!(range_for(2022, 13).is_none());
        assert!(range_for(2022, 0).is_none());
    }

    #[test]
    fn filter_keeps_only_in_range_rows() {
        let rows = vec![
            row(day(2021, 12, 31)),
            row(day(2022, 1, 3)),
            row(day(2022, 1, 31)),
            row(day(2022, 2, 1)),
        ];
        let range = range_for(2022, 1).unwrap();

        let kept = filter_rows(&rows, &range);

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].date, day(2022, 1, 3));
        assert_eq!(kept[1].date, day(2022, 1, 31));
    }

    #[test]
    fn filter_is_idempotent() {
        let rows = vec![row(day(2022, 1, 3)), row(day(2022, 1, 4))];
        let range = range_for(2022, 1).unwrap();

        let once = filter_rows(&rows, &range);
        let twice = filter_rows(&once, &range);

        assert_eq!(once, twice);
    }

    #[test]
    fn empty_month_yields_empty_vec() {
        let rows = vec![row(day(2022, 1, 3))];
        let range = range_for(2022, 6).unwrap();
        assert!(filter_rows(&rows, &range).is_empty());
    }
}
