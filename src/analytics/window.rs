use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// A reporting window. `start` inclusive, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateWindow {
    /// Symbolic range tokens from the dashboard UI. Unknown tokens fall back
    /// to the 7-day default rather than erroring.
    pub fn from_token(token: &str, now: DateTime<Utc>) -> Self {
        let days = match token {
            "30d" => 30,
            "90d" => 90,
            "1y" => 365,
            _ => 7,
        };
        Self {
            start: now - Duration::days(days),
            end: now,
        }
    }

    pub fn from_explicit(start: &str, end: &str) -> Result<Self, WindowError> {
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        if start >= end {
            return Err(WindowError::InvalidRequest(
                "start date must be before end date".to_string(),
            ));
        }
        Ok(Self { start, end })
    }

    /// The equal-length window immediately preceding this one, for growth
    /// comparisons.
    pub fn previous(&self) -> Self {
        let length = self.end - self.start;
        Self {
            start: self.start - length,
            end: self.start,
        }
    }

    /// Number of calendar days the window touches. A window ending mid-day
    /// counts that partial day.
    pub fn day_count(&self) -> i64 {
        let first = self.start.date_naive();
        let last = if self.end.time() == NaiveTime::MIN {
            self.end.date_naive() - Duration::days(1)
        } else {
            self.end.date_naive()
        };
        ((last - first).num_days() + 1).max(1)
    }

    /// One slice per calendar day intersecting the window. The first and
    /// last slices are clamped to the window bounds, so the slices cover
    /// exactly `[start, end)` with no pre- or post-window hours.
    pub fn days(&self) -> Vec<DateWindow> {
        let first = self.start.date_naive();
        (0..self.day_count())
            .map(|i| {
                let day_start = midnight(first + Duration::days(i));
                let day_end = day_start + Duration::days(1);
                DateWindow {
                    start: day_start.max(self.start),
                    end: day_end.min(self.end),
                }
            })
            .collect()
    }

    pub fn labels(&self) -> Vec<String> {
        let first = self.start.date_naive();
        (0..self.day_count())
            .map(|i| (first + Duration::days(i)).format("%b %-d").to_string())
            .collect()
    }
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn parse_date(raw: &str) -> Result<DateTime<Utc>, WindowError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(midnight(date));
    }
    Err(WindowError::InvalidRequest(format!("unparsable date: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn token_windows() {
        let now = Utc.with_ymd_and_hms(2026, 3, 15, 0, 0, 0).unwrap();
        assert_eq!(DateWindow::from_token("30d", now).day_count(), 30);
        assert_eq!(DateWindow::from_token("1y", now).day_count(), 365);
        // unknown tokens fall back to the default
        assert_eq!(DateWindow::from_token("2w", now).day_count(), 7);
    }

    #[test]
    fn mid_day_window_slices_cover_the_whole_window() {
        let now = Utc.with_ymd_and_hms(2026, 3, 15, 18, 0, 0).unwrap();
        let w = DateWindow::from_token("7d", now);

        // 7 full days plus the partial request day
        let days = w.days();
        assert_eq!(days.len(), 8);
        assert_eq!(days.first().unwrap().start, w.start);
        assert_eq!(days.last().unwrap().end, w.end);
        for pair in days.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn explicit_window_validation() {
        assert!(DateWindow::from_explicit("2026-02-01", "2026-02-04").is_ok());
        assert!(DateWindow::from_explicit("2026-02-04", "2026-02-01").is_err());
        assert!(DateWindow::from_explicit("2026-02-01", "2026-02-01").is_err());
        assert!(DateWindow::from_explicit("not-a-date", "2026-02-01").is_err());
    }

    #[test]
    fn previous_window_abuts_current() {
        let w = DateWindow::from_explicit("2026-02-04", "2026-02-07").unwrap();
        let prev = w.previous();
        assert_eq!(prev.end, w.start);
        assert_eq!(w.end - w.start, prev.end - prev.start);
    }

    #[test]
    fn three_day_window_has_three_days() {
        let w = DateWindow::from_explicit("2026-02-01", "2026-02-04").unwrap();
        assert_eq!(w.days().len(), 3);
        assert_eq!(w.labels(), vec!["Feb 1", "Feb 2", "Feb 3"]);
    }
}
