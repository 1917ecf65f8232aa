//! Timestamp normalization — wall-clock datetimes to Unix epoch seconds.
//!
//! The export API takes `from`/`to` as integer epoch seconds. Aware
//! datetimes convert through their own offset; naive datetimes are
//! interpreted as local wall-clock time in a zone resolved at call time.

use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, TimeZone, Utc};

/// A datetime that may or may not carry timezone information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// Carries an explicit UTC offset.
    Aware(DateTime<FixedOffset>),
    /// No timezone information — interpreted in the resolver's zone.
    Naive(NaiveDateTime),
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Aware(dt.fixed_offset())
    }
}

impl From<DateTime<Local>> for Timestamp {
    fn from(dt: DateTime<Local>) -> Self {
        Self::Aware(dt.fixed_offset())
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::Aware(dt)
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(dt: NaiveDateTime) -> Self {
        Self::Naive(dt)
    }
}

/// Convert a timestamp to Unix epoch seconds, resolving naive input
/// against the system local timezone at call time.
pub fn epoch(ts: &Timestamp) -> i64 {
    epoch_in(ts, &Local)
}

/// Convert a timestamp to Unix epoch seconds with an explicit zone for
/// naive input. Aware input converts through its own offset; the zone
/// argument is ignored for it.
pub fn epoch_in<Tz: TimeZone>(ts: &Timestamp, zone: &Tz) -> i64 {
    match ts {
        Timestamp::Aware(dt) => dt.timestamp(),
        Timestamp::Naive(naive) => match zone.from_local_datetime(naive) {
            LocalResult::Single(dt) => dt.timestamp(),
            // DST fold: two valid mappings, take the earlier one
            LocalResult::Ambiguous(earliest, _) => earliest.timestamp(),
            // DST gap: the wall-clock time never existed in this zone
            LocalResult::None => naive.and_utc().timestamp(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn epoch_at_origin() {
        let dt = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(epoch(&dt.into()), 0);
    }

    #[test]
    fn epoch_at_32bit_rollover() {
        let dt = Utc.with_ymd_and_hms(2038, 1, 19, 3, 14, 7).unwrap();
        assert_eq!(epoch(&dt.into()), 2_147_483_647);
    }

    #[test]
    fn naive_matches_aware_in_same_zone() {
        // UTC-5, roughly America/Toronto in winter
        let eastern = FixedOffset::west_opt(5 * 3600).unwrap();
        let wall_clock = NaiveDate::from_ymd_opt(2018, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let aware = eastern.from_local_datetime(&wall_clock).unwrap();

        let result_naive = epoch_in(&Timestamp::Naive(wall_clock), &eastern);
        let result_aware = epoch_in(&Timestamp::Aware(aware), &eastern);
        assert_eq!(result_naive, result_aware);
    }

    #[test]
    fn aware_ignores_resolver_zone() {
        let eastern = FixedOffset::west_opt(5 * 3600).unwrap();
        let dt = Utc.with_ymd_and_hms(2018, 1, 1, 5, 0, 0).unwrap();
        assert_eq!(epoch_in(&dt.into(), &eastern), epoch_in(&dt.into(), &Utc));
    }

    #[test]
    fn naive_offset_shifts_epoch() {
        let wall_clock = NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let east_of_utc = FixedOffset::east_opt(3600).unwrap();
        // Midnight at UTC+1 is an hour before the UTC epoch origin
        assert_eq!(epoch_in(&Timestamp::Naive(wall_clock), &east_of_utc), -3600);
    }
}
