//! Field types whose wire representation varies across FPP firmware.
//!
//! - [`Intish`]: an integer that is sometimes sent as a numeric string.
//! - [`FppTime`]: either Unix epoch seconds or a scheduler string such as
//!   `"Sun Dec  1 @ 07:00 PM - (Everyday)"`, which carries no year.
//! - [`RepeatMode`]: the playlist repeat flag, as a number or quoted digits.
//!
//! String parsing only kicks in when the JSON value is a string; numeric
//! JSON always decodes directly.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Days, Month, NaiveDate, Utc, Weekday};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

// ── Intish ───────────────────────────────────────────────────────────

/// An integer that may be encoded as `42` or `"42"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Intish(pub i64);

impl Intish {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for Intish {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Intish> for i64 {
    fn from(value: Intish) -> Self {
        value.0
    }
}

impl fmt::Display for Intish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Intish {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for Intish {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_any(IntOrStringVisitor {
                what: "Intish",
                null_is_zero: true,
            })
            .map(Self)
    }
}

// ── RepeatMode ───────────────────────────────────────────────────────

/// Playlist repeat mode as reported by `fppd`. `0` means no repeat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RepeatMode(pub i64);

impl RepeatMode {
    pub fn value(self) -> i64 {
        self.0
    }

    pub fn is_repeating(self) -> bool {
        self.0 != 0
    }
}

impl Serialize for RepeatMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for RepeatMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_any(IntOrStringVisitor {
                what: "RepeatMode",
                null_is_zero: false,
            })
            .map(Self)
    }
}

/// Accepts a JSON integer, or a string holding a base-10 integer. `null`
/// reads as `0` only when `null_is_zero` is set.
struct IntOrStringVisitor {
    what: &'static str,
    null_is_zero: bool,
}

impl Visitor<'_> for IntOrStringVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an integer or a string containing an integer for {}", self.what)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_| E::custom(format!("{} out of range: {v}", self.what)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        v.parse::<i64>().map_err(|e| {
            E::custom(format!("failed to parse {} as integer from {v:?}: {e}", self.what))
        })
    }

    fn visit_unit<E: de::Error>(self) -> Result<i64, E> {
        if self.null_is_zero {
            Ok(0)
        } else {
            Err(E::invalid_type(de::Unexpected::Unit, &self))
        }
    }

    fn visit_none<E: de::Error>(self) -> Result<i64, E> {
        self.visit_unit()
    }
}

// ── FppTime ──────────────────────────────────────────────────────────

/// A point in time reported by the scheduler.
///
/// `FppTime::default()` (no time) is what a string without an `@` decodes
/// to; FPP sends such strings when nothing is scheduled.
///
/// Scheduler strings carry no year or zone. They are read as UTC in the
/// current calendar year at decode time, which is wrong for a date that
/// has already rolled over (a December entry read in January). Use
/// [`FppTime::parse_scheduled`] with an explicit year when the device's
/// calendar is known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FppTime(pub Option<DateTime<Utc>>);

impl FppTime {
    pub fn from_timestamp(secs: i64) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(|t| Self(Some(t)))
    }

    pub fn time(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }

    /// Parse a scheduler string against an explicit year.
    ///
    /// Returns `Ok(FppTime::default())` when `text` has no `@`. Anything
    /// after the first `" - "` is ignored.
    pub fn parse_scheduled(text: &str, year: i32) -> Result<Self, ScheduledTimeError> {
        if !text.contains('@') {
            return Ok(Self::default());
        }
        let head = text.split(" - ").next().unwrap_or(text);
        parse_layout(head, year).map(|t| Self(Some(t)))
    }
}

impl From<DateTime<Utc>> for FppTime {
    fn from(value: DateTime<Utc>) -> Self {
        Self(Some(value))
    }
}

impl Serialize for FppTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(t) => serializer.serialize_i64(t.timestamp()),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for FppTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FppTimeVisitor)
    }
}

struct FppTimeVisitor;

impl<'de> Visitor<'de> for FppTimeVisitor {
    type Value = FppTime;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a unix timestamp or a scheduler time string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<FppTime, E> {
        FppTime::from_timestamp(v).ok_or_else(|| E::custom(format!("timestamp out of range: {v}")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<FppTime, E> {
        let secs =
            i64::try_from(v).map_err(|_| E::custom(format!("timestamp out of range: {v}")))?;
        self.visit_i64(secs)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<FppTime, E> {
        FppTime::parse_scheduled(v, Utc::now().year()).map_err(E::custom)
    }

    fn visit_unit<E: de::Error>(self) -> Result<FppTime, E> {
        Ok(FppTime::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<FppTime, E> {
        Ok(FppTime::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<FppTime, D::Error> {
        deserializer.deserialize_any(self)
    }
}

/// Why a scheduler string failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse {input:?} as \"Mon Jan  2 @ 03:04 PM\": {reason}")]
pub struct ScheduledTimeError {
    input: String,
    reason: &'static str,
}

/// `<weekday> <month> <day> @ <hour>:<minute> <AM|PM>`, fields separated by
/// runs of spaces.
fn parse_layout(text: &str, year: i32) -> Result<DateTime<Utc>, ScheduledTimeError> {
    let fail = |reason| ScheduledTimeError {
        input: text.to_owned(),
        reason,
    };

    let mut fields = text.split(' ').filter(|f| !f.is_empty());
    let mut next = |reason| fields.next().ok_or_else(|| fail(reason));

    let weekday = next("missing weekday")?;
    let month = next("missing month")?;
    let day = next("missing day")?;
    let at = next("missing '@'")?;
    let clock = next("missing time")?;
    let meridiem = next("missing AM/PM")?;
    if fields.next().is_some() {
        return Err(fail("trailing text"));
    }

    if weekday.len() != 3 || Weekday::from_str(weekday).is_err() {
        return Err(fail("bad weekday"));
    }
    if month.len() != 3 {
        return Err(fail("bad month"));
    }
    let month = Month::from_str(month).map_err(|_| fail("bad month"))?;
    let day: u32 = day.parse().map_err(|_| fail("bad day"))?;
    if at != "@" {
        return Err(fail("expected '@'"));
    }

    let (hour, minute) = clock.split_once(':').ok_or_else(|| fail("bad time"))?;
    let mut hour: u32 = hour.parse().map_err(|_| fail("bad hour"))?;
    let minute: u32 = minute.parse().map_err(|_| fail("bad minute"))?;
    if hour > 23 || minute > 59 {
        return Err(fail("time out of range"));
    }
    match meridiem {
        "AM" | "am" if hour == 12 => hour = 0,
        "AM" | "am" => {}
        "PM" | "pm" if hour < 12 => hour += 12,
        "PM" | "pm" => {}
        _ => return Err(fail("bad AM/PM")),
    }

    // The text has no year, so the day is checked against a leap year and
    // 29 Feb rolls over to 1 Mar in common years.
    let month = month.number_from_month();
    if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
        return Err(fail("day out of range"));
    }
    let date = NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_days(Days::new(u64::from(day - 1))))
        .ok_or_else(|| fail("year out of range"))?;

    date.and_hms_opt(hour, minute, 0)
        .map(|t| t.and_utc())
        .ok_or_else(|| fail("time out of range"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    // ── Intish ──

    #[test]
    fn intish_from_number_and_string() {
        let a: Intish = serde_json::from_str("42").unwrap();
        let b: Intish = serde_json::from_str(r#""42""#).unwrap();
        assert_eq!(a, Intish(42));
        assert_eq!(a, b);

        let neg: Intish = serde_json::from_str(r#""-7""#).unwrap();
        assert_eq!(neg.get(), -7);
    }

    #[test]
    fn intish_rejects_garbage() {
        assert!(serde_json::from_str::<Intish>(r#""abc""#).is_err());
        assert!(serde_json::from_str::<Intish>(r#""""#).is_err());
        assert!(serde_json::from_str::<Intish>("4.5").is_err());
        assert!(serde_json::from_str::<Intish>("true").is_err());
    }

    #[test]
    fn intish_inside_struct() {
        #[derive(Deserialize)]
        struct Holder {
            mode: Intish,
        }
        let h: Holder = serde_json::from_value(json!({ "mode": "2" })).unwrap();
        assert_eq!(h.mode, Intish(2));
    }

    #[test]
    fn intish_null_reads_as_zero() {
        let n: Intish = serde_json::from_str("null").unwrap();
        assert_eq!(n, Intish(0));

        let status: crate::models::FppdStatus =
            serde_json::from_value(json!({ "mode": null })).unwrap();
        assert_eq!(status.mode, Intish(0));
    }

    // ── RepeatMode ──

    #[test]
    fn repeat_mode_number_or_string() {
        let a: RepeatMode = serde_json::from_str("1").unwrap();
        let b: RepeatMode = serde_json::from_str(r#""1""#).unwrap();
        assert_eq!(a, b);
        assert!(a.is_repeating());
        assert!(!RepeatMode(0).is_repeating());
    }

    #[test]
    fn repeat_mode_error_names_the_type() {
        let err = serde_json::from_str::<RepeatMode>(r#""sometimes""#).unwrap_err();
        assert!(err.to_string().contains("RepeatMode"), "{err}");
    }

    #[test]
    fn repeat_mode_rejects_null() {
        let err = serde_json::from_str::<RepeatMode>("null").unwrap_err();
        assert!(err.to_string().contains("RepeatMode"), "{err}");
    }

    // ── FppTime ──

    #[test]
    fn fpp_time_from_epoch() {
        let t: FppTime = serde_json::from_str("1700000000").unwrap();
        assert_eq!(t.time(), DateTime::from_timestamp(1_700_000_000, 0));
    }

    #[test]
    fn fpp_time_scheduled_string() {
        let checks = [
            ("Sun Dec  1 @ 07:00 PM", utc(2023, 12, 1, 19, 0)),
            ("Sun Dec 10 @ 07:00 PM", utc(2023, 12, 10, 19, 0)),
            ("Mon Jan  2 @ 12:15 AM", utc(2023, 1, 2, 0, 15)),
            ("Tue Jul  4 @ 12:30 PM", utc(2023, 7, 4, 12, 30)),
        ];
        for (input, expected) in checks {
            let t = FppTime::parse_scheduled(input, 2023).unwrap();
            assert_eq!(t.time(), Some(expected), "{input}");
        }
    }

    #[test]
    fn fpp_time_drops_suffix_after_dash() {
        let t = FppTime::parse_scheduled("Sat Nov 25 @ 05:30 PM - (Everyday)", 2023).unwrap();
        assert_eq!(t.time(), Some(utc(2023, 11, 25, 17, 30)));
    }

    #[test]
    fn fpp_time_uses_current_year_when_decoding() {
        let t: FppTime = serde_json::from_str(r#""Sun Dec 10 @ 07:00 PM""#).unwrap();
        let t = t.time().unwrap();
        assert_eq!(t.year(), Utc::now().year());
        assert_eq!((t.month(), t.day()), (12, 10));
    }

    #[test]
    fn fpp_time_without_at_is_zero() {
        for input in [r#""""#, r#""Not Scheduled""#, "null"] {
            let t: FppTime = serde_json::from_str(input).unwrap();
            assert!(t.is_zero(), "{input}");
        }
    }

    #[test]
    fn fpp_time_rejects_malformed_schedule() {
        assert!(serde_json::from_str::<FppTime>(r#""Sun Dec 10 @ noon""#).is_err());
        assert!(FppTime::parse_scheduled("Xyz Dec 10 @ 07:00 PM", 2023).is_err());
        assert!(FppTime::parse_scheduled("Sun Nov 31 @ 07:00 PM", 2023).is_err());
    }

    #[test]
    fn fpp_time_leap_day_rolls_forward() {
        let t = FppTime::parse_scheduled("Thu Feb 29 @ 08:00 AM", 2023).unwrap();
        assert_eq!(t.time(), Some(utc(2023, 3, 1, 8, 0)));
        let t = FppTime::parse_scheduled("Thu Feb 29 @ 08:00 AM", 2024).unwrap();
        assert_eq!(t.time(), Some(utc(2024, 2, 29, 8, 0)));
    }

    #[test]
    fn fpp_time_serializes_as_epoch() {
        let t = FppTime::from(utc(2023, 12, 10, 19, 0));
        let encoded = serde_json::to_string(&t).unwrap();
        let decoded: FppTime = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, t);
        assert_eq!(serde_json::to_string(&FppTime::default()).unwrap(), "null");
    }
}
