//! Calendar arithmetic on zoned datetimes.
//!
//! Shifts move the local wall-clock time and then place it back in the zone.
//! Month shifts clamp the day to the end of the target month
//! (Jan 31 + 1 month = Feb 28/29). A wall-clock time that occurs twice takes
//! the earlier instant; one skipped by a DST gap lands just after the gap.
//! Only overflow yields `None`.

use chrono::{DateTime, Days, Months, NaiveDateTime, Offset, TimeDelta, TimeZone};

pub(crate) fn shift_days<Tz: TimeZone>(dt: DateTime<Tz>, days: i64) -> Option<DateTime<Tz>> {
    let magnitude = Days::new(days.unsigned_abs());
    let local = dt.naive_local();
    let shifted = if days >= 0 { local.checked_add_days(magnitude) } else { local.checked_sub_days(magnitude) };
    localize(&dt.timezone(), shifted?)
}

pub(crate) fn shift_months<Tz: TimeZone>(dt: DateTime<Tz>, months: i64) -> Option<DateTime<Tz>> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    let local = dt.naive_local();
    let shifted = if months >= 0 { local.checked_add_months(magnitude) } else { local.checked_sub_months(magnitude) };
    localize(&dt.timezone(), shifted?)
}

/// Apply a `(days, months, years)` triple: years and months first, then days.
pub(crate) fn shift_ymd<Tz: TimeZone>(dt: DateTime<Tz>, days: i64, months: i64, years: i64) -> Option<DateTime<Tz>> {
    let months = years.checked_mul(12)?.checked_add(months)?;
    shift_days(shift_months(dt, months)?, days)
}

/// Place a wall-clock time in `tz`.
///
/// Inside a DST gap the time is read with the offset in force a day earlier,
/// which moves it forward by the size of the gap.
pub(crate) fn localize<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> Option<DateTime<Tz>> {
    if let Some(dt) = tz.from_local_datetime(&local).earliest() {
        return Some(dt);
    }

    let before = tz.offset_from_utc_datetime(&local.checked_sub_days(Days::new(1))?).fix();
    let utc = local.checked_sub_signed(TimeDelta::seconds(i64::from(before.local_minus_utc())))?;
    Some(tz.from_utc_datetime(&utc))
}
