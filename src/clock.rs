//! Proleptic Gregorian calendar helpers over epoch milliseconds.

pub const MS_PER_DAY: i64 = 86_400_000;
pub const MS_PER_MINUTE: i64 = 60_000;

/// Days since 1970-01-01. Widened so any `i64` year stays in range.
pub(crate) fn days_from_civil(year: i64, month: u32, day: u32) -> i128 {
    let adjusted_year = i128::from(year) - if month <= 2 { 1 } else { 0 };
    let era = adjusted_year.div_euclid(400);
    let yoe = adjusted_year - era * 400;
    let month = i128::from(month);
    let day = i128::from(day);
    let doy = (153 * (month + if month > 2 { -3 } else { 9 }) + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

pub(crate) fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096).div_euclid(365);
    let mut year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2).div_euclid(153);
    let day = (doy - (153 * mp + 2).div_euclid(5) + 1) as u32;
    let month = (mp + if mp < 10 { 3 } else { -9 }) as u32;
    if month <= 2 {
        year += 1;
    }
    (year, month, day)
}

pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Epoch milliseconds of `year-month-day` plus `time_ms` into that day, UTC.
pub fn epoch_ms_from_civil(year: i64, month: u32, day: u32, time_ms: i64) -> i64 {
    let out = days_from_civil(year, month, day) * i128::from(MS_PER_DAY)
        + i128::from(time_ms);
    out.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// Calendar year at `epoch_ms` for a zone `offset_minutes` east of UTC.
pub fn local_year(epoch_ms: i64, offset_minutes: i32) -> i64 {
    let local_ms = epoch_ms.saturating_add(i64::from(offset_minutes) * MS_PER_MINUTE);
    let (year, _, _) = civil_from_days(local_ms.div_euclid(MS_PER_DAY));
    year
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn civil_round_trip_at_known_days() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(days_from_civil(2000, 2, 29), 11_016);
        assert_eq!(civil_from_days(11_016), (2000, 2, 29));
        assert_eq!(civil_from_days(-1), (1969, 12, 31));
    }

    #[test]
    fn local_year_respects_offset_across_new_year() {
        let new_year_utc = epoch_ms_from_civil(2027, 1, 1, 0);
        assert_eq!(local_year(new_year_utc, 0), 2027);
        assert_eq!(local_year(new_year_utc, -60), 2026);
        assert_eq!(local_year(new_year_utc - 1, 540), 2027);
    }

    #[test]
    fn extreme_years_clamp_instead_of_overflowing() {
        assert_eq!(epoch_ms_from_civil(i64::MAX, 12, 31, 0), i64::MAX);
        assert_eq!(epoch_ms_from_civil(i64::MIN, 1, 1, 0), i64::MIN);
        assert_eq!(epoch_ms_from_civil(i64::MAX / 146_097, 6, 1, 0), i64::MAX);
    }

    #[test]
    fn leap_rules() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2026, 2), 28);
    }
}
