//! Age arithmetic over a birth date and an explicit reference date.

use chrono::{Datelike, NaiveDate};

use super::id_code::Error;

const DAYS_PER_YEAR: i64 = 365;

/// Returns the age in whole years on `today`.
///
/// This is `floor(elapsed_days / 365)`, with no correction for leap days. In
/// the days just before an anniversary it already counts the coming year.
///
/// # Errors
///
/// Returns [`Error::BornAfter`] if `today` precedes `birthday`.
pub fn age_on(birthday: NaiveDate, today: NaiveDate) -> Result<u32, Error> {
    if birthday > today {
        return Err(Error::BornAfter { birthday, today });
    }

    let elapsed = (today - birthday).num_days();
    Ok(u32::try_from(elapsed / DAYS_PER_YEAR).unwrap_or(u32::MAX))
}

/// Returns whether someone born on `birthday` meets `min_age` on `today`.
///
/// This compares the year and the `MMDD` value as plain integers, and the
/// `MMDD` difference must be strictly positive: on the birthday itself the
/// `min_age`-th year does not yet count.
#[must_use]
pub fn meets_min_age_on(birthday: NaiveDate, min_age: u32, today: NaiveDate) -> bool {
    let year_diff = i64::from(today.year()) - i64::from(birthday.year());
    let month_day_diff = i64::from(month_day(today)) - i64::from(month_day(birthday));
    let min_age = i64::from(min_age);

    year_diff > min_age || (year_diff == min_age && month_day_diff > 0)
}

fn month_day(date: NaiveDate) -> u32 {
    date.month() * 100 + date.day()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test_case("2000-01-10", "2020-01-05", 20; "counts the year before the anniversary")]
    #[test_case("2000-01-10", "2020-01-04", 19; "last day under 7300 days")]
    #[test_case("2000-01-10", "2020-01-10", 20; "on the anniversary")]
    #[test_case("2000-01-10", "2020-01-11", 20; "day after anniversary")]
    #[test_case("1990-06-15", "2024-06-14", 34; "day before anniversary")]
    #[test_case("2020-01-01", "2020-12-30", 0; "364 days")]
    #[test_case("2020-01-01", "2020-12-31", 1; "365 days in a leap year")]
    #[test_case("2020-01-01", "2021-01-01", 1; "first birthday")]
    #[test_case("2024-03-05", "2024-03-05", 0; "born today")]
    #[test_case("2004-02-29", "2023-02-28", 19; "leap birthday before march")]
    #[test_case("2004-02-29", "2023-03-01", 19; "leap birthday on march first")]
    #[test_case("2004-02-29", "2024-02-29", 20; "leap birthday in leap year")]
    #[test_case("1949-12-31", "2026-10-18", 76; "worked example")]
    fn age_vectors(birthday: &str, today: &str, expected: u32) {
        assert_eq!(age_on(date(birthday), date(today)), Ok(expected));
    }

    #[test]
    fn future_birthday_is_rejected() {
        let birthday = date("2030-01-01");
        let today = date("2026-10-18");
        assert_eq!(
            age_on(birthday, today),
            Err(Error::BornAfter { birthday, today })
        );
    }

    #[test_case("2000-06-15", 18, "2018-06-14", false; "day before")]
    #[test_case("2000-06-15", 18, "2018-06-15", false; "on the birthday")]
    #[test_case("2000-06-15", 18, "2018-06-16", true; "day after")]
    #[test_case("2000-06-15", 18, "2019-01-01", true; "following year")]
    #[test_case("2000-06-15", 18, "2017-12-31", false; "previous year")]
    #[test_case("2000-06-15", 0, "2000-06-15", false; "zero on birth day")]
    #[test_case("2000-06-15", 0, "2000-06-16", true; "zero after birth")]
    #[test_case("2000-12-31", 18, "2019-01-01", true; "year boundary")]
    fn min_age_vectors(birthday: &str, min_age: u32, today: &str, expected: bool) {
        assert_eq!(
            meets_min_age_on(date(birthday), min_age, date(today)),
            expected
        );
    }
}
