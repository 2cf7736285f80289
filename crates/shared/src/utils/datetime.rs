use chrono::{DateTime, FixedOffset, TimeZone};

const JST: FixedOffset = match FixedOffset::east_opt(9 * 60 * 60) {
    Some(offset) => offset,
    None => panic!("UTC+9 is a valid offset"),
};

/// Japan Standard Time, UTC+9 with no daylight saving.
pub fn jst() -> FixedOffset {
    JST
}

/// `YYYY-MM-DD` in JST.
pub fn to_jst_date_string<Tz: TimeZone>(value: &DateTime<Tz>) -> String {
    value.with_timezone(&jst()).format("%Y-%m-%d").to_string()
}

/// `YYYY-MM-DD HH:MM:SS` in JST.
pub fn to_jst_datetime_string<Tz: TimeZone>(value: &DateTime<Tz>) -> String {
    value
        .with_timezone(&jst())
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn date_rolls_over_into_the_next_jst_day() {
        let utc = Utc.with_ymd_and_hms(2020, 3, 31, 15, 0, 0).unwrap();
        assert_eq!(to_jst_date_string(&utc), "2020-04-01");
    }

    #[test]
    fn datetime_is_shifted_by_nine_hours() {
        let utc = Utc.with_ymd_and_hms(2020, 4, 1, 3, 4, 5).unwrap();
        assert_eq!(to_jst_datetime_string(&utc), "2020-04-01 12:04:05");
    }

    #[test]
    fn jst_input_is_left_as_is() {
        let local = jst().with_ymd_and_hms(2020, 4, 1, 0, 0, 0).unwrap();
        assert_eq!(to_jst_date_string(&local), "2020-04-01");
        assert_eq!(to_jst_datetime_string(&local), "2020-04-01 00:00:00");
    }
}
