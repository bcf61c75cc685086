//! Header date validation.

use chrono::{Month, NaiveDate, Weekday};

/// Format used when writing a changelog header date, e.g. `Wed Aug 10 2011`.
pub const DATE_FORMAT: &str = "%a %b %d %Y";

/// Parses a header date phrase into a calendar date.
///
/// Weekday and month accept short or long English names in any case, the
/// day takes one or two digits and the year exactly four. Runs of spaces
/// between the words are accepted. The weekday name must be real but is
/// not compared with the calendar date.
pub fn parse_date(phrase: &str) -> Option<NaiveDate> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    let [weekday, month, day, year] = words.as_slice() else {
        return None;
    };

    weekday.parse::<Weekday>().ok()?;
    let month = month.parse::<Month>().ok()?;

    if day.is_empty() || day.len() > 2 || !day.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    NaiveDate::from_ymd_opt(
        year.parse().ok()?,
        month.number_from_month(),
        day.parse().ok()?,
    )
}

/// Returns true if the phrase is a valid header date.
pub fn is_valid_date(phrase: &str) -> bool {
    parse_date(phrase).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn accepts_short_names() {
        let date = parse_date("Wed Aug 10 2011").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2011, 8, 10));
    }

    #[test]
    fn accepts_long_names_and_single_digit_day() {
        assert!(is_valid_date("Monday January 2 2012"));
        assert!(is_valid_date("Mon January 2 2012"));
        assert!(is_valid_date("Monday Jan 2 2012"));
        assert!(is_valid_date("Mon Jan 02 2012"));
        assert!(is_valid_date("wednesday AUGUST 10 2011"));
    }

    #[test]
    fn rejects_truncated_long_names() {
        assert!(!is_valid_date("Mond Jan 2 2012"));
        assert!(!is_valid_date("Mon Janu 2 2012"));
    }

    #[test]
    fn accepts_repeated_spaces() {
        assert!(is_valid_date("Wed  Aug  10 2011"));
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(!is_valid_date("Foo Aug 10 2011"));
        assert!(!is_valid_date("Wed Bar 10 2011"));
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(!is_valid_date("Wed Feb 30 2011"));
        assert!(!is_valid_date("Wed Aug 32 2011"));
    }

    #[test]
    fn ignores_weekday_mismatch() {
        // 10 Aug 2011 was a Wednesday.
        let date = parse_date("Thu Aug 10 2011").unwrap();
        assert_eq!(date.weekday(), Weekday::Wed);
    }

    #[test]
    fn rejects_short_year_and_long_day() {
        assert!(!is_valid_date("Wed Aug 10 11"));
        assert!(!is_valid_date("Wed Aug 010 2011"));
    }

    #[test]
    fn rejects_wrong_word_count() {
        assert!(!is_valid_date("Wed Aug 10"));
        assert!(!is_valid_date(""));
    }
}
