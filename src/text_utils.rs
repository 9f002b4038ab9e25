use std::ops::Index;

use chrono::{FixedOffset, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

fn to_int<T: std::str::FromStr>(num_str: &str, date_str: &str) -> Result<T, String> {
    match num_str.parse::<T>() {
        Ok(x) => Ok(x),
        Err(_) => Err(format!("Error parsing {} from the date {}", num_str, date_str)),
    }
}

pub fn parse_date(buf: &str) -> Result<NaiveDate, String> {
    lazy_static! {
        static ref DATE_REGEX: Regex = Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").unwrap();
    }

    let Some(caps) = DATE_REGEX.captures(buf.trim()) else {
        return Err(format!("Unable to parse date {}", buf));
    };

    let y: i32 = to_int::<i32>(caps.index(1), buf)?;
    let m: u32 = to_int::<u32>(caps.index(2), buf)?;
    let d: u32 = to_int::<u32>(caps.index(3), buf)?;

    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(date) => Ok(date),
        None => Err(format!("Date {} is out of range", buf)),
    }
}

/// Parses a fixed UTC offset in the RFC 822 style, e.g. "-0500" or "+0200".
pub fn parse_utc_offset(buf: &str) -> Result<FixedOffset, String> {
    lazy_static! {
        static ref OFFSET_REGEX: Regex = Regex::new(r"^([+-])(\d{2})(\d{2})$").unwrap();
    }

    let Some(caps) = OFFSET_REGEX.captures(buf.trim()) else {
        return Err(format!("Unable to parse UTC offset {}", buf));
    };

    let hours: i32 = to_int::<i32>(caps.index(2), buf)?;
    let minutes: i32 = to_int::<i32>(caps.index(3), buf)?;

    let mut secs = hours * 3600 + minutes * 60;
    if caps.index(1) == "-" {
        secs = -secs;
    }

    match FixedOffset::east_opt(secs) {
        Some(offset) => Ok(offset),
        None => Err(format!("UTC offset {} is out of range", buf)),
    }
}

/// Removes one leading and one trailing single quote, each independently of
/// the other. Unwraps YAML-style quoted values without touching apostrophes
/// inside the text.
pub fn strip_single_quotes(value: &str) -> &str {
    let value = value.strip_prefix('\'').unwrap_or(value);
    value.strip_suffix('\'').unwrap_or(value)
}

pub fn join_url(base_url: &str, name: &str) -> String {
    if base_url.ends_with('/') {
        format!("{}{}", base_url, name)
    } else {
        format!("{}/{}", base_url, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let date = parse_date("2020-01-02").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 1, 2).unwrap());

        let date = parse_date(" 2017-09-10 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2017, 9, 10).unwrap());

        assert!(parse_date("not a date").is_err());
        assert!(parse_date("2020-13-01").is_err());
        assert!(parse_date("2020-01-02 10:42:32").is_err());
    }

    #[test]
    fn test_parse_utc_offset() {
        let offset = parse_utc_offset("-0500").unwrap();
        assert_eq!(offset, FixedOffset::west_opt(5 * 3600).unwrap());

        let offset = parse_utc_offset("+0230").unwrap();
        assert_eq!(offset, FixedOffset::east_opt(2 * 3600 + 30 * 60).unwrap());

        assert!(parse_utc_offset("0500").is_err());
        assert!(parse_utc_offset("-5").is_err());
        assert!(parse_utc_offset("-9900").is_err());
    }

    #[test]
    fn test_strip_single_quotes() {
        assert_eq!(strip_single_quotes("'Hello'"), "Hello");
        assert_eq!(strip_single_quotes("World"), "World");
        assert_eq!(strip_single_quotes("'unterminated"), "unterminated");
        assert_eq!(strip_single_quotes("trailing'"), "trailing");
        assert_eq!(strip_single_quotes("it's fine"), "it's fine");
        assert_eq!(strip_single_quotes("'"), "");
        assert_eq!(strip_single_quotes(""), "");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://kenkellner.com/blog/", "a.html"), "https://kenkellner.com/blog/a.html");
        assert_eq!(join_url("https://kenkellner.com/blog", "a.html"), "https://kenkellner.com/blog/a.html");
    }
}
