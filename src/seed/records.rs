//! Line parsers for the MovieLens-style seed files.
//!
//! `u.user` and `u.item` are `|`-separated, `u.data` is whitespace-separated.

use std::borrow::Cow;

use time::{format_description::FormatItem, macros::format_description, Date};

use crate::error::RecordError;
use crate::movies::repo_types::MovieRecord;
use crate::ratings::repo_types::RatingRecord;
use crate::users::repo_types::UserRecord;

/// Width of the `" (YYYY)"` suffix that every dataset title carries.
pub const TITLE_YEAR_SUFFIX_LEN: usize = 7;

const RELEASE_DATE: &[FormatItem<'static>] =
    format_description!("[day]-[month repr:short]-[year]");

/// `user_id|age|gender|occupation|zipcode`
pub fn parse_user_line(line: &str) -> Result<UserRecord, RecordError> {
    let fields: Vec<&str> = line.trim_end().split('|').collect();
    let [user_id, age, _gender, _occupation, zipcode] = fields.as_slice() else {
        return Err(RecordError::FieldCount {
            expected: "exactly 5",
            found: fields.len(),
        });
    };

    Ok(UserRecord {
        user_id: int_field("user_id", user_id)?,
        age: int_field("age", age)?,
        zipcode: zipcode.to_string(),
    })
}

/// `movie_id|title (YYYY)|released_date|video_release_date|imdb_url|...`
pub fn parse_movie_line(line: &str) -> Result<MovieRecord, RecordError> {
    let fields: Vec<&str> = line.trim_end().split('|').collect();
    let [movie_id, title, released_date, _video_release_date, imdb_url, ..] = fields.as_slice()
    else {
        return Err(RecordError::FieldCount {
            expected: "at least 5",
            found: fields.len(),
        });
    };

    Ok(MovieRecord {
        movie_id: int_field("movie_id", movie_id)?,
        title: strip_year_suffix(title).to_string(),
        released_date: parse_release_date(released_date)?,
        imdb_url: imdb_url.to_string(),
    })
}

/// `movie_id user_id score timestamp`
pub fn parse_rating_line(line: &str) -> Result<RatingRecord, RecordError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [movie_id, user_id, score, _timestamp] = fields.as_slice() else {
        return Err(RecordError::FieldCount {
            expected: "exactly 4",
            found: fields.len(),
        });
    };

    Ok(RatingRecord {
        movie_id: int_field("movie_id", movie_id)?,
        user_id: int_field("user_id", user_id)?,
        score: int_field("score", score)?,
    })
}

/// Drop the last seven characters of `title` whatever they are.
///
/// Titles shorter than the suffix come out empty.
pub fn strip_year_suffix(title: &str) -> &str {
    match title.char_indices().rev().nth(TITLE_YEAR_SUFFIX_LEN - 1) {
        Some((idx, _)) => &title[..idx],
        None => "",
    }
}

/// Empty means unknown; anything else must look like `01-Jan-1995`.
pub fn parse_release_date(raw: &str) -> Result<Option<Date>, RecordError> {
    if raw.is_empty() {
        return Ok(None);
    }
    Date::parse(raw, RELEASE_DATE)
        .map(Some)
        .map_err(|_| RecordError::InvalidDate {
            value: raw.to_string(),
        })
}

/// Decode a seed file. The published `u.item` is Latin-1, so bytes that are not
/// valid UTF-8 are read one byte per character.
pub fn decode(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()),
    }
}

fn int_field(field: &'static str, value: &str) -> Result<i32, RecordError> {
    value.parse().map_err(|_| RecordError::InvalidInteger {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn user_line_keeps_id_age_and_zipcode() {
        let user = parse_user_line("1|24|M|technician|85711").unwrap();
        assert_eq!(
            user,
            UserRecord {
                user_id: 1,
                age: 24,
                zipcode: "85711".into(),
            }
        );
    }

    #[test]
    fn user_line_keeps_alphanumeric_zipcode_and_drops_trailing_newline() {
        let user = parse_user_line("264|36|F|writer|T8H1N\r\n").unwrap();
        assert_eq!(user.zipcode, "T8H1N");
    }

    #[test]
    fn user_line_with_wrong_field_count_is_rejected() {
        assert_eq!(
            parse_user_line("1|24|M|technician").unwrap_err(),
            RecordError::FieldCount {
                expected: "exactly 5",
                found: 4
            }
        );
        assert!(parse_user_line("1|24|M|technician|85711|extra").is_err());
        assert!(parse_user_line("").is_err());
    }

    #[test]
    fn user_line_with_non_numeric_age_is_rejected() {
        assert_eq!(
            parse_user_line("1|old|M|technician|85711").unwrap_err(),
            RecordError::InvalidInteger {
                field: "age",
                value: "old".into()
            }
        );
    }

    #[test]
    fn movie_line_strips_year_and_parses_date() {
        let movie = parse_movie_line(
            "1|Toy Story (1995)|01-Jan-1995||http://example.com|0|0|0|1|1|1|0|0|0|0|0|0|0|0|0|0|0|0|0",
        )
        .unwrap();
        assert_eq!(
            movie,
            MovieRecord {
                movie_id: 1,
                title: "Toy Story".into(),
                released_date: Some(date!(1995 - 01 - 01)),
                imdb_url: "http://example.com".into(),
            }
        );
    }

    #[test]
    fn movie_line_with_exactly_five_fields_is_enough() {
        let movie = parse_movie_line("2|GoldenEye (1995)|01-Jan-1995||http://x").unwrap();
        assert_eq!(movie.title, "GoldenEye");
    }

    #[test]
    fn movie_line_with_empty_date_has_no_release_date() {
        let movie = parse_movie_line("267|unknown||||0|0").unwrap();
        assert_eq!(movie.released_date, None);
        assert_eq!(movie.imdb_url, "");
    }

    #[test]
    fn movie_line_with_bad_date_is_rejected() {
        assert_eq!(
            parse_movie_line("1|Toy Story (1995)|1995-01-01||http://x").unwrap_err(),
            RecordError::InvalidDate {
                value: "1995-01-01".into()
            }
        );
    }

    #[test]
    fn movie_line_with_too_few_fields_is_rejected() {
        assert!(matches!(
            parse_movie_line("1|Toy Story (1995)|01-Jan-1995"),
            Err(RecordError::FieldCount { found: 3, .. })
        ));
    }

    // The strip is positional: anything not ending in " (YYYY)" loses real characters.
    #[test]
    fn year_strip_is_fixed_width_and_brittle() {
        assert_eq!(strip_year_suffix("Heat (1995)"), "Heat");
        assert_eq!(strip_year_suffix("Heat (95)"), "He");
        assert_eq!(strip_year_suffix("unknown"), "");
        assert_eq!(strip_year_suffix("Up"), "");
        assert_eq!(strip_year_suffix("Misérables, Les (1995)"), "Misérables, Les");
    }

    #[test]
    fn release_dates_use_abbreviated_month() {
        assert_eq!(
            parse_release_date("14-Feb-1997").unwrap(),
            Some(date!(1997 - 02 - 14))
        );
        assert_eq!(parse_release_date("").unwrap(), None);
        assert!(parse_release_date("31-Feb-1997").is_err());
    }

    #[test]
    fn rating_line_drops_timestamp() {
        assert_eq!(
            parse_rating_line("1 1 5 874965758").unwrap(),
            RatingRecord {
                movie_id: 1,
                user_id: 1,
                score: 5,
            }
        );
        assert_eq!(
            parse_rating_line("196\t242\t3\t881250949").unwrap(),
            RatingRecord {
                movie_id: 196,
                user_id: 242,
                score: 3,
            }
        );
    }

    #[test]
    fn rating_line_needs_four_fields() {
        assert!(matches!(
            parse_rating_line("1 1 5"),
            Err(RecordError::FieldCount { found: 3, .. })
        ));
        assert!(parse_rating_line("1 1 5 874965758 9").is_err());
    }

    #[test]
    fn decode_falls_back_to_latin1() {
        assert_eq!(decode(b"Toy Story"), "Toy Story");
        assert_eq!(decode(&[b'M', b'i', b's', 0xE9, b'r']), "Misér");
    }
}
