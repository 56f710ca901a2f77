use std::fmt;

use sqlx::FromRow;
use time::Date;

use crate::display_opt;

#[derive(Debug, Clone, FromRow)]
pub struct Movie {
    pub movie_id: i32,
    pub title: String,
    pub released_date: Option<Date>,
    pub imdb_url: Option<String>,
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Movie movie_id={} title={} released_date={} imdb_url={}>",
            self.movie_id,
            self.title,
            display_opt(self.released_date.as_ref()),
            display_opt(self.imdb_url.as_ref())
        )
    }
}

/// One `u.item` line after title and date normalisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRecord {
    pub movie_id: i32,
    pub title: String,
    pub released_date: Option<Date>,
    pub imdb_url: String,
}
