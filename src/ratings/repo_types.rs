use std::fmt;

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Rating {
    pub rating_id: i32,
    pub movie_id: i32,
    pub user_id: i32,
    pub score: i32,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Rating rating_id={} movie_id={} user_id={} score={}>",
            self.rating_id, self.movie_id, self.user_id, self.score
        )
    }
}

/// One `u.data` line without its timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingRecord {
    pub movie_id: i32,
    pub user_id: i32,
    pub score: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_fields_in_column_order() {
        let rating = Rating {
            rating_id: 3,
            movie_id: 242,
            user_id: 196,
            score: 3,
        };
        assert_eq!(
            rating.to_string(),
            "<Rating rating_id=3 movie_id=242 user_id=196 score=3>"
        );
    }
}
