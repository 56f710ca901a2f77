use sqlx::{Executor, PgPool, Postgres, Transaction};

use crate::movies::repo_types::{Movie, MovieRecord};
use crate::ratings::repo_types::Rating;

impl Movie {
    pub async fn find(db: &PgPool, movie_id: i32) -> anyhow::Result<Option<Movie>> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            SELECT movie_id, title, released_date, imdb_url
            FROM movies
            WHERE movie_id = $1
            "#,
        )
        .bind(movie_id)
        .fetch_optional(db)
        .await?;
        Ok(movie)
    }

    pub async fn all(db: &PgPool) -> anyhow::Result<Vec<Movie>> {
        let movies = sqlx::query_as::<_, Movie>(
            r#"
            SELECT movie_id, title, released_date, imdb_url
            FROM movies
            ORDER BY movie_id
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(movies)
    }

    pub async fn count(db: &PgPool) -> anyhow::Result<i64> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM movies")
            .fetch_one(db)
            .await?;
        Ok(n)
    }

    /// Ratings of this movie, oldest first.
    pub async fn ratings(&self, db: &PgPool) -> anyhow::Result<Vec<Rating>> {
        Rating::for_movie(db, self.movie_id).await
    }

    pub async fn insert_tx(
        tx: &mut Transaction<'_, Postgres>,
        record: &MovieRecord,
    ) -> Result<(), sqlx::Error> {
        tx.execute(
            sqlx::query(
                r#"
                INSERT INTO movies (movie_id, title, released_date, imdb_url)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(record.movie_id)
            .bind(&record.title)
            .bind(record.released_date) // Option<Date> → NULL allowed
            .bind(&record.imdb_url),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_all_tx(tx: &mut Transaction<'_, Postgres>) -> Result<u64, sqlx::Error> {
        let done = tx.execute(sqlx::query("DELETE FROM movies")).await?;
        Ok(done.rows_affected())
    }
}
