use sqlx::{Executor, PgPool, Postgres, Transaction};

use crate::movies::repo_types::Movie;
use crate::ratings::repo_types::{Rating, RatingRecord};
use crate::users::repo_types::User;

impl Rating {
    pub async fn find(db: &PgPool, rating_id: i32) -> anyhow::Result<Option<Rating>> {
        let rating = sqlx::query_as::<_, Rating>(
            r#"
            SELECT rating_id, movie_id, user_id, score
            FROM ratings
            WHERE rating_id = $1
            "#,
        )
        .bind(rating_id)
        .fetch_optional(db)
        .await?;
        Ok(rating)
    }

    pub async fn for_user(db: &PgPool, user_id: i32) -> anyhow::Result<Vec<Rating>> {
        let rows = sqlx::query_as::<_, Rating>(
            r#"
            SELECT rating_id, movie_id, user_id, score
            FROM ratings
            WHERE user_id = $1
            ORDER BY rating_id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn for_movie(db: &PgPool, movie_id: i32) -> anyhow::Result<Vec<Rating>> {
        let rows = sqlx::query_as::<_, Rating>(
            r#"
            SELECT rating_id, movie_id, user_id, score
            FROM ratings
            WHERE movie_id = $1
            ORDER BY rating_id ASC
            "#,
        )
        .bind(movie_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn count(db: &PgPool) -> anyhow::Result<i64> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM ratings")
            .fetch_one(db)
            .await?;
        Ok(n)
    }

    /// The user who gave this rating. The foreign key guarantees it exists.
    pub async fn user(&self, db: &PgPool) -> anyhow::Result<User> {
        User::find(db, self.user_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("user {} missing for {}", self.user_id, self))
    }

    pub async fn movie(&self, db: &PgPool) -> anyhow::Result<Movie> {
        Movie::find(db, self.movie_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("movie {} missing for {}", self.movie_id, self))
    }

    pub async fn insert_tx(
        tx: &mut Transaction<'_, Postgres>,
        record: &RatingRecord,
    ) -> Result<(), sqlx::Error> {
        tx.execute(
            sqlx::query(
                r#"
                INSERT INTO ratings (movie_id, user_id, score)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(record.movie_id)
            .bind(record.user_id)
            .bind(record.score),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_all_tx(tx: &mut Transaction<'_, Postgres>) -> Result<u64, sqlx::Error> {
        let done = tx.execute(sqlx::query("DELETE FROM ratings")).await?;
        Ok(done.rows_affected())
    }
}
