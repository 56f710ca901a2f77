use sqlx::{Executor, PgPool, Postgres, Transaction};

use crate::ratings::repo_types::Rating;
use crate::users::repo_types::{User, UserRecord};

impl User {
    pub async fn find(db: &PgPool, user_id: i32) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, email, password, age, zipcode
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// First user registered under `email`, if any.
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, email, password, age, zipcode
            FROM users
            WHERE email = $1
            ORDER BY user_id
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn all(db: &PgPool) -> anyhow::Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, email, password, age, zipcode
            FROM users
            ORDER BY user_id
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(users)
    }

    /// Create a user with a sequence-assigned id.
    pub async fn create(db: &PgPool, email: &str, password: &str) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password)
            VALUES ($1, $2)
            RETURNING user_id, email, password, age, zipcode
            "#,
        )
        .bind(email)
        .bind(password)
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    pub async fn count(db: &PgPool) -> anyhow::Result<i64> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(db)
            .await?;
        Ok(n)
    }

    /// Ratings given by this user, oldest first.
    pub async fn ratings(&self, db: &PgPool) -> anyhow::Result<Vec<Rating>> {
        Rating::for_user(db, self.user_id).await
    }

    /// Insert an imported user keeping its external id.
    pub async fn insert_tx(
        tx: &mut Transaction<'_, Postgres>,
        record: &UserRecord,
    ) -> Result<(), sqlx::Error> {
        tx.execute(
            sqlx::query(
                r#"
                INSERT INTO users (user_id, age, zipcode)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(record.user_id)
            .bind(record.age)
            .bind(&record.zipcode),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_all_tx(tx: &mut Transaction<'_, Postgres>) -> Result<u64, sqlx::Error> {
        let done = tx.execute(sqlx::query("DELETE FROM users")).await?;
        Ok(done.rows_affected())
    }
}
