//! Realign `SERIAL` counters after rows were inserted with explicit ids.

use sqlx::PgPool;
use tracing::info;

use crate::error::SequenceError;

/// Tables whose ids can be supplied by the importer. Ratings always take
/// generated ids, so they have no entry here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceTarget {
    Users,
    Movies,
}

impl SequenceTarget {
    pub fn table(self) -> &'static str {
        match self {
            SequenceTarget::Users => "users",
            SequenceTarget::Movies => "movies",
        }
    }

    pub fn id_column(self) -> &'static str {
        match self {
            SequenceTarget::Users => "user_id",
            SequenceTarget::Movies => "movie_id",
        }
    }

    fn max_id_query(self) -> &'static str {
        match self {
            SequenceTarget::Users => "SELECT MAX(user_id) FROM users",
            SequenceTarget::Movies => "SELECT MAX(movie_id) FROM movies",
        }
    }
}

/// Point the id sequence of `target` at `MAX(id) + 1` and return that value.
///
/// An empty table has no maximum; that is reported as
/// [`SequenceError::EmptyTable`] and the sequence is left unchanged.
pub async fn resync(db: &PgPool, target: SequenceTarget) -> Result<i64, SequenceError> {
    let mut tx = db.begin().await?;

    let (max_id,): (Option<i32>,) = sqlx::query_as(target.max_id_query())
        .fetch_one(&mut *tx)
        .await?;
    let Some(max_id) = max_id else {
        return Err(SequenceError::EmptyTable {
            table: target.table(),
        });
    };
    let next = i64::from(max_id) + 1;

    // is_called = false: the next nextval() returns `next` itself.
    sqlx::query("SELECT setval(pg_get_serial_sequence($1, $2), $3, false)")
        .bind(target.table())
        .bind(target.id_column())
        .bind(next)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    info!(table = target.table(), next, "id sequence realigned");
    Ok(next)
}
