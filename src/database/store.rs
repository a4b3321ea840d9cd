//! Row-level storage for clients, mailings and messages.
//!
//! Functions take a `PgConnection` so callers decide whether they run inside a
//! transaction or on a plain pooled connection.

use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};

use crate::database::change_set::{ChangeSet, ColumnValue};
use crate::error::{Error, Result};
use crate::models::client::{Client, NewClient};
use crate::models::entity::{DeleteMode, Entity, Mutable};
use crate::models::mailing::{Mailing, NewMailing};
use crate::models::message::{Message, NewMessage};
use crate::models::statistics::StatusCountRow;
use crate::utils::time;

pub async fn insert_client(conn: &mut PgConnection, client: &NewClient) -> Result<Client> {
    let row = sqlx::query_as::<_, Client>(
        r#"
        INSERT INTO clients (phone_number, mobile_operator_code, tag, timezone)
        VALUES ($1, $2, $3, $4)
        RETURNING id, phone_number, mobile_operator_code, tag, timezone
        "#,
    )
    .bind(&client.phone_number)
    .bind(&client.mobile_operator_code)
    .bind(&client.tag)
    .bind(&client.timezone)
    .fetch_one(&mut *conn)
    .await?;

    Ok(row)
}

pub async fn insert_mailing(conn: &mut PgConnection, mailing: &NewMailing) -> Result<Mailing> {
    let row = sqlx::query_as::<_, Mailing>(
        r#"
        INSERT INTO mailings (message_text, start_time, end_time, filter_criteria)
        VALUES ($1, $2, $3, $4)
        RETURNING id, message_text, start_time, end_time, filter_criteria
        "#,
    )
    .bind(&mailing.message_text)
    .bind(mailing.start_time)
    .bind(mailing.end_time)
    .bind(&mailing.filter_criteria)
    .fetch_one(&mut *conn)
    .await?;

    Ok(row)
}

/// Records a delivery attempt. Only the delivery worker and tests write messages.
pub async fn insert_message(conn: &mut PgConnection, message: &NewMessage) -> Result<Message> {
    let created_at = message.created_at.unwrap_or_else(time::now);
    let row = sqlx::query_as::<_, Message>(
        r#"
        INSERT INTO messages (created_at, status, mailing_id, client_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, created_at, status, mailing_id, client_id
        "#,
    )
    .bind(created_at)
    .bind(&message.status)
    .bind(message.mailing_id)
    .bind(message.client_id)
    .fetch_one(&mut *conn)
    .await?;

    Ok(row)
}

pub async fn find_by_id<E: Entity>(conn: &mut PgConnection, id: i64) -> Result<Option<E>> {
    let sql = format!("SELECT {} FROM {} WHERE id = $1", E::COLUMNS, E::TABLE);
    let row = sqlx::query_as::<_, E>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    Ok(row)
}

/// Streams the messages of one mailing in id order.
///
/// Every call runs its own query, so the stream can be restarted by calling again.
pub fn messages_for_mailing(pool: &PgPool, mailing_id: i64) -> BoxStream<'_, Result<Message>> {
    sqlx::query_as::<_, Message>(
        r#"
        SELECT id, created_at, status, mailing_id, client_id
        FROM messages
        WHERE mailing_id = $1
        ORDER BY id
        "#,
    )
    .bind(mailing_id)
    .fetch(pool)
    .map_err(Error::from)
    .boxed()
}

/// Applies `changes` to the row with `id` and returns the number of matched rows.
///
/// An empty change set writes nothing and only reports whether the row exists.
pub async fn update_by_id<E: Mutable>(
    conn: &mut PgConnection,
    id: i64,
    changes: &ChangeSet,
) -> Result<u64> {
    changes.check_for::<E>()?;

    if changes.is_empty() {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE id = $1", E::TABLE);
        let matched: i64 = sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_one(&mut *conn)
            .await?;
        return Ok(matched as u64);
    }

    let mut builder = QueryBuilder::<Postgres>::new(format!("UPDATE {} SET ", E::TABLE));
    let mut assignments = builder.separated(", ");
    for (column, value) in changes.iter() {
        assignments.push(format!("{} = ", column));
        match value {
            ColumnValue::Text(v) => assignments.push_bind_unseparated(v.clone()),
            ColumnValue::Timestamp(v) => assignments.push_bind_unseparated(*v),
            ColumnValue::Json(v) => assignments.push_bind_unseparated(v.clone()),
        };
    }
    builder.push(" WHERE id = ").push_bind(id);

    let result = builder.build().execute(&mut *conn).await?;
    Ok(result.rows_affected())
}

/// Deletes the row with `id` after handling referencing messages per `mode`.
///
/// Returns the number of deleted rows; a missing id is not an error.
pub async fn delete_by_id<E: Mutable>(
    conn: &mut PgConnection,
    id: i64,
    mode: DeleteMode,
) -> Result<u64> {
    let reference = E::MESSAGE_REFERENCE;
    match mode {
        DeleteMode::Restrict => {
            let sql = format!(
                "SELECT EXISTS(SELECT 1 FROM messages WHERE {} = $1)",
                reference
            );
            let referenced: bool = sqlx::query_scalar(&sql)
                .bind(id)
                .fetch_one(&mut *conn)
                .await?;
            if referenced {
                return Err(Error::Conflict(format!(
                    "{} {} is still referenced by messages",
                    E::LABEL,
                    id
                )));
            }
        }
        DeleteMode::Cascade => {
            let sql = format!("DELETE FROM messages WHERE {} = $1", reference);
            sqlx::query(&sql).bind(id).execute(&mut *conn).await?;
        }
        // Referencing messages are left as they are, dangling id included.
        DeleteMode::Orphan => {}
    }

    let sql = format!("DELETE FROM {} WHERE id = $1", E::TABLE);
    let result = sqlx::query(&sql).bind(id).execute(&mut *conn).await?;
    Ok(result.rows_affected())
}

pub async fn status_counts_for_mailing(
    conn: &mut PgConnection,
    mailing_id: i64,
) -> Result<Vec<(String, i64)>> {
    let rows = sqlx::query_as::<_, (String, i64)>(
        r#"
        SELECT status, COUNT(*) AS count
        FROM messages
        WHERE mailing_id = $1
        GROUP BY status
        "#,
    )
    .bind(mailing_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows)
}

/// Grouped counts for every stored mailing in one round trip.
///
/// Mailings without messages appear once with a `NULL` status and zero count.
pub async fn status_counts_by_mailing(conn: &mut PgConnection) -> Result<Vec<StatusCountRow>> {
    let rows = sqlx::query_as::<_, StatusCountRow>(
        r#"
        SELECT m.id AS mailing_id, msg.status AS status, COUNT(msg.id) AS count
        FROM mailings m
        LEFT JOIN messages msg ON msg.mailing_id = m.id
        GROUP BY m.id, msg.status
        ORDER BY m.id
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows)
}
