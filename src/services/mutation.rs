//! Commit discipline shared by the client and mailing services.
//!
//! Every write runs in its own transaction and commits before returning. The
//! record returned by an update is read back afterwards from committed state.

use sqlx::PgPool;
use tracing::{info, warn};

use crate::database::change_set::ChangeSet;
use crate::database::store;
use crate::error::{Error, Result};
use crate::models::entity::{DeleteMode, Entity, Mutable};

pub(crate) fn not_found<E: Entity>(id: i64) -> Error {
    Error::NotFound(format!("{} {} not found", E::LABEL, id))
}

pub(crate) async fn fetch<E: Entity>(pool: &PgPool, id: i64) -> Result<E> {
    let mut conn = pool.acquire().await?;
    store::find_by_id::<E>(&mut *conn, id)
        .await?
        .ok_or_else(|| not_found::<E>(id))
}

pub(crate) async fn update<E: Mutable>(pool: &PgPool, id: i64, changes: ChangeSet) -> Result<E> {
    let mut tx = pool.begin().await?;
    let matched = store::update_by_id::<E>(&mut *tx, id, &changes).await?;
    if matched == 0 {
        warn!(entity = E::LABEL, id, "Update matched no rows");
        return Err(not_found::<E>(id));
    }
    tx.commit().await?;

    info!(
        entity = E::LABEL,
        id,
        columns = changes.iter().count(),
        "Update committed"
    );

    // A concurrent delete may land between the commit and this read.
    fetch::<E>(pool, id).await
}

pub(crate) async fn delete<E: Mutable>(pool: &PgPool, id: i64, mode: DeleteMode) -> Result<u64> {
    let mut tx = pool.begin().await?;
    let deleted = match store::delete_by_id::<E>(&mut *tx, id, mode).await {
        Ok(deleted) => deleted,
        Err(err) => {
            warn!(entity = E::LABEL, id, mode = %mode, error = %err, "Delete refused");
            return Err(err);
        }
    };
    tx.commit().await?;

    if deleted == 0 {
        info!(entity = E::LABEL, id, "Delete matched no rows");
    } else {
        info!(entity = E::LABEL, id, mode = %mode, "Delete committed");
    }
    Ok(deleted)
}
